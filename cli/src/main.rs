mod arg_parser;
mod config;
mod jobs;

use anyhow::Context;
use arg_parser::ArgParser;
use benchmarks::Workload;
use clap::Parser;
use config::{Config, Gem5Config};
use joblib::{JobSet, Runner, RunnerConfig};
use std::ffi::OsString;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args();
    init_logging();

    let config = Config::load(args.config.as_deref())?;
    tracing::debug!(?config, "loaded config");

    let workload = Workload::parse(&args.workload)
        .with_context(|| format!("Unable to resolve workload `{}`", args.workload))?;
    let cores = args.cores.get();

    if args.dry_run {
        let jobs = with_envs(jobs::create_jobs(&workload, cores, &config, false)?, &args);
        print_dry_run(&workload, cores, &config, &jobs);
        return Ok(());
    }

    if args.compile {
        compile(&config.gem5).await?;
    }

    let jobs = with_envs(jobs::create_jobs(&workload, cores, &config, true)?, &args);
    let runner = Runner::new(runner_config(&config, &args)?);
    tracing::info!(
        workload = workload.name(),
        jobs = jobs.len(),
        max_concurrent = runner.config().max_concurrent.get(),
        "submitting"
    );
    let report = runner.run(&jobs).await.context("Batch did not complete")?;
    tracing::info!(
        finished = report.outcomes.len(),
        failed = report.failed().count(),
        "all jobs finished"
    );
    Ok(())
}

fn parse_args() -> ArgParser {
    parse_args_from(std::env::args_os()).unwrap_or_else(|code| process::exit(code))
}

/// Parse the command line, or the status to exit with. Usage errors are status 1, before
/// anything runs; `--help` and `--version` print and exit normally.
fn parse_args_from<I, T>(argv: I) -> Result<ArgParser, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match ArgParser::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return Err(if err.use_stderr() { 1 } else { 0 });
        }
    };
    if !args.extra.is_empty() {
        eprintln!("usage: simsubmit <cores> <workload> [OPTIONS]");
        eprintln!("unexpected arguments: {}", args.extra.join(" "));
        return Err(1);
    }
    Ok(args)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command line flags take precedence over the config file's `runner` section.
fn runner_config(config: &Config, args: &ArgParser) -> anyhow::Result<RunnerConfig> {
    Ok(RunnerConfig {
        max_concurrent: args
            .max_concurrent
            .unwrap_or(config.runner.max_concurrent),
        poll_interval: match args.poll_interval {
            Some(interval) => interval,
            None => config.runner.poll_interval()?,
        },
        verbose: !args.quiet,
        exit_policy: args.exit_policy.unwrap_or(config.runner.exit_policy).into(),
    })
}

fn with_envs(jobs: JobSet, args: &ArgParser) -> JobSet {
    if args.envs.is_empty() {
        return jobs;
    }
    jobs.iter()
        .map(|job| {
            args.envs
                .iter()
                .fold(job.clone(), |job, (var, val)| job.env(var.as_str(), val.as_str()))
        })
        .collect()
}

fn print_dry_run(workload: &Workload, cores: u32, config: &Config, jobs: &JobSet) {
    println!("workload {} on {} cores: {} jobs", workload.name(), cores, jobs.len());
    for (index, job) in jobs.iter().enumerate() {
        println!("JOB # {}/{} {}", index + 1, jobs.len(), job.name());
        println!("  {}", job.command_line().join(" "));
        if let Some(dir) = job.dir() {
            println!("  in {}", dir.display());
        }
    }
    for (name, plan) in jobs::plans(workload, cores, config) {
        match plan {
            Ok(plan) => {
                println!("plan {}:", name);
                println!("  run dir:    {}", plan.run_dir.display());
                if let Some(dir) = &plan.checkpoint_dir {
                    println!("  checkpoint: {}", dir.display());
                }
                println!("  restore:    {:?}", plan.restore);
                println!("  output:     {}", plan.output_dir.display());
                println!("  cmd:        {}", plan.process.cmd);
            }
            Err(err) => println!("plan {}: {}", name, err),
        }
    }
}

/// `scons build/X86/gem5.opt -j<n>` in the simulator tree.
async fn compile(gem5: &Gem5Config) -> anyhow::Result<()> {
    tracing::info!(root = %gem5.root.display(), "building simulator");
    let status = tokio::process::Command::new("scons")
        .arg(&gem5.binary)
        .arg(format!("-j{}", gem5.scons_jobs))
        .current_dir(&gem5.root)
        .status()
        .await
        .context("Unable to run scons")?;
    anyhow::ensure!(status.success(), "scons failed with {}", status);
    Ok(())
}
