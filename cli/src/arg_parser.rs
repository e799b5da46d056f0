use crate::config::ExitPolicyName;
use clap::Parser;
use std::num::{NonZeroU32, NonZeroUsize};
use std::path::PathBuf;
use std::time::Duration;

/// Submit gem5 simulations of SPEC CPU benchmarks, a bounded number at a time
#[derive(Debug, Parser)]
#[clap(name = "simsubmit")]
pub struct ArgParser {
    /// Number of simulated cores
    pub cores: NonZeroU32,

    /// Benchmark id or name, `all`, `intrate`, `fprate`, or a mix (`high1`, `low1`, `mix`)
    pub workload: String,

    /// Anything past the two positionals is a usage error
    #[clap(hide = true)]
    pub extra: Vec<String>,

    /// YAML settings file
    #[clap(long, env = "SIMSUBMIT_CONFIG", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Maximum number of simulations running at once
    #[clap(long)]
    pub max_concurrent: Option<NonZeroUsize>,

    /// Seconds between checks for finished simulations
    #[clap(long, parse(try_from_str = seconds))]
    pub poll_interval: Option<Duration>,

    /// What to do with simulations that exit non-zero
    #[clap(long, arg_enum)]
    pub exit_policy: Option<ExitPolicyName>,

    #[clap(long, multiple_values = true, parse(try_from_str = var_eq_val))]
    /// Extra environment variables for every simulation
    pub envs: Vec<(String, String)>,

    /// Don't print a line per submitted job
    #[clap(short, long)]
    pub quiet: bool,

    /// Print the jobs and their simulation plans without running anything
    #[clap(long)]
    pub dry_run: bool,

    /// Build the simulator with scons before submitting
    #[clap(long)]
    pub compile: bool,
}

/// try_from_str parse function for job env variables
fn var_eq_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((var, val)) if !var.is_empty() => Ok((var.to_string(), val.to_string())),
        _ => Err("Required format is VAR=VAL".to_string()),
    }
}

fn seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("`{}` is not a number of seconds", s))?;
    Duration::try_from_secs_f64(secs).map_err(|err| err.to_string())
}
