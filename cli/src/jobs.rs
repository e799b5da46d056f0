use crate::config::{Config, Gem5Config, LaunchMode};
use anyhow::Context;
use benchmarks::{Benchmark, Mix, PlanError, SimulationPlan, SpecPaths, Workload};
use joblib::{errors, Job, JobSet};
use std::fs;
use std::io;
use std::os::unix;
use std::path::{Path, PathBuf};

/// Resolve the simulation plan of every job the workload turns into.
pub fn plans(
    workload: &Workload,
    cores: u32,
    config: &Config,
) -> Vec<(String, Result<SimulationPlan, PlanError>)> {
    match workload {
        Workload::Benchmarks { benchmarks, .. } => benchmarks
            .iter()
            .map(|benchmark| {
                let plan =
                    SimulationPlan::for_benchmark(benchmark, cores, &config.paths, &config.sim);
                (benchmark.id.to_string(), plan)
            })
            .collect(),
        Workload::Mix(mix) => {
            let plan = SimulationPlan::for_mix(mix, cores, &config.paths, &config.sim);
            vec![(mix.name.to_string(), plan)]
        }
    }
}

/// Build the job set for a workload.
///
/// With `prepare` set, a mix's run directory is recreated once its jobs have been built. Leave
/// it off to only look at the commands.
pub fn create_jobs(
    workload: &Workload,
    cores: u32,
    config: &Config,
    prepare: bool,
) -> anyhow::Result<JobSet> {
    if let Workload::Mix(mix) = workload {
        mix.check_cores(cores)?;
    }
    let jobs = match (config.gem5.mode, workload) {
        (LaunchMode::Script, Workload::Benchmarks { benchmarks, .. }) => {
            create_simple_jobs(benchmarks, cores, &config.gem5)?
        }
        (LaunchMode::Script, Workload::Mix(mix)) => {
            let run_dir = config.paths.mix_run_root.join(mix.name);
            create_multi_bench_jobs(mix, cores, &config.gem5, &run_dir)?
        }
        (LaunchMode::Se, _) => create_se_jobs(workload, cores, config)?,
    };
    if let (Workload::Mix(mix), true) = (workload, prepare) {
        prepare_mix_run_dir(mix, &config.paths)?;
    }
    Ok(jobs)
}

/// One job per benchmark: `<gem5> <script> --binary=<id> --num_cpu=<n>`.
pub fn create_simple_jobs(
    benchmarks: &[&Benchmark],
    cores: u32,
    gem5: &Gem5Config,
) -> errors::Result<JobSet> {
    let binary = lossy(&gem5.binary_path());
    let script = lossy(&gem5.script_path());
    benchmarks
        .iter()
        .map(|benchmark| {
            let id = benchmark.id.to_string();
            let command = [
                binary.clone(),
                script.clone(),
                format!("--binary={}", id),
                format!("--num_cpu={}", cores),
            ];
            Job::from_command(id, command)
        })
        .collect()
}

/// A single job simulating every member of the mix from the shared run directory.
pub fn create_multi_bench_jobs(
    mix: &Mix,
    cores: u32,
    gem5: &Gem5Config,
    run_dir: &Path,
) -> errors::Result<JobSet> {
    let command = [
        lossy(&gem5.binary_path()),
        lossy(&gem5.script_path()),
        format!("--binary={}", mix.name),
        format!("--num_cpu={}", cores),
        "--same_bench=0".to_string(),
        format!("--rundir={}", run_dir.display()),
    ];
    Ok(std::iter::once(Job::from_command(mix.name, command)?).collect())
}

/// Jobs running the stock `se.py` with every parameter passed on the command line.
pub fn create_se_jobs(workload: &Workload, cores: u32, config: &Config) -> anyhow::Result<JobSet> {
    let binary = lossy(&config.gem5.binary_path());
    let script = lossy(&config.gem5.se_script_path());
    plans(workload, cores, config)
        .into_iter()
        .map(|(name, plan)| -> anyhow::Result<Job> {
            let plan = plan.with_context(|| format!("Unable to plan simulation {}", name))?;
            let job = Job::from_command(name, plan.command(&binary, &script))?
                .current_dir(&plan.run_dir);
            Ok(job)
        })
        .collect()
}

/// Recreate `<mix_run_root>/<mix>` and fill it with each member's prepared directory.
pub fn prepare_mix_run_dir(mix: &Mix, paths: &SpecPaths) -> anyhow::Result<PathBuf> {
    let run_dir = paths.mix_run_root.join(mix.name);
    if run_dir.exists() {
        fs::remove_dir_all(&run_dir)
            .with_context(|| format!("Unable to remove old run directory {}", run_dir.display()))?;
    }
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Unable to create run directory {}", run_dir.display()))?;
    for id in mix.members {
        let source = paths.mix_sources.join(id.to_string());
        copy_dir_contents(&source, &run_dir).with_context(|| {
            format!(
                "Unable to copy {} into {}",
                source.display(),
                run_dir.display()
            )
        })?;
    }
    tracing::info!(mix = mix.name, run_dir = %run_dir.display(), "prepared mix run directory");
    Ok(run_dir)
}

/// Recursive copy of everything inside `source` into `dest`. Existing files are overwritten and
/// symlinks are recreated as links, like `cp -R`.
fn copy_dir_contents(source: &Path, dest: &Path) -> io::Result<()> {
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            if fs::symlink_metadata(&target).is_ok() {
                fs::remove_file(&target)?;
            }
            unix::fs::symlink(fs::read_link(entry.path())?, &target)?;
        } else if file_type.is_dir() {
            fs::create_dir_all(&target)?;
            copy_dir_contents(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn lossy(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchmarks::catalog::lookup;

    fn gem5() -> Gem5Config {
        Gem5Config {
            root: "/gem5".into(),
            ..Gem5Config::default()
        }
    }

    fn config_in(root: &Path) -> Config {
        Config {
            gem5: gem5(),
            paths: SpecPaths {
                spec2017: root.join("spec2017"),
                mix_sources: root.join("sources"),
                mix_run_root: root.join("runs"),
                checkpoints: root.join("ckpt"),
                output: root.join("out"),
                ..SpecPaths::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn simple_jobs_follow_benchmark_order() {
        let benchmarks = [lookup("505").unwrap(), lookup("500").unwrap()];
        let jobs = create_simple_jobs(&benchmarks, 4, &gem5()).unwrap();

        let names: Vec<_> = jobs.iter().map(Job::name).collect();
        assert_eq!(names, ["505", "500"]);
        assert_eq!(
            jobs.get("505").unwrap().command_line(),
            [
                "/gem5/build/X86/gem5.opt",
                "/gem5/configs/example/se_edited.py",
                "--binary=505",
                "--num_cpu=4",
            ]
        );
    }

    #[test]
    fn group_workload_becomes_one_job_per_member() {
        let dir = tempfile::tempdir().unwrap();
        let workload = Workload::parse("intrate").unwrap();
        let jobs = create_jobs(&workload, 1, &config_in(dir.path()), true).unwrap();
        assert_eq!(jobs.len(), benchmarks::workload::INTRATE.len());
    }

    #[test]
    fn mix_job_points_at_shared_run_dir() {
        let run_dir = Path::new("/runs/high1");
        let mix = Mix::find("high1").unwrap();
        let jobs = create_multi_bench_jobs(mix, 4, &gem5(), run_dir).unwrap();

        assert_eq!(jobs.len(), 1);
        let job = jobs.get("high1").unwrap();
        assert_eq!(
            job.args()[1..],
            [
                "--binary=high1",
                "--num_cpu=4",
                "--same_bench=0",
                "--rundir=/runs/high1",
            ]
        );
    }

    #[test]
    fn prepare_replaces_old_run_dir_with_member_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mix = Mix::find("low1").unwrap();
        for id in mix.members {
            let source = config.paths.mix_sources.join(id.to_string());
            fs::create_dir_all(source.join("data")).unwrap();
            fs::write(source.join(format!("{}.bin", id)), id.to_string()).unwrap();
            fs::write(source.join("data").join(format!("{}.in", id)), "input").unwrap();
        }
        let stale = config.paths.mix_run_root.join("low1").join("stale");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        let run_dir = prepare_mix_run_dir(mix, &config.paths).unwrap();

        assert!(!stale.exists());
        for id in mix.members {
            assert_eq!(
                fs::read_to_string(run_dir.join(format!("{}.bin", id))).unwrap(),
                id.to_string()
            );
            assert!(run_dir.join("data").join(format!("{}.in", id)).exists());
        }
    }

    #[test]
    fn prepare_keeps_symlinks_as_links() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mix = Mix::find("high1").unwrap();
        let shared = dir.path().join("shared");
        fs::create_dir_all(&shared).unwrap();
        fs::write(shared.join("reference.dat"), "data").unwrap();
        for id in mix.members {
            let source = config.paths.mix_sources.join(id.to_string());
            fs::create_dir_all(&source).unwrap();
            fs::write(source.join(format!("{}.bin", id)), id.to_string()).unwrap();
        }
        let lbm = config.paths.mix_sources.join("519");
        unix::fs::symlink(&shared, lbm.join("inputs")).unwrap();
        unix::fs::symlink(shared.join("reference.dat"), lbm.join("reference.dat")).unwrap();

        prepare_mix_run_dir(mix, &config.paths).unwrap();
        // removing the old run dir must not reach through the links
        let run_dir = prepare_mix_run_dir(mix, &config.paths).unwrap();
        assert_eq!(fs::read_to_string(shared.join("reference.dat")).unwrap(), "data");

        let inputs = run_dir.join("inputs");
        assert!(fs::symlink_metadata(&inputs).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&inputs).unwrap(), shared);
        assert_eq!(fs::read_to_string(inputs.join("reference.dat")).unwrap(), "data");
        let data = run_dir.join("reference.dat");
        assert!(fs::symlink_metadata(&data).unwrap().file_type().is_symlink());
    }

    #[test]
    fn mix_core_mismatch_fails_before_touching_run_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        let workload = Workload::parse("high1").unwrap();
        let stale = config.paths.mix_run_root.join("high1").join("stale");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        for mode in [LaunchMode::Script, LaunchMode::Se] {
            config.gem5.mode = mode;
            let err = create_jobs(&workload, 8, &config, true).unwrap_err();
            assert_eq!(
                err.downcast_ref::<PlanError>(),
                Some(&PlanError::CoreCountMismatch {
                    mix: "high1",
                    members: 4,
                    cores: 8,
                })
            );
            assert!(stale.exists());
        }
    }

    #[test]
    fn prepare_fails_when_a_member_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mix = Mix::find("mix").unwrap();
        assert!(prepare_mix_run_dir(mix, &config.paths).is_err());
    }

    #[test]
    fn se_jobs_run_in_benchmark_run_dir_with_full_flags() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.gem5.mode = LaunchMode::Se;
        let workload = Workload::parse("505").unwrap();

        let jobs = create_jobs(&workload, 4, &config, false).unwrap();

        let job = jobs.get("505").unwrap();
        assert_eq!(job.program(), "/gem5/build/X86/gem5.opt");
        assert_eq!(job.args()[1], "/gem5/configs/example/se.py");
        assert!(job.args().iter().any(|a| a == "--num-cpus=4"));
        assert_eq!(
            job.dir(),
            Some(&dir
                .path()
                .join("spec2017/505.mcf_r/run/run_base_refrate_O2Static-m64.0000"))
        );
    }

    #[test]
    fn se_mix_job_runs_copied_builds_in_mix_run_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.gem5.mode = LaunchMode::Se;
        let workload = Workload::parse("high1").unwrap();

        let jobs = create_jobs(&workload, 4, &config, false).unwrap();

        let job = jobs.get("high1").unwrap();
        assert_eq!(job.dir(), Some(&config.paths.mix_run_root.join("high1")));
        let cmd = job.args().iter().find(|a| a.starts_with("--cmd=")).unwrap();
        assert!(cmd.split(';').all(|exe| exe.ends_with("_base.mytest-m64")));
    }

    #[test]
    fn se_jobs_surface_plan_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.gem5.mode = LaunchMode::Se;
        let workload = Workload::parse("505").unwrap();
        assert!(create_jobs(&workload, 3, &config, false).is_err());
    }

    #[test]
    fn plans_cover_every_job() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let workload = Workload::parse("fprate").unwrap();
        let plans = plans(&workload, 4, &config);
        assert_eq!(plans.len(), 10);
        assert!(plans.iter().all(|(_, plan)| plan.is_ok()));
    }
}
