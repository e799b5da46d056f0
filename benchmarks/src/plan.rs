//! Everything the simulator needs to run one job: the simulated processes, where they run,
//! which checkpoint to restore and the system parameters.

use crate::catalog::{Benchmark, MixBuild, Suite};
use crate::errors::PlanError;
use crate::params::SimParams;
use crate::paths::SpecPaths;
use crate::workload::Mix;
use std::path::PathBuf;

/// Core counts that have CPU2017 checkpoints.
pub const CHECKPOINT_CORES: &[u32] = &[1, 4, 8];

/// Per-core process fields, each `;`-separated with one entry per simulated process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessSpec {
    pub cmd: String,
    pub options: String,
    pub input: String,
    pub output: String,
    pub errout: String,
}

impl ProcessSpec {
    fn from_benchmarks<'a>(benchmarks: impl Iterator<Item = &'a Benchmark>) -> Self {
        Self::from_rows(benchmarks.map(|b| {
            [
                b.executable(),
                b.options.to_string(),
                b.input.to_string(),
                b.output.to_string(),
                b.errout.to_string(),
            ]
        }))
    }

    fn from_mix_builds(builds: &[&MixBuild]) -> Self {
        Self::from_rows(builds.iter().map(|b| {
            [
                b.executable(),
                b.options.to_string(),
                b.input.to_string(),
                String::new(),
                String::new(),
            ]
        }))
    }

    /// One row per simulated process: cmd, options, input, output, errout.
    fn from_rows(rows: impl Iterator<Item = [String; 5]>) -> Self {
        let mut columns: [Vec<String>; 5] = Default::default();
        for row in rows {
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        let [cmd, options, input, output, errout] = columns.map(join_column);
        Self {
            cmd,
            options,
            input,
            output,
            errout,
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        [
            ("--cmd", &self.cmd),
            ("--options", &self.options),
            ("--input", &self.input),
            ("--output", &self.output),
            ("--errout", &self.errout),
        ]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(flag, value)| format!("{}={}", flag, value))
        .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Restore {
    /// Restore the checkpoint taken at this instruction count.
    Simpoint { offset: u64 },
    /// Restore the only checkpoint in the directory.
    First,
    /// No checkpoint, warm up from the start of the program.
    FastForward { warmup_insts: u64, fast_forward: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationPlan {
    pub name: String,
    pub cores: u32,
    pub process: ProcessSpec,
    pub run_dir: PathBuf,
    pub checkpoint_dir: Option<PathBuf>,
    pub restore: Restore,
    pub output_dir: PathBuf,
    pub params: SimParams,
}

impl SimulationPlan {
    /// Run the same benchmark on every core.
    pub fn for_benchmark(
        benchmark: &Benchmark,
        cores: u32,
        paths: &SpecPaths,
        params: &SimParams,
    ) -> Result<Self, PlanError> {
        let copies = std::iter::repeat(benchmark).take(cores as usize);
        let (checkpoint_dir, restore) = if params.at_instruction {
            let offset = benchmark
                .simpoint_offset()
                .ok_or(PlanError::MissingSimpoint {
                    id: benchmark.id,
                    name: benchmark.name,
                })?;
            let dir = match benchmark.suite {
                Suite::Cpu2006 => paths.checkpoints_2006.join(benchmark.id.to_string()),
                Suite::Cpu2017 if CHECKPOINT_CORES.contains(&cores) => paths
                    .checkpoints
                    .join(benchmark.id.to_string())
                    .join(format!("{}-core", cores)),
                Suite::Cpu2017 => {
                    return Err(PlanError::UnsupportedCores {
                        id: benchmark.id,
                        cores,
                    })
                }
            };
            (Some(dir), Restore::Simpoint { offset })
        } else {
            (None, fast_forward(params))
        };
        let name = benchmark.id.to_string();
        Ok(Self {
            output_dir: paths.output.join(&name),
            name,
            cores,
            process: ProcessSpec::from_benchmarks(copies),
            run_dir: benchmark.run_dir(paths),
            checkpoint_dir,
            restore,
            params: params.clone(),
        })
    }

    /// Run each member of the mix on its own core, from the mix builds copied into the mix run
    /// directory.
    pub fn for_mix(
        mix: &'static Mix,
        cores: u32,
        paths: &SpecPaths,
        params: &SimParams,
    ) -> Result<Self, PlanError> {
        mix.check_cores(cores)?;
        let members = mix.builds()?;
        let (checkpoint_dir, restore) = if params.at_instruction {
            let dir = paths
                .checkpoints
                .join(mix.name)
                .join(format!("{}-core", cores));
            (Some(dir), Restore::First)
        } else {
            (None, fast_forward(params))
        };
        Ok(Self {
            name: mix.name.to_string(),
            cores,
            process: ProcessSpec::from_mix_builds(&members),
            run_dir: paths.mix_run_root.join(mix.name),
            checkpoint_dir,
            restore,
            output_dir: paths.output.join(mix.name),
            params: params.clone(),
        })
    }

    /// `se.py` flags for this plan.
    pub fn simulator_args(&self) -> Vec<String> {
        let mut args = vec![format!("--num-cpus={}", self.cores)];
        args.extend(self.params.to_args());
        args.extend(self.process.to_args());
        if let Some(dir) = &self.checkpoint_dir {
            args.push(format!("--checkpoint-dir={}", dir.display()));
        }
        match self.restore {
            Restore::Simpoint { offset } => {
                args.push("--at-instruction".into());
                args.push(format!("--checkpoint-restore={}", offset));
            }
            Restore::First => args.push("--checkpoint-restore=1".into()),
            Restore::FastForward {
                warmup_insts,
                fast_forward,
            } => {
                args.push(format!("--warmup-insts={}", warmup_insts));
                args.push(format!("--fast-forward={}", fast_forward));
            }
        }
        args
    }

    /// Full simulator command line: `<gem5> --outdir=<dir> <script> <se.py flags>`.
    pub fn command(&self, gem5: &str, script: &str) -> Vec<String> {
        let mut command = vec![
            gem5.to_string(),
            format!("--outdir={}", self.output_dir.display()),
            script.to_string(),
        ];
        command.extend(self.simulator_args());
        command
    }
}

/// A field that is empty for every process stays empty, otherwise positions are kept.
fn join_column(values: Vec<String>) -> String {
    if values.iter().all(String::is_empty) {
        String::new()
    } else {
        values.join(";")
    }
}

fn fast_forward(params: &SimParams) -> Restore {
    Restore::FastForward {
        warmup_insts: params.warmup_insts,
        fast_forward: params.fast_forward,
    }
}
