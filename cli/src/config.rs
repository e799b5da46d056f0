use anyhow::Context;
use benchmarks::{SimParams, SpecPaths};
use clap::ArgEnum;
use joblib::ExitPolicy;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

/// Settings file for `simsubmit`. Every section is optional.
///
/// ```yaml
/// gem5:
///   root: ~/Research/gem5-pwu27
///   mode: script
/// paths:
///   spec2017: /data/CPU2017
/// runner:
///   max_concurrent: 4
///   poll_interval_secs: 30
///   exit_policy: require
/// sim:
///   mem_size: 16GB
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub gem5: Gem5Config,
    pub paths: SpecPaths,
    pub runner: RunnerSection,
    pub sim: SimParams,
}

/// How jobs hand their parameters to the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// `gem5 <script> --binary=<id> --num_cpu=<n>`; the config script resolves the rest itself.
    Script,
    /// `gem5 --outdir=<dir> <se_script> <flags>` with every parameter rendered from the plan.
    Se,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Gem5Config {
    pub root: PathBuf,
    /// Relative to `root`.
    pub binary: PathBuf,
    /// Relative to `root`.
    pub script: PathBuf,
    /// Relative to `root`.
    pub se_script: PathBuf,
    pub mode: LaunchMode,
    pub scons_jobs: u32,
}

impl Default for Gem5Config {
    fn default() -> Self {
        Self {
            root: "~/Research/gem5-pwu27".into(),
            binary: "build/X86/gem5.opt".into(),
            script: "configs/example/se_edited.py".into(),
            se_script: "configs/example/se.py".into(),
            mode: LaunchMode::Script,
            scons_jobs: 16,
        }
    }
}

impl Gem5Config {
    pub fn binary_path(&self) -> PathBuf {
        self.root.join(&self.binary)
    }

    pub fn script_path(&self) -> PathBuf {
        self.root.join(&self.script)
    }

    pub fn se_script_path(&self) -> PathBuf {
        self.root.join(&self.se_script)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, ArgEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExitPolicyName {
    /// finish the batch regardless of child exit codes
    Ignore,
    /// fail after the batch if any simulation exited non-zero
    Require,
}

impl From<ExitPolicyName> for ExitPolicy {
    fn from(name: ExitPolicyName) -> Self {
        match name {
            ExitPolicyName::Ignore => ExitPolicy::Ignore,
            ExitPolicyName::Require => ExitPolicy::Require,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerSection {
    pub max_concurrent: NonZeroUsize,
    pub poll_interval_secs: f64,
    pub exit_policy: ExitPolicyName,
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            max_concurrent: NonZeroUsize::new(2).expect("2 is non-zero"),
            poll_interval_secs: 10.0,
            exit_policy: ExitPolicyName::Ignore,
        }
    }
}

impl RunnerSection {
    pub fn poll_interval(&self) -> anyhow::Result<Duration> {
        Duration::try_from_secs_f64(self.poll_interval_secs)
            .with_context(|| format!("invalid poll interval {}s", self.poll_interval_secs))
    }
}

impl Config {
    /// Load the config file, or the defaults when no file is given. `~` is expanded in every path.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Unable to read config file {}", path.display()))?;
                Self::parse(&content)
                    .with_context(|| format!("Unable to parse config file {}", path.display()))?
            }
            None => Self::default(),
        };
        config.runner.poll_interval()?;
        Ok(config.expand_home())
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    fn expand_home(mut self) -> Self {
        self.gem5.root = expand_home(self.gem5.root);
        self.paths = self.paths.map(expand_home);
        self
    }
}

/// Replace a leading `~` with `$HOME`. Paths are returned unchanged when `HOME` is not set.
pub fn expand_home(path: PathBuf) -> PathBuf {
    let mut components = path.components();
    match (components.next(), env::var_os("HOME")) {
        (Some(Component::Normal(first)), Some(home)) if first == "~" => {
            PathBuf::from(home).join(components.as_path())
        }
        _ => path,
    }
}
