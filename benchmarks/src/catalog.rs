//! Static SPEC CPU benchmark tables.
//!
//! Every entry describes how one benchmark binary is launched inside its prepared SPEC run
//! directory: the binary, its options and the stdin/stdout/stderr files, plus the SimPoint
//! that the stored checkpoints were taken at.

mod cpu2006;
mod cpu2017;
mod mix_builds;

use crate::errors::{CatalogError, Result};
use crate::paths::SpecPaths;
use std::fmt;
use std::path::PathBuf;

/// Instructions per SimPoint interval.
pub const SIMPOINT_INTERVAL: u64 = 10_000_000;

/// Suffix of the binaries prepared for mixes under `mix_sources`.
pub const MIX_BUILD_SUFFIX: &str = "_base.mytest-m64";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suite {
    Cpu2006,
    Cpu2017,
}

impl Suite {
    /// Suffix the SPEC build config appended to every binary name.
    pub fn executable_suffix(self) -> &'static str {
        match self {
            Suite::Cpu2006 => "_base.amd64-m64-gcc41-nn",
            Suite::Cpu2017 => "_base.O2Static-m64",
        }
    }

    /// Run directory inside a benchmark's directory.
    pub fn run_subdir(self) -> &'static str {
        match self {
            Suite::Cpu2006 => "run/run_base_ref_amd64-m64-gcc41-nn.0000",
            Suite::Cpu2017 => "run/run_base_refrate_O2Static-m64.0000",
        }
    }

    fn root(self, paths: &SpecPaths) -> &PathBuf {
        match self {
            Suite::Cpu2006 => &paths.spec2006,
            Suite::Cpu2017 => &paths.spec2017,
        }
    }

    pub fn benchmarks(self) -> &'static [Benchmark] {
        match self {
            Suite::Cpu2006 => cpu2006::BENCHMARKS,
            Suite::Cpu2017 => cpu2017::BENCHMARKS,
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suite::Cpu2006 => write!(f, "CPU2006"),
            Suite::Cpu2017 => write!(f, "CPU2017"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Benchmark {
    pub id: u16,
    pub suite: Suite,
    pub name: &'static str,
    pub binary: &'static str,
    pub dir: &'static str,
    pub options: &'static str,
    pub input: &'static str,
    pub output: &'static str,
    pub errout: &'static str,
    pub simpoint: Option<u64>,
    /// Set for benchmarks that are listed but cannot be simulated.
    pub unavailable: Option<&'static str>,
}

impl Benchmark {
    const fn new(
        id: u16,
        suite: Suite,
        name: &'static str,
        binary: &'static str,
        dir: &'static str,
        options: &'static str,
        simpoint: Option<u64>,
    ) -> Self {
        Self {
            id,
            suite,
            name,
            binary,
            dir,
            options,
            input: "",
            output: "",
            errout: "",
            simpoint,
            unavailable: None,
        }
    }

    const fn input(mut self, input: &'static str) -> Self {
        self.input = input;
        self
    }

    const fn output(mut self, output: &'static str, errout: &'static str) -> Self {
        self.output = output;
        self.errout = errout;
        self
    }

    const fn unavailable(mut self, reason: &'static str) -> Self {
        self.unavailable = Some(reason);
        self
    }

    pub fn executable(&self) -> String {
        format!("{}{}", self.binary, self.suite.executable_suffix())
    }

    pub fn run_dir(&self, paths: &SpecPaths) -> PathBuf {
        self.suite
            .root(paths)
            .join(self.dir)
            .join(self.suite.run_subdir())
    }

    /// The full argument vector, executable first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.executable())
            .chain(self.options.split_whitespace().map(str::to_string))
            .collect()
    }

    /// Instruction count of the SimPoint checkpoint to restore.
    pub fn simpoint_offset(&self) -> Option<u64> {
        self.simpoint.map(|simpoint| simpoint * SIMPOINT_INTERVAL)
    }

    fn check_available(&'static self) -> Result<&'static Self> {
        match self.unavailable {
            Some(reason) => Err(CatalogError::Unavailable {
                id: self.id,
                name: self.name,
                reason,
            }),
            None => Ok(self),
        }
    }
}

/// The separate build a CPU2017 benchmark runs from when it is part of a mix.
///
/// Mix members are copied out of `mix_sources`, which holds binaries of another build config
/// than the refrate run directories, with their own options and inputs. They never redirect
/// stdout or stderr.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixBuild {
    pub id: u16,
    pub binary: &'static str,
    pub options: &'static str,
    pub input: &'static str,
}

impl MixBuild {
    const fn new(id: u16, binary: &'static str, options: &'static str) -> Self {
        Self {
            id,
            binary,
            options,
            input: "",
        }
    }

    const fn input(mut self, input: &'static str) -> Self {
        self.input = input;
        self
    }

    pub fn executable(&self) -> String {
        format!("{}{}", self.binary, MIX_BUILD_SUFFIX)
    }
}

/// Resolve the mix build of an available benchmark.
pub fn mix_build(id: u16) -> Result<&'static MixBuild> {
    lookup_id(id)?;
    mix_builds::MIX_BUILDS
        .iter()
        .find(|build| build.id == id)
        .ok_or(CatalogError::NoMixBuild { id })
}

fn all() -> impl Iterator<Item = &'static Benchmark> {
    cpu2006::BENCHMARKS.iter().chain(cpu2017::BENCHMARKS)
}

/// Find a table entry by id or name without checking availability.
pub fn find(key: &str) -> Option<&'static Benchmark> {
    let key = key.trim();
    match key.parse::<u16>() {
        Ok(id) => all().find(|bench| bench.id == id),
        Err(_) => all().find(|bench| bench.name == key),
    }
}

/// Resolve a benchmark by numeric id (`"505"`) or name (`"mcf_r"`).
pub fn lookup(key: &str) -> Result<&'static Benchmark> {
    find(key)
        .ok_or_else(|| CatalogError::Unknown(key.to_string()))?
        .check_available()
}

pub fn lookup_id(id: u16) -> Result<&'static Benchmark> {
    all()
        .find(|bench| bench.id == id)
        .ok_or_else(|| CatalogError::Unknown(id.to_string()))?
        .check_available()
}
