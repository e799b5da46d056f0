use serde::Deserialize;
use std::path::PathBuf;

/// Filesystem layout of the SPEC installations, checkpoints and simulator output.
///
/// Paths may start with `~`, which the caller expands before use.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecPaths {
    pub spec2006: PathBuf,
    pub spec2017: PathBuf,
    /// Per-benchmark directories copied into a mix run directory.
    pub mix_sources: PathBuf,
    pub mix_run_root: PathBuf,
    pub checkpoints: PathBuf,
    pub checkpoints_2006: PathBuf,
    pub output: PathBuf,
}

impl Default for SpecPaths {
    fn default() -> Self {
        Self {
            spec2006: "~/Research/CPU2006".into(),
            spec2017: "~/Research/CPU2017".into(),
            mix_sources: "~/Research/SPEC06_17".into(),
            mix_run_root: "~/Research/temp".into(),
            checkpoints: "~/Research/NewCheckpoints/checkpoints".into(),
            checkpoints_2006: "~/Research/new_ckpts/ckpts2006/singleCore".into(),
            output: "~/Research/Gem5Output".into(),
        }
    }
}

impl SpecPaths {
    /// Apply `f` to every path, e.g. to expand `~`.
    pub fn map(self, f: impl Fn(PathBuf) -> PathBuf) -> Self {
        Self {
            spec2006: f(self.spec2006),
            spec2017: f(self.spec2017),
            mix_sources: f(self.mix_sources),
            mix_run_root: f(self.mix_run_root),
            checkpoints: f(self.checkpoints),
            checkpoints_2006: f(self.checkpoints_2006),
            output: f(self.output),
        }
    }
}
