use crate::catalog::{self, Benchmark, MixBuild};
use crate::errors::{CatalogError, PlanError, Result};

/// CPU2017 integer rate benchmarks.
pub const INTRATE: &[u16] = &[500, 502, 505, 520, 523, 525, 531, 541, 548, 557];
/// CPU2017 floating point rate benchmarks.
pub const FPRATE: &[u16] = &[
    503, 507, 508, 511, 519, 521, 526, 527, 538, 544, 549, 554,
];

/// A set of different benchmarks simulated together, one per core.
#[derive(Debug, PartialEq, Eq)]
pub struct Mix {
    pub name: &'static str,
    pub members: &'static [u16],
}

pub static MIXES: &[Mix] = &[
    Mix {
        name: "high1",
        members: &[503, 519, 549, 505],
    },
    Mix {
        name: "low1",
        members: &[541, 507, 531, 538],
    },
    Mix {
        name: "mix",
        members: &[511, 531, 538, 541],
    },
];

impl Mix {
    pub fn find(name: &str) -> Option<&'static Mix> {
        MIXES.iter().find(|mix| mix.name == name)
    }

    /// The member builds, in core order.
    pub fn builds(&self) -> Result<Vec<&'static MixBuild>> {
        self.members.iter().map(|&id| catalog::mix_build(id)).collect()
    }

    /// Every member gets exactly one core.
    pub fn check_cores(&self, cores: u32) -> std::result::Result<(), PlanError> {
        if self.members.len() == cores as usize {
            Ok(())
        } else {
            Err(PlanError::CoreCountMismatch {
                mix: self.name,
                members: self.members.len(),
                cores,
            })
        }
    }
}

/// What a single invocation simulates.
#[derive(Debug, PartialEq, Eq)]
pub enum Workload {
    /// Each benchmark is simulated on its own, as a separate job.
    Benchmarks {
        name: String,
        benchmarks: Vec<&'static Benchmark>,
    },
    /// One job simulating every member of the mix at once.
    Mix(&'static Mix),
}

impl Workload {
    /// Parse a workload selector: `all`, `intrate`, `fprate`, a mix name, or a benchmark id/name.
    pub fn parse(selector: &str) -> Result<Self> {
        let group: Vec<u16> = match selector {
            "all" => INTRATE.iter().chain(FPRATE).copied().collect(),
            "intrate" => INTRATE.to_vec(),
            "fprate" => FPRATE.to_vec(),
            _ => {
                if let Some(mix) = Mix::find(selector) {
                    return Ok(Workload::Mix(mix));
                }
                let benchmark = catalog::lookup(selector)?;
                return Ok(Workload::Benchmarks {
                    name: benchmark.id.to_string(),
                    benchmarks: vec![benchmark],
                });
            }
        };
        Ok(Workload::Benchmarks {
            name: selector.to_string(),
            benchmarks: resolve_group(selector, &group)?,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Workload::Benchmarks { name, .. } => name,
            Workload::Mix(mix) => mix.name,
        }
    }
}

/// Unavailable members are skipped rather than failing the whole group.
fn resolve_group(group: &str, ids: &[u16]) -> Result<Vec<&'static Benchmark>> {
    let mut benchmarks = Vec::with_capacity(ids.len());
    for &id in ids {
        match catalog::lookup_id(id) {
            Ok(benchmark) => benchmarks.push(benchmark),
            Err(CatalogError::Unavailable { id, reason, .. }) => {
                tracing::warn!(group, id, reason, "skipping unavailable benchmark");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(benchmarks)
}
