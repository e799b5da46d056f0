//! SPEC CPU2006/2017 benchmark catalog and gem5 simulation plans.

pub mod catalog;
pub mod errors;
pub mod params;
pub mod paths;
pub mod plan;
pub mod workload;

pub use catalog::{Benchmark, MixBuild, Suite};
pub use errors::{CatalogError, PlanError};
pub use params::{CacheParams, SimParams};
pub use paths::SpecPaths;
pub use plan::{ProcessSpec, Restore, SimulationPlan};
pub use workload::{Mix, Workload};
