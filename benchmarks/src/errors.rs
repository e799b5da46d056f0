use std::result;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown workload `{0}`")]
    Unknown(String),
    #[error("benchmark {id} ({name}) is unavailable: {reason}")]
    Unavailable {
        id: u16,
        name: &'static str,
        reason: &'static str,
    },
    #[error("benchmark {id} has no build to run in a mix")]
    NoMixBuild { id: u16 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("no checkpoints for {cores} cores of benchmark {id}, only 1, 4 and 8 are supported")]
    UnsupportedCores { id: u16, cores: u32 },
    #[error("mix `{mix}` has {members} benchmarks but {cores} cores were requested")]
    CoreCountMismatch {
        mix: &'static str,
        members: usize,
        cores: u32,
    },
    #[error("benchmark {id} ({name}) has no SimPoint to restore from")]
    MissingSimpoint { id: u16, name: &'static str },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = result::Result<T, CatalogError>;
