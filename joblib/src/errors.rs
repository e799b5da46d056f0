use crate::events::BatchReport;
use crate::types::JobName;
use std::{io, result};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("job `{name}` has an empty command line")]
    EmptyCommand { name: JobName },
    #[error("failed to launch job `{name}`")]
    Spawn {
        name: JobName,
        #[source]
        source: io::Error,
    },
    #[error("failed to check whether job `{name}` has exited")]
    Wait {
        name: JobName,
        #[source]
        source: io::Error,
    },
    #[error("{}", failure_summary(.0))]
    Failed(BatchReport),
}

fn failure_summary(report: &BatchReport) -> String {
    let failed: Vec<&str> = report.failed().map(|outcome| outcome.name.as_str()).collect();
    format!(
        "{} of {} jobs did not exit successfully: {}",
        failed.len(),
        report.outcomes.len(),
        failed.join(", ")
    )
}

pub type Result<T> = result::Result<T, JobError>;
