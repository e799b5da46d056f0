use crate::types::{JobId, JobName};
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobStatus {
    Running,
    Exited { code: i32 },
    Killed { signal: i32 },
}

impl JobStatus {
    /// true only for a job that has exited with code 0.
    pub fn success(&self) -> bool {
        matches!(self, JobStatus::Exited { code: 0 })
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self, JobStatus::Running)
    }
}

impl From<ExitStatus> for JobStatus {
    fn from(exit_status: ExitStatus) -> Self {
        if let Some(code) = exit_status.code() {
            JobStatus::Exited { code }
        } else if let Some(signal) = exit_status.signal() {
            JobStatus::Killed { signal }
        } else {
            unreachable!("exit status carries neither a code nor a signal")
        }
    }
}

/// Final state of one launched job.
#[derive(Clone, Debug)]
pub struct JobOutcome {
    pub id: JobId,
    pub name: JobName,
    pub status: JobStatus,
    pub elapsed: Duration,
}

/// Everything the runner observed while draining a batch.
///
/// Outcomes are listed in the order the runner noticed each job had exited, which is not
/// necessarily the order the jobs finished in.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
    pub peak_in_flight: usize,
}

impl BatchReport {
    pub fn failed(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.status.success())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn outcome(&self, name: &str) -> Option<&JobOutcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }
}
