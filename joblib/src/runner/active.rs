use crate::errors::{JobError, Result};
use crate::events::{JobOutcome, JobStatus};
use crate::job::Job;
use crate::types::{JobId, JobName};
use std::time::Instant;
use tokio::process::{self, Child};

/// Ownership of one spawned job process.
pub struct ActiveJob {
    id: JobId,
    name: JobName,
    child: Child,
    started: Instant,
}

impl ActiveJob {
    /// Launch the job. Stdio is inherited, the child writes wherever the simulator sends it.
    pub fn spawn(job: &Job) -> Result<Self> {
        let mut command = process::Command::new(job.program());
        command.args(job.args()).envs(job.envs().iter().cloned());
        if let Some(dir) = job.dir() {
            command.current_dir(dir);
        }
        let child = command.spawn().map_err(|source| JobError::Spawn {
            name: job.name().to_string(),
            source,
        })?;
        let id = uuid::Uuid::new_v4();
        tracing::debug!(%id, name = job.name(), pid = ?child.id(), "spawned job");
        Ok(Self {
            id,
            name: job.name().to_string(),
            child,
            started: Instant::now(),
        })
    }

    /// Non-blocking liveness check.
    pub fn try_status(&mut self) -> Result<JobStatus> {
        match self.child.try_wait() {
            Ok(Some(exit_status)) => Ok(exit_status.into()),
            Ok(None) => Ok(JobStatus::Running),
            Err(source) => Err(JobError::Wait {
                name: self.name.clone(),
                source,
            }),
        }
    }

    pub fn finish(self, status: JobStatus) -> JobOutcome {
        let elapsed = self.started.elapsed();
        tracing::debug!(id = %self.id, name = %self.name, ?status, ?elapsed, "job exited");
        JobOutcome {
            id: self.id,
            name: self.name,
            status,
            elapsed,
        }
    }
}
