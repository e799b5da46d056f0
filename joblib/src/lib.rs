pub mod errors;
mod events;
mod job;
mod runner;
pub mod types;

pub use errors::JobError;
pub use events::{BatchReport, JobOutcome, JobStatus};
pub use job::{Job, JobSet};
pub use runner::{ExitPolicy, Runner, RunnerConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;
    use std::time::Duration;

    #[tokio::test]
    async fn basic() {
        let jobs: JobSet = [
            Job::from_command("echo", ["echo", "-n", "hello world!"]).expect("job build err"),
            Job::from_command("false", ["false"]).expect("job build err"),
        ]
        .into_iter()
        .collect();
        let runner = Runner::new(RunnerConfig {
            max_concurrent: NonZeroUsize::new(2).unwrap(),
            poll_interval: Duration::from_millis(10),
            verbose: true,
            exit_policy: ExitPolicy::Ignore,
        });
        let report = runner.run(&jobs).await.expect("batch failed");
        assert_eq!(report.outcomes.len(), 2);
        assert!(report.outcome("echo").unwrap().status.success());
        assert_eq!(
            report.outcome("false").unwrap().status,
            JobStatus::Exited { code: 1 }
        );
    }
}
