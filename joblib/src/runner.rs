mod active;

use crate::errors::{JobError, Result};
use crate::events::BatchReport;
use crate::job::JobSet;
use active::ActiveJob;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::time::Duration;

/// What the runner does with jobs that exit non-zero or are killed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Record the status in the report and carry on. Failed simulations are inspected
    /// afterwards through their own logs.
    #[default]
    Ignore,
    /// Run the whole batch, then fail with [`JobError::Failed`] if any job did not succeed.
    Require,
}

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    pub max_concurrent: NonZeroUsize,
    pub poll_interval: Duration,
    pub verbose: bool,
    pub exit_policy: ExitPolicy,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_concurrent: NonZeroUsize::new(2).expect("2 is non-zero"),
            poll_interval: Duration::from_secs(10),
            verbose: false,
            exit_policy: ExitPolicy::Ignore,
        }
    }
}

/// Launches a batch of external processes, never more than `max_concurrent` at a time.
///
/// A single task drives the whole batch. It only suspends while sleeping between liveness
/// checks, so the in-flight set needs no synchronization. Children are not killed if the
/// returned future is dropped.
#[derive(Clone, Debug, Default)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every job in `jobs`, in order, and return once all launched processes have exited.
    /// The verbose job report goes to stdout.
    pub async fn run(&self, jobs: &JobSet) -> Result<BatchReport> {
        self.run_reporting(jobs, &mut io::stdout()).await
    }

    /// [`Runner::run`], writing the verbose job report to `out`.
    ///
    /// If a job cannot be launched, nothing after it is submitted. If a running job can no longer
    /// be checked on, it is dropped from the in-flight set. Either way the remaining jobs are
    /// drained before the first error is returned.
    pub async fn run_reporting<W: Write>(
        &self,
        jobs: &JobSet,
        out: &mut W,
    ) -> Result<BatchReport> {
        let max_concurrent = self.config.max_concurrent.get();
        let total = jobs.len();
        let mut active: Vec<ActiveJob> = Vec::with_capacity(max_concurrent);
        let mut report = BatchReport::default();
        let mut error = None;

        for (index, job) in jobs.iter().enumerate() {
            while active.len() >= max_concurrent {
                tokio::time::sleep(self.config.poll_interval).await;
                self.reap(&mut active, &mut report, &mut error);
            }
            if error.is_some() {
                break;
            }

            if self.config.verbose {
                if let Err(err) = announce(out, index + 1, total, job.name()) {
                    tracing::warn!(%err, "unable to write job report");
                }
            }
            match ActiveJob::spawn(job) {
                Ok(handle) => active.push(handle),
                Err(err) => {
                    tracing::warn!(name = job.name(), "job could not be launched, draining batch");
                    error = Some(err);
                    break;
                }
            }
            report.peak_in_flight = report.peak_in_flight.max(active.len());
        }

        while !active.is_empty() {
            tokio::time::sleep(self.config.poll_interval).await;
            self.reap(&mut active, &mut report, &mut error);
        }

        if let Some(err) = error {
            return Err(err);
        }
        for outcome in report.failed() {
            tracing::warn!(name = %outcome.name, status = ?outcome.status, "job did not succeed");
        }
        match self.config.exit_policy {
            ExitPolicy::Require if !report.all_succeeded() => Err(JobError::Failed(report)),
            _ => Ok(report),
        }
    }

    /// Drop every handle whose process has exited, recording its outcome. A handle whose status
    /// cannot be read is dropped too, and the first such error is kept in `error`.
    fn reap(
        &self,
        active: &mut Vec<ActiveJob>,
        report: &mut BatchReport,
        error: &mut Option<JobError>,
    ) {
        let mut i = 0;
        while i < active.len() {
            match active[i].try_status() {
                Ok(status) if status.is_finished() => {
                    let handle = active.swap_remove(i);
                    report.outcomes.push(handle.finish(status));
                }
                Ok(_) => i += 1,
                Err(err) => {
                    drop(active.swap_remove(i));
                    tracing::warn!(%err, "lost track of job, draining batch");
                    if error.is_none() {
                        *error = Some(err);
                    }
                }
            }
        }
    }
}

fn announce<W: Write>(out: &mut W, number: usize, total: usize, name: &str) -> io::Result<()> {
    writeln!(out, "JOB # {}/{}", number, total)?;
    writeln!(out, "Perform simulation {}", name)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::JobStatus;
    use crate::job::Job;
    use std::path::Path;
    use std::time::Instant;

    fn runner(max_concurrent: usize, poll_interval: Duration) -> Runner {
        Runner::new(RunnerConfig {
            max_concurrent: NonZeroUsize::new(max_concurrent).unwrap(),
            poll_interval,
            verbose: false,
            exit_policy: ExitPolicy::Ignore,
        })
    }

    fn sh(name: &str, script: &str) -> Job {
        Job::from_command(name, ["sh", "-c", script]).unwrap()
    }

    /// Each job appends `start <name>` and `end <name>` to `log` around a short sleep.
    fn logged_jobs(log: &Path, names: &[&str], sleep: &str) -> JobSet {
        names
            .iter()
            .map(|name| {
                let script = format!(
                    "echo start {name} >> {log}; sleep {sleep}; echo end {name} >> {log}",
                    name = name,
                    log = log.display(),
                    sleep = sleep,
                );
                sh(name, &script)
            })
            .collect()
    }

    fn read_log(log: &Path) -> Vec<String> {
        std::fs::read_to_string(log)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Highest number of jobs that had started but not ended at any point in the log.
    fn max_overlap(lines: &[String]) -> usize {
        let mut running = 0usize;
        let mut peak = 0;
        for line in lines {
            if line.starts_with("start") {
                running += 1;
                peak = peak.max(running);
            } else {
                running -= 1;
            }
        }
        peak
    }

    #[tokio::test]
    async fn empty_batch_returns_without_sleeping() {
        let started = Instant::now();
        let report = runner(2, Duration::from_secs(30))
            .run(&JobSet::new())
            .await
            .unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(report.outcomes.is_empty());
        assert_eq!(report.peak_in_flight, 0);
    }

    #[tokio::test]
    async fn never_exceeds_max_concurrent() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("jobs.log");
        let jobs = logged_jobs(&log, &["a", "b", "c", "d", "e"], "0.2");

        let report = runner(2, Duration::from_millis(20)).run(&jobs).await.unwrap();

        assert_eq!(report.outcomes.len(), 5);
        assert!(report.peak_in_flight <= 2);
        let lines = read_log(&log);
        assert_eq!(lines.len(), 10);
        assert!(max_overlap(&lines) <= 2);
    }

    #[tokio::test]
    async fn single_slot_runs_sequentially_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("jobs.log");
        let jobs = logged_jobs(&log, &["first", "second", "third"], "0.05");

        let report = runner(1, Duration::from_millis(10)).run(&jobs).await.unwrap();

        assert_eq!(report.peak_in_flight, 1);
        assert_eq!(
            read_log(&log),
            [
                "start first",
                "end first",
                "start second",
                "end second",
                "start third",
                "end third",
            ]
        );
    }

    #[tokio::test]
    async fn three_one_second_jobs_take_two_rounds() {
        let jobs: JobSet = ["a", "b", "c"].iter().map(|name| sh(name, "sleep 1")).collect();

        let started = Instant::now();
        let report = runner(2, Duration::from_millis(50)).run(&jobs).await.unwrap();
        let elapsed = started.elapsed();

        assert_eq!(report.outcomes.len(), 3);
        assert!(elapsed >= Duration::from_secs(2), "finished too early: {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(2900), "took three rounds: {:?}", elapsed);
    }

    #[tokio::test]
    async fn failing_job_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("after");
        let jobs: JobSet = [
            sh("fails", "exit 3"),
            sh("after", &format!("touch {}", marker.display())),
        ]
        .into_iter()
        .collect();

        let report = runner(1, Duration::from_millis(10)).run(&jobs).await.unwrap();

        assert!(marker.exists());
        assert_eq!(
            report.outcome("fails").map(|o| o.status),
            Some(JobStatus::Exited { code: 3 })
        );
        assert_eq!(
            report.outcome("after").map(|o| o.status),
            Some(JobStatus::Exited { code: 0 })
        );
        assert!(!report.all_succeeded());
    }

    #[tokio::test]
    async fn require_policy_fails_after_whole_batch() {
        let jobs: JobSet = [sh("ok", "true"), sh("bad", "exit 1"), sh("ok2", "true")]
            .into_iter()
            .collect();
        let mut config = runner(2, Duration::from_millis(10)).config().clone();
        config.exit_policy = ExitPolicy::Require;

        let err = Runner::new(config).run(&jobs).await.unwrap_err();

        match err {
            JobError::Failed(report) => {
                assert_eq!(report.outcomes.len(), 3);
                let failed: Vec<_> = report.failed().map(|o| o.name.as_str()).collect();
                assert_eq!(failed, ["bad"]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn verbose_report_numbers_each_job_before_launch() {
        let jobs: JobSet = [sh("first", "true"), sh("second", "true")]
            .into_iter()
            .collect();
        let mut config = runner(1, Duration::from_millis(10)).config().clone();
        config.verbose = true;

        let mut out = Vec::new();
        Runner::new(config)
            .run_reporting(&jobs, &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "JOB # 1/2\nPerform simulation first\nJOB # 2/2\nPerform simulation second\n"
        );
    }

    #[tokio::test]
    async fn quiet_runner_reports_nothing() {
        let jobs: JobSet = [sh("only", "true")].into_iter().collect();
        let mut out = Vec::new();
        runner(1, Duration::from_millis(10))
            .run_reporting(&jobs, &mut out)
            .await
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn spawn_failure_is_reported_before_launch_attempt() {
        let jobs: JobSet = [Job::from_command("missing", ["/nonexistent/simulator-binary"]).unwrap()]
            .into_iter()
            .collect();
        let mut config = runner(1, Duration::from_millis(10)).config().clone();
        config.verbose = true;

        let mut out = Vec::new();
        let err = Runner::new(config).run_reporting(&jobs, &mut out).await.unwrap_err();

        assert!(matches!(err, JobError::Spawn { .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "JOB # 1/1\nPerform simulation missing\n"
        );
    }

    #[tokio::test]
    async fn killed_job_reports_signal() {
        let jobs: JobSet = [sh("killed", "kill -9 $$")].into_iter().collect();
        let report = runner(1, Duration::from_millis(10)).run(&jobs).await.unwrap();
        assert_eq!(
            report.outcome("killed").map(|o| o.status),
            Some(JobStatus::Killed { signal: 9 })
        );
    }

    #[tokio::test]
    async fn spawn_failure_drains_running_jobs_then_errors() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("done");
        let never = dir.path().join("never");
        let jobs: JobSet = [
            sh("slow", &format!("sleep 0.2; touch {}", marker.display())),
            Job::from_command("missing", ["/nonexistent/simulator-binary"]).unwrap(),
            sh("skipped", &format!("touch {}", never.display())),
        ]
        .into_iter()
        .collect();

        let err = runner(2, Duration::from_millis(10)).run(&jobs).await.unwrap_err();

        assert!(matches!(err, JobError::Spawn { ref name, .. } if name == "missing"));
        assert!(marker.exists());
        assert!(!never.exists());
    }

    #[tokio::test]
    async fn jobs_run_in_their_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let jobs: JobSet = [sh("pwd", "touch here").current_dir(dir.path())]
            .into_iter()
            .collect();
        runner(1, Duration::from_millis(10)).run(&jobs).await.unwrap();
        assert!(dir.path().join("here").exists());
    }
}
