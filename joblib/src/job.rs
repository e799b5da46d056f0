use crate::errors::{JobError, Result};
use crate::types::{Args, Dir, Envs, JobName, Program};

/// One external command the runner can launch.
///
/// The parent's environment is always inherited; `envs` only adds to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    name: JobName,
    program: Program,
    args: Args,
    dir: Option<Dir>,
    envs: Envs,
}

impl Job {
    /// Build a job from a full command vector: the program followed by its arguments.
    pub fn from_command<I, S>(name: impl Into<JobName>, command: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut command = command.into_iter().map(Into::into);
        let program = match command.next() {
            Some(program) if !program.is_empty() => program,
            _ => return Err(JobError::EmptyCommand { name }),
        };
        Ok(Self {
            name,
            program,
            args: command.collect(),
            dir: None,
            envs: Envs::new(),
        })
    }

    pub fn current_dir(mut self, dir: impl Into<Dir>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
        self.envs.push((key.into(), val.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn dir(&self) -> Option<&Dir> {
        self.dir.as_ref()
    }

    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }

    /// The command line as a vector, program first.
    pub fn command_line(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// An ordered name -> job mapping.
///
/// Jobs iterate in insertion order. Inserting a name that is already present replaces the old
/// job but keeps its position.
#[derive(Clone, Debug, Default)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a job, returning the job it replaced, if any.
    pub fn insert(&mut self, job: Job) -> Option<Job> {
        match self.jobs.iter_mut().find(|existing| existing.name == job.name) {
            Some(existing) => Some(std::mem::replace(existing, job)),
            None => {
                self.jobs.push(job);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.name == name)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }
}

impl<'a> IntoIterator for &'a JobSet {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Job> for JobSet {
    fn from_iter<T: IntoIterator<Item = Job>>(iter: T) -> Self {
        let mut set = JobSet::new();
        for job in iter {
            set.insert(job);
        }
        set
    }
}
