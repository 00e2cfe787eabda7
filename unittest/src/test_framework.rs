//! Test runner.
//!
//! A [`Test`] is configured by chaining, then consumed by [`Test::run`], which invokes
//! the body once per repetition, records one [`Outcome`] per iteration and prints the
//! report. An assertion failure ends only the current iteration. A panic in the body is
//! not caught and unwinds out of `run`.

use core::num::NonZeroUsize;
use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use crate::assertion::{AssertionFailure, TestResult};
use crate::error::ConfigError;
use crate::format::format_stats;
use crate::report::{ColorChoice, write_report};
use crate::stats::DurationStats;

/// Set by every run that records at least one failure.
pub static TEST_FAILED_FLAG: AtomicBool = AtomicBool::new(false);

pub fn tests_failed() -> bool {
    TEST_FAILED_FLAG.load(Ordering::Relaxed)
}

/// `ExitCode::FAILURE` once any run in this process has failed.
pub fn exit_code() -> ExitCode {
    if tests_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Result of one iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `duration` is present iff the run was timed.
    Success { duration: Option<Duration> },
    Failure(AssertionFailure),
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            Outcome::Success { duration } => *duration,
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&AssertionFailure> {
        match self {
            Outcome::Failure(failure) => Some(failure),
            Outcome::Success { .. } => None,
        }
    }
}

/// A named test waiting to be run.
#[derive(Debug, Clone)]
pub struct Test {
    name: String,
    timed: bool,
    repeat: NonZeroUsize,
    color: ColorChoice,
}

impl Test {
    /// Untimed, single iteration, colour when stdout is a terminal.
    ///
    /// `name` must not be empty; use [`Test::try_new`] for names that are not literals.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "test name must not be empty");
        Self {
            name,
            timed: false,
            repeat: NonZeroUsize::MIN,
            color: ColorChoice::Auto,
        }
    }

    /// Like [`Test::new`] but rejects an empty name.
    pub fn try_new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            warn!("rejecting test with an empty name");
            return Err(ConfigError::EmptyName);
        }
        Ok(Self::new(name))
    }

    /// Measures the wall-clock time of every iteration.
    ///
    /// Same as `with_timing(true)`; [`Test::with_timing`] takes the flag explicitly.
    pub fn time(self) -> Self {
        self.with_timing(true)
    }

    pub fn with_timing(mut self, enabled: bool) -> Self {
        self.timed = enabled;
        self
    }

    /// Runs the body `n` times. Zero repetitions are rejected.
    pub fn repeat(self, n: usize) -> Result<Self, ConfigError> {
        match NonZeroUsize::new(n) {
            Some(n) => Ok(self.repeat_nonzero(n)),
            None => {
                warn!("rejecting repeat count 0 for `{}`", self.name);
                Err(ConfigError::ZeroRepeat)
            }
        }
    }

    pub fn repeat_nonzero(mut self, n: NonZeroUsize) -> Self {
        self.repeat = n;
        self
    }

    pub fn color(mut self, choice: ColorChoice) -> Self {
        self.color = choice;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_timed(&self) -> bool {
        self.timed
    }

    pub fn repeat_count(&self) -> usize {
        self.repeat.get()
    }

    /// Runs the body and prints the report to stdout.
    pub fn run<F>(self, body: F) -> TestReport
    where
        F: FnMut() -> TestResult,
    {
        let color = self.color.for_stdout();
        let report = self.execute(body);

        let stdout = io::stdout();
        if let Err(err) = write_report(&mut stdout.lock(), &report, color) {
            error!("failed to write report for `{}`: {}", report.name(), err);
        }

        report
    }

    /// Runs the body and writes the report to `out`.
    ///
    /// [`ColorChoice::Auto`] is treated as no colour here.
    pub fn run_to<W, F>(self, out: &mut W, body: F) -> io::Result<TestReport>
    where
        W: Write,
        F: FnMut() -> TestResult,
    {
        let color = self.color.for_writer();
        let report = self.execute(body);
        write_report(out, &report, color)?;
        Ok(report)
    }

    fn execute<F>(self, mut body: F) -> TestReport
    where
        F: FnMut() -> TestResult,
    {
        let repeat = self.repeat.get();
        let mut outcomes = Vec::with_capacity(repeat);

        for iteration in 0..repeat {
            debug!("running `{}` iteration {}/{}", self.name, iteration + 1, repeat);

            let result = if self.timed {
                let start = Instant::now();
                let result = body();
                let elapsed = start.elapsed();
                trace!("`{}` iteration {} took {:?}", self.name, iteration + 1, elapsed);
                result.map(|()| Some(elapsed))
            } else {
                body().map(|()| None)
            };

            outcomes.push(match result {
                Ok(duration) => Outcome::Success { duration },
                Err(failure) => {
                    debug!("`{}` iteration {} failed: {}", self.name, iteration + 1, failure);
                    Outcome::Failure(failure)
                }
            });
        }

        let report = TestReport::new(self.name, self.timed, outcomes);
        if !report.passed() {
            TEST_FAILED_FLAG.store(true, Ordering::Relaxed);
        }
        report
    }
}

/// Everything recorded by one [`Test::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    name: String,
    timed: bool,
    outcomes: Vec<Outcome>,
}

impl TestReport {
    pub(crate) fn new(name: impl Into<String>, timed: bool, outcomes: Vec<Outcome>) -> Self {
        Self {
            name: name.into(),
            timed,
            outcomes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_timed(&self) -> bool {
        self.timed
    }

    /// One entry per iteration, in iteration order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn passed(&self) -> bool {
        self.success_count() == self.outcomes.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssertionFailure> {
        self.outcomes.iter().filter_map(Outcome::failure)
    }

    /// Statistics over the successful timed iterations.
    pub fn stats(&self) -> Option<DurationStats> {
        let samples: Vec<Duration> = self.outcomes.iter().filter_map(Outcome::duration).collect();
        DurationStats::from_samples(&samples)
    }

    /// The parenthesised text of the summary line, if any.
    pub fn timing(&self) -> Option<String> {
        if !self.timed {
            return None;
        }
        format_stats(&self.outcomes)
    }
}
