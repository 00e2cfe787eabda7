//! Assertion signal.
//!
//! A failed check inside a test body produces an [`AssertionFailure`] carrying the
//! literal source text of the checked expression and where it was written. The
//! failure travels out of the body as an `Err`, so the first failed check ends the
//! current iteration and nothing after it runs.

use thiserror::Error;

/// Result type returned by a test body.
pub type TestResult = Result<(), AssertionFailure>;

/// A false condition recorded at its call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("assertion failed: {expression} at {file}:{line}")]
pub struct AssertionFailure {
    expression: &'static str,
    line: u32,
    file: &'static str,
}

impl AssertionFailure {
    pub const fn new(expression: &'static str, line: u32, file: &'static str) -> Self {
        Self {
            expression,
            line,
            file,
        }
    }

    /// Source text of the failed expression. Display only, never evaluated.
    pub fn expression(&self) -> &'static str {
        self.expression
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn file(&self) -> &'static str {
        self.file
    }
}

/// Checks `condition` and reports it as an [`AssertionFailure`] when it is false.
///
/// Call sites normally go through [`assert!`](crate::assert!), which fills in the
/// expression text, line and file.
#[inline]
pub fn assert_that(
    condition: bool,
    expression: &'static str,
    line: u32,
    file: &'static str,
) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailure::new(expression, line, file))
    }
}
