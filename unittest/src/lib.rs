//! Inline unit tests for small programs.
//!
//! ```no_run
//! use unittest::{Test, assert};
//!
//! Test::new("Addition").run(|| {
//!     assert!(1 + 2 == 3);
//!     Ok(())
//! });
//! ```

#[macro_use]
extern crate log;

mod assertion;
pub mod error;
pub mod format;
mod macros;
pub mod report;
pub mod stats;
pub mod test_framework;

// Re-export the def_test macro from unittest-macros crate
pub use unittest_macros::def_test;

pub use assertion::{AssertionFailure, TestResult, assert_that};
pub use error::ConfigError;
pub use format::{format_duration, format_stats};
pub use report::ColorChoice;
pub use stats::DurationStats;
pub use test_framework::{Outcome, Test, TestReport, exit_code, tests_failed};
