//! Console report.
//!
//! One summary line per run, then a detail block for every failed iteration in the
//! order the failures happened:
//!
//! ```text
//! [✓] Addition
//! [x] Failed Test
//!
//! Assertion failed: 0 == 1
//! src/tests/basic.rs (12)
//!
//! ```

use core::fmt::{self, Display};
use std::io::{self, IsTerminal, Write};

use crate::test_framework::TestReport;

/// When to colour the pass/fail marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colour only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub(crate) fn for_stdout(self) -> bool {
        match self {
            ColorChoice::Auto => io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// An arbitrary writer is never assumed to be a terminal.
    pub(crate) fn for_writer(self) -> bool {
        self == ColorChoice::Always
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCode {
    Reset = 0,
    Bold = 1,
    Red = 31,
    Green = 32,
}

struct Painted<'a> {
    codes: &'a [ColorCode],
    text: &'a str,
    enabled: bool,
}

impl Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.enabled || self.codes.is_empty() {
            return f.write_str(self.text);
        }
        f.write_str("\u{1B}[")?;
        for (i, code) in self.codes.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", *code as u8)?;
        }
        write!(f, "m{}\u{1B}[{}m", self.text, ColorCode::Reset as u8)
    }
}

fn marker(passed: bool, enabled: bool) -> Painted<'static> {
    if passed {
        Painted {
            codes: &[ColorCode::Green],
            text: "[✓]",
            enabled,
        }
    } else {
        Painted {
            codes: &[ColorCode::Bold, ColorCode::Red],
            text: "[x]",
            enabled,
        }
    }
}

pub(crate) fn write_report<W: Write>(out: &mut W, report: &TestReport, color: bool) -> io::Result<()> {
    write!(out, "{} {}", marker(report.passed(), color), report.name())?;
    if let Some(timing) = report.timing() {
        write!(out, " ({})", timing)?;
    }
    writeln!(out)?;

    for failure in report.failures() {
        writeln!(out)?;
        writeln!(out, "Assertion failed: {}", failure.expression())?;
        writeln!(out, "{} ({})", failure.file(), failure.line())?;
        writeln!(out)?;
    }

    out.flush()
}
