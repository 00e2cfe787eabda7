use std::cell::Cell;

use pretty_assertions::assert_eq;
use unittest::{ColorChoice, ConfigError, Test, TestReport, TestResult};

fn run_plain<F>(test: Test, body: F) -> (TestReport, String)
where
    F: FnMut() -> TestResult,
{
    let mut out = Vec::new();
    let report = test.color(ColorChoice::Never).run_to(&mut out, body).unwrap();
    (report, String::from_utf8(out).unwrap())
}

#[test]
fn addition_passes() {
    let (report, out) = run_plain(Test::new("Addition"), || {
        unittest::assert!(1 + 2 == 3);
        Ok(())
    });

    assert!(report.passed());
    assert_eq!(out, "[✓] Addition\n");
}

#[test]
fn failed_test_prints_detail_block() {
    let line = line!() + 2;
    let (report, out) = run_plain(Test::new("Failed Test"), || {
        unittest::assert!(0 == 1);
        Ok(())
    });

    assert!(!report.passed());
    assert_eq!(
        out,
        format!("[x] Failed Test\n\nAssertion failed: 0 == 1\n{} ({})\n\n", file!(), line)
    );
    assert!(unittest::tests_failed());
}

#[test]
#[rustfmt::skip]
fn expression_keeps_source_spacing() {
    let line = line!() + 2;
    let (_, out) = run_plain(Test::new("Failed Test"), || {
        unittest::assert!(0==1);
        Ok(())
    });

    assert_eq!(
        out,
        format!("[x] Failed Test\n\nAssertion failed: 0==1\n{} ({})\n\n", file!(), line)
    );
}

#[test]
fn always_colour_wraps_marker() {
    let mut out = Vec::new();
    Test::new("Coloured")
        .color(ColorChoice::Always)
        .run_to(&mut out, || Ok(()))
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\u{1B}[32m[✓]\u{1B}[0m Coloured\n");
}

#[test]
fn always_succeeding_repeats() {
    let (report, out) = run_plain(Test::new("Repeat").repeat(7).unwrap(), || Ok(()));

    assert_eq!(report.outcomes().len(), 7);
    assert_eq!(report.success_count(), 7);
    assert_eq!(out, "[✓] Repeat\n");
}

#[test]
fn failures_listed_in_iteration_order() {
    let iteration = Cell::new(0u32);
    let (report, out) = run_plain(Test::new("Odd iterations").repeat(5).unwrap(), || {
        iteration.set(iteration.get() + 1);
        let n = iteration.get();
        if n == 2 {
            unittest::assert!(n == 20);
        }
        if n == 4 {
            unittest::assert_eq!(n, 40);
        }
        Ok(())
    });

    assert_eq!(report.success_count(), 3);
    let expressions: Vec<_> = report.failures().map(|f| f.expression()).collect();
    assert_eq!(expressions, ["n == 20", "n == 40"]);

    assert!(out.starts_with("[x] Odd iterations\n"));
    assert_eq!(out.matches("Assertion failed: ").count(), 2);
    let first = out.find("Assertion failed: n == 20").unwrap();
    let second = out.find("Assertion failed: n == 40").unwrap();
    assert!(first < second);
}

#[test]
fn timed_single_run_shows_raw_duration() {
    let (report, out) = run_plain(Test::new("Timed").time(), || Ok(()));

    let timing = report.timing().unwrap();
    assert!(!timing.starts_with("mean"));
    assert_eq!(out, format!("[✓] Timed ({})\n", timing));
}

#[test]
fn timed_repeated_run_shows_statistics() {
    let (report, out) = run_plain(Test::new("Stats").time().repeat(3).unwrap(), || Ok(()));

    let stats = report.stats().unwrap();
    assert_eq!(stats.count, 3);
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    assert!(out.starts_with("[✓] Stats (mean "));
    assert!(out.contains(", stddev "));
    assert!(out.contains(", min "));
    assert!(out.trim_end().ends_with(')'));
}

#[test]
fn timed_run_without_successes_has_no_timing() {
    let (_, out) = run_plain(Test::new("Never").time().repeat(2).unwrap(), || {
        unittest::assert!(false);
        Ok(())
    });
    assert!(out.starts_with("[x] Never\n\n"));
}

#[test]
fn zero_repeat_rejected_before_running() {
    assert_eq!(Test::new("Zero").repeat(0).unwrap_err(), ConfigError::ZeroRepeat);
}

#[test]
fn assertion_failure_converts_into_anyhow_like_errors() {
    fn body() -> Result<(), Box<dyn std::error::Error>> {
        unittest::assert_that(false, "ready", 1, "lib.rs")?;
        Ok(())
    }
    assert_eq!(body().unwrap_err().to_string(), "assertion failed: ready at lib.rs:1");
}

#[test]
#[should_panic(expected = "not an assertion")]
fn panics_propagate_out_of_run() {
    let mut out = Vec::new();
    let _ = Test::new("Panics").run_to(&mut out, || panic!("not an assertion"));
}
