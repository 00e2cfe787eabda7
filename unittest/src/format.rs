//! Duration formatting for the summary line.

use core::time::Duration;

use crate::stats::DurationStats;
use crate::test_framework::Outcome;

/// Renders `d` as `"<s>s <ms>ms"`, `"<ms>ms"` or `"<ns>ns"`, truncating lower units.
pub fn format_duration(d: Duration) -> String {
    let millis = d.as_millis();
    if d >= Duration::from_secs(1) {
        format!("{}s {}ms", d.as_secs(), millis % 1000)
    } else if millis >= 1 {
        format!("{}ms", millis)
    } else {
        format!("{}ns", d.as_nanos())
    }
}

/// Timing text for a run, or `None` when no iteration succeeded.
///
/// A single outcome is shown as its raw duration; more than one is summarised over the
/// successful iterations only.
pub fn format_stats(outcomes: &[Outcome]) -> Option<String> {
    let samples: Vec<Duration> = outcomes.iter().filter_map(Outcome::duration).collect();

    if let [only] = outcomes {
        return only.duration().map(format_duration);
    }

    let stats = DurationStats::from_samples(&samples)?;
    Some(format!(
        "mean {}, stddev {}, min {}, max {}",
        format_duration(stats.mean),
        format_duration(stats.std_dev),
        format_duration(stats.min),
        format_duration(stats.max)
    ))
}
