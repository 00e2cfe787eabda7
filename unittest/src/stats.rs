//! Timing statistics over repeated runs.
//!
//! Only successful iterations contribute a sample. Mean is the floored integer mean in
//! nanoseconds; standard deviation uses the sample (`n - 1`) divisor and is zero when
//! fewer than two samples exist.

use core::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub std_dev: Duration,
}

impl DurationStats {
    /// Returns `None` when `samples` is empty.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        let min = samples.iter().min().copied()?;
        let max = samples.iter().max().copied()?;
        let count = samples.len();

        let total: u128 = samples.iter().map(Duration::as_nanos).sum();
        let mean_ns = total / count as u128;

        let std_dev = if count < 2 {
            Duration::ZERO
        } else {
            let mean = total as f64 / count as f64;
            let variance = samples
                .iter()
                .map(|d| (d.as_nanos() as f64 - mean).powi(2))
                .sum::<f64>()
                / (count - 1) as f64;
            Duration::from_nanos(variance.sqrt() as u64)
        };

        Some(Self {
            count,
            min,
            max,
            mean: nanos(mean_ns),
            std_dev,
        })
    }
}

fn nanos(ns: u128) -> Duration {
    Duration::from_nanos(u64::try_from(ns).unwrap_or(u64::MAX))
}
