//! Repeated sampling of a strategy at a single cost

use crate::error::{BenchError, Result};
use crate::strategy::Strategy;
use std::fmt;
use tracing::info;

/// Averaged result for one cost value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchResult {
    pub cost: u32,
    pub samples: u32,
    pub total_ms: u64,
    /// `total_ms / samples`, truncated
    pub mean_ms: u64,
}

impl fmt::Display for BenchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} ms", self.cost, self.mean_ms)
    }
}

/// Run `samples` sequential samples at `cost` and average them.
///
/// No warm-up and no outlier rejection: every sample counts. The first
/// strategy error aborts the measurement.
pub fn run_bench<S>(cost: u32, samples: u32, strategy: &mut S) -> Result<BenchResult>
where
    S: Strategy + ?Sized,
{
    if samples == 0 {
        return Err(BenchError::NoSamples);
    }

    let mut total_ms = 0u64;
    for _ in 0..samples {
        total_ms += strategy.sample(cost)?;
    }

    let mean_ms = total_ms / u64::from(samples);
    info!(cost, samples, total_ms, mean_ms, "benchmark complete");

    Ok(BenchResult {
        cost,
        samples,
        total_ms,
        mean_ms,
    })
}
