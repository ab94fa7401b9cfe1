//! Cost recommendation for a latency budget
//!
//! Measures once at a baseline cost and extrapolates: bcrypt time doubles
//! with each cost step, PBKDF2 time grows linearly with iterations.

use super::runner::run_bench;
use crate::algorithm::Algorithm;
use crate::error::{BenchError, Result};
use crate::strategy::Strategy;
use serde::Serialize;
use tracing::{info, warn};

/// Default latency budget in milliseconds
pub const DEFAULT_BUDGET_MS: u64 = 250;

/// Suggested cost for one algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub algorithm: Algorithm,
    pub budget_ms: u64,
    pub baseline_cost: u32,
    pub baseline_ms: u64,
    pub rounds: u32,
}

/// Cost measured before extrapolating
pub fn baseline_cost(algorithm: Algorithm) -> u32 {
    match algorithm {
        Algorithm::Bcrypt => 10,
        Algorithm::Pbkdf2Sha256 | Algorithm::Pbkdf2Sha512 => 10_000,
    }
}

/// Parse a budget argument as a positive number of milliseconds
pub fn parse_budget(arg: &str) -> Result<u64> {
    match arg.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(BenchError::InvalidBudget(arg.to_string())),
    }
}

/// Extrapolate the cost that should take about `budget_ms`
pub fn extrapolate(algorithm: Algorithm, budget_ms: u64, baseline_ms: u64) -> u32 {
    let baseline = baseline_cost(algorithm);
    // A sub-millisecond baseline reads as 0; treat it as 1 ms
    let ratio = budget_ms as f64 / baseline_ms.max(1) as f64;

    match algorithm {
        Algorithm::Bcrypt => {
            let (min, max) = algorithm.cost_range();
            let rounds = ratio.log2().round() + f64::from(baseline);
            let clamped = rounds.clamp(f64::from(min), f64::from(max));
            if clamped != rounds {
                warn!(rounds, clamped, "bcrypt cost clamped to supported range");
            }
            clamped as u32
        }
        Algorithm::Pbkdf2Sha256 | Algorithm::Pbkdf2Sha512 => {
            let steps = ratio.round().max(1.0);
            let rounds = steps * f64::from(baseline);
            rounds.min(f64::from(u32::MAX)) as u32
        }
    }
}

/// Measure `strategy` at the baseline cost and recommend a cost for `budget_ms`
pub fn recommend<S>(algorithm: Algorithm, budget_ms: u64, samples: u32, strategy: &mut S) -> Result<Recommendation>
where
    S: Strategy + ?Sized,
{
    if budget_ms == 0 {
        return Err(BenchError::InvalidBudget(budget_ms.to_string()));
    }

    let baseline_cost = baseline_cost(algorithm);
    let baseline = run_bench(baseline_cost, samples, strategy)?;
    let rounds = extrapolate(algorithm, budget_ms, baseline.mean_ms);

    info!(%algorithm, budget_ms, baseline_ms = baseline.mean_ms, rounds, "recommendation");

    Ok(Recommendation {
        algorithm,
        budget_ms,
        baseline_cost,
        baseline_ms: baseline.mean_ms,
        rounds,
    })
}
