//! Drives the runner over a list of cost values

use super::runner::run_bench;
use crate::error::{BenchError, Result};
use crate::strategy::Strategy;
use std::io::Write;

/// Parse a cost argument as a non-negative integer
pub fn parse_cost(arg: &str) -> Result<u32> {
    arg.parse::<u32>()
        .map_err(|_| BenchError::InvalidCost(arg.to_string()))
}

/// Benchmark each cost in the order given, writing one line per cost.
///
/// Costs are parsed as they are reached, so a malformed value stops the run
/// after the lines for the costs before it. Each line is flushed as soon as
/// it is written.
pub fn run_costs<S, W, A>(strategy: &mut S, costs: &[A], samples: u32, out: &mut W) -> Result<()>
where
    S: Strategy + ?Sized,
    W: Write,
    A: AsRef<str>,
{
    if costs.is_empty() {
        return Err(BenchError::MissingCosts);
    }

    for arg in costs {
        let cost = parse_cost(arg.as_ref())?;
        let result = run_bench(cost, samples, strategy)?;
        writeln!(out, "{}", result)?;
        out.flush()?;
    }

    Ok(())
}
