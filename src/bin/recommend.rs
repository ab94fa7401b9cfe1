//! Suggest a work factor for a latency budget
//! Usage: pwbench-recommend <algorithm> [budget_ms]

use pwbench::bench::recommend::{parse_budget, DEFAULT_BUDGET_MS};
use pwbench::{logging, recommend, Algorithm, BenchError, HashStrategy, SAMPLES};
use std::env;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    logging::init(Level::WARN)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let algorithm: Algorithm = args.first().ok_or(BenchError::MissingAlgorithm)?.parse()?;
    let budget_ms = match args.get(1) {
        Some(arg) => parse_budget(arg)?,
        None => DEFAULT_BUDGET_MS,
    };

    let mut strategy = HashStrategy::new(algorithm);
    let recommendation = recommend(algorithm, budget_ms, SAMPLES, &mut strategy)?;

    println!("{}", serde_json::to_string(&recommendation)?);
    Ok(())
}
