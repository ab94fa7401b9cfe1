//! pwbench CLI
//! Usage: pwbench <algorithm> <cost1> [cost2 ...]

use pwbench::{logging, resolve, run_costs, BenchError, SAMPLES};
use std::env;
use std::io;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    logging::init(Level::WARN)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let (algorithm, costs) = args.split_first().ok_or(BenchError::MissingAlgorithm)?;

    let mut strategy = resolve(algorithm)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_costs(&mut strategy, costs, SAMPLES, &mut out)?;

    Ok(())
}
