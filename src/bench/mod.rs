//! Benchmark module
//! Averaged wall-clock measurements of hashing strategies

pub mod controller;
pub mod recommend;
pub mod runner;

pub use controller::{parse_cost, run_costs};
pub use recommend::{recommend, Recommendation};
pub use runner::{run_bench, BenchResult};
