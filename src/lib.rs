//! Password hashing benchmark harness
//!
//! Measures the mean wall-clock time of bcrypt and PBKDF2 at chosen work
//! factors, so an operator can pick a cost that fits a latency budget.
//!
//! ## Architecture
//! - Algorithm: closed set of supported hashes, resolved by name
//! - Strategy: one timed hash invocation on fresh random input
//! - Bench: sampling runner, per-cost controller, cost recommendation

pub mod algorithm;
pub mod bench;
pub mod config;
pub mod error;
pub mod logging;
pub mod strategy;

pub use algorithm::Algorithm;
pub use bench::{recommend, run_bench, run_costs, BenchResult, Recommendation};
pub use config::{BenchConfig, SAMPLES};
pub use error::{BenchError, Result};
pub use strategy::{resolve, HashStrategy, Strategy};
