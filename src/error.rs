//! Error types for the benchmark harness

use thiserror::Error;

/// Every failure is fatal to a run; there is no recoverable variant.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("missing algorithm argument (expected one of: bcrypt, pbkdf2-256, pbkdf2-512)")]
    MissingAlgorithm,

    #[error("unknown algorithm `{0}` (expected one of: bcrypt, pbkdf2-256, pbkdf2-512)")]
    UnknownAlgorithm(String),

    #[error("at least one cost value is required")]
    MissingCosts,

    #[error("invalid cost `{0}`: expected a non-negative integer")]
    InvalidCost(String),

    #[error("sample count must be at least 1")]
    NoSamples,

    #[error("invalid latency budget `{0}`: expected a positive number of milliseconds")]
    InvalidBudget(String),

    /// Passed through untouched so the operator sees bcrypt's own message.
    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
