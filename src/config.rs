//! Measurement constants

use serde::{Deserialize, Serialize};

/// Number of timed samples averaged per cost value
pub const SAMPLES: u32 = 10;

/// Sizes and counts used by every measurement.
///
/// The command line always runs with [`BenchConfig::default`]; other values
/// exist for tests and the Criterion bench.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Samples per cost value
    pub samples: u32,

    /// Random plaintext length in bytes
    pub plaintext_len: usize,

    /// Random salt length in bytes (PBKDF2 only)
    pub salt_len: usize,

    /// Derived key length in bytes (PBKDF2 only)
    pub key_len: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            samples: SAMPLES,
            plaintext_len: 64,
            salt_len: 16,
            key_len: 64,
        }
    }
}
