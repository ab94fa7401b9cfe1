//! Supported hashing algorithms

use crate::error::BenchError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Closed set of benchmarked algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    #[serde(rename = "bcrypt")]
    Bcrypt,
    #[serde(rename = "pbkdf2-256")]
    Pbkdf2Sha256,
    #[serde(rename = "pbkdf2-512")]
    Pbkdf2Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Bcrypt,
        Algorithm::Pbkdf2Sha256,
        Algorithm::Pbkdf2Sha512,
    ];

    /// Command line name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bcrypt => "bcrypt",
            Algorithm::Pbkdf2Sha256 => "pbkdf2-256",
            Algorithm::Pbkdf2Sha512 => "pbkdf2-512",
        }
    }

    /// Inclusive range of cost values the primitive accepts.
    /// bcrypt's cost is a log2 round count, PBKDF2's an iteration count.
    pub fn cost_range(self) -> (u32, u32) {
        match self {
            Algorithm::Bcrypt => (4, 31),
            Algorithm::Pbkdf2Sha256 | Algorithm::Pbkdf2Sha512 => (0, u32::MAX),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = BenchError;

    /// Exact, case-sensitive match on the command line name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bcrypt" => Ok(Algorithm::Bcrypt),
            "pbkdf2-256" => Ok(Algorithm::Pbkdf2Sha256),
            "pbkdf2-512" => Ok(Algorithm::Pbkdf2Sha512),
            other => Err(BenchError::UnknownAlgorithm(other.to_string())),
        }
    }
}
