//! Timed hashing strategies
//!
//! A strategy turns a cost value into one elapsed-time sample. The real
//! strategies wrap the hashing primitives; tests substitute stubs.

pub mod bcrypt;
pub mod pbkdf2;

use crate::algorithm::Algorithm;
use crate::config::BenchConfig;
use crate::error::Result;
use rand::rngs::ThreadRng;
use rand::RngCore;
use std::time::Instant;
use tracing::debug;

/// One timed invocation at a given cost, in whole milliseconds
pub trait Strategy {
    fn sample(&mut self, cost: u32) -> Result<u64>;
}

/// Strategy backed by a real hashing primitive
pub struct HashStrategy<R = ThreadRng> {
    algorithm: Algorithm,
    config: BenchConfig,
    rng: R,
}

impl HashStrategy {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_config(algorithm, BenchConfig::default())
    }

    pub fn with_config(algorithm: Algorithm, config: BenchConfig) -> Self {
        Self::with_rng(algorithm, config, rand::thread_rng())
    }
}

impl<R: RngCore> HashStrategy<R> {
    pub fn with_rng(algorithm: Algorithm, config: BenchConfig, rng: R) -> Self {
        Self { algorithm, config, rng }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        self.rng.fill_bytes(&mut buf);
        buf
    }
}

impl<R: RngCore> Strategy for HashStrategy<R> {
    fn sample(&mut self, cost: u32) -> Result<u64> {
        let plaintext = self.random_bytes(self.config.plaintext_len);

        let elapsed = match self.algorithm {
            Algorithm::Bcrypt => {
                let start = Instant::now();
                self::bcrypt::hash(&plaintext, cost)?;
                start.elapsed()
            }
            Algorithm::Pbkdf2Sha256 | Algorithm::Pbkdf2Sha512 => {
                let prf = if self.algorithm == Algorithm::Pbkdf2Sha256 {
                    self::pbkdf2::Prf::Sha256
                } else {
                    self::pbkdf2::Prf::Sha512
                };
                let salt = self.random_bytes(self.config.salt_len);
                let start = Instant::now();
                self::pbkdf2::derive(prf, &plaintext, &salt, cost, self.config.key_len);
                start.elapsed()
            }
        };

        // Sub-millisecond precision is dropped
        let elapsed_ms = elapsed.as_millis() as u64;
        debug!(algorithm = %self.algorithm, cost, elapsed_ms, "sample");
        Ok(elapsed_ms)
    }
}

/// Resolve a command line algorithm name to its strategy
pub fn resolve(name: &str) -> Result<HashStrategy> {
    let algorithm: Algorithm = name.parse()?;
    Ok(HashStrategy::new(algorithm))
}
