//! bcrypt adapter

use crate::error::Result;
use std::hint::black_box;

/// Hash `plaintext` at bcrypt work factor `cost` (2^cost rounds).
/// The resulting hash string is dropped.
pub fn hash(plaintext: &[u8], cost: u32) -> Result<()> {
    let hashed = bcrypt::hash(plaintext, cost)?;
    black_box(hashed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;

    #[test]
    fn test_hash_min_cost() {
        assert!(hash(&[0x42; 64], 4).is_ok());
    }

    #[test]
    fn test_hash_rejects_cost_out_of_range() {
        assert!(matches!(hash(b"hunter2", 3), Err(BenchError::Bcrypt(_))));
        assert!(matches!(hash(b"hunter2", 32), Err(BenchError::Bcrypt(_))));
    }
}
