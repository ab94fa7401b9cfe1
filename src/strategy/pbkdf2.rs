//! PBKDF2-HMAC adapters

use sha2::{Sha256, Sha512};
use std::hint::black_box;

/// Digest used as the HMAC PRF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prf {
    Sha256,
    Sha512,
}

/// Derive a `key_len`-byte key with `iterations` rounds; the key is dropped.
pub fn derive(prf: Prf, plaintext: &[u8], salt: &[u8], iterations: u32, key_len: usize) {
    let mut key = vec![0u8; key_len];
    match prf {
        Prf::Sha256 => pbkdf2::pbkdf2_hmac::<Sha256>(plaintext, salt, iterations, &mut key),
        Prf::Sha512 => pbkdf2::pbkdf2_hmac::<Sha512>(plaintext, salt, iterations, &mut key),
    }
    black_box(key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_both_prfs() {
        derive(Prf::Sha256, &[1; 64], &[2; 16], 100, 64);
        derive(Prf::Sha512, &[1; 64], &[2; 16], 100, 64);
    }

    #[test]
    fn test_derive_zero_iterations() {
        derive(Prf::Sha256, b"password", b"salt", 0, 64);
        derive(Prf::Sha512, b"password", b"salt", 0, 64);
    }
}
