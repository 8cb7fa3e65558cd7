//! Concat-KDF (NIST SP 800-56A single-step KDF) over SHA-256
//!
//! ```text
//! K = SHA256(00000001 || Z) || SHA256(00000002 || Z) || ...   truncated to L bytes
//! ```
//! The counter is a 4-byte big-endian integer starting at 1.

use sha2::{Digest, Sha256};

use crate::error::{CryptoError, CryptoResult};

/// Upper bound on a single derivation (1 MiB).
pub const MAX_KDF_OUTPUT_LEN: usize = 1 << 20;

const DIGEST_LEN: usize = 32;

/// Derive `len` bytes of key material from `z`.
///
/// `len == 0` yields an empty vector. A final partial block is truncated.
pub fn concat_kdf(z: &[u8], len: usize) -> CryptoResult<Vec<u8>> {
    if len > MAX_KDF_OUTPUT_LEN {
        return Err(CryptoError::LengthTooLarge {
            requested: len,
            limit: MAX_KDF_OUTPUT_LEN,
        });
    }

    let blocks = len.div_ceil(DIGEST_LEN);
    let mut out = Vec::with_capacity(blocks * DIGEST_LEN);
    for counter in 1..=blocks as u32 {
        let mut hasher = Sha256::new();
        hasher.update(counter.to_be_bytes());
        hasher.update(z);
        out.extend_from_slice(&hasher.finalize());
    }
    out.truncate(len);
    Ok(out)
}
