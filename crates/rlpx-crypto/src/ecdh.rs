//! ECDH-X: the x-coordinate shared secret used by the RLPx handshake
//!
//! The product point `d·Q` is SEC1-compressed and the tag byte stripped,
//! leaving the 32-byte big-endian x-coordinate. Both sides of a handshake
//! derive the same value.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::AffinePoint;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::keys::{PrivateKey, PublicKey};
use crate::{COMPRESSED_PUBLIC_KEY_SIZE, SHARED_SECRET_SIZE};

/// 32-byte ECDH-X output. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: [u8; SHARED_SECRET_SIZE],
}

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Compute `x(d·Q)` through a compressed-point round trip.
///
/// Both keys are validated at construction, so this cannot fail: a
/// non-zero scalar times a non-identity point of prime order is never the
/// identity.
pub fn ecdh_x(public: &PublicKey, private: &PrivateKey) -> SharedSecret {
    let scalar = private.as_k256().to_nonzero_scalar();
    let product = AffinePoint::from(public.as_k256().to_projective() * *scalar);

    let compressed = product.to_encoded_point(true);
    let sec1 = compressed.as_bytes();
    debug_assert_eq!(sec1.len(), COMPRESSED_PUBLIC_KEY_SIZE);

    let mut bytes = [0u8; SHARED_SECRET_SIZE];
    bytes.copy_from_slice(&sec1[1..]);
    SharedSecret { bytes }
}
