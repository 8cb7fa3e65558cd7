//! secp256k1 key material: validated private scalars and public points

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::FieldBytes;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{CryptoError, CryptoResult};
use crate::rng;
use crate::{
    COMPRESSED_PUBLIC_KEY_SIZE, NODE_ID_SIZE, PRIVATE_KEY_SIZE, UNCOMPRESSED_PUBLIC_KEY_SIZE,
};

/// Scalar draws rejected (zero or >= n) before giving up on the source.
/// The chance of a single rejection is about 2^-128.
const MAX_SCALAR_DRAWS: usize = 8;

const TAG_COMPRESSED_EVEN: u8 = 0x02;
const TAG_COMPRESSED_ODD: u8 = 0x03;
const TAG_UNCOMPRESSED: u8 = 0x04;

/// A secp256k1 private key in `[1, n)`. Zeroized on drop.
#[derive(Clone)]
pub struct PrivateKey {
    inner: k256::SecretKey,
}

impl PrivateKey {
    /// Parse a big-endian 32-byte scalar, rejecting zero and values `>= n`.
    pub fn from_bytes(bytes: &[u8; PRIVATE_KEY_SIZE]) -> CryptoResult<Self> {
        k256::SecretKey::from_bytes(FieldBytes::from_slice(bytes))
            .map(|inner| Self { inner })
            .map_err(|_| CryptoError::InvalidScalar("zero or not below the curve order".into()))
    }

    /// Like [`PrivateKey::from_bytes`], checking the slice length first.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: &[u8; PRIVATE_KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::wrong_length("privateKey", PRIVATE_KEY_SIZE, bytes.len()))?;
        Self::from_bytes(bytes)
    }

    /// Draw a fresh private key from the injected source.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> CryptoResult<Self> {
        for _ in 0..MAX_SCALAR_DRAWS {
            let candidate = Zeroizing::new(rng::random_array::<R, PRIVATE_KEY_SIZE>(rng)?);
            if let Ok(key) = Self::from_bytes(&candidate) {
                return Ok(key);
            }
        }
        Err(CryptoError::EntropySourceUnavailable(format!(
            "no valid scalar after {MAX_SCALAR_DRAWS} draws"
        )))
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: self.inner.public_key(),
        }
    }

    /// Big-endian scalar bytes, wiped when the wrapper is dropped.
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        let mut out = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    pub(crate) fn as_k256(&self) -> &k256::SecretKey {
        &self.inner
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// A secp256k1 public key, guaranteed to be a valid non-identity curve point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: k256::PublicKey,
}

impl PublicKey {
    /// Parse a SEC1 encoding: 33-byte compressed (`0x02`/`0x03`) or
    /// 65-byte uncompressed (`0x04`).
    pub fn from_sec1_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let tag_ok = match (bytes.len(), bytes.first()) {
            (COMPRESSED_PUBLIC_KEY_SIZE, Some(&TAG_COMPRESSED_EVEN | &TAG_COMPRESSED_ODD)) => true,
            (UNCOMPRESSED_PUBLIC_KEY_SIZE, Some(&TAG_UNCOMPRESSED)) => true,
            (COMPRESSED_PUBLIC_KEY_SIZE | UNCOMPRESSED_PUBLIC_KEY_SIZE, _) => false,
            (len, _) => {
                return Err(CryptoError::InvalidPoint(format!(
                    "expected {COMPRESSED_PUBLIC_KEY_SIZE} or {UNCOMPRESSED_PUBLIC_KEY_SIZE} bytes, got {len}"
                )))
            }
        };
        if !tag_ok {
            return Err(CryptoError::InvalidPoint(format!(
                "unexpected tag byte 0x{:02x} for a {}-byte key",
                bytes[0],
                bytes.len()
            )));
        }

        k256::PublicKey::from_sec1_bytes(bytes)
            .map(|inner| Self { inner })
            .map_err(|_| CryptoError::InvalidPoint("not on the secp256k1 curve".into()))
    }

    /// Parse an RLPx node id: the uncompressed key without its `0x04` tag.
    pub fn from_node_id(id: &[u8; NODE_ID_SIZE]) -> CryptoResult<Self> {
        let mut sec1 = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
        sec1[0] = TAG_UNCOMPRESSED;
        sec1[1..].copy_from_slice(id);
        Self::from_sec1_bytes(&sec1)
    }

    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_SIZE] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
        out.copy_from_slice(point.as_bytes());
        out
    }

    pub fn to_compressed(&self) -> [u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
        out.copy_from_slice(point.as_bytes());
        out
    }

    pub fn node_id(&self) -> [u8; NODE_ID_SIZE] {
        let mut out = [0u8; NODE_ID_SIZE];
        out.copy_from_slice(&self.to_uncompressed()[1..]);
        out
    }

    pub(crate) fn as_k256(&self) -> &k256::PublicKey {
        &self.inner
    }

    pub(crate) fn from_k256(inner: k256::PublicKey) -> Self {
        Self { inner }
    }
}
