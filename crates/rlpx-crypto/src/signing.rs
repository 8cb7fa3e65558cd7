//! Recoverable ECDSA over secp256k1
//!
//! Signatures are deterministic (RFC 6979) and low-s normalized. The recovery
//! id is adjusted together with `s`, so recovering from `(r, s, recid)` always
//! yields the signer's key.
//!
//! Wire form: `[32 bytes: r][32 bytes: s][1 byte: recid in 0..=3]`

use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

use crate::error::{CryptoError, CryptoResult};
use crate::keys::{PrivateKey, PublicKey};
use crate::{DIGEST_SIZE, SIGNATURE_SIZE};

const RS_SIZE: usize = 64;

/// An ECDSA signature plus the id selecting which candidate key recovers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    rs: [u8; RS_SIZE],
    recovery_id: u8,
}

impl RecoverableSignature {
    /// Parse `r || s || recid`. The recovery id must be in `0..=3`.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(CryptoError::wrong_length(
                "signature",
                SIGNATURE_SIZE,
                bytes.len(),
            ));
        }
        let recovery_id = bytes[RS_SIZE];
        if recovery_id > 3 {
            return Err(CryptoError::Decoding {
                field: "signature",
                reason: format!("recovery id {recovery_id} out of range 0..=3"),
            });
        }
        let mut rs = [0u8; RS_SIZE];
        rs.copy_from_slice(&bytes[..RS_SIZE]);
        Ok(Self { rs, recovery_id })
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..RS_SIZE].copy_from_slice(&self.rs);
        out[RS_SIZE] = self.recovery_id;
        out
    }

    pub fn r(&self) -> &[u8] {
        &self.rs[..32]
    }

    pub fn s(&self) -> &[u8] {
        &self.rs[32..]
    }

    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// Recover the signer's public key for the prehashed `digest`.
    pub fn recover(&self, digest: &[u8; DIGEST_SIZE]) -> CryptoResult<PublicKey> {
        let signature = Signature::from_slice(&self.rs)
            .map_err(|e| CryptoError::Recovery(format!("malformed r || s: {e}")))?;
        let recovery_id = RecoveryId::from_byte(self.recovery_id).ok_or_else(|| {
            CryptoError::Recovery(format!("recovery id {} out of range", self.recovery_id))
        })?;

        let verifying_key = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
            .map_err(|e| CryptoError::Recovery(e.to_string()))?;
        Ok(PublicKey::from_k256(k256::PublicKey::from(&verifying_key)))
    }
}

/// Sign a 32-byte digest the caller already hashed.
///
/// Deterministic: no entropy is drawn. A failure is returned as-is and must
/// not be retried with altered inputs.
pub fn sign_recoverable(
    private: &PrivateKey,
    digest: &[u8; DIGEST_SIZE],
) -> CryptoResult<RecoverableSignature> {
    let signing_key = SigningKey::from(private.as_k256());
    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(digest)
        .map_err(|e| CryptoError::Signing(e.to_string()))?;

    let mut rs = [0u8; RS_SIZE];
    rs.copy_from_slice(&signature.to_bytes());

    tracing::debug!(recovery_id = recovery_id.to_byte(), "ecdsa sign");

    Ok(RecoverableSignature {
        rs,
        recovery_id: recovery_id.to_byte(),
    })
}
