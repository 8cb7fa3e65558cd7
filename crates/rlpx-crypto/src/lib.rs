//! rlpx-crypto: ECIES primitives for the RLPx (devp2p) auth handshake
//!
//! Curve: secp256k1. Everything here is a stateless function of its inputs
//! plus, where noted, an injected randomness source.
//!
//! Composition:
//! ```text
//! ECDH-X(Q, d)            = x(d·Q) via compress-then-strip        (32 bytes)
//! Concat-KDF(Z, L)        = SHA256(1_be32 || Z) || SHA256(2_be32 || Z) || ...   truncated to L
//! encrypt(Q_r, M, D)      = Q_e(65) || IV(16) || AES-128-CTR(K[0..16], IV, M) || HMAC-SHA256(SHA256(K[16..32]), IV || C || D)
//!                           where K = Concat-KDF(ECDH-X(Q_r, d_e), 32)
//! sign_recoverable(h, d)  = r(32) || s(32) || recid(1)                  (RFC6979, low-s)
//! ```

pub mod ecdh;
pub mod ecies;
pub mod error;
pub mod kdf;
pub mod keys;
pub mod rng;
pub mod signing;

pub use ecdh::{ecdh_x, SharedSecret};
pub use ecies::{derive_ack_key, encrypt};
pub use error::{CryptoError, CryptoResult};
pub use kdf::{concat_kdf, MAX_KDF_OUTPUT_LEN};
pub use keys::{PrivateKey, PublicKey};
pub use signing::{sign_recoverable, RecoverableSignature};

/// Size of a secp256k1 private key (scalar) in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of a SEC1 compressed public key
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Size of a SEC1 uncompressed public key
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// Size of an RLPx node id (uncompressed public key without the 0x04 tag)
pub const NODE_ID_SIZE: usize = 64;

/// Size of the ECDH-X shared secret
pub const SHARED_SECRET_SIZE: usize = 32;

/// AES-128-CTR initialization vector size
pub const IV_SIZE: usize = 16;

/// HMAC-SHA256 tag size
pub const TAG_SIZE: usize = 32;

/// Size of a prehashed message digest accepted by the signer
pub const DIGEST_SIZE: usize = 32;

/// Recoverable signature size: r (32) || s (32) || recid (1)
pub const SIGNATURE_SIZE: usize = 65;

/// Bytes an encrypted envelope adds on top of the plaintext
pub const ECIES_OVERHEAD: usize = UNCOMPRESSED_PUBLIC_KEY_SIZE + IV_SIZE + TAG_SIZE;
