//! Request model: the JSON wire form and its typed, validated counterpart
//!
//! Wire form (one JSON object per invocation, hex fields are lowercase):
//! ```text
//! {"type":"Ecdhx",     "privateKey":..., "publicKey":...}
//! {"type":"EcdsaSign", "ephemeralPrivateKey":..., "msg":...}
//! {"type":"TaggedKdf", "remotePublicKey":..., "msg":..., "macData":...}
//! {"type":"ConcatKdf", "msg":..., "privateKey":...}
//! ```

use rlpx_crypto::{PrivateKey, PublicKey, DIGEST_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::{RlpxError, RlpxResult};

/// A request as it appears on the wire, hex already decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Request {
    /// Shared secret of a local private key and a remote public key
    Ecdhx {
        #[serde(with = "hex")]
        private_key: Vec<u8>,
        #[serde(with = "hex")]
        public_key: Vec<u8>,
    },
    /// Recoverable signature over a 32-byte digest
    EcdsaSign {
        #[serde(with = "hex")]
        ephemeral_private_key: Vec<u8>,
        #[serde(with = "hex")]
        msg: Vec<u8>,
    },
    /// ECIES envelope of `msg` for the remote key
    TaggedKdf {
        #[serde(with = "hex")]
        remote_public_key: Vec<u8>,
        #[serde(with = "hex")]
        msg: Vec<u8>,
        #[serde(default, with = "hex")]
        mac_data: Vec<u8>,
    },
    /// AES key of a received handshake message
    ConcatKdf {
        #[serde(with = "hex")]
        msg: Vec<u8>,
        #[serde(with = "hex")]
        private_key: Vec<u8>,
    },
}

impl Request {
    pub const OPERATIONS: [&'static str; 4] = ["Ecdhx", "EcdsaSign", "TaggedKdf", "ConcatKdf"];

    /// Parse one JSON request.
    ///
    /// The `type` tag is checked first so that an unknown operation is told
    /// apart from a malformed field.
    pub fn parse(json: &str) -> RlpxResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| RlpxError::Decoding(format!("malformed JSON request: {e}")))?;

        let kind = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or_else(|| RlpxError::UnrecognizedOperation("missing \"type\" tag".into()))?
            .to_owned();
        if !Self::OPERATIONS.contains(&kind.as_str()) {
            return Err(RlpxError::UnrecognizedOperation(kind));
        }

        serde_json::from_value(value)
            .map_err(|e| RlpxError::Decoding(format!("invalid {kind} request: {e}")))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Request::Ecdhx { .. } => "Ecdhx",
            Request::EcdsaSign { .. } => "EcdsaSign",
            Request::TaggedKdf { .. } => "TaggedKdf",
            Request::ConcatKdf { .. } => "ConcatKdf",
        }
    }
}

/// A request whose key material has been validated.
#[derive(Debug)]
pub enum Operation {
    Ecdhx {
        private_key: PrivateKey,
        public_key: PublicKey,
    },
    EcdsaSign {
        private_key: PrivateKey,
        digest: [u8; DIGEST_SIZE],
    },
    TaggedKdf {
        remote_public_key: PublicKey,
        plaintext: Vec<u8>,
        mac_data: Vec<u8>,
    },
    ConcatKdf {
        msg: Vec<u8>,
        private_key: PrivateKey,
    },
}

impl TryFrom<Request> for Operation {
    type Error = RlpxError;

    fn try_from(request: Request) -> RlpxResult<Self> {
        Ok(match request {
            Request::Ecdhx {
                private_key,
                public_key,
            } => Operation::Ecdhx {
                private_key: PrivateKey::from_slice(&private_key)?,
                public_key: PublicKey::from_sec1_bytes(&public_key)?,
            },
            Request::EcdsaSign {
                ephemeral_private_key,
                msg,
            } => {
                let digest: [u8; DIGEST_SIZE] = msg.as_slice().try_into().map_err(|_| {
                    RlpxError::Decoding(format!(
                        "msg: expected {DIGEST_SIZE}-byte digest, got {} bytes",
                        msg.len()
                    ))
                })?;
                Operation::EcdsaSign {
                    private_key: PrivateKey::from_slice(&ephemeral_private_key)?,
                    digest,
                }
            }
            Request::TaggedKdf {
                remote_public_key,
                msg,
                mac_data,
            } => Operation::TaggedKdf {
                remote_public_key: PublicKey::from_sec1_bytes(&remote_public_key)?,
                plaintext: msg,
                mac_data,
            },
            Request::ConcatKdf { msg, private_key } => Operation::ConcatKdf {
                msg,
                private_key: PrivateKey::from_slice(&private_key)?,
            },
        })
    }
}
