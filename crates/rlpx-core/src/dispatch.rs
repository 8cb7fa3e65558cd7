//! Request dispatcher: JSON in, lowercase hex out
//!
//! Each call is independent. Nothing is cached between requests and a failed
//! request produces no output.

use rand::{CryptoRng, RngCore};
use rlpx_crypto::{derive_ack_key, ecdh_x, encrypt, sign_recoverable};
use tracing::debug;

use crate::error::RlpxResult;
use crate::request::{Operation, Request};

/// Run a validated operation and return its raw output bytes.
pub fn execute<R: RngCore + CryptoRng>(rng: &mut R, operation: &Operation) -> RlpxResult<Vec<u8>> {
    let output = match operation {
        Operation::Ecdhx {
            private_key,
            public_key,
        } => ecdh_x(public_key, private_key).as_bytes().to_vec(),
        Operation::EcdsaSign {
            private_key,
            digest,
        } => sign_recoverable(private_key, digest)?.to_bytes().to_vec(),
        Operation::TaggedKdf {
            remote_public_key,
            plaintext,
            mac_data,
        } => encrypt(rng, remote_public_key, plaintext, Some(mac_data.as_slice()))?,
        Operation::ConcatKdf { msg, private_key } => derive_ack_key(msg, private_key)?.to_vec(),
    };
    Ok(output)
}

/// Parse, validate and run one JSON request, returning the hex-encoded result.
pub fn handle<R: RngCore + CryptoRng>(rng: &mut R, json: &str) -> RlpxResult<String> {
    let request = Request::parse(json)?;
    let name = request.name();
    debug!(operation = name, "request parsed");

    let operation = Operation::try_from(request)?;
    let output = execute(rng, &operation)?;

    debug!(operation = name, output_len = output.len(), "request complete");
    Ok(hex::encode(output))
}
