//! ECIES encrypt-and-tag for RLPx handshake bodies
//!
//! Envelope format (binary):
//! ```text
//! [65 bytes: ephemeral public key, uncompressed][16 bytes: IV][N bytes: AES-128-CTR ciphertext][32 bytes: HMAC-SHA256 tag]
//! K      = Concat-KDF(ECDH-X(remote, ephemeral), 32)
//! tag    = HMAC-SHA256(SHA256(K[16..32]), IV || ciphertext || shared_mac_data)
//! ```
//!
//! `shared_mac_data` is appended to the MAC input without a length prefix.
//! RLPx peers put the 2-byte size prefix of the handshake message there, and
//! interoperating with them requires this exact layout, so the resulting
//! ambiguity between the ciphertext tail and the MAC data is kept as is.

use aes::cipher::generic_array::GenericArray;
use ctr::cipher::{KeyIvInit, StreamCipher};
use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::ecdh::ecdh_x;
use crate::error::{CryptoError, CryptoResult};
use crate::kdf::concat_kdf;
use crate::keys::{PrivateKey, PublicKey};
use crate::rng;
use crate::{ECIES_OVERHEAD, IV_SIZE, UNCOMPRESSED_PUBLIC_KEY_SIZE};

type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;
type HmacSha256 = Hmac<Sha256>;

/// Key material drawn from the KDF: 16-byte AES key || 16-byte MAC seed
const KDF_OUTPUT_LEN: usize = 32;
const ENC_KEY_LEN: usize = 16;

/// SHA-256 block size, the native HMAC-SHA256 key length
const HMAC_BLOCK_LEN: usize = 64;

/// Size prefix carried in front of an EIP-8 handshake message
const SIZE_PREFIX_LEN: usize = 2;

/// Encrypt `plaintext` to `remote` and authenticate it together with
/// `shared_mac_data` (empty when `None`).
///
/// Draws 32 bytes for the ephemeral key and then 16 bytes for the IV from
/// `rng`. Returns `ephemeral_pub || iv || ciphertext || tag`, always
/// `plaintext.len() + ECIES_OVERHEAD` bytes long.
pub fn encrypt<R: RngCore + CryptoRng>(
    rng: &mut R,
    remote: &PublicKey,
    plaintext: &[u8],
    shared_mac_data: Option<&[u8]>,
) -> CryptoResult<Vec<u8>> {
    let ephemeral = PrivateKey::random(rng)?;
    let iv: [u8; IV_SIZE] = rng::random_array(rng)?;
    let mac_data = shared_mac_data.unwrap_or_default();

    tracing::debug!(
        plaintext_len = plaintext.len(),
        mac_data_len = mac_data.len(),
        "ecies encrypt"
    );

    seal(&ephemeral, &iv, remote, plaintext, mac_data)
}

fn seal(
    ephemeral: &PrivateKey,
    iv: &[u8; IV_SIZE],
    remote: &PublicKey,
    plaintext: &[u8],
    mac_data: &[u8],
) -> CryptoResult<Vec<u8>> {
    let shared = ecdh_x(remote, ephemeral);
    let key = Zeroizing::new(concat_kdf(shared.as_bytes(), KDF_OUTPUT_LEN)?);
    let (enc_key, mac_seed) = key.split_at(ENC_KEY_LEN);

    let mut out = Vec::with_capacity(plaintext.len() + ECIES_OVERHEAD);
    out.extend_from_slice(&ephemeral.public_key().to_uncompressed());
    out.extend_from_slice(iv);
    out.extend_from_slice(plaintext);

    let mut cipher = Aes128Ctr::new(
        GenericArray::from_slice(enc_key),
        GenericArray::from_slice(iv),
    );
    cipher.apply_keystream(&mut out[UNCOMPRESSED_PUBLIC_KEY_SIZE + IV_SIZE..]);

    let mac_key = mac_key_block(mac_seed);
    let mut mac = <HmacSha256 as Mac>::new(GenericArray::from_slice(&mac_key[..]));
    mac.update(&out[UNCOMPRESSED_PUBLIC_KEY_SIZE..]);
    mac.update(mac_data);
    out.extend_from_slice(&mac.finalize().into_bytes());

    Ok(out)
}

/// HMAC key `SHA256(mac_seed)` zero-padded to the SHA-256 block size.
///
/// HMAC pads shorter keys the same way, so this keys the MAC exactly as the
/// 32-byte digest would.
fn mac_key_block(mac_seed: &[u8]) -> Zeroizing<[u8; HMAC_BLOCK_LEN]> {
    let mut block = Zeroizing::new([0u8; HMAC_BLOCK_LEN]);
    block[..32].copy_from_slice(&Sha256::digest(mac_seed));
    block
}

/// Recover the AES key a peer used for an encrypted handshake message.
///
/// `msg` is `size_prefix(2) || ephemeral_pub(65) || ...`. The returned key is
/// the first 16 bytes of `Concat-KDF(ECDH-X(ephemeral_pub, private), 32)`.
pub fn derive_ack_key(msg: &[u8], private: &PrivateKey) -> CryptoResult<[u8; ENC_KEY_LEN]> {
    let key_end = SIZE_PREFIX_LEN + UNCOMPRESSED_PUBLIC_KEY_SIZE;
    if msg.len() < key_end {
        return Err(CryptoError::Decoding {
            field: "msg",
            reason: format!("expected at least {key_end} bytes, got {}", msg.len()),
        });
    }

    let remote = PublicKey::from_sec1_bytes(&msg[SIZE_PREFIX_LEN..key_end])?;
    let shared = ecdh_x(&remote, private);
    let key = Zeroizing::new(concat_kdf(shared.as_bytes(), KDF_OUTPUT_LEN)?);

    let mut out = [0u8; ENC_KEY_LEN];
    out.copy_from_slice(&key[..ENC_KEY_LEN]);
    Ok(out)
}
