use thiserror::Error;

pub type CryptoResult<T> = Result<T, CryptoError>;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("decoding error: {field}: {reason}")]
    Decoding { field: &'static str, reason: String },

    #[error("invalid public key point: {0}")]
    InvalidPoint(String),

    #[error("invalid private key scalar: {0}")]
    InvalidScalar(String),

    #[error("secure entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    #[error("requested KDF output of {requested} bytes exceeds limit of {limit}")]
    LengthTooLarge { requested: usize, limit: usize },

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("public key recovery failed: {0}")]
    Recovery(String),
}

impl CryptoError {
    /// Length check helper for fixed-size inputs.
    pub(crate) fn wrong_length(field: &'static str, expected: usize, actual: usize) -> Self {
        CryptoError::Decoding {
            field,
            reason: format!("expected {expected} bytes, got {actual}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = CryptoError::wrong_length("privateKey", 32, 31);
        assert_eq!(
            err.to_string(),
            "decoding error: privateKey: expected 32 bytes, got 31"
        );

        let err = CryptoError::LengthTooLarge {
            requested: 10,
            limit: 5,
        };
        assert_eq!(
            err.to_string(),
            "requested KDF output of 10 bytes exceeds limit of 5"
        );
    }
}
