use rlpx_crypto::CryptoError;
use thiserror::Error;

pub type RlpxResult<T> = Result<T, RlpxError>;

#[derive(Debug, Error)]
pub enum RlpxError {
    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("unrecognized operation: {0}")]
    UnrecognizedOperation(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RlpxError {
    /// Stable name of the failure kind, for diagnostics and exit reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            RlpxError::Decoding(_) => "DecodingError",
            RlpxError::UnrecognizedOperation(_) => "UnrecognizedOperation",
            RlpxError::Crypto(e) => match e {
                CryptoError::Decoding { .. } => "DecodingError",
                CryptoError::InvalidPoint(_) => "InvalidPoint",
                CryptoError::InvalidScalar(_) => "InvalidScalar",
                CryptoError::EntropySourceUnavailable(_) => "EntropySourceUnavailable",
                CryptoError::LengthTooLarge { .. } => "LengthTooLarge",
                CryptoError::Signing(_) => "SigningError",
                CryptoError::Recovery(_) => "RecoveryError",
            },
            RlpxError::Config(_) => "ConfigError",
            RlpxError::Io(_) => "IoError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(RlpxError::Decoding("x".into()).kind(), "DecodingError");
        assert_eq!(
            RlpxError::from(CryptoError::InvalidPoint("x".into())).kind(),
            "InvalidPoint"
        );
        assert_eq!(
            RlpxError::from(CryptoError::LengthTooLarge {
                requested: 2,
                limit: 1
            })
            .kind(),
            "LengthTooLarge"
        );
    }

    #[test]
    fn test_config_and_io_kinds() {
        assert_eq!(RlpxError::Config("bad toml".into()).kind(), "ConfigError");

        fn read_missing() -> RlpxResult<String> {
            Ok(std::fs::read_to_string("/nonexistent/rlpx/config.toml")?)
        }
        let err = read_missing().unwrap_err();
        assert_eq!(err.kind(), "IoError");
        assert!(err.to_string().starts_with("I/O error: "));
    }

    #[test]
    fn test_crypto_error_is_transparent() {
        let err = RlpxError::from(CryptoError::InvalidScalar("zero".into()));
        assert_eq!(err.to_string(), "invalid private key scalar: zero");
    }
}
