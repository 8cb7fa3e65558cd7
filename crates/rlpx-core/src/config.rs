use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RlpxError, RlpxResult};

/// Top-level tool configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RlpxConfig {
    pub log: LogConfig,
    pub request: RequestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level or EnvFilter directive (default: warn)
    pub level: String,
    /// Log format: "json" or "text"
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Largest JSON request accepted, in bytes (default: 1 MiB)
    pub max_request_bytes: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "text".into(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_request_bytes: 1024 * 1024,
        }
    }
}

impl RlpxConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> RlpxResult<Self> {
        if !path.exists() {
            tracing::warn!("config file not found: {}  (using defaults)", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| RlpxError::Config(format!("parsing {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[log]
level = "rlpx_core=debug"
format = "json"

[request]
max_request_bytes = 4096
"#;
        let config: RlpxConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.log.level, "rlpx_core=debug");
        assert_eq!(config.log.format, "json");
        assert_eq!(config.request.max_request_bytes, 4096);
    }

    #[test]
    fn test_parse_defaults() {
        let config: RlpxConfig = toml::from_str("").unwrap();

        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, "text");
        assert_eq!(config.request.max_request_bytes, 1024 * 1024);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
[log]
format = "json"
"#;
        let config: RlpxConfig = toml::from_str(toml_str).unwrap();

        // Overridden
        assert_eq!(config.log.format, "json");
        // Defaults
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.request.max_request_bytes, 1024 * 1024);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = RlpxConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: RlpxConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.log.level, parsed.log.level);
        assert_eq!(
            config.request.max_request_bytes,
            parsed.request.max_request_bytes
        );
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RlpxConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[request]\nmax_request_bytes = 10\n").unwrap();

        let config = RlpxConfig::load(&path).unwrap();
        assert_eq!(config.request.max_request_bytes, 10);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[request]\nmax_request_bytes = \"lots\"\n").unwrap();

        let result = RlpxConfig::load(&path);
        assert!(matches!(result, Err(RlpxError::Config(_))));
    }
}
