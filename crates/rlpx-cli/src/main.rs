//! rlpx-ecies: RLPx handshake crypto as a one-shot command
//!
//! Usage:
//!   rlpx-ecies [--config config.toml] '<json request>'
//!   echo '<json request>' | rlpx-ecies
//!
//! Operations (the request's "type" field):
//!   Ecdhx       - privateKey, publicKey                 → 32-byte shared secret
//!   EcdsaSign   - ephemeralPrivateKey, msg (digest)     → 65-byte signature || recid
//!   TaggedKdf   - remotePublicKey, msg, macData         → ECIES envelope
//!   ConcatKdf   - msg (size prefix + envelope), privateKey → 16-byte AES key
//!
//! The result is printed as lowercase hex on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::OsRng;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, error};

use rlpx_core::config::RlpxConfig;

#[derive(Parser, Debug)]
#[command(
    name = "rlpx-ecies",
    version,
    about = "RLPx ECIES handshake primitives",
    long_about = "rlpx-ecies: run one ECDH / Concat-KDF / ECIES / recoverable-ECDSA request given as JSON"
)]
struct Cli {
    /// Path to config.toml
    #[arg(long, short = 'c', env = "RLPX_CONFIG", default_value = "/etc/rlpx/config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, env = "RLPX_LOG")]
    log: Option<String>,

    /// Log format; overrides the config file
    #[arg(long, env = "RLPX_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// JSON request (read from stdin when omitted)
    request: Option<String>,
}

#[derive(Clone, Debug, ValueEnum)]
enum LogFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RlpxConfig::load(&cli.config)
        .with_context(|| format!("loading config: {}", cli.config.display()))?;

    let level = cli.log.as_deref().unwrap_or(&config.log.level);
    let format = cli.log_format.clone().unwrap_or(match config.log.format.as_str() {
        "json" => LogFormat::Json,
        _ => LogFormat::Text,
    });
    init_logging(level, &format);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "rlpx-ecies starting"
    );

    let json = read_request(cli.request, config.request.max_request_bytes)?;

    match rlpx_core::handle(&mut OsRng, &json) {
        Ok(hex) => {
            println!("{hex}");
            Ok(())
        }
        Err(e) => {
            error!(kind = e.kind(), "request failed: {e}");
            Err(anyhow::Error::new(e).context("request failed"))
        }
    }
}

/// Take the request from the argument or stdin, bounded by `limit` bytes.
fn read_request(arg: Option<String>, limit: usize) -> Result<String> {
    let json = match arg {
        Some(json) => json,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .take(limit as u64 + 1)
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };

    if json.len() > limit {
        anyhow::bail!(
            "decoding error: request exceeds {limit} bytes (max_request_bytes)"
        );
    }
    Ok(json)
}

fn init_logging(level: &str, format: &LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the result
    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
