//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LEADERBOARD_INTERVAL_MS: u64 = 5_000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind (loopback unless overridden)
    pub bind_addr: IpAddr,
    /// Server port
    pub port: u16,
    /// Directory holding one JSON snapshot file per store key
    pub data_dir: PathBuf,
    /// Period of the leaderboard re-ranking timer
    pub leaderboard_interval: Duration,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
}

impl Config {
    /// Config for tests: ephemeral port, relative data dir, default timer.
    pub fn test_default() -> Self {
        Self {
            bind_addr: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            data_dir: PathBuf::from("test-data"),
            leaderboard_interval: Duration::from_millis(DEFAULT_LEADERBOARD_INTERVAL_MS),
            frontend_url: "http://localhost:3000".to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("BIND_ADDR", raw))?,
            Err(_) => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let interval_ms = match env::var("LEADERBOARD_INTERVAL_MS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => return Err(ConfigError::Invalid("LEADERBOARD_INTERVAL_MS", raw)),
            },
            Err(_) => DEFAULT_LEADERBOARD_INTERVAL_MS,
        };

        Ok(Self {
            bind_addr,
            port,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            leaderboard_interval: Duration::from_millis(interval_ms),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
