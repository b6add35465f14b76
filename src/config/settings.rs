//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{DEFAULT_DATA_DIR, DEFAULT_LATENCY_MS};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the file-backed key-value entries
    pub data_dir: PathBuf,
    /// Artificial delay applied to store operations, in milliseconds
    pub simulated_latency_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let config = Self {
            data_dir: env::var("LAND_MARKET_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            simulated_latency_ms: env::var("LAND_MARKET_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LATENCY_MS),
        };

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            latency_ms = config.simulated_latency_ms,
            "Configuration loaded"
        );

        config
    }

    /// Configuration with no simulated latency, for tests.
    pub fn without_latency(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            simulated_latency_ms: 0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            simulated_latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.simulated_latency_ms, DEFAULT_LATENCY_MS);
    }

    #[test]
    fn test_without_latency() {
        let config = Config::without_latency("/tmp/store");
        assert_eq!(config.simulated_latency_ms, 0);
    }
}
