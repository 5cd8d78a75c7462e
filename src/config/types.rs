//! Configuration types and CLI enums.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    CACHE_TTL, DEFAULT_API_PORT, DEFAULT_RDAP_BASE_URL, DEFAULT_THRESHOLD_FILE, RDAP_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// The core configuration struct used by the library. It can be
/// constructed programmatically without any CLI involvement.
///
/// # Examples
///
/// ```
/// use domain_guard::Config;
///
/// let config = Config {
///     rdap_base_url: "https://rdap.example".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.lookup_timeout_seconds, 8);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the RDAP service queried for registration dates
    pub rdap_base_url: String,

    /// Path of the JSON file holding the persisted threshold
    pub threshold_file: PathBuf,

    /// How long a cached classification stays fresh
    pub cache_ttl: Duration,

    /// Hard per-lookup timeout in seconds
    pub lookup_timeout_seconds: u64,

    /// Port the HTTP API server binds on (loopback only)
    pub port: u16,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rdap_base_url: DEFAULT_RDAP_BASE_URL.to_string(),
            threshold_file: PathBuf::from(DEFAULT_THRESHOLD_FILE),
            cache_ttl: CACHE_TTL,
            lookup_timeout_seconds: RDAP_TIMEOUT_SECS,
            port: DEFAULT_API_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.rdap_base_url, "https://rdap.org");
        assert_eq!(config.lookup_timeout_seconds, 8);
        assert_eq!(config.cache_ttl, Duration::from_secs(4 * 60 * 60));
        assert_eq!(config.port, DEFAULT_API_PORT);
    }
}
