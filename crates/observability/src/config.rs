//! Logging configuration, read from the environment.

use core::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "STOCKROOM_LOG_FORMAT";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format {0:?} (expected \"json\" or \"pretty\")")]
pub struct ParseLogFormatError(String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ParseLogFormatError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string, e.g. `"info,stockroom_warehouse=debug"`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `STOCKROOM_LOG_FORMAT`, defaulting to `info` / JSON.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var(LOG_FORMAT_ENV).ok().as_deref(),
        )
    }

    fn from_vars(filter: Option<&str>, format: Option<&str>) -> Self {
        // An unparseable format must not stop the process from logging at all.
        let format: LogFormat = format
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();

        Self {
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or("info")
                .to_string(),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_json() {
        assert_eq!(
            ObservabilityConfig::from_vars(None, None),
            ObservabilityConfig::default()
        );
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_vars(Some("stockroom_warehouse=debug"), Some("Pretty"));
        assert_eq!(config.filter, "stockroom_warehouse=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_uses_default() {
        assert_eq!(ObservabilityConfig::from_vars(Some("  "), None).filter, "info");
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        assert_eq!(
            ObservabilityConfig::from_vars(None, Some("xml")).format,
            LogFormat::Json
        );
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
