//! Configuration module for the JDOM catalog core.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

use crate::auth::SESSION_DURATION_HOURS;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for the file-backed storage; in-memory storage when unset
    pub data_dir: Option<PathBuf>,
    /// Session validity window in hours
    pub session_hours: i64,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from a key lookup. Tests go through this instead of mutating
    /// process-wide environment variables.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = var("JDOM_DATA_DIR").map(PathBuf::from);

        let session_hours = var("JDOM_SESSION_HOURS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(SESSION_DURATION_HOURS);

        let log_level = var("JDOM_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Self {
            data_dir,
            session_hours,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::from_lookup(|_| None);

        assert!(config.data_dir.is_none());
        assert_eq!(config.session_hours, 24);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(|key| match key {
            "JDOM_DATA_DIR" => Some("/var/lib/jdom".to_string()),
            "JDOM_SESSION_HOURS" => Some("48".to_string()),
            "JDOM_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        });

        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/jdom")));
        assert_eq!(config.session_hours, 48);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_unparsable_session_hours_falls_back() {
        let config =
            Config::from_lookup(|key| (key == "JDOM_SESSION_HOURS").then(|| "soon".to_string()));
        assert_eq!(config.session_hours, 24);
    }
}
