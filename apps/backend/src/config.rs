//! Service configuration from environment variables.

use ink_memory_core::Calendar;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration.
///
/// Env vars:
/// - HOST: bind address (default "0.0.0.0")
/// - PORT: bind port (default 3000)
/// - DATA_PATH: SQLite file holding the study state
/// - UTC_OFFSET_MINUTES: fixed offset for calendar days; local time zone when unset
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub calendar: Calendar,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            None => 3000,
        };

        let data_path = lookup("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_path);

        let calendar = match lookup("UTC_OFFSET_MINUTES") {
            Some(value) => value
                .parse::<i32>()
                .ok()
                .and_then(Calendar::from_offset_minutes)
                .ok_or(ConfigError::Invalid {
                    key: "UTC_OFFSET_MINUTES",
                    value,
                })?,
            None => Calendar::Local,
        };

        Ok(Self {
            host,
            port,
            data_path,
            calendar,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_data_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ink-memory")
        .join("ink-memory.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.calendar, Calendar::Local);
        assert!(config.data_path.ends_with("ink-memory/ink-memory.db"));
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATA_PATH", "/tmp/study.db"),
            ("UTC_OFFSET_MINUTES", "480"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.data_path, PathBuf::from("/tmp/study.db"));
        assert_eq!(config.calendar, Calendar::from_offset_minutes(480).unwrap());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            config(&[("PORT", "http")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
        assert!(matches!(
            config(&[("UTC_OFFSET_MINUTES", "9999")]),
            Err(ConfigError::Invalid { key: "UTC_OFFSET_MINUTES", .. })
        ));
    }
}
