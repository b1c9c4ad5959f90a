//! Configuration module
//!
//! Settings live in a TOML file (`~/.config/car-reservation/config.toml` by
//! default). Every section is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::Deserialize;
use thiserror::Error;

use crate::application::ServiceSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Config file location: `CAR_RESERVATION_CONFIG` or the per-user config dir.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("CAR_RESERVATION_CONFIG") {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("car-reservation")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub reservations: ReservationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

impl DatabaseSettings {
    /// `DATABASE_URL` wins over the file.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReservationConfig {
    /// Pickup window length when a reservation gives no dropoff time
    #[serde(default = "default_window_minutes")]
    pub default_window_minutes: i64,
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            default_window_minutes: default_window_minutes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_database_url() -> String {
    "sqlite://./car_reservation.db?mode=rwc".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}
fn default_window_minutes() -> i64 {
    120
}

impl AppConfig {
    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // bcrypt accepts 4..=31
        if !(4..=31).contains(&self.security.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                field: "security.bcrypt_cost",
                reason: format!("{} is outside 4..=31", self.security.bcrypt_cost),
            });
        }
        if self.reservations.default_window_minutes <= 0 {
            return Err(ConfigError::Invalid {
                field: "reservations.default_window_minutes",
                reason: "must be positive".to_string(),
            });
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "database.url",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            bcrypt_cost: self.security.bcrypt_cost,
            default_window: Duration::minutes(self.reservations.default_window_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.database.url, "sqlite://./car_reservation.db?mode=rwc");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.security.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(cfg.service_settings().default_window, Duration::minutes(120));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            port = 9090

            [reservations]
            default_window_minutes = 45
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.reservations.default_window_minutes, 45);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            AppConfig::from_toml("[security]\nbcrypt_cost = 2"),
            Err(ConfigError::Invalid { field: "security.bcrypt_cost", .. })
        ));
        assert!(matches!(
            AppConfig::from_toml("[reservations]\ndefault_window_minutes = 0"),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            AppConfig::from_toml("[server]\nport = \"x\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = AppConfig::load(Path::new("/nonexistent/car-reservation/config.toml")).unwrap();
        assert_eq!(cfg.server.port, 8080);
    }
}
