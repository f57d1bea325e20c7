use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::db::ConnectOptions;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// MongoDB connection string
    pub mongodb_url: Option<String>,

    /// Database the connection is bound to
    #[serde(default = "default_db_name")]
    pub mongodb_db_name: String,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        match Self::from_vars(std::env::vars()) {
            Ok(config) => {
                info!("✅ Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("❌ Failed to load configuration: {}", e);
                Err(e)
            }
        }
    }

    /// Build the configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(ConfigError::EnvError)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Options used for every database connection attempt
    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            db_name: self.mongodb_db_name.clone(),
            ..ConnectOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            service_name: default_service_name(),
            mongodb_url: None,
            mongodb_db_name: default_db_name(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EnvError(envy::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EnvError(e) => write!(f, "Environment variable error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "imaginify-server".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_db_name() -> String {
    "imaginify".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.mongodb_url, None);
        assert_eq!(config.mongodb_db_name, "imaginify");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_reads_database_settings() {
        let config = Config::from_vars(vars(&[
            ("MONGODB_URL", "mongodb://localhost/test"),
            ("MONGODB_DB_NAME", "staging"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.mongodb_url.as_deref(), Some("mongodb://localhost/test"));
        assert_eq!(config.port, 8080);

        let options = config.connect_options();
        assert_eq!(options.db_name, "staging");
        assert!(!options.buffer_commands);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = Config::from_vars(vars(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().starts_with("Environment variable error"));
    }
}
