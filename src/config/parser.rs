use super::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub warehouse: WarehouseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection parameters for the target warehouse. The six required
/// identifiers mirror what the warehouse login needs; host, port and
/// protocol exist only to point the client at a non-default deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct WarehouseConfig {
    pub user: String,
    pub password: SecretString,
    pub account: String,
    pub warehouse: String,
    pub database: String,
    pub schema: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("warehouse.user", &self.warehouse.user),
            ("warehouse.account", &self.warehouse.account),
            ("warehouse.warehouse", &self.warehouse.warehouse),
            ("warehouse.database", &self.warehouse.database),
            ("warehouse.schema", &self.warehouse.schema),
        ];
        for (key, value) in required {
            if value.is_empty() {
                return Err(ConfigError::InvalidConfig(format!(
                    "{key} cannot be empty"
                )));
            }
        }

        if self.warehouse.password.expose_secret().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "warehouse.password cannot be empty".to_string(),
            ));
        }

        if self.warehouse.port == Some(0) {
            return Err(ConfigError::InvalidConfig(
                "warehouse.port must be between 1 and 65535".to_string(),
            ));
        }

        // port and protocol only take effect through the host override
        if self.warehouse.host.is_none() {
            if self.warehouse.port.is_some() {
                return Err(ConfigError::InvalidConfig(
                    "warehouse.port requires warehouse.host to be set".to_string(),
                ));
            }
            if self.warehouse.protocol.is_some() {
                return Err(ConfigError::InvalidConfig(
                    "warehouse.protocol requires warehouse.host to be set".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("SNOWFLAKE_USER") {
            self.warehouse.user = value;
        }
        if let Ok(value) = std::env::var("SNOWFLAKE_PASSWORD") {
            self.warehouse.password = SecretString::from(value);
        }
        if let Ok(value) = std::env::var("SNOWFLAKE_ACCOUNT") {
            self.warehouse.account = value;
        }
        if let Ok(value) = std::env::var("SNOWFLAKE_WAREHOUSE") {
            self.warehouse.warehouse = value;
        }
        if let Ok(value) = std::env::var("SNOWFLAKE_DATABASE") {
            self.warehouse.database = value;
        }
        if let Ok(value) = std::env::var("SNOWFLAKE_SCHEMA") {
            self.warehouse.schema = value;
        }
        if let Ok(value) = std::env::var("SNOWFLAKE_ROLE") {
            self.warehouse.role = Some(value);
        }
        if let Ok(value) = std::env::var("SNOWFLAKE_HOST") {
            self.warehouse.host = Some(value);
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
