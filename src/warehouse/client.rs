use std::time::Duration;

use secrecy::ExposeSecret;
use snowflake_connector_rs::{
    SnowflakeAuthMethod, SnowflakeClient, SnowflakeClientConfig, SnowflakeSession,
};
use tracing::{debug, info};

use crate::config::WarehouseConfig;
use crate::warehouse::WarehouseError;

/// A configured client for the target warehouse. Construction is purely
/// local; the login round-trip happens when a cursor is opened.
pub struct WarehouseClient {
    client: SnowflakeClient,
    account: String,
    warehouse: String,
    database: String,
    schema: String,
}

impl WarehouseClient {
    pub fn connect(config: &WarehouseConfig) -> Result<Self, WarehouseError> {
        info!(
            account = %config.account,
            warehouse = %config.warehouse,
            database = %config.database,
            schema = %config.schema,
            "configuring warehouse client"
        );

        let client = SnowflakeClient::new(
            &config.user,
            SnowflakeAuthMethod::Password(config.password.expose_secret().to_string()),
            SnowflakeClientConfig {
                account: config.account.clone(),
                warehouse: Some(config.warehouse.clone()),
                database: Some(config.database.clone()),
                schema: Some(config.schema.clone()),
                role: config.role.clone(),
                timeout: config.timeout_secs.map(Duration::from_secs),
            },
        )
        .map_err(|e| WarehouseError::Client(e.to_string()))?;

        let client = if let Some(ref host) = config.host {
            client
                .with_address(host, config.port, config.protocol.clone())
                .map_err(|e| WarehouseError::Client(e.to_string()))?
        } else {
            client
        };

        Ok(Self {
            client,
            account: config.account.clone(),
            warehouse: config.warehouse.clone(),
            database: config.database.clone(),
            schema: config.schema.clone(),
        })
    }

    /// Log in and open a cursor against the configured database and schema.
    pub async fn open_cursor(&self) -> Result<Cursor, WarehouseError> {
        debug!("opening session against account {}", self.account);

        let session = self
            .client
            .create_session()
            .await
            .map_err(|e| WarehouseError::Cursor(e.to_string()))?;

        info!(
            "cursor ready for {}.{} on warehouse {}",
            self.database, self.schema, self.warehouse
        );
        Ok(Cursor { _session: session })
    }

    pub fn account(&self) -> &str {
        &self.account
    }
}

/// Handle for issuing statements against an open connection. The
/// connectivity check only opens it; it is dropped at process exit
/// without being closed explicitly.
pub struct Cursor {
    _session: SnowflakeSession,
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::WarehouseClient;
    use crate::config::WarehouseConfig;

    fn sample_config() -> WarehouseConfig {
        WarehouseConfig {
            user: "USERNAME".to_string(),
            password: SecretString::from("PASSWORD".to_string()),
            account: "USERACCOUNT".to_string(),
            warehouse: "COMPUTE_WH".to_string(),
            database: "SALES".to_string(),
            schema: "OBJECTS".to_string(),
            role: None,
            host: None,
            port: None,
            protocol: None,
            timeout_secs: None,
        }
    }

    #[test]
    fn builds_client_without_network() {
        let client = WarehouseClient::connect(&sample_config()).expect("client builds offline");
        assert_eq!(client.account(), "USERACCOUNT");
    }

    #[test]
    fn builds_client_with_address_override() {
        let mut config = sample_config();
        config.host = Some("localhost".to_string());
        config.port = Some(8080);
        config.protocol = Some("http".to_string());

        WarehouseClient::connect(&config).expect("client builds with address override");
    }

    fn config_from_env() -> Option<WarehouseConfig> {
        let user = std::env::var("SNOWFLAKE_USER").ok()?;
        let password = std::env::var("SNOWFLAKE_PASSWORD").ok()?;
        let account = std::env::var("SNOWFLAKE_ACCOUNT").ok()?;
        Some(WarehouseConfig {
            user,
            password: SecretString::from(password),
            account,
            warehouse: std::env::var("SNOWFLAKE_WAREHOUSE")
                .unwrap_or_else(|_| "COMPUTE_WH".to_string()),
            database: std::env::var("SNOWFLAKE_DATABASE").unwrap_or_else(|_| "SALES".to_string()),
            schema: std::env::var("SNOWFLAKE_SCHEMA").unwrap_or_else(|_| "OBJECTS".to_string()),
            role: std::env::var("SNOWFLAKE_ROLE").ok(),
            host: std::env::var("SNOWFLAKE_HOST").ok(),
            port: None,
            protocol: None,
            timeout_secs: Some(60),
        })
    }

    // Requires real credentials in SNOWFLAKE_USER / SNOWFLAKE_PASSWORD /
    // SNOWFLAKE_ACCOUNT; run with `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn opens_cursor_with_real_credentials() {
        let config = config_from_env().expect("set SNOWFLAKE_* variables for this test");
        let client = WarehouseClient::connect(&config).expect("client builds");
        client.open_cursor().await.expect("cursor opens");
    }
}
