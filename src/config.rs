//! # Database Configuration
//!
//! Layered configuration for the customer database endpoint: built-in defaults,
//! then `CUSTOMER_DB_*` environment variables, with `DATABASE_URL` honoured as a
//! fallback for the URL.

use crate::database::ConnectionSettings;
use crate::error::{CustomerServiceError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::time::Duration;

pub const ENV_PREFIX: &str = "CUSTOMER_DB";
pub const DEFAULT_DATABASE_URL: &str = "postgresql://localhost:5432/customers";
pub const DEFAULT_USERNAME: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "postgres";
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECONDS,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

impl DatabaseConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load configuration from an explicit variable map instead of the process
    /// environment. Keys use the same names as the environment variables.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let mut vars: HashMap<String, String> = vars.unwrap_or_else(|| env::vars().collect());

        // A blank URL counts as unset so the DATABASE_URL fallback still applies
        if vars
            .get("CUSTOMER_DB_URL")
            .is_some_and(|url| url.trim().is_empty())
        {
            vars.remove("CUSTOMER_DB_URL");
        }

        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("url", defaults.url)?
            .set_default("username", defaults.username)?
            .set_default("password", defaults.password)?
            .set_default("connect_timeout_seconds", defaults.connect_timeout_seconds)?;

        if !vars.contains_key("CUSTOMER_DB_URL") {
            if let Some(database_url) = vars
                .get("DATABASE_URL")
                .filter(|url| !url.trim().is_empty())
            {
                builder = builder.set_default("url", database_url.clone())?;
            }
        }

        // Values stay strings; numeric fields are converted on deserialize so
        // credentials such as "0123" are kept verbatim
        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
            .build()?
            .try_deserialize()?;

        config.validate()?;

        tracing::debug!(
            config = %config.sanitized_json(),
            "Database configuration loaded"
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(CustomerServiceError::Configuration(
                "database url must not be empty".to_string(),
            ));
        }

        if !(self.url.starts_with("postgres://") || self.url.starts_with("postgresql://")) {
            return Err(CustomerServiceError::Configuration(format!(
                "database url must use the postgres:// or postgresql:// scheme: {}",
                self.url
            )));
        }

        if self.username.trim().is_empty() {
            return Err(CustomerServiceError::Configuration(
                "database username must not be empty".to_string(),
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err(CustomerServiceError::Configuration(
                "connect_timeout_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn settings(&self) -> ConnectionSettings {
        ConnectionSettings::new(&self.url, &self.username, &self.password)
            .with_connect_timeout(self.connect_timeout())
    }

    /// JSON rendering with the password masked, for logging
    pub fn sanitized_json(&self) -> String {
        let mut sanitized = self.clone();
        sanitized.password = "[REDACTED]".to_string();
        serde_json::to_string(&sanitized).unwrap_or_else(|_| "[serialization error]".to_string())
    }
}
