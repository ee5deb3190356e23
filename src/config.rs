use std::{env, net::SocketAddr};

use crate::{db::connection::DEFAULT_BUSY_TIMEOUT_MS, error::ConfigError};

const DEFAULT_APP_URL: &str = "127.0.0.1:5000";
const DEFAULT_DATABASE_URL: &str = "issueTracker.db";
const DEFAULT_POOL_SIZE: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app_url: SocketAddr,
    pub database_url: String,
    pub pool_size: u32,
    pub busy_timeout_ms: u64,
}

impl Config {
    /// Reads `APP_URL`, `DATABASE_URL`, `DATABASE_POOL_SIZE` and
    /// `DATABASE_BUSY_TIMEOUT_MS`, after loading a `.env` file when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_url = lookup("APP_URL")
            .unwrap_or_else(|| DEFAULT_APP_URL.to_string())
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::Invalid {
                key: "APP_URL",
                reason: err.to_string(),
            })?;

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(size) if size > 0 => size,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_POOL_SIZE",
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(err) => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_POOL_SIZE",
                        reason: err.to_string(),
                    })
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        let busy_timeout_ms = match lookup("DATABASE_BUSY_TIMEOUT_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|err| ConfigError::Invalid {
                key: "DATABASE_BUSY_TIMEOUT_MS",
                reason: err.to_string(),
            })?,
            None => DEFAULT_BUSY_TIMEOUT_MS,
        };

        Ok(Self {
            app_url,
            database_url,
            pool_size,
            busy_timeout_ms,
        })
    }
}
