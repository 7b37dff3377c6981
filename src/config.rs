use std::time::Duration;

use crate::error::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movies.db?mode=rwc".to_string());

        let connect_timeout_secs: u64 = match std::env::var("DB_CONNECT_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("DB_CONNECT_TIMEOUT_SECS: {s:?}")))?,
            Err(_) => 10,
        };

        Ok(Self { database_url, connect_timeout: Duration::from_secs(connect_timeout_secs) })
    }

    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self { database_url: database_url.into(), connect_timeout: Duration::from_secs(10) }
    }
}
