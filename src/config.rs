use thiserror::Error;

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE_NAME: &str = "notes";
pub const DEFAULT_APP_NAME: &str = "Notes App";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("HOST must be a non-empty host name or address, got {0:?}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mongo_url: String,
    pub database_name: String,
    pub app_name: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let host = var("HOST", DEFAULT_HOST);
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidHost(host));
        }

        Ok(Self {
            mongo_url: var("MONGO_URL", DEFAULT_MONGO_URL),
            database_name: var("DATABASE_NAME", DEFAULT_DATABASE_NAME),
            app_name: var("APP_NAME", DEFAULT_APP_NAME),
            debug: var("DEBUG", "True").to_lowercase() == "true",
            host,
            port,
        })
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "notes_web=debug,tower_http=debug"
        } else {
            "notes_web=info,tower_http=info"
        }
    }
}
