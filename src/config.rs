//! Application configuration loaded from the environment.

use std::env;

use crate::error::config::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub discord_token: String,
    pub db_min_connections: u32,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from the environment, reading a `.env` file first
    /// if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_token: require("DISCORD_TOKEN")?,
            db_min_connections: parse_or("DB_MIN_CONNECTIONS", 5)?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 20)?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or(name: &str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string())),
        Err(_) => Ok(default),
    }
}
