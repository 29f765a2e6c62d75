use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./todosapp.db";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_JWT_ISSUER: &str = "catalog-server";
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: Option<String>,
    pub jwt_issuer: String,
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").ok(),
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_JWT_ISSUER.to_string()),
            token_ttl_minutes: env::var("TOKEN_TTL_MINUTES")
                .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_MINUTES.to_string())
                .parse()
                .context("TOKEN_TTL_MINUTES must be a valid number")?,
        })
    }

    /// Only the todo app signs tokens, so the secret is checked lazily.
    pub fn jwt_secret(&self) -> Result<&str> {
        self.jwt_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .context("JWT_SECRET must be set")
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.token_ttl_minutes)
    }
}
