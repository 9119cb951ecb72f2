use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Credential for the completion provider. Optional: the server
    /// starts without it, but resource search reports 503 until it is
    /// configured.
    pub perplexity_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            perplexity_api_key: env::var("PERPLEXITY_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        })
    }
}
