use anyhow::{Context, Result};

const DEFAULT_GENERATOR_URL: &str = "http://127.0.0.1:5000";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the curriculum generation service (no trailing slash).
    pub generator_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            generator_url: normalize_base_url(
                &std::env::var("GENERATOR_URL")
                    .unwrap_or_else(|_| DEFAULT_GENERATOR_URL.to_string()),
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
