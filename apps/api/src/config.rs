use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Résumés above this size are rejected at upload.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Sessions untouched for this long are discarded.
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 60 * 60;

/// Application configuration loaded from environment variables.
/// Fails at startup if the model credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub max_upload_bytes: usize,
    pub session_idle_ttl: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            session_idle_ttl: Duration::from_secs(match std::env::var("SESSION_IDLE_TTL_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .context("SESSION_IDLE_TTL_SECS must be a number of seconds")?,
                Err(_) => DEFAULT_SESSION_IDLE_TTL_SECS,
            }),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}
