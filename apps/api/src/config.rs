use anyhow::{Context, Result};

use crate::generation::validator::Strictness;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key. Optional at startup: a missing key does not stop the
    /// server from booting, it fails each generation request instead.
    pub openai_api_key: Option<String>,
    /// How strictly model output is checked against the brand kit shape.
    /// Defaults to pass-through, which serves the decoded JSON as-is.
    pub strictness: Strictness,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            strictness: match optional_env("BRAND_KIT_STRICTNESS") {
                Some(value) => value
                    .parse()
                    .context("BRAND_KIT_STRICTNESS must be pass-through, coerce, or reject")?,
                None => Strictness::default(),
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and empty variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
