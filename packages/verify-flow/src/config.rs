use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

/// Primary variable for the verification backend.
pub const BASE_URL_VAR: &str = "SUBSCRIBERS_BASE_URL";

/// Name used by the mobile build; accepted so one `.env` serves both.
pub const LEGACY_BASE_URL_VAR: &str = "EXPO_PUBLIC_BASE_URL";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let base_url = env::var(BASE_URL_VAR)
            .or_else(|_| env::var(LEGACY_BASE_URL_VAR))
            .with_context(|| format!("{} must be set", BASE_URL_VAR))?;

        Self::with_base_url(base_url)
    }

    /// Build from an explicit endpoint, e.g. a `--base-url` flag.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().to_string();
        if base_url.is_empty() {
            bail!("{} must not be empty", BASE_URL_VAR);
        }
        Ok(Self { base_url })
    }

    /// Flag value wins over the environment.
    pub fn resolve(override_url: Option<String>) -> Result<Self> {
        match override_url {
            Some(url) => Self::with_base_url(url).context("Invalid --base-url"),
            None => Self::from_env(),
        }
    }
}
