use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ollama_url: String,
    pub ollama_model: String,
    /// `None` leaves model calls without a caller-imposed timeout.
    pub llm_timeout: Option<Duration>,
    pub fetch_timeout: Duration,
    pub output_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Ask for a third, half-page cover letter alongside short and medium.
    pub include_long_letter: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ollama_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: std::env::var("OLLAMA_MODEL")
                .unwrap_or_else(|_| "mistral-small".to_string()),
            llm_timeout: optional_env::<u64>("LLM_TIMEOUT_SECS")?.map(Duration::from_secs),
            fetch_timeout: Duration::from_secs(parse_env("FETCH_TIMEOUT_SECS", 10)?),
            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            include_long_letter: parse_env("INCLUDE_LONG_LETTER", false)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(optional_env(key)?.unwrap_or(default))
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        _ => Ok(None),
    }
}

#[cfg(test)]
impl Config {
    /// Defaults suitable for tests, writing records under `output_dir`.
    pub fn for_tests(output_dir: PathBuf) -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "test-model".to_string(),
            llm_timeout: None,
            fetch_timeout: Duration::from_secs(5),
            output_dir,
            max_upload_bytes: 1024 * 1024,
            include_long_letter: false,
        }
    }
}
