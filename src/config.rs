//! Startup configuration.
//!
//! One explicit struct built from the environment before the server
//! starts; nothing in the request pipeline reads environment variables.

use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Connection settings for both hosted collaborators.
///
/// Required: `AZURE_OPENAI_ENDPOINT`, `AZURE_SEARCH_ENDPOINT`.
/// Keys are optional; when absent the deployment platform is expected
/// to supply credentials out of band.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_endpoint: String,
    pub openai_deployment: String,
    pub openai_api_key: Option<String>,
    pub search_endpoint: String,
    pub search_index: String,
    pub search_key: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AppConfig {
            openai_endpoint: require("AZURE_OPENAI_ENDPOINT")?,
            openai_deployment: env::var("AZURE_OPENAI_DEPLOYMENT")
                .unwrap_or_else(|_| "gpt-4".to_string()),
            openai_api_key: optional("AZURE_OPENAI_API_KEY"),
            search_endpoint: require("AZURE_SEARCH_ENDPOINT")?,
            search_index: env::var("AZURE_SEARCH_INDEX")
                .unwrap_or_else(|_| "redlist-index".to_string()),
            search_key: optional("AZURE_SEARCH_KEY"),
            port: env::var("PORT")
                .ok()
                .and_then(|val| val.parse::<u16>().ok())
                .unwrap_or(8000),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
