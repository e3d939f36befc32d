//! Environment-based configuration
//!
//! Reads backend settings from the environment, loading a `.env` file
//! first if one is present. Only the API key is required.

use gemini_sdk::{GeminiClient, GeminiOptions};
use thiserror::Error;

/// Environment variable holding the backend API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model name
pub const MODEL_VAR: &str = "HERCULES_MODEL";
/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "HERCULES_BASE_URL";

/// Configuration failures, named by the offending variable
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Backend connection settings
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
}

impl BackendConfig {
    /// Load configuration from the environment (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let api_key = non_empty_var(API_KEY_VAR).ok_or(ConfigError::MissingVar(API_KEY_VAR))?;
        let model =
            non_empty_var(MODEL_VAR).unwrap_or_else(|| gemini_sdk::DEFAULT_MODEL.to_string());
        let base_url = non_empty_var(BASE_URL_VAR);

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }

    /// Build the backend client from this configuration
    pub fn into_client(self) -> GeminiClient {
        let mut builder = GeminiOptions::builder(self.api_key).model(self.model);
        if let Some(base_url) = self.base_url {
            builder = builder.base_url(base_url);
        }
        GeminiClient::with_options(builder.build())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
