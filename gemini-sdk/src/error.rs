//! Error types for the Gemini SDK

use thiserror::Error;

/// Errors produced while requesting structured output from a model
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network-level failure reaching the API
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The model's text could not be parsed as JSON
    #[error("invalid JSON in model response: {0}")]
    Json(#[from] serde_json::Error),

    /// The parsed response does not satisfy the requested output schema
    #[error("response does not match requested schema: {0}")]
    SchemaMismatch(String),

    /// The API answered successfully but produced no usable payload
    #[error("model returned no usable output")]
    MissingOutput,

    /// Invalid client configuration (bad base URL, empty model name, ...)
    #[error("configuration error: {0}")]
    Config(String),
}

impl GeminiError {
    /// Create an API error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a schema-mismatch error
    pub fn schema_mismatch(detail: impl Into<String>) -> Self {
        Self::SchemaMismatch(detail.into())
    }
}

/// Result alias used throughout the SDK
pub type Result<T> = std::result::Result<T, GeminiError>;
