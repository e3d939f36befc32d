//! Options and wire types for the `generateContent` endpoint

use serde::{Deserialize, Serialize};

/// Default model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client configuration
///
/// Construct via [`GeminiOptions::builder`]:
///
/// ```
/// use gemini_sdk::GeminiOptions;
///
/// let options = GeminiOptions::builder("api-key")
///     .model("gemini-2.0-flash")
///     .temperature(0.2)
///     .build();
/// assert_eq!(options.model, "gemini-2.0-flash");
/// ```
#[derive(Debug, Clone)]
pub struct GeminiOptions {
    /// API key sent with every request
    pub api_key: String,
    /// Model name, e.g. `gemini-2.0-flash`
    pub model: String,
    /// API base URL (overridable for tests and proxies)
    pub base_url: String,
    /// Sampling temperature
    pub temperature: Option<f64>,
    /// Hard cap on generated tokens
    pub max_output_tokens: Option<u32>,
}

impl GeminiOptions {
    /// Start building options with the given API key
    pub fn builder(api_key: impl Into<String>) -> GeminiOptionsBuilder {
        GeminiOptionsBuilder {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

/// Builder for [`GeminiOptions`]
#[derive(Debug, Clone)]
pub struct GeminiOptionsBuilder {
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f64>,
    max_output_tokens: Option<u32>,
}

impl GeminiOptionsBuilder {
    /// Set the model name
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the number of generated tokens
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    /// Finish building
    pub fn build(self) -> GeminiOptions {
        GeminiOptions {
            api_key: self.api_key,
            model: self.model,
            base_url: self.base_url,
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A single conversational turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn holding one text part
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A text fragment within a turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Generation parameters, including the structured-output contract
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Always `application/json` for structured requests
    pub response_mime_type: String,
    /// Schema the model is asked to conform to
    pub response_schema: serde_json::Value,
}

/// Response body for `models/{model}:generateContent`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// One generated answer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Safety feedback on the prompt itself
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Error body returned by the API on non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error detail
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
