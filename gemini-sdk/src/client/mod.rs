//! HTTP client for the `generateContent` endpoint
//!
//! One request per call: render the body, POST it, pull the first
//! candidate's text, parse it as JSON, and validate it against the
//! requested output schema. There is no retry, timeout, or backoff
//! layer here; transport defaults apply.

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{GeminiError, Result};
use crate::types::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GeminiOptions,
};
use crate::GenerationBackend;

/// Client for schema-constrained generation requests
pub struct GeminiClient {
    http: reqwest::Client,
    options: GeminiOptions,
}

impl GeminiClient {
    /// Create a client with default options and the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_options(GeminiOptions::builder(api_key).build())
    }

    /// Create a client from explicit options
    pub fn with_options(options: GeminiOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            options,
        }
    }

    /// The configured options
    pub fn options(&self) -> &GeminiOptions {
        &self.options
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.options.base_url.trim_end_matches('/'),
            self.options.model
        )
    }

    fn build_request(&self, prompt: &str, output_schema: &Value) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                temperature: self.options.temperature,
                max_output_tokens: self.options.max_output_tokens,
                response_mime_type: "application/json".to_string(),
                response_schema: output_schema.clone(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate_structured(&self, prompt: &str, output_schema: &Value) -> Result<Value> {
        let request = self.build_request(prompt, output_schema);

        #[cfg(feature = "tracing-support")]
        tracing::debug!(model = %self.options.model, "Sending generateContent request");

        let response = self
            .http
            .post(self.endpoint_url())
            .header("x-goog-api-key", &self.options.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) => body,
            };

            #[cfg(feature = "tracing-support")]
            tracing::error!(status = status.as_u16(), %message, "generateContent failed");

            return Err(GeminiError::api(status.as_u16(), message));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = extract_candidate_text(&parsed)?;
        let value: Value = serde_json::from_str(&text)?;
        if value.is_null() {
            return Err(GeminiError::MissingOutput);
        }

        validate_against_schema(output_schema, &value)?;
        Ok(value)
    }
}

/// Pull the first candidate's first text part
///
/// A blocked prompt, an empty candidate list, or whitespace-only text
/// all count as missing output rather than a parse failure.
fn extract_candidate_text(response: &GenerateContentResponse) -> Result<String> {
    if let Some(feedback) = &response.prompt_feedback {
        if feedback.block_reason.is_some() {
            return Err(GeminiError::MissingOutput);
        }
    }

    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .map(|part| part.text.clone())
        .ok_or(GeminiError::MissingOutput)?;

    if text.trim().is_empty() {
        return Err(GeminiError::MissingOutput);
    }
    Ok(text)
}

/// Validate a parsed payload against the requested output schema
fn validate_against_schema(schema: &Value, value: &Value) -> Result<()> {
    let compiled = JSONSchema::compile(schema)
        .map_err(|e| GeminiError::schema_mismatch(format!("invalid output schema: {}", e)))?;

    if let Err(errors) = compiled.validate(value) {
        let detail = errors
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GeminiError::schema_mismatch(detail));
    }
    Ok(())
}
