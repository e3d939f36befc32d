//! The backend abstraction flows are written against
//!
//! Callers invoke a [`GenerationBackend`] rather than the concrete HTTP
//! client, so tests can substitute a double that counts calls and
//! returns canned payloads.

use async_trait::async_trait;

use crate::error::Result;

/// A service that turns a rendered prompt into JSON conforming to a schema
///
/// Implementations perform exactly one outbound request per call: no
/// retries, no caching, no deduplication of identical prompts.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate output for `prompt`, coerced into `output_schema`
    ///
    /// # Arguments
    /// * `prompt` - The fully rendered instruction text
    /// * `output_schema` - JSON Schema the response must satisfy
    ///
    /// # Errors
    /// * [`GeminiError::MissingOutput`](crate::GeminiError::MissingOutput)
    ///   when the service answers successfully but yields no payload
    /// * Any other [`GeminiError`](crate::GeminiError) for transport,
    ///   API, or shape failures
    async fn generate_structured(
        &self,
        prompt: &str,
        output_schema: &serde_json::Value,
    ) -> Result<serde_json::Value>;
}

#[async_trait]
impl<B: GenerationBackend + ?Sized> GenerationBackend for &B {
    async fn generate_structured(
        &self,
        prompt: &str,
        output_schema: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        (**self).generate_structured(prompt, output_schema).await
    }
}
