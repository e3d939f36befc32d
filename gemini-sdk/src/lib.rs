//! Rust SDK for the Google Gemini `generateContent` API
//!
//! This crate provides a small, typed client for requesting
//! schema-constrained JSON output from a Gemini model:
//! - [`GeminiClient`] performs the HTTP call and returns the model's
//!   response as a `serde_json::Value` validated against the requested
//!   output schema
//! - [`GenerationBackend`] is the trait callers program against, so the
//!   real client can be swapped for a test double
//! - [`GeminiError`] is the error taxonomy for transport, API, and
//!   output-shape failures
//!
//! # Example
//!
//! ```no_run
//! use gemini_sdk::{GeminiClient, GeminiOptions, GenerationBackend};
//! use serde_json::json;
//!
//! # async fn example() -> gemini_sdk::Result<()> {
//! let options = GeminiOptions::builder("api-key").build();
//! let client = GeminiClient::with_options(options);
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": { "answer": { "type": "string" } },
//!     "required": ["answer"]
//! });
//! let output = client
//!     .generate_structured("What is compound interest?", &schema)
//!     .await?;
//! println!("{}", output["answer"]);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod client;
pub mod error;
pub mod types;

pub use backend::GenerationBackend;
pub use client::GeminiClient;
pub use error::{GeminiError, Result};
pub use types::{GeminiOptions, GeminiOptionsBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};

// Re-export async_trait for implementors of GenerationBackend
pub use async_trait::async_trait;
