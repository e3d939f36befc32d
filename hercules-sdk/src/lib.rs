//! Shared primitives for Hercules Finance AI flows
//!
//! A flow pairs a typed input schema, a prompt template, and a typed
//! output schema, and is invoked as a single request to a generation
//! backend. This crate holds what every flow shares:
//! - [`FieldSchema`] / [`FieldType`] declarative input-field metadata
//! - the [`FlowDefinition`] trait flows implement for discovery
//! - the [`FlowError`] taxonomy ([`ValidationError`] before the network,
//!   backend errors after)
//! - the prompt-template renderer ([`template`])
//! - field validation helpers ([`validation`])
//! - structured [`FlowLog`] events with `log_flow_*!` emit macros

pub mod template;
pub mod validation;

// Re-export the backend SDK for convenience
pub use gemini_sdk;

use serde::{Deserialize, Serialize};

/// Flow metadata (id, name, description)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Declarative description of one input field
///
/// The `description` doubles as a generation hint: it is embedded in
/// the output schema sent to the backend, so keep it in plain prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub field_type: FieldType,
    pub label: String,
    pub description: String,
    pub required: bool,
    pub default: Option<String>,
}

/// Field type enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        min_len: Option<usize>,
    },
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Select {
        options: Vec<String>,
    },
}

/// Trait that flows implement so callers can enumerate them and render
/// input forms without knowing the concrete input type
pub trait FlowDefinition {
    fn metadata() -> FlowMetadata;
    fn input_fields() -> Vec<FieldSchema>;
}

/// A field that failed validation, and why
///
/// Raised before any network call; the caller is expected to correct
/// the input and resubmit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("invalid value for {field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error taxonomy for flow invocation
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Input failed schema constraints; no network call was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend was unreachable, answered with an error, or produced
    /// output that does not match the declared shape; never retried
    #[error("backend error: {0}")]
    Backend(gemini_sdk::GeminiError),

    /// The backend answered successfully but with an empty payload
    /// where one was required
    #[error("flow '{flow}' received no output from the backend")]
    MissingOutput { flow: String },
}

impl FlowError {
    /// Map a backend error, promoting an empty payload to the
    /// flow-level missing-output condition
    pub fn from_backend(flow: &str, error: gemini_sdk::GeminiError) -> Self {
        match error {
            gemini_sdk::GeminiError::MissingOutput => Self::MissingOutput {
                flow: flow.to_string(),
            },
            other => Self::Backend(other),
        }
    }
}

/// Structured logging events emitted by flows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowLog {
    /// Flow invocation started
    FlowStarted { flow: String, description: String },
    /// Flow invocation completed
    FlowCompleted { flow: String },
    /// Flow invocation failed
    FlowFailed { flow: String, error: String },
    /// A string missed the translation catalog; the translate flow was used
    TranslationFallback { source: String, lang: String },
    /// The translate fallback failed; original text was restored
    TranslationFailed {
        source: String,
        lang: String,
        error: String,
    },
}

impl FlowLog {
    /// Emit this log event to stderr as a single JSON line
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            use std::io::Write;
            eprintln!("__FLOW_EVENT__:{}", json);
            // Force flush stderr in async/concurrent contexts
            let _ = std::io::stderr().flush();
        }
    }
}

/// Helper macros for flow logging
#[macro_export]
macro_rules! log_flow_start {
    ($flow:expr, $desc:expr) => {
        $crate::FlowLog::FlowStarted {
            flow: $flow.to_string(),
            description: $desc.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_flow_complete {
    ($flow:expr) => {
        $crate::FlowLog::FlowCompleted {
            flow: $flow.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_flow_failed {
    ($flow:expr, $error:expr) => {
        $crate::FlowLog::FlowFailed {
            flow: $flow.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}
