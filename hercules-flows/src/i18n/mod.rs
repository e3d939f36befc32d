//! Internationalization layer
//!
//! English, Hindi, and Marathi UI strings come from one process-wide
//! message catalog (loaded once, read-only thereafter), keyed by the
//! exact English source string. Strings missing from the catalog fall
//! back to the translate flow; any failure there restores the original
//! text and is never surfaced to the user.

pub mod catalog;

pub use catalog::Catalog;

use crate::flows::translate::{translate_text, TranslateTextInput};
use gemini_sdk::GenerationBackend;
use hercules_sdk::FlowLog;
use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Hi,
    Mr,
}

impl LanguageCode {
    /// Parse a language code as it appears in URLs and form values
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            "mr" => Some(Self::Mr),
            _ => None,
        }
    }

    /// The wire-level code for this language
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Mr => "mr",
        }
    }
}

/// Substitute `%s` placeholders left to right
///
/// Every `%s` is replaced; placeholders beyond the supplied arguments
/// become empty strings, matching the screens' formatting helper.
pub fn apply_args(text: &str, args: &[&str]) -> String {
    let mut rendered = String::with_capacity(text.len());
    let mut rest = text;
    let mut next = 0;
    while let Some(pos) = rest.find("%s") {
        rendered.push_str(&rest[..pos]);
        if let Some(arg) = args.get(next) {
            rendered.push_str(arg);
        }
        next += 1;
        rest = &rest[pos + 2..];
    }
    rendered.push_str(rest);
    rendered
}

/// Render-time string translation: catalog first, translate flow second
pub struct Translator<B: GenerationBackend> {
    backend: B,
}

impl<B: GenerationBackend> Translator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Translate a source string for display
    ///
    /// English is the source language and returns the input unchanged.
    /// A catalog hit wins; on a miss the translate flow is invoked. Any
    /// fallback failure restores the original text; failures are logged
    /// but never surfaced.
    pub async fn translate(&self, text: &str, lang: LanguageCode) -> String {
        if lang == LanguageCode::En {
            return text.to_string();
        }
        if let Some(hit) = Catalog::global().lookup(text, lang) {
            return hit.to_string();
        }

        FlowLog::TranslationFallback {
            source: text.to_string(),
            lang: lang.as_code().to_string(),
        }
        .emit();

        let input = TranslateTextInput {
            text: text.to_string(),
            target_lang: lang.as_code().to_string(),
        };
        match translate_text(&self.backend, &input).await {
            Ok(output) if !output.translation.trim().is_empty() => output.translation,
            Ok(_) => text.to_string(),
            Err(e) => {
                FlowLog::TranslationFailed {
                    source: text.to_string(),
                    lang: lang.as_code().to_string(),
                    error: e.to_string(),
                }
                .emit();
                text.to_string()
            }
        }
    }

    /// Translate, then substitute `%s` arguments
    pub async fn translate_with_args(
        &self,
        text: &str,
        lang: LanguageCode,
        args: &[&str],
    ) -> String {
        apply_args(&self.translate(text, lang).await, args)
    }
}
