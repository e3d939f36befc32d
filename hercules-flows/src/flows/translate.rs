//! Text translation flow
//!
//! Translates UI text to a target language by code ("en", "hi", "mr").
//! Used by the i18n layer as the fallback for strings missing from the
//! message catalog.

use crate::i18n::LanguageCode;
use gemini_sdk::GenerationBackend;
use hercules_sdk::template::render;
use hercules_sdk::validation::validate_non_empty_string;
use hercules_sdk::{
    FieldSchema, FieldType, FlowDefinition, FlowError, FlowMetadata, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const FLOW_ID: &str = "translate-text";

const PROMPT: &str = r#"Translate the following text to the language specified by the target language code '{{targetLang}}'. Only return the translated text.
Text: {{text}}
"#;

/// Input record for translation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextInput {
    /// The text to be translated
    pub text: String,
    /// The target language code (e.g., "hi" for Hindi, "en" for English)
    pub target_lang: String,
}

impl TranslateTextInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_empty_string("text", &self.text)?;
        if LanguageCode::from_code(&self.target_lang).is_none() {
            return Err(ValidationError::new(
                "targetLang",
                format!(
                    "unknown language code '{}'; expected one of en, hi, mr",
                    self.target_lang
                ),
            ));
        }
        Ok(())
    }
}

impl FlowDefinition for TranslateTextInput {
    fn metadata() -> FlowMetadata {
        FlowMetadata {
            id: FLOW_ID.to_string(),
            name: "Translate".to_string(),
            description: "Translate text to a specified language.".to_string(),
        }
    }

    fn input_fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema {
                name: "text".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "Text".to_string(),
                description: "The text to be translated.".to_string(),
                required: true,
                default: None,
            },
            FieldSchema {
                name: "targetLang".to_string(),
                field_type: FieldType::Select {
                    options: vec!["en".to_string(), "hi".to_string(), "mr".to_string()],
                },
                label: "Target Language".to_string(),
                description:
                    "The target language code (e.g., \"hi\" for Hindi, \"en\" for English)."
                        .to_string(),
                required: true,
                default: Some("en".to_string()),
            },
        ]
    }
}

/// Output record for translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextOutput {
    /// The translated text
    pub translation: String,
}

pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "translation": {
                "type": "string",
                "description": "The translated text."
            }
        },
        "required": ["translation"]
    })
}

/// Translate text to the given target language
pub async fn translate_text<B: GenerationBackend>(
    backend: &B,
    input: &TranslateTextInput,
) -> Result<TranslateTextOutput, FlowError> {
    input.validate()?;

    let prompt = render(
        PROMPT,
        &[
            ("targetLang", input.target_lang.as_str()),
            ("text", input.text.as_str()),
        ],
    );

    super::invoke(
        backend,
        FLOW_ID,
        "Translating text",
        &prompt,
        &output_schema(),
    )
    .await
}
