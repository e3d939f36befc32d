//! Financial distress detection flow
//!
//! Runs sentiment analysis over user input or transaction descriptions
//! to detect likely financial distress. The sentiment score ranges from
//! -1 (negative) to 1 (positive); [`SentimentIndicator`] applies the
//! display threshold policy the screens use.

use gemini_sdk::GenerationBackend;
use hercules_sdk::template::render;
use hercules_sdk::validation::validate_min_len;
use hercules_sdk::{
    FieldSchema, FieldType, FlowDefinition, FlowError, FlowMetadata, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const FLOW_ID: &str = "detect-financial-distress";

/// Minimum characters of text required for a meaningful analysis
const MIN_TEXT_LEN: usize = 10;

const PROMPT: &str = r#"You are a financial distress detection AI.

You will analyze the sentiment of the input text to determine if the user is likely experiencing financial distress.

Based on the sentiment analysis, you will set the isDistressed output field appropriately.

Input Text: {{text}}

Respond in JSON format.
"#;

/// Input record for distress detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDistressInput {
    /// User input text or transaction description
    pub text: String,
}

impl FinancialDistressInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_min_len("text", self.text.trim(), MIN_TEXT_LEN)
    }
}

impl FlowDefinition for FinancialDistressInput {
    fn metadata() -> FlowMetadata {
        FlowMetadata {
            id: FLOW_ID.to_string(),
            name: "Emotional Stress Sensing".to_string(),
            description:
                "Detect potential financial distress via sentiment analysis on user input and transaction descriptions."
                    .to_string(),
        }
    }

    fn input_fields() -> Vec<FieldSchema> {
        vec![FieldSchema {
            name: "text".to_string(),
            field_type: FieldType::Text {
                min_len: Some(MIN_TEXT_LEN),
            },
            label: "Text for Analysis".to_string(),
            description: "User input text or transaction description.".to_string(),
            required: true,
            default: Some(
                "Another unexpected bill came in, not sure how I will manage this month."
                    .to_string(),
            ),
        }]
    }
}

/// Output record for distress detection (the "distress signal")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDistressOutput {
    /// Whether the user is likely experiencing financial distress
    pub is_distressed: bool,
    /// Sentiment score of the input text, from -1 (negative) to 1 (positive)
    pub sentiment_score: f64,
    /// The reason for the distress detection
    pub reason: String,
}

/// Display indicator derived from a sentiment score
///
/// Threshold policy: above 0.2 reads positive, below -0.2 reads
/// distressed, anything between is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentIndicator {
    Positive,
    Neutral,
    Distressed,
}

impl SentimentIndicator {
    pub fn from_score(score: f64) -> Self {
        if score > 0.2 {
            Self::Positive
        } else if score < -0.2 {
            Self::Distressed
        } else {
            Self::Neutral
        }
    }
}

pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "isDistressed": {
                "type": "boolean",
                "description": "Whether the user is likely experiencing financial distress."
            },
            "sentimentScore": {
                "type": "number",
                "description": "The sentiment score of the input text, ranging from -1 (negative) to 1 (positive)."
            },
            "reason": {
                "type": "string",
                "description": "The reason for the distress detection, based on the sentiment analysis."
            }
        },
        "required": ["isDistressed", "sentimentScore", "reason"]
    })
}

/// Analyze text for signs of financial distress
pub async fn detect_financial_distress<B: GenerationBackend>(
    backend: &B,
    input: &FinancialDistressInput,
) -> Result<FinancialDistressOutput, FlowError> {
    input.validate()?;

    let prompt = render(PROMPT, &[("text", input.text.as_str())]);

    super::invoke(
        backend,
        FLOW_ID,
        "Analyzing sentiment",
        &prompt,
        &output_schema(),
    )
    .await
}
