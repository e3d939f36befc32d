//! Cultural investment guidance flow
//!
//! Provides investment guidance and educational content that considers
//! the user's cultural background, especially around traditional
//! festivals, explaining opportunities in a relevant, familiar context.
//! The prompt steers toward safe, reliable advice.

use gemini_sdk::GenerationBackend;
use hercules_sdk::template::render;
use hercules_sdk::validation::{validate_non_empty_string, validate_positive};
use hercules_sdk::{
    FieldSchema, FieldType, FlowDefinition, FlowError, FlowMetadata, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const FLOW_ID: &str = "cultural-investment-guidance";

const PROMPT: &str = r#"You are an expert financial advisor specializing in culturally relevant investment strategies, especially during traditional festivals.

Provide personalized investment guidance that considers the user's cultural background, the specific festival, their location and amount they want to invest.

Cultural Background: {{culturalBackground}}
Festival: {{festival}}
Location: {{location}}
Investment Amount: {{investmentAmount}}

Explain investment opportunities in a relevant, familiar context, so the user can make informed investment decisions that align with their values.
Focus on providing safe and reliable advice and avoid high risk investments.
"#;

/// Input record for cultural investment guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalInvestmentGuidanceInput {
    /// The cultural background of the user
    pub cultural_background: String,
    /// The traditional festival for which guidance is requested (e.g., Diwali)
    pub festival: String,
    /// The location of the user (e.g., Delhi, Mumbai, Chennai)
    pub location: String,
    /// The amount the user wants to invest
    pub investment_amount: f64,
}

impl CulturalInvestmentGuidanceInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_empty_string("culturalBackground", &self.cultural_background)?;
        validate_non_empty_string("festival", &self.festival)?;
        validate_non_empty_string("location", &self.location)?;
        validate_positive("investmentAmount", self.investment_amount)?;
        Ok(())
    }
}

impl FlowDefinition for CulturalInvestmentGuidanceInput {
    fn metadata() -> FlowMetadata {
        FlowMetadata {
            id: FLOW_ID.to_string(),
            name: "Cultural Investment".to_string(),
            description:
                "Personalized investment guidance considering cultural background and festival context."
                    .to_string(),
        }
    }

    fn input_fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema {
                name: "culturalBackground".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "Cultural Background".to_string(),
                description: "The cultural background of the user.".to_string(),
                required: true,
                default: Some("North Indian".to_string()),
            },
            FieldSchema {
                name: "festival".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "Festival".to_string(),
                description:
                    "The traditional festival for which investment guidance is requested (e.g., Diwali)."
                        .to_string(),
                required: true,
                default: Some("Diwali".to_string()),
            },
            FieldSchema {
                name: "location".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "Location".to_string(),
                description:
                    "The location of the user (e.g., Delhi, Mumbai, Chennai, Kolkata, Bangalore, and Hyderabad)"
                        .to_string(),
                required: true,
                default: Some("Mumbai".to_string()),
            },
            FieldSchema {
                name: "investmentAmount".to_string(),
                field_type: FieldType::Number {
                    min: Some(0.0),
                    max: None,
                },
                label: "Investment Amount".to_string(),
                description: "The amount user wants to invest.".to_string(),
                required: true,
                default: Some("50000".to_string()),
            },
        ]
    }
}

/// Output record for cultural investment guidance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalInvestmentGuidanceOutput {
    /// Personalized guidance in the user's cultural and festival context
    pub guidance: String,
}

pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "guidance": {
                "type": "string",
                "description": "Personalized investment guidance considering the user's cultural background and the festival context."
            }
        },
        "required": ["guidance"]
    })
}

/// Generate culturally relevant investment guidance
pub async fn cultural_investment_guidance<B: GenerationBackend>(
    backend: &B,
    input: &CulturalInvestmentGuidanceInput,
) -> Result<CulturalInvestmentGuidanceOutput, FlowError> {
    input.validate()?;

    let amount = input.investment_amount.to_string();
    let prompt = render(
        PROMPT,
        &[
            ("culturalBackground", input.cultural_background.as_str()),
            ("festival", input.festival.as_str()),
            ("location", input.location.as_str()),
            ("investmentAmount", amount.as_str()),
        ],
    );

    super::invoke(
        backend,
        FLOW_ID,
        "Generating investment guidance",
        &prompt,
        &output_schema(),
    )
    .await
}
