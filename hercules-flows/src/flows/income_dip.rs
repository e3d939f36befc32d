//! Income dip prediction flow
//!
//! Analyzes historical income data, work patterns, and economic trends
//! to forecast weekly income and proactively identify potential income
//! dips, with recommendations to avoid shortfalls.

use gemini_sdk::GenerationBackend;
use hercules_sdk::template::render;
use hercules_sdk::validation::validate_non_empty_string;
use hercules_sdk::{
    FieldSchema, FieldType, FlowDefinition, FlowError, FlowMetadata, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const FLOW_ID: &str = "predict-income-dip";

const PROMPT: &str = r#"You are an AI financial advisor specializing in income forecasting.

You will analyze historical income data, work patterns, and economic trends to forecast weekly income and identify potential income dips.

Based on the analysis, you will provide recommendations to the user to avoid income shortfalls.

Historical Income Data: {{historicalIncomeData}}
Work Pattern: {{workPattern}}
Economic Trends: {{economicTrends}}

Output the weekly income forecast, potential income dips, and recommendations as JSON strings.
"#;

/// Input record for income dip prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictIncomeDipInput {
    /// Historical income data, as a JSON string
    pub historical_income_data: String,
    /// Description of the user work pattern
    pub work_pattern: String,
    /// Description of current economic trends
    pub economic_trends: String,
}

impl PredictIncomeDipInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_empty_string("historicalIncomeData", &self.historical_income_data)?;
        validate_non_empty_string("workPattern", &self.work_pattern)?;
        validate_non_empty_string("economicTrends", &self.economic_trends)?;
        Ok(())
    }
}

impl FlowDefinition for PredictIncomeDipInput {
    fn metadata() -> FlowMetadata {
        FlowMetadata {
            id: FLOW_ID.to_string(),
            name: "Income Intelligence & Forecasting".to_string(),
            description:
                "Analyze historical income data to forecast weekly income and proactively identify potential income dips."
                    .to_string(),
        }
    }

    fn input_fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema {
                name: "historicalIncomeData".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "Historical Income Data (as JSON)".to_string(),
                description: "Historical income data, as a JSON string.".to_string(),
                required: true,
                default: Some(
                    r#"{"January": 5000, "February": 4800, "March": 5200, "April": 4500}"#
                        .to_string(),
                ),
            },
            FieldSchema {
                name: "workPattern".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "Work Pattern".to_string(),
                description: "Description of the user work pattern.".to_string(),
                required: true,
                default: Some(
                    "Freelance software developer with project-based income.".to_string(),
                ),
            },
            FieldSchema {
                name: "economicTrends".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "Economic Trends".to_string(),
                description: "Description of current economic trends.".to_string(),
                required: true,
                default: Some("Tech industry is seeing a slight slowdown in hiring.".to_string()),
            },
        ]
    }
}

/// Output record for income dip prediction
///
/// The forecast and dip fields are JSON strings produced by the model;
/// they are passed through without being parsed or verified here, and
/// consumers must handle parse failures themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictIncomeDipOutput {
    /// Forecast of weekly income, as a JSON string
    pub weekly_income_forecast: String,
    /// Identification of potential income dips, as a JSON string
    pub potential_income_dips: String,
    /// Recommendations to avoid income shortfalls
    pub recommendations: String,
}

pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "weeklyIncomeForecast": {
                "type": "string",
                "description": "Forecast of weekly income, as a JSON string."
            },
            "potentialIncomeDips": {
                "type": "string",
                "description": "Identification of potential income dips, as a JSON string."
            },
            "recommendations": {
                "type": "string",
                "description": "Recommendations to avoid income shortfalls."
            }
        },
        "required": ["weeklyIncomeForecast", "potentialIncomeDips", "recommendations"]
    })
}

/// Forecast weekly income and identify potential dips
pub async fn predict_income_dip<B: GenerationBackend>(
    backend: &B,
    input: &PredictIncomeDipInput,
) -> Result<PredictIncomeDipOutput, FlowError> {
    input.validate()?;

    let prompt = render(
        PROMPT,
        &[
            (
                "historicalIncomeData",
                input.historical_income_data.as_str(),
            ),
            ("workPattern", input.work_pattern.as_str()),
            ("economicTrends", input.economic_trends.as_str()),
        ],
    );

    super::invoke(
        backend,
        FLOW_ID,
        "Forecasting weekly income",
        &prompt,
        &output_schema(),
    )
    .await
}
