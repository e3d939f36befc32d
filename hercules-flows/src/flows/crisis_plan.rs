//! Personalized crisis plan flow
//!
//! Generates a concise, reassuring plan for managing a financial
//! shortfall: expense optimization steps, optional income enhancement,
//! a budgeting recommendation, and resources local to the user.

use gemini_sdk::GenerationBackend;
use hercules_sdk::template::render;
use hercules_sdk::validation::{validate_non_empty_string, validate_non_negative};
use hercules_sdk::{
    FieldSchema, FieldType, FlowDefinition, FlowError, FlowMetadata, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const FLOW_ID: &str = "generate-crisis-plan";

const PROMPT: &str = r#"You are a financial advisor creating a concise, personalized plan to help a user manage a financial shortfall. Be reassuring and direct.

Analyze the user's financial situation:
- Income: {{income}}
- Expenses: {{expenses}}
- Savings: {{savings}}
- Shortfall Amount: {{shortfallAmount}}
- Location: {{location}}
- Recent Transactions: {{recentTransactions}}

Generate a brief, scannable plan using Markdown. Use headings (e.g., '### Step 1'), bullet points (*), and bold text.
The plan should be short and to the point.
1. Actionable steps to optimize expenses.
2. Optional steps for income enhancement.
3. A recommendation for budgeting.

For 'suggestedResources', provide a short bulleted list of real resources in their location.

Make the entire output calm, concise, and easy to read.
"#;

/// Input record for crisis plan generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisPlanInput {
    /// The user's monthly income
    pub income: f64,
    /// The user's monthly expenses
    pub expenses: f64,
    /// The user's total savings
    pub savings: f64,
    /// The amount of the financial shortfall
    pub shortfall_amount: f64,
    /// The user's current location (city, state)
    pub location: String,
    /// A list of the user's most recent transactions
    pub recent_transactions: String,
}

impl CrisisPlanInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_negative("income", self.income)?;
        validate_non_negative("expenses", self.expenses)?;
        validate_non_negative("savings", self.savings)?;
        validate_non_negative("shortfallAmount", self.shortfall_amount)?;
        validate_non_empty_string("location", &self.location)?;
        validate_non_empty_string("recentTransactions", &self.recent_transactions)?;
        Ok(())
    }
}

impl FlowDefinition for CrisisPlanInput {
    fn metadata() -> FlowMetadata {
        FlowMetadata {
            id: FLOW_ID.to_string(),
            name: "Personalized Crisis Plan".to_string(),
            description:
                "Generate a personalized plan to manage a financial shortfall, with expense optimization and local resources."
                    .to_string(),
        }
    }

    fn input_fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema {
                name: "income".to_string(),
                field_type: FieldType::Number {
                    min: Some(0.0),
                    max: None,
                },
                label: "Monthly Income".to_string(),
                description: "The user's monthly income.".to_string(),
                required: true,
                default: Some("5000".to_string()),
            },
            FieldSchema {
                name: "expenses".to_string(),
                field_type: FieldType::Number {
                    min: Some(0.0),
                    max: None,
                },
                label: "Monthly Expenses".to_string(),
                description: "The user's monthly expenses.".to_string(),
                required: true,
                default: Some("4500".to_string()),
            },
            FieldSchema {
                name: "savings".to_string(),
                field_type: FieldType::Number {
                    min: Some(0.0),
                    max: None,
                },
                label: "Total Savings".to_string(),
                description: "The user's total savings.".to_string(),
                required: true,
                default: Some("2000".to_string()),
            },
            FieldSchema {
                name: "shortfallAmount".to_string(),
                field_type: FieldType::Number {
                    min: Some(0.0),
                    max: None,
                },
                label: "Shortfall Amount".to_string(),
                description: "The amount of the financial shortfall.".to_string(),
                required: true,
                default: Some("1000".to_string()),
            },
            FieldSchema {
                name: "location".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "Location".to_string(),
                description: "The user's current location (city, state).".to_string(),
                required: true,
                default: Some("New York, NY".to_string()),
            },
            FieldSchema {
                name: "recentTransactions".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "Recent Transactions".to_string(),
                description: "A list of user's most recent transactions.".to_string(),
                required: true,
                default: Some(
                    "Groceries: $150, Rent: $2000, Gas: $50, Dining out: $80".to_string(),
                ),
            },
        ]
    }
}

/// Output record for crisis plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisPlanOutput {
    /// A detailed plan to manage the financial shortfall
    pub plan: String,
    /// The estimated duration to overcome the financial shortfall
    pub estimated_duration: String,
    /// Resources based on the user location that may help mitigate the shortfall
    pub suggested_resources: String,
}

pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "plan": {
                "type": "string",
                "description": "A detailed plan to manage the financial shortfall, including expense optimization and resource identification."
            },
            "estimatedDuration": {
                "type": "string",
                "description": "The estimated duration to overcome the financial shortfall."
            },
            "suggestedResources": {
                "type": "string",
                "description": "A list of resources based on the user location that may help mitigate financial shortfall."
            }
        },
        "required": ["plan", "estimatedDuration", "suggestedResources"]
    })
}

/// Generate a personalized crisis plan
pub async fn generate_crisis_plan<B: GenerationBackend>(
    backend: &B,
    input: &CrisisPlanInput,
) -> Result<CrisisPlanOutput, FlowError> {
    input.validate()?;

    let income = input.income.to_string();
    let expenses = input.expenses.to_string();
    let savings = input.savings.to_string();
    let shortfall = input.shortfall_amount.to_string();
    let prompt = render(
        PROMPT,
        &[
            ("income", income.as_str()),
            ("expenses", expenses.as_str()),
            ("savings", savings.as_str()),
            ("shortfallAmount", shortfall.as_str()),
            ("location", input.location.as_str()),
            ("recentTransactions", input.recent_transactions.as_str()),
        ],
    );

    super::invoke(
        backend,
        FLOW_ID,
        "Generating crisis plan",
        &prompt,
        &output_schema(),
    )
    .await
}
