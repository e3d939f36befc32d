//! Scam and fraud simulation flow
//!
//! Simulates a scam scenario (phishing email, fake phone call,
//! investment scam) personalized to the user, then explains the red
//! flags and how to avoid the scam in the future.

use gemini_sdk::GenerationBackend;
use hercules_sdk::template::render;
use hercules_sdk::validation::validate_non_empty_string;
use hercules_sdk::{
    FieldSchema, FieldType, FlowDefinition, FlowError, FlowMetadata, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const FLOW_ID: &str = "simulate-scam";

const PROMPT: &str = r#"You are an AI scam simulator. You will simulate a specific type of scam based on user input.

Scam Type: {{scamType}}
User Details: {{userDetails}}

Create a realistic simulation of the scam. After the simulation, explain the red flags and how to avoid this scam in the future.
"#;

/// Input record for scam simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateScamInput {
    /// The type of scam to simulate
    pub scam_type: String,
    /// Details about the user to personalize the simulation
    pub user_details: String,
}

impl SimulateScamInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_empty_string("scamType", &self.scam_type)?;
        validate_non_empty_string("userDetails", &self.user_details)?;
        Ok(())
    }
}

impl FlowDefinition for SimulateScamInput {
    fn metadata() -> FlowMetadata {
        FlowMetadata {
            id: FLOW_ID.to_string(),
            name: "Scam & Fraud Simulation".to_string(),
            description:
                "Simulate fake calls and scams to enhance user awareness and protection against financial fraud."
                    .to_string(),
        }
    }

    fn input_fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema {
                name: "scamType".to_string(),
                field_type: FieldType::Select {
                    options: vec![
                        "phishing email".to_string(),
                        "fake phone call".to_string(),
                        "investment scam".to_string(),
                    ],
                },
                label: "Scam Type".to_string(),
                description:
                    "The type of scam to simulate, e.g., phishing email, fake phone call, investment scam."
                        .to_string(),
                required: true,
                default: Some("phishing email".to_string()),
            },
            FieldSchema {
                name: "userDetails".to_string(),
                field_type: FieldType::Text { min_len: None },
                label: "User Details".to_string(),
                description:
                    "Details about the user to personalize the scam simulation, such as name, location, and financial situation."
                        .to_string(),
                required: true,
                default: Some(
                    "My name is Alex, I live in California, and I bank with ExampleBank."
                        .to_string(),
                ),
            },
        ]
    }
}

/// Output record for scam simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateScamOutput {
    /// The text of the scam simulation
    pub simulation_text: String,
    /// Red flags and avoidance guidance
    pub explanation: String,
}

pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "simulationText": {
                "type": "string",
                "description": "The text of the scam simulation, e.g., the phishing email or phone call script."
            },
            "explanation": {
                "type": "string",
                "description": "An explanation of the scam, including red flags and how to avoid it in the future."
            }
        },
        "required": ["simulationText", "explanation"]
    })
}

/// Simulate a scam scenario for awareness training
pub async fn simulate_scam<B: GenerationBackend>(
    backend: &B,
    input: &SimulateScamInput,
) -> Result<SimulateScamOutput, FlowError> {
    input.validate()?;

    let prompt = render(
        PROMPT,
        &[
            ("scamType", input.scam_type.as_str()),
            ("userDetails", input.user_details.as_str()),
        ],
    );

    super::invoke(
        backend,
        FLOW_ID,
        "Simulating scam scenario",
        &prompt,
        &output_schema(),
    )
    .await
}
