//! Flow modules
//!
//! A flow pairs a typed input record, a prompt template, and a typed
//! output record, and performs exactly one backend request per
//! invocation: validate input, render the template, ask the backend for
//! schema-conformant JSON, deserialize, return. No retries, no caching,
//! no deduplication; concurrent invocations are independent and share
//! no state.

pub mod crisis_plan;
pub mod cultural_investment;
pub mod distress;
pub mod income_dip;
pub mod scam_simulation;
pub mod translate;

use gemini_sdk::GenerationBackend;
use hercules_sdk::{log_flow_complete, log_flow_failed, log_flow_start, FlowError, FlowMetadata};
use serde::de::DeserializeOwned;
use serde_json::Value;

// Re-export commonly used types
pub use crisis_plan::{generate_crisis_plan, CrisisPlanInput, CrisisPlanOutput};
pub use cultural_investment::{
    cultural_investment_guidance, CulturalInvestmentGuidanceInput, CulturalInvestmentGuidanceOutput,
};
pub use distress::{
    detect_financial_distress, FinancialDistressInput, FinancialDistressOutput, SentimentIndicator,
};
pub use income_dip::{predict_income_dip, PredictIncomeDipInput, PredictIncomeDipOutput};
pub use scam_simulation::{simulate_scam, SimulateScamInput, SimulateScamOutput};
pub use translate::{translate_text, TranslateTextInput, TranslateTextOutput};

/// Metadata for every flow in the library, for form rendering and
/// discovery by the presentation layer
pub fn all_flow_metadata() -> Vec<FlowMetadata> {
    use hercules_sdk::FlowDefinition;

    vec![
        PredictIncomeDipInput::metadata(),
        CrisisPlanInput::metadata(),
        CulturalInvestmentGuidanceInput::metadata(),
        SimulateScamInput::metadata(),
        FinancialDistressInput::metadata(),
        TranslateTextInput::metadata(),
    ]
}

/// Execute one backend request for a flow and deserialize the result
///
/// Handles start/complete/failed logging, promotion of empty payloads
/// to the flow-level missing-output condition, and deserialization into
/// the typed output record. Fields documented as JSON strings are not
/// parsed here; they pass through to the caller unchanged.
pub(crate) async fn invoke<B, T>(
    backend: &B,
    flow: &str,
    description: &str,
    prompt: &str,
    output_schema: &Value,
) -> Result<T, FlowError>
where
    B: GenerationBackend,
    T: DeserializeOwned,
{
    log_flow_start!(flow, description);

    let value = match backend.generate_structured(prompt, output_schema).await {
        Ok(value) => value,
        Err(e) => {
            log_flow_failed!(flow, e);
            return Err(FlowError::from_backend(flow, e));
        }
    };

    if value.is_null() {
        let err = FlowError::MissingOutput {
            flow: flow.to_string(),
        };
        log_flow_failed!(flow, err);
        return Err(err);
    }

    match serde_json::from_value(value) {
        Ok(output) => {
            log_flow_complete!(flow);
            Ok(output)
        }
        Err(e) => {
            log_flow_failed!(flow, e);
            Err(FlowError::Backend(gemini_sdk::GeminiError::schema_mismatch(
                e.to_string(),
            )))
        }
    }
}
