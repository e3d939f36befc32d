//! Common utilities for flow tests

use gemini_sdk::{async_trait, GeminiError, GenerationBackend};
use hercules_flows::flows::{
    CrisisPlanInput, CulturalInvestmentGuidanceInput, FinancialDistressInput,
    PredictIncomeDipInput, SimulateScamInput,
};
use serde_json::Value;
use std::sync::Mutex;

/// What the mock backend should answer with
#[derive(Clone)]
pub enum CannedReply {
    Payload(Value),
    MissingOutput,
    ApiError(u16, String),
}

/// Test double that records every request and returns a canned reply
pub struct MockBackend {
    reply: CannedReply,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockBackend {
    pub fn returning(payload: Value) -> Self {
        Self::with_reply(CannedReply::Payload(payload))
    }

    pub fn missing_output() -> Self {
        Self::with_reply(CannedReply::MissingOutput)
    }

    pub fn api_error(status: u16, message: &str) -> Self {
        Self::with_reply(CannedReply::ApiError(status, message.to_string()))
    }

    fn with_reply(reply: CannedReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// How many times the backend was invoked
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The prompt of the most recent invocation
    pub fn last_prompt(&self) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|(prompt, _)| prompt.clone())
    }

    /// The output schema of the most recent invocation
    pub fn last_schema(&self) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|(_, schema)| schema.clone())
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate_structured(
        &self,
        prompt: &str,
        output_schema: &Value,
    ) -> gemini_sdk::Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), output_schema.clone()));
        match &self.reply {
            CannedReply::Payload(payload) => Ok(payload.clone()),
            CannedReply::MissingOutput => Err(GeminiError::MissingOutput),
            CannedReply::ApiError(status, message) => Err(GeminiError::api(*status, message.clone())),
        }
    }
}

/// Number of times `needle` appears in `haystack`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

pub fn sample_income_dip_input() -> PredictIncomeDipInput {
    PredictIncomeDipInput {
        historical_income_data:
            "income was ₹40000, ₹38000, ₹42000 over three months".to_string(),
        work_pattern: "I am a delivery partner".to_string(),
        economic_trends: "monsoon coming".to_string(),
    }
}

pub fn sample_crisis_plan_input() -> CrisisPlanInput {
    CrisisPlanInput {
        income: 50000.0,
        expenses: 45000.0,
        savings: 20000.0,
        shortfall_amount: 10000.0,
        location: "Mumbai, MH".to_string(),
        recent_transactions: "Rent: 15000, Groceries: 4500, Fuel: 1200".to_string(),
    }
}

pub fn sample_cultural_investment_input() -> CulturalInvestmentGuidanceInput {
    CulturalInvestmentGuidanceInput {
        cultural_background: "North Indian".to_string(),
        festival: "Diwali".to_string(),
        location: "Mumbai".to_string(),
        investment_amount: 50000.0,
    }
}

pub fn sample_scam_input() -> SimulateScamInput {
    SimulateScamInput {
        scam_type: "fake phone call".to_string(),
        user_details: "My name is Ravi, I live in Pune, and I drive for a ride-hailing app."
            .to_string(),
    }
}

pub fn sample_distress_input() -> FinancialDistressInput {
    FinancialDistressInput {
        text: "Another unexpected bill came in".to_string(),
    }
}
