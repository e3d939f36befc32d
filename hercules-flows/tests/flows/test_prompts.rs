//! Rendered prompts must contain every input value, exactly once per
//! placeholder occurrence, with no substitution points left over

use super::common::*;
use hercules_flows::flows::{
    generate_crisis_plan, predict_income_dip, simulate_scam, translate_text, TranslateTextInput,
};
use serde_json::json;

fn income_dip_reply() -> serde_json::Value {
    json!({
        "weeklyIncomeForecast": "{}",
        "potentialIncomeDips": "{}",
        "recommendations": "ok"
    })
}

#[tokio::test]
async fn test_income_dip_prompt_contains_each_value_once() {
    let backend = MockBackend::returning(income_dip_reply());
    let input = sample_income_dip_input();

    predict_income_dip(&backend, &input).await.unwrap();

    let prompt = backend.last_prompt().unwrap();
    assert_eq!(
        count_occurrences(&prompt, &input.historical_income_data),
        1
    );
    assert_eq!(count_occurrences(&prompt, &input.work_pattern), 1);
    assert_eq!(count_occurrences(&prompt, &input.economic_trends), 1);
    assert_eq!(count_occurrences(&prompt, "{{"), 0);
}

#[tokio::test]
async fn test_crisis_plan_prompt_contains_all_six_values() {
    let backend = MockBackend::returning(json!({
        "plan": "### Step 1",
        "estimatedDuration": "2 months",
        "suggestedResources": "* Local aid"
    }));
    let input = sample_crisis_plan_input();

    generate_crisis_plan(&backend, &input).await.unwrap();

    let prompt = backend.last_prompt().unwrap();
    for value in ["50000", "45000", "20000", "10000"] {
        assert_eq!(count_occurrences(&prompt, value), 1, "value {}", value);
    }
    assert_eq!(count_occurrences(&prompt, "Mumbai, MH"), 1);
    assert_eq!(
        count_occurrences(&prompt, "Rent: 15000, Groceries: 4500, Fuel: 1200"),
        1
    );
    assert_eq!(count_occurrences(&prompt, "{{"), 0);
}

#[tokio::test]
async fn test_scam_prompt_contains_both_values() {
    let backend = MockBackend::returning(json!({
        "simulationText": "Hello, this is your bank...",
        "explanation": "Banks never ask for your PIN."
    }));
    let input = sample_scam_input();

    simulate_scam(&backend, &input).await.unwrap();

    let prompt = backend.last_prompt().unwrap();
    assert_eq!(count_occurrences(&prompt, "fake phone call"), 1);
    assert_eq!(count_occurrences(&prompt, &input.user_details), 1);
    assert_eq!(count_occurrences(&prompt, "{{"), 0);
}

#[tokio::test]
async fn test_translate_prompt_contains_text_and_language_code() {
    let backend = MockBackend::returning(json!({ "translation": "डैशबोर्ड" }));
    let input = TranslateTextInput {
        text: "Dashboard overview".to_string(),
        target_lang: "hi".to_string(),
    };

    translate_text(&backend, &input).await.unwrap();

    let prompt = backend.last_prompt().unwrap();
    assert_eq!(count_occurrences(&prompt, "Dashboard overview"), 1);
    assert_eq!(count_occurrences(&prompt, "'hi'"), 1);
    assert_eq!(count_occurrences(&prompt, "{{"), 0);
}

#[tokio::test]
async fn test_backend_receives_declared_output_schema() {
    let backend = MockBackend::returning(income_dip_reply());
    let input = sample_income_dip_input();

    predict_income_dip(&backend, &input).await.unwrap();

    let schema = backend.last_schema().unwrap();
    let required = schema["required"].as_array().unwrap();
    assert!(required.contains(&json!("weeklyIncomeForecast")));
    assert!(required.contains(&json!("potentialIncomeDips")));
    assert!(required.contains(&json!("recommendations")));
    // Field descriptions ride along as generation hints
    assert_eq!(
        schema["properties"]["recommendations"]["description"],
        "Recommendations to avoid income shortfalls."
    );
}
