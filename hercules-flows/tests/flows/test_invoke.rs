//! Wrapper behavior: echo round-trips, error taxonomy, no deduplication

use super::common::*;
use hercules_flows::flows::{
    cultural_investment_guidance, detect_financial_distress, generate_crisis_plan,
    predict_income_dip, simulate_scam, translate_text, SentimentIndicator, TranslateTextInput,
};
use hercules_sdk::FlowError;
use serde_json::json;

#[tokio::test]
async fn test_income_dip_round_trip_unchanged() {
    let payload = json!({
        "weeklyIncomeForecast": "{\"week1\": 9500, \"week2\": 9200}",
        "potentialIncomeDips": "{\"week3\": \"monsoon slowdown\"}",
        "recommendations": "Save 10% of each payout during peak weeks."
    });
    let backend = MockBackend::returning(payload.clone());

    let output = predict_income_dip(&backend, &sample_income_dip_input())
        .await
        .unwrap();

    // No field renaming, coercion, or loss
    assert_eq!(serde_json::to_value(&output).unwrap(), payload);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_crisis_plan_round_trip_unchanged() {
    let payload = json!({
        "plan": "### Step 1\n* Pause non-essential subscriptions",
        "estimatedDuration": "About 2 months",
        "suggestedResources": "* Maharashtra state welfare portal"
    });
    let backend = MockBackend::returning(payload.clone());

    let output = generate_crisis_plan(&backend, &sample_crisis_plan_input())
        .await
        .unwrap();
    assert_eq!(serde_json::to_value(&output).unwrap(), payload);
}

#[tokio::test]
async fn test_cultural_investment_round_trip_unchanged() {
    let payload = json!({
        "guidance": "Consider gold bonds this Diwali instead of physical gold."
    });
    let backend = MockBackend::returning(payload.clone());

    let output = cultural_investment_guidance(&backend, &sample_cultural_investment_input())
        .await
        .unwrap();
    assert_eq!(serde_json::to_value(&output).unwrap(), payload);
}

#[tokio::test]
async fn test_scam_round_trip_unchanged() {
    let payload = json!({
        "simulationText": "Sir, your account will be blocked today unless...",
        "explanation": "Urgency and secrecy are the red flags here."
    });
    let backend = MockBackend::returning(payload.clone());

    let output = simulate_scam(&backend, &sample_scam_input()).await.unwrap();
    assert_eq!(serde_json::to_value(&output).unwrap(), payload);
}

#[tokio::test]
async fn test_translate_round_trip_unchanged() {
    let payload = json!({ "translation": "डैशबोर्ड" });
    let backend = MockBackend::returning(payload.clone());

    let input = TranslateTextInput {
        text: "Dashboard".to_string(),
        target_lang: "hi".to_string(),
    };
    let output = translate_text(&backend, &input).await.unwrap();
    assert_eq!(serde_json::to_value(&output).unwrap(), payload);
}

#[tokio::test]
async fn test_distress_scenario_with_indicator() {
    let backend = MockBackend::returning(json!({
        "isDistressed": true,
        "sentimentScore": -0.6,
        "reason": "negative language about unexpected expense"
    }));

    let output = detect_financial_distress(&backend, &sample_distress_input())
        .await
        .unwrap();

    assert!(output.is_distressed);
    assert_eq!(output.sentiment_score, -0.6);
    assert_eq!(output.reason, "negative language about unexpected expense");
    assert_eq!(
        SentimentIndicator::from_score(output.sentiment_score),
        SentimentIndicator::Distressed
    );
}

#[tokio::test]
async fn test_invalid_json_string_field_passes_through() {
    // A documented "JSON string" field holding invalid JSON is not
    // parsed or rejected by the wrapper
    let payload = json!({
        "weeklyIncomeForecast": "{not valid json at all",
        "potentialIncomeDips": "also } not { json",
        "recommendations": "Keep a buffer."
    });
    let backend = MockBackend::returning(payload.clone());

    let output = predict_income_dip(&backend, &sample_income_dip_input())
        .await
        .unwrap();
    assert_eq!(output.weekly_income_forecast, "{not valid json at all");
    assert_eq!(serde_json::to_value(&output).unwrap(), payload);
}

#[tokio::test]
async fn test_missing_output_is_first_class_error() {
    let backend = MockBackend::missing_output();

    let err = detect_financial_distress(&backend, &sample_distress_input())
        .await
        .unwrap_err();
    match err {
        FlowError::MissingOutput { flow } => assert_eq!(flow, "detect-financial-distress"),
        other => panic!("expected MissingOutput, got {:?}", other),
    }
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_null_payload_is_missing_output() {
    let backend = MockBackend::returning(json!(null));

    let err = predict_income_dip(&backend, &sample_income_dip_input())
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::MissingOutput { .. }));
}

#[tokio::test]
async fn test_backend_error_propagates_without_retry() {
    let backend = MockBackend::api_error(503, "service unavailable");

    let err = generate_crisis_plan(&backend, &sample_crisis_plan_input())
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::Backend(_)));
    // One attempt, no retry
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_nonconformant_payload_is_backend_error() {
    // Missing required field in the reply
    let backend = MockBackend::returning(json!({ "guidance": 42 }));

    let err = cultural_investment_guidance(&backend, &sample_cultural_investment_input())
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::Backend(_)));
}

#[tokio::test]
async fn test_identical_invocations_are_not_deduplicated() {
    let backend = MockBackend::returning(json!({
        "guidance": "Recurring deposits are a steady festival option."
    }));
    let input = sample_cultural_investment_input();

    let (first, second) = tokio::join!(
        cultural_investment_guidance(&backend, &input),
        cultural_investment_guidance(&backend, &input),
    );

    assert_eq!(first.unwrap(), second.unwrap());
    // One backend call per invocation, even for identical input
    assert_eq!(backend.call_count(), 2);
}
