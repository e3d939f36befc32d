//! Validation failures must be raised before any backend call

use super::common::*;
use hercules_flows::flows::{
    cultural_investment_guidance, detect_financial_distress, generate_crisis_plan,
    predict_income_dip, simulate_scam, translate_text, TranslateTextInput,
};
use hercules_sdk::FlowError;
use serde_json::json;

#[tokio::test]
async fn test_income_dip_empty_field_fails_without_backend_call() {
    let backend = MockBackend::returning(json!({}));
    let mut input = sample_income_dip_input();
    input.work_pattern = "   ".to_string();

    let err = predict_income_dip(&backend, &input).await.unwrap_err();
    match err {
        FlowError::Validation(validation) => assert_eq!(validation.field, "workPattern"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_crisis_plan_negative_shortfall_fails_without_backend_call() {
    let backend = MockBackend::returning(json!({}));
    let mut input = sample_crisis_plan_input();
    input.shortfall_amount = -10000.0;

    let err = generate_crisis_plan(&backend, &input).await.unwrap_err();
    match err {
        FlowError::Validation(validation) => assert_eq!(validation.field, "shortfallAmount"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_cultural_investment_negative_amount_fails_without_backend_call() {
    let backend = MockBackend::returning(json!({}));
    let mut input = sample_cultural_investment_input();
    input.investment_amount = -500.0;

    let err = cultural_investment_guidance(&backend, &input)
        .await
        .unwrap_err();
    match err {
        FlowError::Validation(validation) => {
            assert_eq!(validation.field, "investmentAmount");
            assert_eq!(validation.reason, "must be a positive number");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_scam_simulation_empty_type_fails_without_backend_call() {
    let backend = MockBackend::returning(json!({}));
    let mut input = sample_scam_input();
    input.scam_type = String::new();

    let err = simulate_scam(&backend, &input).await.unwrap_err();
    assert!(matches!(err, FlowError::Validation(_)));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_distress_short_text_fails_without_backend_call() {
    let backend = MockBackend::returning(json!({}));
    let mut input = sample_distress_input();
    input.text = "too short".to_string();

    let err = detect_financial_distress(&backend, &input)
        .await
        .unwrap_err();
    match err {
        FlowError::Validation(validation) => assert_eq!(validation.field, "text"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_translate_unknown_language_fails_without_backend_call() {
    let backend = MockBackend::returning(json!({}));
    let input = TranslateTextInput {
        text: "Dashboard".to_string(),
        target_lang: "de".to_string(),
    };

    let err = translate_text(&backend, &input).await.unwrap_err();
    match err {
        FlowError::Validation(validation) => assert_eq!(validation.field, "targetLang"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(backend.call_count(), 0);
}
