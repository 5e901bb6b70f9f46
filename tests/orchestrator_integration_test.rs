use httpmock::prelude::*;
use pet_plans::core::orchestrator::PlanOrchestrator;
use pet_plans::domain::model::{FallbackReason, PetProfile, PlanCategory, PlanOutcome};
use pet_plans::{OpenAiClient, ServiceConfig};

fn test_config(base_url: String) -> ServiceConfig {
    ServiceConfig {
        api_key: Some("test-key".to_string()),
        api_base: base_url,
        model: "gpt-4o-mini".to_string(),
        max_tokens: 1024,
        temperature: 0.7,
    }
}

fn labrador() -> PetProfile {
    PetProfile::from_raw("dog", "Labrador", "3", "60", "High", None)
}

#[tokio::test]
async fn remote_success_returns_completion_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("Authorization", "Bearer test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "model": "gpt-4o-mini",
                "choices": [
                    {"message": {"role": "assistant", "content": "# Custom Remote Plan\n- step one"}}
                ]
            }));
    });

    let client = OpenAiClient::from_config(&test_config(server.base_url())).unwrap();
    let orchestrator = PlanOrchestrator::new(client);
    let outcome = orchestrator
        .generate(&PlanCategory::Nutrition, &labrador())
        .await;

    mock.assert();
    match outcome {
        PlanOutcome::Remote { text, model } => {
            assert_eq!(text, "# Custom Remote Plan\n- step one");
            assert_eq!(model, "gpt-4o-mini");
        }
        other => panic!("expected remote outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn rate_limited_call_falls_back_to_template() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(429)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": {"message": "Rate limit reached"}}));
    });

    let client = OpenAiClient::from_config(&test_config(server.base_url())).unwrap();
    let orchestrator = PlanOrchestrator::new(client);
    let outcome = orchestrator
        .generate(&PlanCategory::Nutrition, &labrador())
        .await;

    mock.assert();
    match outcome {
        PlanOutcome::Fallback { text, reason } => {
            assert_eq!(reason, FallbackReason::HttpStatus(429));
            // 60 磅的狗:每餐 round(60*0.15)=9,整日 round(60*0.30)=18
            assert!(text.contains("Morning meal: 9 oz"));
            assert!(text.contains("approximately 18 oz"));
            assert!(text.contains("increase portions by 15-20%"));
        }
        other => panic!("expected fallback outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_endpoint_falls_back_to_template() {
    // 指向沒有人監聽的 port
    let config = test_config("http://127.0.0.1:1".to_string());
    let client = OpenAiClient::from_config(&config).unwrap();
    let orchestrator = PlanOrchestrator::new(client);

    let outcome = orchestrator
        .generate(&PlanCategory::Grooming, &labrador())
        .await;

    match outcome {
        PlanOutcome::Fallback { text, reason } => {
            assert!(matches!(reason, FallbackReason::Transport(_)));
            assert!(text.contains("# Grooming Plan for Labrador"));
        }
        other => panic!("expected fallback outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_choices_falls_back_to_template() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"model": "gpt-4o-mini", "choices": []}));
    });

    let client = OpenAiClient::from_config(&test_config(server.base_url())).unwrap();
    let orchestrator = PlanOrchestrator::new(client);
    let outcome = orchestrator
        .generate(&PlanCategory::Social, &labrador())
        .await;

    match outcome {
        PlanOutcome::Fallback { reason, .. } => {
            assert_eq!(reason, FallbackReason::EmptyCompletion)
        }
        other => panic!("expected fallback outcome, got {:?}", other),
    }
}
