use anyhow::Result;
use httpmock::prelude::*;
use pet_plans::app::handlers::{
    cors_headers, handle_care_plan, handle_diet_plan, handle_preflight, route,
    MISSING_CREDENTIAL_ERROR,
};
use pet_plans::ServiceConfig;

fn config_without_key() -> ServiceConfig {
    ServiceConfig {
        api_key: None,
        api_base: "https://api.openai.com".to_string(),
        model: "gpt-4o-mini".to_string(),
        max_tokens: 1024,
        temperature: 0.7,
    }
}

fn config_with_key(base_url: String) -> ServiceConfig {
    ServiceConfig {
        api_key: Some("test-key".to_string()),
        api_base: base_url,
        ..config_without_key()
    }
}

#[tokio::test]
async fn missing_credential_is_a_500_not_a_fallback() {
    let body = serde_json::json!({
        "petType": "dog", "breed": "Labrador", "age": "3",
        "weight": "60", "activityLevel": "High"
    });

    let response = handle_diet_plan(&body.to_string(), &config_without_key()).await;
    assert_eq!(response.status, 500);
    assert_eq!(
        response.body.unwrap(),
        serde_json::json!({ "error": MISSING_CREDENTIAL_ERROR })
    );
}

#[tokio::test]
async fn preflight_is_empty_with_cors_headers() {
    let response = handle_preflight();
    assert_eq!(response.status, 200);
    assert!(response.body.is_none());

    let headers = cors_headers();
    assert!(headers.contains(&("Access-Control-Allow-Origin", "*")));
    let allow = headers
        .iter()
        .find(|(name, _)| *name == "Access-Control-Allow-Headers")
        .unwrap()
        .1;
    for required in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(allow.contains(required), "missing {}", required);
    }
}

#[tokio::test]
async fn unknown_paths_and_methods_are_rejected() {
    let config = config_without_key();
    let body = serde_json::json!({"petType": "dog"}).to_string();

    // 不認得的 POST 路徑不能默默當成 diet-plan
    let response = route("POST", "/unknown", &body, &config).await;
    assert_eq!(response.status, 404);

    let response = route("GET", "/diet-plan", &body, &config).await;
    assert_eq!(response.status, 405);

    // 兩條已註冊的路徑照常分派(缺 credential 所以是 500)
    let response = route("POST", "/functions/v1/diet-plan", &body, &config).await;
    assert_eq!(response.status, 500);
    let response = route("POST", "/functions/v1/care-plan", &body, &config).await;
    assert_eq!(response.status, 500);

    // preflight 不分路徑
    let response = route("OPTIONS", "/unknown", &body, &config).await;
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn malformed_body_is_a_500_error() {
    let server = MockServer::start();
    let response = handle_diet_plan("not json at all", &config_with_key(server.base_url())).await;
    assert_eq!(response.status, 500);
    assert!(response.body.unwrap()["error"].is_string());
}

#[tokio::test]
async fn upstream_429_still_returns_200_with_fallback_marker() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(429).json_body(serde_json::json!({"error": "rate limited"}));
    });

    let body = serde_json::json!({
        "petType": "dog", "breed": "Labrador", "age": "3",
        "weight": "60", "activityLevel": "High",
        "dietaryRestrictions": "no chicken"
    });

    let response = handle_diet_plan(&body.to_string(), &config_with_key(server.base_url())).await;
    mock.assert();

    assert_eq!(response.status, 200);
    let payload = response.body.unwrap();
    assert_eq!(payload["generatedBy"], "fallback");

    let plan = payload["dietPlan"].as_str().unwrap();
    assert!(plan.contains("Morning meal: 9 oz"));
    assert!(plan.contains("no chicken"));

    assert_eq!(payload["metadata"]["petType"], "dog");
    assert_eq!(payload["metadata"]["planType"], "nutrition");
    Ok(())
}

#[tokio::test]
async fn remote_success_has_no_fallback_marker() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(serde_json::json!({
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": "remote training plan"}}]
        }));
    });

    let body = serde_json::json!({
        "petType": "cat", "breed": "Siamese", "age": 2, "weight": 9,
        "activityLevel": "Low", "planType": "training"
    });

    let response = handle_care_plan(&body.to_string(), &config_with_key(server.base_url())).await;
    assert_eq!(response.status, 200);

    let payload = response.body.unwrap();
    assert_eq!(payload["carePlan"], "remote training plan");
    assert!(payload.get("generatedBy").is_none());
    assert_eq!(payload["metadata"]["model"], "gpt-4o-mini");
    assert_eq!(payload["metadata"]["planType"], "training");
    Ok(())
}

#[tokio::test]
async fn unknown_plan_type_renders_generic_fallback() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(503).body("upstream down");
    });

    let body = serde_json::json!({
        "petType": "dog", "breed": "Corgi", "age": "abc", "weight": "xyz",
        "activityLevel": "Moderate", "planType": "unknown-category"
    });

    let response = handle_care_plan(&body.to_string(), &config_with_key(server.base_url())).await;
    assert_eq!(response.status, 200);

    let payload = response.body.unwrap();
    assert_eq!(payload["generatedBy"], "fallback");

    let plan = payload["carePlan"].as_str().unwrap();
    assert!(plan.contains("Unknown-category Plan for Corgi"));
    assert!(plan.contains("Please research the specific unknown-category needs"));
    // 無法解析的數字退回預設值 age=1, weight=10
    assert!(plan.contains("- Age: 1 years"));
    assert!(plan.contains("- Weight: 10 units"));
    Ok(())
}
