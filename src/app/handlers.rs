use crate::adapters::openai::OpenAiClient;
use crate::app::types::{value_to_string, ApiResponse, CarePlanRequest, DietPlanRequest};
use crate::config::ServiceConfig;
use crate::core::orchestrator::PlanOrchestrator;
use crate::domain::model::{PetProfile, PlanCategory, PlanOutcome};
use chrono::Utc;
use serde_json::json;

pub const MISSING_CREDENTIAL_ERROR: &str = "OpenAI API key not configured";

/// 兩個端點共用的 CORS 標頭,所有回應(含 preflight)都要帶。
pub fn cors_headers() -> [(&'static str, &'static str); 2] {
    [
        ("Access-Control-Allow-Origin", "*"),
        (
            "Access-Control-Allow-Headers",
            "authorization, x-client-info, apikey, content-type",
        ),
    ]
}

pub fn handle_preflight() -> ApiResponse {
    ApiResponse::empty(200)
}

/// 依 method 與路徑把請求分派到對應的 handler。
/// 只認得 /diet-plan 與 /care-plan 兩條路徑,其他 POST 一律 404。
pub async fn route(method: &str, path: &str, raw_body: &str, config: &ServiceConfig) -> ApiResponse {
    match method {
        "OPTIONS" => handle_preflight(),
        "POST" if path.ends_with("/care-plan") => handle_care_plan(raw_body, config).await,
        "POST" if path.ends_with("/diet-plan") => handle_diet_plan(raw_body, config).await,
        "POST" => {
            tracing::warn!("⚠️ No endpoint registered for {}", path);
            ApiResponse::error(404, "not found")
        }
        _ => ApiResponse::error(405, "method not allowed"),
    }
}

/// POST /diet-plan — planType 固定是 nutrition。
pub async fn handle_diet_plan(raw_body: &str, config: &ServiceConfig) -> ApiResponse {
    // 缺 credential 是設定錯誤,大聲回報而不是默默降級
    if !config.has_credential() {
        tracing::error!("❌ {}", MISSING_CREDENTIAL_ERROR);
        return ApiResponse::error(500, MISSING_CREDENTIAL_ERROR);
    }

    let request: DietPlanRequest = match serde_json::from_str(raw_body) {
        Ok(request) => request,
        Err(error) => {
            tracing::error!("❌ Malformed diet plan request: {}", error);
            return ApiResponse::error(500, &error.to_string());
        }
    };

    let profile = PetProfile::from_raw(
        request.pet_type.as_deref().unwrap_or(""),
        request.breed.as_deref().unwrap_or(""),
        &value_to_string(&request.age),
        &value_to_string(&request.weight),
        request.activity_level.as_deref().unwrap_or(""),
        request.dietary_restrictions.as_deref(),
    );

    let outcome = generate(config, &PlanCategory::Nutrition, &profile).await;
    respond("dietPlan", &PlanCategory::Nutrition, &profile, outcome)
}

/// POST /care-plan — planType 來自請求,未知值走通用模板。
pub async fn handle_care_plan(raw_body: &str, config: &ServiceConfig) -> ApiResponse {
    if !config.has_credential() {
        tracing::error!("❌ {}", MISSING_CREDENTIAL_ERROR);
        return ApiResponse::error(500, MISSING_CREDENTIAL_ERROR);
    }

    let request: CarePlanRequest = match serde_json::from_str(raw_body) {
        Ok(request) => request,
        Err(error) => {
            tracing::error!("❌ Malformed care plan request: {}", error);
            return ApiResponse::error(500, &error.to_string());
        }
    };

    let category = PlanCategory::parse(request.plan_type.as_deref().unwrap_or(""));
    let profile = PetProfile::from_raw(
        request.pet_type.as_deref().unwrap_or(""),
        request.breed.as_deref().unwrap_or(""),
        &value_to_string(&request.age),
        &value_to_string(&request.weight),
        request.activity_level.as_deref().unwrap_or(""),
        request.notes.as_deref(),
    );

    let outcome = generate(config, &category, &profile).await;
    respond("carePlan", &category, &profile, outcome)
}

async fn generate(
    config: &ServiceConfig,
    category: &PlanCategory,
    profile: &PetProfile,
) -> PlanOutcome {
    match OpenAiClient::from_config(config) {
        Ok(client) => {
            PlanOrchestrator::new(client)
                .generate(category, profile)
                .await
        }
        // credential 在 handler 入口已檢查過,這個分支正常情況下不會執行
        Err(error) => {
            tracing::warn!("⚠️ Could not build completion client: {}", error);
            PlanOrchestrator::<OpenAiClient>::offline()
                .generate(category, profile)
                .await
        }
    }
}

fn respond(
    plan_key: &str,
    category: &PlanCategory,
    profile: &PetProfile,
    outcome: PlanOutcome,
) -> ApiResponse {
    let mut metadata = json!({
        "petType": profile.species.label(),
        "planType": category.label(),
        "generatedAt": Utc::now().to_rfc3339(),
    });

    let mut body = json!({});
    body[plan_key] = json!(outcome.text());
    match &outcome {
        PlanOutcome::Remote { model, .. } => {
            metadata["model"] = json!(model);
        }
        PlanOutcome::Fallback { reason, .. } => {
            tracing::info!("📋 Served fallback {} plan ({})", category.label(), reason);
            body["generatedBy"] = json!("fallback");
        }
    }
    body["metadata"] = metadata;

    ApiResponse::ok(body)
}
