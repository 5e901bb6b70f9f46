use serde::Deserialize;
use serde_json::Value;

/// 飲食計畫端點的請求格式(欄位皆為選填,缺漏走預設值)。
/// age/weight 可能是字串也可能是數字,由前端表單決定。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietPlanRequest {
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub age: Option<Value>,
    pub weight: Option<Value>,
    pub activity_level: Option<String>,
    pub dietary_restrictions: Option<String>,
}

/// 通用照護計畫端點的請求格式。planType 決定類別,
/// 未知值會走通用模板。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarePlanRequest {
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub age: Option<Value>,
    pub weight: Option<Value>,
    pub activity_level: Option<String>,
    pub notes: Option<String>,
    pub plan_type: Option<String>,
}

/// runtime 無關的回應形狀;lambda 入口把它轉成真正的 HTTP 回應。
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: Some(serde_json::json!({ "error": message })),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// 表單值可能是 "8"、8 或 8.5;統一轉成字串再交給 profile 解析。
pub fn value_to_string(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
