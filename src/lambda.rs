#[cfg(feature = "lambda")]
use lambda_http::{run, service_fn, Body, Error, Request, Response};
#[cfg(feature = "lambda")]
use pet_plans::app::handlers;
#[cfg(feature = "lambda")]
use pet_plans::app::types::ApiResponse;
#[cfg(feature = "lambda")]
use pet_plans::utils::logger;
#[cfg(feature = "lambda")]
use pet_plans::ServiceConfig;

/// 兩個端點共用一個 handler,用路徑區分:
/// POST /diet-plan、POST /care-plan,OPTIONS 一律回 preflight。
#[cfg(feature = "lambda")]
async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str().to_string();
    let path = event.uri().path().to_string();
    tracing::info!("📥 {} {}", method, path);

    // 每個請求讀一次設定,不讓業務邏輯自己摸環境變數
    let config = ServiceConfig::from_env();
    let body = request_body(&event);
    let api_response = handlers::route(&method, &path, &body, &config).await;

    to_http_response(api_response)
}

#[cfg(feature = "lambda")]
fn request_body(event: &Request) -> String {
    match event.body() {
        Body::Text(text) => text.clone(),
        Body::Binary(bytes) => String::from_utf8_lossy(bytes).to_string(),
        Body::Empty => String::new(),
    }
}

#[cfg(feature = "lambda")]
fn to_http_response(api: ApiResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(api.status);
    for (name, value) in handlers::cors_headers() {
        builder = builder.header(name, value);
    }

    let response = match api.body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::Text(body.to_string()))?,
        None => builder.body(Body::Empty)?,
    };
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();
    run(service_fn(function_handler)).await
}
