use crate::config::ServiceConfig;
use crate::domain::model::Completion;
use crate::domain::ports::CompletionBackend;
use crate::utils::error::{PlanError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI 相容 chat-completions 客戶端。
/// 一次呼叫就是一次 POST,不重試、不串流,逾時交給 transport 預設值。
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    /// 需要已經有 credential 的設定;缺 key 是設定錯誤,
    /// 在 handler 層就該擋下來,不會走到這裡。
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| PlanError::MissingConfigError {
                field: "OPENAI_API_KEY".to_string(),
            })?;

        Ok(Self {
            client: Client::new(),
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<Completion> {
        let url = format!("{}/v1/chat/completions", self.api_base);
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        tracing::debug!("📡 POST {} (model {})", url, self.model);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!("❌ Completion endpoint returned {}: {}", status, error_body);
            return Err(PlanError::CompletionError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let model = parsed.model.unwrap_or_else(|| self.model.clone());
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| PlanError::EmptyCompletionError {
                message: "response contained no choices".to_string(),
            })?;

        Ok(Completion { text, model })
    }
}
