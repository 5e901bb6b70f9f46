use crate::domain::model::Completion;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 遠端 completion 服務的介面。orchestrator 只依賴這個 trait,
/// 測試時可以換成 mock 或直接指向 httpmock server。
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<Completion>;
}
