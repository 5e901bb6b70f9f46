use crate::core::{prompts, templates};
use crate::domain::model::{FallbackReason, PetProfile, PlanCategory, PlanOutcome};
use crate::domain::ports::CompletionBackend;
use crate::utils::error::PlanError;

/// 遠端優先、模板兜底的計畫產生器。
///
/// 遠端呼叫的任何失敗都不會往外拋:降級成模板輸出並在
/// outcome 上標明原因。每次呼叫彼此獨立,沒有共享狀態。
pub struct PlanOrchestrator<B: CompletionBackend> {
    backend: Option<B>,
}

impl<B: CompletionBackend> PlanOrchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// 不碰網路,直接用模板。CLI 的 --offline 走這裡。
    pub fn offline() -> Self {
        Self { backend: None }
    }

    pub async fn generate(&self, category: &PlanCategory, profile: &PetProfile) -> PlanOutcome {
        let backend = match &self.backend {
            Some(backend) => backend,
            None => {
                tracing::info!("📋 Offline mode - rendering {} plan locally", category.label());
                return PlanOutcome::Fallback {
                    text: templates::render(category, profile),
                    reason: FallbackReason::Offline,
                };
            }
        };

        let pair = prompts::build_prompts(category, profile);
        tracing::debug!(
            "📡 Requesting remote {} plan for a {}",
            category.label(),
            profile.species.label()
        );

        match backend.complete(&pair.system, &pair.user).await {
            Ok(completion) if completion.text.trim().is_empty() => {
                tracing::warn!("⚠️ Remote completion was empty, falling back to template");
                PlanOutcome::Fallback {
                    text: templates::render(category, profile),
                    reason: FallbackReason::EmptyCompletion,
                }
            }
            Ok(completion) => PlanOutcome::Remote {
                text: completion.text,
                model: completion.model,
            },
            Err(error) => {
                // 失敗只記 log,不往外傳;這條路徑的存在意義就是可用性
                tracing::warn!(
                    "❌ Remote completion failed ({}), falling back to template: {}",
                    category.label(),
                    error
                );
                PlanOutcome::Fallback {
                    text: templates::render(category, profile),
                    reason: fallback_reason(&error),
                }
            }
        }
    }
}

fn fallback_reason(error: &PlanError) -> FallbackReason {
    match error {
        PlanError::CompletionError { status, .. } => FallbackReason::HttpStatus(*status),
        PlanError::EmptyCompletionError { .. } => FallbackReason::EmptyCompletion,
        other => FallbackReason::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Completion;
    use crate::utils::error::Result;
    use async_trait::async_trait;

    struct FixedBackend {
        reply: Result<Completion>,
    }

    #[async_trait]
    impl CompletionBackend for FixedBackend {
        async fn complete(&self, _system: &str, _user: &str) -> Result<Completion> {
            match &self.reply {
                Ok(completion) => Ok(completion.clone()),
                Err(PlanError::CompletionError { status, body }) => {
                    Err(PlanError::CompletionError {
                        status: *status,
                        body: body.clone(),
                    })
                }
                Err(_) => Err(PlanError::ConfigError {
                    message: "unexpected".to_string(),
                }),
            }
        }
    }

    fn sample_profile() -> PetProfile {
        PetProfile::from_raw("dog", "Labrador", "3", "60", "High", None)
    }

    #[tokio::test]
    async fn remote_text_is_returned_verbatim() {
        let orchestrator = PlanOrchestrator::new(FixedBackend {
            reply: Ok(Completion {
                text: "## Remote plan".to_string(),
                model: "gpt-4o-mini".to_string(),
            }),
        });
        let outcome = orchestrator
            .generate(&PlanCategory::Nutrition, &sample_profile())
            .await;
        match outcome {
            PlanOutcome::Remote { text, model } => {
                assert_eq!(text, "## Remote plan");
                assert_eq!(model, "gpt-4o-mini");
            }
            other => panic!("expected remote outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_failure_is_masked_by_fallback() {
        let orchestrator = PlanOrchestrator::new(FixedBackend {
            reply: Err(PlanError::CompletionError {
                status: 429,
                body: "rate limited".to_string(),
            }),
        });
        let outcome = orchestrator
            .generate(&PlanCategory::Nutrition, &sample_profile())
            .await;
        match outcome {
            PlanOutcome::Fallback { text, reason } => {
                assert!(!text.is_empty());
                assert_eq!(reason, FallbackReason::HttpStatus(429));
                assert!(text.contains("increase portions by 15-20%"));
            }
            other => panic!("expected fallback outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_completion_falls_back() {
        let orchestrator = PlanOrchestrator::new(FixedBackend {
            reply: Ok(Completion {
                text: "   ".to_string(),
                model: "gpt-4o-mini".to_string(),
            }),
        });
        let outcome = orchestrator
            .generate(&PlanCategory::Training, &sample_profile())
            .await;
        assert!(outcome.is_fallback());
    }

    #[tokio::test]
    async fn offline_mode_never_calls_backend() {
        let orchestrator: PlanOrchestrator<FixedBackend> = PlanOrchestrator::offline();
        let outcome = orchestrator
            .generate(&PlanCategory::Grooming, &sample_profile())
            .await;
        match outcome {
            PlanOutcome::Fallback { reason, .. } => assert_eq!(reason, FallbackReason::Offline),
            other => panic!("expected fallback outcome, got {:?}", other),
        }
    }
}
