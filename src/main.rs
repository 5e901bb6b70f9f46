use clap::Parser;
use pet_plans::core::orchestrator::PlanOrchestrator;
use pet_plans::domain::model::{PetProfile, PlanCategory, PlanOutcome};
use pet_plans::utils::error::{ErrorSeverity, PlanError};
use pet_plans::utils::monitor::SystemMonitor;
use pet_plans::utils::{logger, validation::Validate};
use pet_plans::{CliConfig, OpenAiClient, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pet-plans CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!(
            "❌ Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        exit_for(&e);
    }

    let mut monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let category = PlanCategory::parse(&config.plan_type);
    let profile = PetProfile::from_raw(
        &config.species,
        &config.breed,
        &config.age,
        &config.weight,
        &config.activity_level,
        config.notes.as_deref(),
    );

    // 離線模式或缺 API key 時直接用本地模板
    let outcome = if config.offline {
        PlanOrchestrator::<OpenAiClient>::offline()
            .generate(&category, &profile)
            .await
    } else {
        let service = ServiceConfig::from_env();
        match OpenAiClient::from_config(&service) {
            Ok(client) => {
                PlanOrchestrator::new(client)
                    .generate(&category, &profile)
                    .await
            }
            Err(e) => {
                tracing::warn!("⚠️ {} - generating plan locally instead", e);
                PlanOrchestrator::<OpenAiClient>::offline()
                    .generate(&category, &profile)
                    .await
            }
        }
    };

    monitor.log_stats("Plan generation");

    match &outcome {
        PlanOutcome::Remote { model, .. } => {
            tracing::info!("✅ Plan generated remotely by {}", model);
        }
        PlanOutcome::Fallback { reason, .. } => {
            tracing::info!("📋 Plan generated locally ({})", reason);
        }
    }

    println!("{}", outcome.text());

    if let Some(output) = &config.output {
        if let Err(e) = std::fs::write(output, outcome.text()) {
            let e = PlanError::from(e);
            tracing::error!(
                "❌ Could not write plan to {}: {} (Severity: {:?})",
                output,
                e,
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            exit_for(&e);
        }
        tracing::info!("📁 Plan saved to: {}", output);
        println!("📁 Plan saved to: {}", output);
    }

    Ok(())
}

// 根據錯誤嚴重程度決定退出碼
fn exit_for(e: &PlanError) -> ! {
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
