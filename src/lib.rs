pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::openai::OpenAiClient;
pub use crate::config::ServiceConfig;
pub use crate::core::orchestrator::PlanOrchestrator;
pub use crate::domain::model::{PetProfile, PlanCategory, PlanOutcome, Species};
pub use crate::utils::error::{PlanError, Result};
