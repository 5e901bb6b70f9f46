pub mod classifier;
pub mod orchestrator;
pub mod prompts;
pub mod templates;
