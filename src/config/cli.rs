use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pet-plans")]
#[command(about = "Generate pet care plans, remotely via an LLM or locally from templates")]
pub struct CliConfig {
    #[arg(long, default_value = "dog")]
    pub species: String,

    #[arg(long, default_value = "mixed")]
    pub breed: String,

    /// Age in years; unparseable values fall back to 1
    #[arg(long, default_value = "1")]
    pub age: String,

    /// Weight; unparseable values fall back to 10
    #[arg(long, default_value = "10")]
    pub weight: String,

    #[arg(long, default_value = "Moderate")]
    pub activity_level: String,

    /// Free-text notes echoed into the plan's special considerations
    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long, default_value = "nutrition")]
    pub plan_type: String,

    /// Skip the remote call and render the template directly
    #[arg(long)]
    pub offline: bool,

    /// Write the plan to this file instead of stdout only
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory usage around generation")]
    pub monitor: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("species", &self.species)?;
        validate_non_empty_string("plan_type", &self.plan_type)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
