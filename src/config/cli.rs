use crate::config::scenario::Scenario;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "university-patterns")]
#[command(about = "Walks through singleton, factory, adapter and composite on a small university model")]
pub struct CliConfig {
    /// Path to a TOML scenario; the built-in walkthrough runs when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Validate the scenario and print it as JSON without running it
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn load_scenario(&self) -> Result<Scenario> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading scenario from: {}", path.display());
                Scenario::from_file(path)
            }
            None => {
                tracing::debug!("No scenario file given, using the built-in walkthrough");
                Ok(Scenario::default())
            }
        }
    }
}
