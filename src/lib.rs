pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::{MemorySink, StdoutSink};
pub use config::Scenario;
pub use core::demonstration::{Demonstration, RunSummary};
pub use utils::error::{Result, UniversityError};
