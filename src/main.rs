use clap::Parser;
use university_patterns::domain::ports::LineSink;
use university_patterns::utils::logger::{self, LogFormat};
use university_patterns::utils::validation::Validate;
use university_patterns::{CliConfig, Demonstration, Result, Scenario, StdoutSink, UniversityError};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    let format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::info!("Starting university-patterns");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let scenario = match config.load_scenario() {
        Ok(scenario) => scenario,
        Err(e) => exit_with(&e),
    };

    let mut sink = StdoutSink::new();
    let outcome = if config.dry_run {
        dry_run(&scenario, &mut sink)
    } else {
        Demonstration::new(scenario).run(&mut sink).map(|_| ())
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }
}

fn dry_run(scenario: &Scenario, sink: &mut dyn LineSink) -> Result<()> {
    scenario.validate()?;
    tracing::info!("🔍 Dry run, scenario '{}' is valid", scenario.scenario.name);
    sink.emit(&scenario.to_json_pretty()?)
}

fn exit_with(e: &UniversityError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    std::process::exit(e.severity().exit_code());
}
