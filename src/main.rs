use clap::Parser;
use rerun_loader_collada::utils::error::ErrorSeverity;
use rerun_loader_collada::utils::{logger, validation::Validate};
use rerun_loader_collada::{ColladaPipeline, LoaderConfig, LoaderEngine, RerunSink};

fn main() -> anyhow::Result<()> {
    let config = LoaderConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rerun-loader-collada");
    if config.verbose {
        tracing::debug!("Loader config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // Tell the viewer we do not support this kind of file. Not an error:
    // the viewer probes every loader on $PATH with every file it opens.
    if !config.is_compatible() {
        tracing::debug!("Incompatible file: {}", config.filepath.display());
        std::process::exit(rerun::EXTERNAL_DATA_LOADER_INCOMPATIBLE_EXIT_CODE);
    }

    if !config.time.is_empty() || !config.sequence.is_empty() {
        tracing::debug!("Timepoint arguments accepted for protocol compatibility, not applied");
    }

    let sink = RerunSink::stdout(&config)?;
    let pipeline = ColladaPipeline::new(sink, config);
    let engine = LoaderEngine::new(pipeline);

    match engine.run() {
        Ok(logged) => {
            tracing::info!("Streamed {} record(s) to stdout", logged);
        }
        Err(e) => {
            tracing::error!(
                "Loading failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            // 66 is reserved for the incompatible-file answer above.
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
