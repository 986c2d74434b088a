// src/main.rs
// Diário Cultural - terminal entry point

use std::env;
use std::io;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter as LogLevelFilter;

use diario_cultural::application::{run_menu, AppState, Console, RustylineSource};
use diario_cultural::{bootstrap, AppConfig};

fn init_env_logger(log_level_filter: LogLevelFilter) {
    let mut logger_builder = LoggerBuilder::new();
    logger_builder.filter(None, log_level_filter);

    if let Ok(rust_log_var) = env::var("RUST_LOG") {
        logger_builder.parse_filters(&rust_log_var);
    }

    logger_builder.init();
    log::debug!("Log level filter set to {}", log_level_filter);
}

fn init_env_logger_verbosity(verbosity: u8) {
    let log_level_filter = match verbosity {
        0 => LogLevelFilter::Error,
        1 => LogLevelFilter::Warn,
        2 => LogLevelFilter::Info,
        3 => LogLevelFilter::Debug,
        _ => LogLevelFilter::Trace,
    };
    init_env_logger(log_level_filter);
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    init_env_logger_verbosity(config.verbose);

    // 1. DATA + SERVICES
    let catalog_service = bootstrap(&config)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?;

    // 2. APPLICATION STATE
    let mut state = AppState::new(config, catalog_service);

    // 3. TERMINAL
    let input = RustylineSource::new().context("Failed to initialize the terminal")?;
    let mut console = Console::new(input, io::stdout());
    run_menu(&mut console, &mut state)?;

    Ok(())
}
