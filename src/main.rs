mod bot;
mod config;
mod data;
mod error;
mod extension;
mod model;
mod service;
mod startup;
mod transcoder;
mod util;

use std::process::ExitCode;
use std::sync::Arc;

use crate::{config::Environment, error::AppError};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let environment = match Environment::from_env() {
        Ok(environment) => environment,
        Err(e) => {
            eprintln!("Failed to resolve environment: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Directories come first since the log file lives in one of them
    let created = match startup::ensure_directories(&environment.base_dir) {
        Ok(created) => created,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = startup::init_logging(&environment.base_dir) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    for path in created {
        tracing::info!("Created missing directory {}", path.display());
    }

    match run(environment).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(environment: Environment) -> Result<(), AppError> {
    if startup::is_reset(std::env::args()) {
        startup::wait_for_previous_instance().await;
    }

    let (config, transcoder) = startup::check_environment(&environment).await?;
    let config = Arc::new(config);
    tracing::info!("Loaded config from {}", config.path().display());

    let db = startup::connect_to_database(&environment).await?;

    let disabled = config.snapshot().await.disabled_extensions;
    let commands = extension::load_extensions(extension::registry(), &disabled);

    bot::start::start_bot(config, db, transcoder, commands).await
}
