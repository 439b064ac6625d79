//! Coursescope CLI entrypoint for course review pages.

use std::io::{self, Write};
use std::process::ExitCode;

use coursescope::{CoursescopeConfig, OperationMode, ReviewApiError};
use ortho_config::OrthoConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr log subscriber filtered by `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run() -> Result<(), ReviewApiError> {
    let config = load_config()?;
    config.validate()?;

    match config.operation_mode() {
        OperationMode::Summary => cli::summary::run(&config).await,
        OperationMode::CourseTui => cli::course_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewApiError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CoursescopeConfig, ReviewApiError> {
    CoursescopeConfig::load().map_err(|error| ReviewApiError::Configuration {
        message: error.to_string(),
    })
}
