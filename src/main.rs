//! Showcase CLI entrypoint.

mod cli;

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use showcase::{JsonFilePreferenceStore, ShowcaseConfig, ShowcaseError};

use cli::session::Session;

#[tokio::main]
async fn main() -> ExitCode {
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

async fn run() -> Result<(), ShowcaseError> {
    let config = load_config()?;

    let mut store = JsonFilePreferenceStore::open(config.preferences_path())?;
    let locale = env::var("LANG").ok();
    let session = Session::prepare(
        &config,
        &mut store,
        locale.as_deref(),
        &mut io::stderr().lock(),
    )?;

    if config.typewriter {
        cli::typewriter::run(&session).await
    } else {
        cli::projects::run(&config, &session).await
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ShowcaseError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ShowcaseConfig, ShowcaseError> {
    ShowcaseConfig::load().map_err(|error| ShowcaseError::Configuration {
        message: error.to_string(),
    })
}
