//! intake - credential-gated record submission console
//!
//! An interactive front-end for a hosted backend: log in or sign up against
//! the identity provider, insert timestamped records into a remote table,
//! and upload files to the blob store.
//!
//! # Examples
//!
//! ```bash
//! # Connection parameters from .env or the environment
//! INTAKE_BACKEND_URL=https://abc.supabase.co INTAKE_BACKEND_KEY=... intake
//!
//! # Or explicitly
//! intake --url https://abc.supabase.co --key <anon-key>
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use intake_client::BackendClient;
use intake_config::Config;
use intake_console::{Cli, Console, ConsoleError, ConsoleResult, logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Connection parameters may live in a .env next to the project
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Flags win over config file and environment
    if let Some(url) = cli.url {
        config.backend.url = url;
    }
    if let Some(key) = cli.key {
        config.backend.key = Some(key);
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let log_file = match log_file_path(&config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    info!("Starting intake v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // validate() guarantees the key is present
    let key = config.backend.key.as_deref().unwrap_or_default();
    let client = BackendClient::new(&config.backend.url, key);

    let mut console = Console::new(&config, client);
    match console.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve the log file path under the config dir, creating the log
/// directory when file logging is configured
fn log_file_path(config: &Config) -> ConsoleResult<Option<PathBuf>> {
    let Some(ref filename) = config.logging.file else {
        return Ok(None);
    };

    let config_dir = Config::config_dir()?;
    let log_dir = config_dir.join(&config.logging.dir);

    std::fs::create_dir_all(&log_dir).map_err(|e| {
        ConsoleError::logger(format!(
            "Failed to create log directory {}: {e}",
            log_dir.display()
        ))
    })?;

    Ok(Some(log_dir.join(filename)))
}
