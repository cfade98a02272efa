//! Phonebook - Main entry point
//!
//! Loads the saved contacts, runs the interactive menu on stdin/stdout and
//! saves the contacts again when the session ends.

use anyhow::Result;
use phonebook::{
    load_store, Config, ContactRepository, FileContactStorage, InteractionController,
    PhoneNumberValidator, Prompter,
};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so it never interleaves with the menu)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Using data file {} and CSV file {}",
        config.data_file.display(),
        config.csv_file.display()
    );

    let storage = FileContactStorage::new(&config.data_file, &config.csv_file);
    let validator = PhoneNumberValidator::new(config.country_codes.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut store = load_store(&storage, &mut stdout)?;
    info!(count = store.count(), "Phone book ready");

    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    InteractionController::new(prompter, &mut store, &storage, &validator).run()?;

    info!("Phone book session complete");
    Ok(())
}
