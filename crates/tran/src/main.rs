//! tran — terminal progress UI for receiving files.

use std::fs::File;
use std::sync::Mutex;

use anyhow::Result;
use tran_lib::errors::AppError;
use tran_lib::{app, config};

fn main() -> Result<()> {
    let config = config::AppConfig::parse();
    init_tracing(config.log_file.as_deref())?;
    app::run(&config)
}

fn init_tracing(log_file: Option<&str>) -> Result<(), AppError> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| AppError::LogFile {
                path: path.to_string(),
                source,
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
