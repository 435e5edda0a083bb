//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tran_tui::{ChannelReporter, ReceiverMessage, ReceiverProgram, ReceiverUi, TransferObserver};

use crate::config::AppConfig;
use crate::demo;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = AppConfig::command();
        clap_complete::generate(shell, &mut cmd, "tran", &mut std::io::stdout());
        return Ok(());
    }

    run_receiver(config)
}

fn run_receiver(config: &AppConfig) -> Result<()> {
    let bindings = config.key_bindings()?;
    let plan = config.demo_plan()?;

    let (tx, rx) = crossbeam_channel::unbounded::<ReceiverMessage>();
    let reporter: Arc<dyn TransferObserver> = Arc::new(ChannelReporter::new(tx));

    // The engine thread is detached: quitting mid-transfer just drops it.
    let _engine = demo::spawn(plan, reporter);

    let mut program =
        ReceiverProgram::new(ReceiverUi::new(bindings), rx).with_alt_screen(!config.no_alt_screen);
    program.run().context("receiver UI failed")?;

    tracing::debug!(phase = ?program.ui().phase(), "receiver closed");
    Ok(())
}
