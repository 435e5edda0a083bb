//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;
use tran_tui::KeyBindings;

use crate::demo::DemoPlan;
use crate::errors::AppError;

/// tran — watch files arrive from a sender.
#[derive(Parser, Debug)]
#[command(name = "tran", version, about)]
pub struct AppConfig {
    /// Comma-separated quit keys (e.g. "ctrl+c,q,esc"), matched case-insensitively.
    #[arg(long, default_value = "ctrl+c,q,esc", env = "TRAN_QUIT_KEYS")]
    pub quit_keys: String,

    /// Draw on the main screen instead of the alternate screen.
    #[arg(long)]
    pub no_alt_screen: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, env = "TRAN_LOG_FILE")]
    pub log_file: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Simulated payload size in bytes.
    #[arg(long, default_value = "52428800")]
    pub demo_size: u64,

    /// Comma-separated paths the simulated sender delivers.
    #[arg(long, default_value = "photos/beach.jpg,photos/city.jpg,notes.txt,src/main.rs")]
    pub demo_files: String,

    /// How long the simulated transfer takes (e.g. "5s", "1m").
    #[arg(long, default_value = "5s")]
    pub demo_duration: String,

    /// How long the simulated sender takes to connect.
    #[arg(long, default_value = "1500ms")]
    pub demo_connect: String,

    /// Ratio of decompressed to transferred size.
    #[arg(long, default_value = "2.5")]
    pub demo_ratio: f64,

    /// Abort the simulated transfer halfway with this error message.
    #[arg(long)]
    pub demo_fail: Option<String>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Quit key bindings.
    pub fn key_bindings(&self) -> Result<KeyBindings, AppError> {
        Ok(self.quit_keys.parse::<KeyBindings>()?)
    }

    /// Simulated transfer described by the `--demo-*` flags.
    pub fn demo_plan(&self) -> Result<DemoPlan, AppError> {
        if !self.demo_ratio.is_finite() || self.demo_ratio <= 0.0 {
            return Err(AppError::InvalidDemo(format!(
                "ratio must be positive, got {}",
                self.demo_ratio
            )));
        }
        let files: Vec<String> = self
            .demo_files
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(ToString::to_string)
            .collect();

        Ok(DemoPlan {
            payload_size: self.demo_size,
            files,
            connect_delay: parse_duration(&self.demo_connect)
                .ok_or_else(|| AppError::InvalidDuration(self.demo_connect.clone()))?,
            duration: parse_duration(&self.demo_duration)
                .ok_or_else(|| AppError::InvalidDuration(self.demo_duration.clone()))?,
            decompression_ratio: self.demo_ratio,
            fail_with: self.demo_fail.clone(),
        })
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
