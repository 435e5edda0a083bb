//! Application errors.

use tran_tui::TuiError;

/// Errors raised while turning CLI flags into a runnable receiver.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A duration flag could not be parsed.
    #[error("invalid duration {0:?} (expected e.g. \"500ms\", \"5s\", \"1m\")")]
    InvalidDuration(String),

    /// A demo parameter is out of range.
    #[error("invalid demo setting: {0}")]
    InvalidDemo(String),

    /// The log file could not be opened.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Key bindings or terminal failure.
    #[error(transparent)]
    Tui(#[from] TuiError),
}
