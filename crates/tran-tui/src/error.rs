//! Error type for the receiver TUI.

/// Errors raised while configuring or running the receiver UI.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// The terminal could not be set up, drawn to, or restored.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// A key binding could not be parsed.
    #[error("invalid key binding: {0:?}")]
    InvalidKeyBinding(String),

    /// No quit key was configured, the UI could never be closed.
    #[error("at least one quit key must be configured")]
    NoQuitKeys,
}
