//! TUI message types (Elm Messages) and follow-up commands.

use std::time::Duration;

use crossterm::event::{Event, KeyEvent};

use crate::progress_bar::ProgressFrame;
use crate::spinner::SpinnerTick;

/// Messages that drive the receiver update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ReceiverMessage {
    /// Transfer metadata announced by the sender.
    FileInfo { bytes: u64 },
    /// Transfer progress as a fraction in `[0, 1]`.
    Progress { progress: f64 },
    /// Transfer complete; `files` in the order the engine reported them.
    Finished {
        files: Vec<String>,
        payload_size: u64,
    },
    /// Terminal transfer error.
    Error { message: String },
    /// Key press forwarded from the event loop.
    Key(KeyEvent),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Spinner animation frame.
    SpinnerTick(SpinnerTick),
    /// Progress bar easing frame.
    ProgressFrame(ProgressFrame),
    /// Terminal event the model has no dedicated handling for.
    Terminal(Event),
}

/// Follow-up action requested by an update.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Command {
    /// Nothing to do.
    #[default]
    None,
    /// Stop dispatching and restore the terminal.
    Quit,
    /// Deliver `message` back to the model once `after` has elapsed.
    Schedule {
        after: Duration,
        message: Box<ReceiverMessage>,
    },
}

impl Command {
    /// Schedule `message` for delivery after `after`.
    #[must_use]
    pub fn schedule(after: Duration, message: ReceiverMessage) -> Self {
        Self::Schedule {
            after,
            message: Box::new(message),
        }
    }
}
