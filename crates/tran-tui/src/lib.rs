//! # tran-tui
//!
//! Receiver progress TUI using ratatui with Elm architecture.
//!
//! [`ReceiverUi`] is the state machine: it consumes [`ReceiverMessage`]s one
//! at a time and answers with a [`Command`]. [`ReceiverProgram`] owns the
//! terminal and drives the machine from key input, engine events and
//! scheduled animation frames.

pub mod bridge;
pub mod constants;
pub mod error;
pub mod keymap;
pub mod listing;
pub mod messages;
pub mod model;
pub mod progress_bar;
pub mod runtime;
pub mod scheduler;
pub mod spinner;
pub mod styles;

pub use bridge::{ChannelReporter, TransferObserver};
pub use error::TuiError;
pub use keymap::KeyBindings;
pub use messages::{Command, ReceiverMessage};
pub use model::{Phase, ReceiverUi};
pub use progress_bar::ProgressBar;
pub use runtime::ReceiverProgram;
pub use scheduler::Scheduler;
pub use spinner::{Spinner, SpinnerKind};
