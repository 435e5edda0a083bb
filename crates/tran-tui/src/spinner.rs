//! Indeterminate activity spinner.
//!
//! A spinner is a glyph sequence advanced by self-scheduled [`SpinnerTick`]
//! messages. Every spinner carries a process-unique id and a tag that changes
//! on each accepted tick, so ticks belonging to a replaced spinner (or a
//! duplicated chain) are dropped instead of speeding the animation up.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use ratatui::style::Style;
use ratatui::text::Span;

use crate::messages::{Command, ReceiverMessage};

static NEXT_SPINNER_ID: AtomicU64 = AtomicU64::new(1);

const WAITING_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const TRANSFER_FRAMES: &[&str] = &["▱▱▱", "▰▱▱", "▰▰▱", "▰▰▰", "▱▰▰", "▱▱▰"];

/// Symbol set selected by the phase that (re)started the spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerKind {
    /// Waiting for the sender to connect.
    Waiting,
    /// Bytes are flowing.
    Transfer,
}

impl SpinnerKind {
    /// Glyph sequence for this kind.
    #[must_use]
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Waiting => WAITING_FRAMES,
            Self::Transfer => TRANSFER_FRAMES,
        }
    }

    /// Delay between two glyphs.
    #[must_use]
    pub fn interval(self) -> Duration {
        match self {
            Self::Waiting => Duration::from_millis(100),
            Self::Transfer => Duration::from_millis(120),
        }
    }
}

/// Scheduled spinner frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerTick {
    pub id: u64,
    pub tag: u64,
}

/// Spinner state.
#[derive(Debug, Clone)]
pub struct Spinner {
    kind: SpinnerKind,
    frame: usize,
    id: u64,
    tag: u64,
    style: Style,
}

impl Spinner {
    /// Create a spinner at its first glyph.
    #[must_use]
    pub fn new(kind: SpinnerKind, style: Style) -> Self {
        Self {
            kind,
            frame: 0,
            id: NEXT_SPINNER_ID.fetch_add(1, Ordering::Relaxed),
            tag: 0,
            style,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SpinnerKind {
        self.kind
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Index of the glyph currently shown.
    #[must_use]
    pub fn frame_index(&self) -> usize {
        self.frame
    }

    /// Switch to another symbol set, back at its first glyph.
    ///
    /// Id and tag are kept, so an already scheduled tick keeps the chain going.
    pub fn set_kind(&mut self, kind: SpinnerKind) {
        self.kind = kind;
        self.frame = 0;
    }

    /// Glyph currently shown.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        self.kind.frames()[self.frame]
    }

    /// Command that starts (or restarts) the animation chain.
    #[must_use]
    pub fn tick(&self) -> Command {
        Command::schedule(
            self.kind.interval(),
            ReceiverMessage::SpinnerTick(SpinnerTick {
                id: self.id,
                tag: self.tag,
            }),
        )
    }

    /// Generic update: advances on this spinner's current tick, ignores the rest.
    pub fn update(&mut self, msg: &ReceiverMessage) -> Command {
        let ReceiverMessage::SpinnerTick(tick) = msg else {
            return Command::None;
        };
        if tick.id != self.id || tick.tag != self.tag {
            return Command::None;
        }

        self.frame = (self.frame + 1) % self.kind.frames().len();
        self.tag = self.tag.wrapping_add(1);
        tracing::trace!(id = self.id, frame = self.frame, "spinner frame");
        self.tick()
    }

    /// Render the current glyph.
    #[must_use]
    pub fn view(&self) -> Span<'static> {
        Span::styled(self.glyph(), self.style)
    }
}
