//! Determinate progress bar with eased fill.

use std::sync::atomic::{AtomicU64, Ordering};

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::constants::{
    DEFAULT_PROGRESS_WIDTH, MAX_WIDTH, PROGRESS_EASING, PROGRESS_FRAME_INTERVAL,
    PROGRESS_MIN_STEP,
};
use crate::messages::{Command, ReceiverMessage};

static NEXT_BAR_ID: AtomicU64 = AtomicU64::new(1);

const FILLED_CELL: char = '█';
const EMPTY_CELL: char = '░';

/// Scheduled easing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressFrame {
    pub id: u64,
    pub tag: u64,
}

/// Clamp an arbitrary fraction into `[0, 1]`; NaN counts as no progress.
#[must_use]
pub fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Progress bar state.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    width: u16,
    current: f64,
    target: f64,
    id: u64,
    tag: u64,
    filled_style: Style,
    empty_style: Style,
}

impl ProgressBar {
    /// Create an empty bar with the default width.
    #[must_use]
    pub fn new(filled_style: Style, empty_style: Style) -> Self {
        Self {
            width: DEFAULT_PROGRESS_WIDTH,
            current: 0.0,
            target: 0.0,
            id: NEXT_BAR_ID.fetch_add(1, Ordering::Relaxed),
            tag: 0,
            filled_style,
            empty_style,
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Set the width in cells, capped at [`MAX_WIDTH`].
    pub fn set_width(&mut self, width: u16) {
        self.width = width.min(MAX_WIDTH);
    }

    /// Fraction currently drawn.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Fraction the bar is easing toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_animating(&self) -> bool {
        self.current != self.target
    }

    /// Ease toward `fraction`. Starts a new frame chain; older chains go stale.
    pub fn set_percent(&mut self, fraction: f64) -> Command {
        self.target = clamp_fraction(fraction);
        self.tag = self.tag.wrapping_add(1);
        self.next_frame()
    }

    /// Advance one easing step if `frame` belongs to the live chain.
    pub fn update(&mut self, frame: &ProgressFrame) -> Command {
        if frame.id != self.id || frame.tag != self.tag {
            return Command::None;
        }
        if !self.is_animating() {
            return Command::None;
        }

        self.step();
        tracing::trace!(current = self.current, target = self.target, "progress frame");

        if self.is_animating() {
            self.next_frame()
        } else {
            Command::None
        }
    }

    fn step(&mut self) {
        let gap = self.target - self.current;
        if gap.abs() <= PROGRESS_MIN_STEP {
            self.current = self.target;
            return;
        }
        let delta = (gap.abs() * PROGRESS_EASING).max(PROGRESS_MIN_STEP);
        if delta >= gap.abs() {
            self.current = self.target;
        } else {
            self.current = clamp_fraction(self.current + delta.copysign(gap));
        }
    }

    fn next_frame(&self) -> Command {
        Command::schedule(
            PROGRESS_FRAME_INTERVAL,
            ReceiverMessage::ProgressFrame(ProgressFrame {
                id: self.id,
                tag: self.tag,
            }),
        )
    }

    /// Number of filled cells for the current fraction.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn filled_cells(&self) -> usize {
        let width = usize::from(self.width);
        ((width as f64 * self.current).round() as usize).min(width)
    }

    /// Render exactly `width` cells.
    #[must_use]
    pub fn view(&self) -> Line<'static> {
        let filled = self.filled_cells();
        let empty = usize::from(self.width) - filled;
        Line::from(vec![
            Span::styled(FILLED_CELL.to_string().repeat(filled), self.filled_style),
            Span::styled(EMPTY_CELL.to_string().repeat(empty), self.empty_style),
        ])
    }
}
