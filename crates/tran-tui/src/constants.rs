//! Layout and animation constants for the receiver UI.

use std::time::Duration;

/// Horizontal padding (in cells) in front of every padded line.
pub const PADDING: u16 = 2;

/// Upper bound for the progress bar and the file listing wrap width.
pub const MAX_WIDTH: u16 = 80;

/// Progress bar width before the first resize event arrives.
pub const DEFAULT_PROGRESS_WIDTH: u16 = 40;

/// Cells reserved around the progress bar besides the padding.
pub const PROGRESS_BORDER: u16 = 4;

/// Fraction of the remaining gap covered by one easing frame.
pub const PROGRESS_EASING: f64 = 0.2;

/// Smallest movement of one easing frame; gaps below it snap to the target.
pub const PROGRESS_MIN_STEP: f64 = 0.004;

/// Delay between two progress bar easing frames (~60 fps).
pub const PROGRESS_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Minimum progress change (0.5%) before the engine bridge forwards an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.005;

/// Longest time the event loop waits on terminal input before checking
/// the engine channel again.
pub const ENGINE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Quit keys used when none are configured.
pub const DEFAULT_QUIT_KEYS: [&str; 3] = ["ctrl+c", "q", "esc"];
