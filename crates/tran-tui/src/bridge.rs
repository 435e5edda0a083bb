//! Bridge between the transfer engine and TUI messages.

use crossbeam_channel::Sender;
use parking_lot::Mutex;

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::messages::ReceiverMessage;
use crate::progress_bar::clamp_fraction;

/// Callbacks a transfer engine reports through.
pub trait TransferObserver: Send + Sync {
    /// The sender announced the payload size.
    fn on_file_info(&self, bytes: u64);
    /// Fraction of the payload received so far.
    fn on_progress(&self, progress: f64);
    /// All files were received and unpacked.
    fn on_finished(&self, files: Vec<String>, payload_size: u64);
    /// The transfer failed for good.
    fn on_error(&self, message: String);
}

/// Observer that forwards engine events to the TUI channel.
///
/// Progress updates closer than [`PROGRESS_REPORT_THRESHOLD`] to the last
/// forwarded value are dropped; completion (1.0) is always forwarded.
pub struct ChannelReporter {
    tx: Sender<ReceiverMessage>,
    last_progress: Mutex<Option<f64>>,
}

impl ChannelReporter {
    #[must_use]
    pub fn new(tx: Sender<ReceiverMessage>) -> Self {
        Self {
            tx,
            last_progress: Mutex::new(None),
        }
    }

    fn send(&self, msg: ReceiverMessage) {
        if self.tx.send(msg).is_err() {
            tracing::debug!("receiver UI is gone, dropping engine event");
        }
    }
}

impl TransferObserver for ChannelReporter {
    fn on_file_info(&self, bytes: u64) {
        self.send(ReceiverMessage::FileInfo { bytes });
    }

    #[allow(clippy::float_cmp)]
    fn on_progress(&self, progress: f64) {
        let progress = clamp_fraction(progress);
        {
            let mut last = self.last_progress.lock();
            if let Some(prev) = *last {
                let done = progress == 1.0 && prev != 1.0;
                if !done && (progress - prev).abs() < PROGRESS_REPORT_THRESHOLD {
                    return;
                }
            }
            *last = Some(progress);
        }
        self.send(ReceiverMessage::Progress { progress });
    }

    fn on_finished(&self, files: Vec<String>, payload_size: u64) {
        self.send(ReceiverMessage::Finished {
            files,
            payload_size,
        });
    }

    fn on_error(&self, message: String) {
        self.send(ReceiverMessage::Error { message });
    }
}
