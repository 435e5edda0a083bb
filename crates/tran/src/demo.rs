//! Simulated transfer engine.
//!
//! Stands in for the network layer: it reports connection, progress and
//! completion through a [`TransferObserver`] on its own thread, the same way
//! a real engine would.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tran_tui::TransferObserver;

/// Number of progress reports over the transfer.
const PROGRESS_STEPS: u32 = 200;

/// Description of a simulated transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoPlan {
    pub payload_size: u64,
    pub files: Vec<String>,
    pub connect_delay: Duration,
    pub duration: Duration,
    pub decompression_ratio: f64,
    /// Abort halfway with this message.
    pub fail_with: Option<String>,
}

impl DemoPlan {
    /// Size after unpacking.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn decompressed_size(&self) -> u64 {
        (self.payload_size as f64 * self.decompression_ratio).round() as u64
    }
}

/// Play `plan` against `observer`, blocking the calling thread.
pub fn run_transfer(plan: &DemoPlan, observer: &dyn TransferObserver) {
    thread::sleep(plan.connect_delay);
    tracing::info!(bytes = plan.payload_size, "simulated sender connected");
    observer.on_file_info(plan.payload_size);

    let step = plan.duration / PROGRESS_STEPS;
    for i in 1..=PROGRESS_STEPS {
        thread::sleep(step);
        if i == PROGRESS_STEPS / 2 {
            if let Some(message) = &plan.fail_with {
                tracing::info!(%message, "simulated transfer failing");
                observer.on_error(message.clone());
                return;
            }
        }
        observer.on_progress(f64::from(i) / f64::from(PROGRESS_STEPS));
    }

    tracing::info!(files = plan.files.len(), "simulated transfer finished");
    observer.on_finished(plan.files.clone(), plan.decompressed_size());
}

/// Run `plan` on a background thread.
pub fn spawn(plan: DemoPlan, observer: Arc<dyn TransferObserver>) -> JoinHandle<()> {
    thread::spawn(move || run_transfer(&plan, observer.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    enum Seen {
        Info(u64),
        Progress(f64),
        Finished(usize, u64),
        Error(String),
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Seen>>);

    impl TransferObserver for Recorder {
        fn on_file_info(&self, bytes: u64) {
            self.0.lock().unwrap().push(Seen::Info(bytes));
        }
        fn on_progress(&self, progress: f64) {
            self.0.lock().unwrap().push(Seen::Progress(progress));
        }
        fn on_finished(&self, files: Vec<String>, payload_size: u64) {
            self.0
                .lock()
                .unwrap()
                .push(Seen::Finished(files.len(), payload_size));
        }
        fn on_error(&self, message: String) {
            self.0.lock().unwrap().push(Seen::Error(message));
        }
    }

    fn plan() -> DemoPlan {
        DemoPlan {
            payload_size: 1000,
            files: vec!["a.txt".into(), "dir/b.txt".into()],
            connect_delay: Duration::ZERO,
            duration: Duration::ZERO,
            decompression_ratio: 2.0,
            fail_with: None,
        }
    }

    #[test]
    fn decompressed_size_rounds() {
        let mut p = plan();
        assert_eq!(p.decompressed_size(), 2000);
        p.decompression_ratio = 1.2346;
        assert_eq!(p.decompressed_size(), 1235);
    }

    #[test]
    fn successful_run() {
        let recorder = Recorder::default();
        run_transfer(&plan(), &recorder);
        let seen = recorder.0.into_inner().unwrap();
        assert_eq!(seen.first(), Some(&Seen::Info(1000)));
        assert_eq!(seen.last(), Some(&Seen::Finished(2, 2000)));
        let progress: Vec<f64> = seen
            .iter()
            .filter_map(|s| match s {
                Seen::Progress(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(progress.len(), PROGRESS_STEPS as usize);
        assert!(progress.windows(2).all(|w| w[0] < w[1]));
        assert!((progress[progress.len() - 1] - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn failing_run_stops_at_error() {
        let recorder = Recorder::default();
        let mut p = plan();
        p.fail_with = Some("sender went away".into());
        run_transfer(&p, &recorder);
        let seen = recorder.0.into_inner().unwrap();
        assert_eq!(seen.last(), Some(&Seen::Error("sender went away".into())));
        assert!(!seen.iter().any(|s| matches!(s, Seen::Finished(..))));
    }

    #[test]
    fn spawn_runs_in_background() {
        let recorder = Arc::new(Recorder::default());
        let handle = spawn(plan(), recorder.clone());
        handle.join().unwrap();
        assert!(recorder
            .0
            .lock()
            .unwrap()
            .iter()
            .any(|s| matches!(s, Seen::Finished(..))));
    }
}
