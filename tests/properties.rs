//! Property-based tests for the receiver state machine.

use proptest::prelude::*;

use tran_tui::constants::{MAX_WIDTH, PROGRESS_MIN_STEP};
use tran_tui::{Command, Phase, ReceiverMessage, ReceiverUi};

fn engine_message() -> impl Strategy<Value = ReceiverMessage> {
    prop_oneof![
        any::<u64>().prop_map(|bytes| ReceiverMessage::FileInfo { bytes }),
        prop_oneof![
            -2.0f64..3.0,
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ]
        .prop_map(|progress| ReceiverMessage::Progress { progress }),
        (prop::collection::vec("[a-z]{1,4}(/[a-z]{1,4}){0,2}", 0..5), any::<u64>()).prop_map(
            |(files, payload_size)| ReceiverMessage::Finished {
                files,
                payload_size,
            }
        ),
        "[a-z \r\n]{0,12}".prop_map(|message| ReceiverMessage::Error { message }),
        (any::<u16>(), any::<u16>())
            .prop_map(|(width, height)| ReceiverMessage::Resize { width, height }),
    ]
}

/// Apply `msg` and, with probability given by `frames`, deliver the
/// scheduled follow-up too.
fn apply(ui: &mut ReceiverUi, msg: ReceiverMessage, frames: u8) {
    let mut cmd = ui.update(msg);
    for _ in 0..frames {
        match cmd {
            Command::Schedule { message, .. } => cmd = ui.update(*message),
            _ => break,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Phase never moves backwards; once in Error it stays there.
    #[test]
    fn phase_is_monotonic(msgs in prop::collection::vec((engine_message(), 0u8..4), 0..40)) {
        let mut ui = ReceiverUi::default();
        let mut last = ui.phase();
        for (msg, frames) in msgs {
            apply(&mut ui, msg, frames);
            prop_assert!(ui.phase() >= last, "{:?} -> {:?}", last, ui.phase());
            if last == Phase::Error {
                prop_assert_eq!(ui.phase(), Phase::Error);
            }
            last = ui.phase();
        }
    }

    /// Bar fractions stay in [0, 1] and the width within MAX_WIDTH.
    #[test]
    fn bar_stays_in_bounds(msgs in prop::collection::vec((engine_message(), 0u8..8), 0..40)) {
        let mut ui = ReceiverUi::default();
        for (msg, frames) in msgs {
            apply(&mut ui, msg, frames);
            let bar = ui.progress_bar();
            prop_assert!((0.0..=1.0).contains(&bar.current()));
            prop_assert!((0.0..=1.0).contains(&bar.target()));
            prop_assert!(bar.width() <= MAX_WIDTH);
            prop_assert_eq!(bar.view().width(), usize::from(bar.width()));
        }
    }

    /// Easing toward any target is monotonic, never overshoots and is bounded.
    #[test]
    fn easing_converges(target in 0.0f64..=1.0) {
        let mut ui = ReceiverUi::default();
        let mut cmd = ui.update(ReceiverMessage::Progress { progress: target });
        let mut last = ui.progress_bar().current();
        let mut steps = 0usize;
        while let Command::Schedule { message, .. } = cmd {
            cmd = ui.update(*message);
            let current = ui.progress_bar().current();
            prop_assert!(current >= last);
            prop_assert!(current <= target);
            last = current;
            steps += 1;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bound = (1.0 / PROGRESS_MIN_STEP).ceil() as usize;
        prop_assert!(steps <= bound);
        prop_assert!((ui.progress_bar().current() - target).abs() < f64::EPSILON);
    }

    /// Resize always yields a width in [0, MAX_WIDTH].
    #[test]
    fn resize_width_bounded(width in any::<u16>(), height in any::<u16>()) {
        let mut ui = ReceiverUi::default();
        let cmd = ui.update(ReceiverMessage::Resize { width, height });
        prop_assert_eq!(cmd, Command::None);
        prop_assert!(ui.progress_bar().width() <= MAX_WIDTH);
    }

    /// Rendering never panics and the error frame is always the raw message.
    #[test]
    fn view_total(msgs in prop::collection::vec(engine_message(), 0..20)) {
        let mut ui = ReceiverUi::default();
        for msg in msgs {
            let _ = ui.update(msg);
            let frame = ui.view().to_string();
            if ui.phase() == Phase::Error {
                prop_assert_eq!(frame, ui.error_message());
            }
        }
    }
}
