#![no_main]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libfuzzer_sys::fuzz_target;

use tran_tui::constants::MAX_WIDTH;
use tran_tui::{Command, Phase, ReceiverMessage, ReceiverUi};

fn decode(chunk: &[u8]) -> ReceiverMessage {
    let arg = u64::from_le_bytes([
        chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7], chunk[8],
    ]);
    match chunk[0] % 7 {
        0 => ReceiverMessage::FileInfo { bytes: arg },
        1 => ReceiverMessage::Progress {
            progress: f64::from_bits(arg),
        },
        2 => ReceiverMessage::Finished {
            files: (0..(arg % 4))
                .map(|i| format!("d{}/f{i}", arg % 3))
                .collect(),
            payload_size: arg,
        },
        3 => ReceiverMessage::Error {
            message: format!("err {arg}"),
        },
        4 => ReceiverMessage::Resize {
            width: (arg & 0xffff) as u16,
            height: 24,
        },
        5 => ReceiverMessage::Key(KeyEvent::new(
            KeyCode::Char(char::from(b'a' + (arg % 26) as u8)),
            KeyModifiers::NONE,
        )),
        _ => ReceiverMessage::Terminal(crossterm::event::Event::FocusGained),
    }
}

fuzz_target!(|data: &[u8]| {
    let mut ui = ReceiverUi::default();
    let mut pending = ui.init();
    let mut last = ui.phase();

    for chunk in data.chunks_exact(9) {
        // Interleave one scheduled follow-up with each new message.
        if let Command::Schedule { message, .. } = std::mem::take(&mut pending) {
            let _ = ui.update(*message);
        }
        pending = ui.update(decode(chunk));

        let bar = ui.progress_bar();
        assert!((0.0..=1.0).contains(&bar.current()));
        assert!(bar.width() <= MAX_WIDTH);
        assert!(ui.phase() >= last);
        if ui.phase() == Phase::Error {
            assert_eq!(ui.view().to_string(), ui.error_message());
        } else {
            let _ = ui.view();
        }
        last = ui.phase();
    }
});
