//! Receiver UI model (Elm architecture).

use indicatif::DecimalBytes;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::constants::{MAX_WIDTH, PADDING, PROGRESS_BORDER};
use crate::keymap::KeyBindings;
use crate::listing::{top_level_files_text, wrap_words};
use crate::messages::{Command, ReceiverMessage};
use crate::progress_bar::ProgressBar;
use crate::spinner::{Spinner, SpinnerKind};
use crate::styles::{bold, indent, italic, pad, ColorTheme};

/// UI phase. Flows from the top down; `Error` is reachable from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Establishing,
    ReceivingProgress,
    Finished,
    Error,
}

/// Progress bar width for a terminal `width` cells wide.
#[must_use]
pub fn progress_width(width: u16) -> u16 {
    width
        .saturating_sub(2 * PADDING + PROGRESS_BORDER)
        .min(MAX_WIDTH)
}

/// Receiver UI state (Elm Model).
#[derive(Debug, Clone)]
pub struct ReceiverUi {
    phase: Phase,
    payload_size: u64,
    decompressed_payload_size: u64,
    received_files: Vec<String>,
    error_message: String,
    spinner: Spinner,
    progress_bar: ProgressBar,
    bindings: KeyBindings,
    theme: ColorTheme,
}

impl Default for ReceiverUi {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl ReceiverUi {
    /// Create a model waiting for the sender to connect.
    #[must_use]
    pub fn new(bindings: KeyBindings) -> Self {
        Self::with_theme(bindings, ColorTheme::default())
    }

    #[must_use]
    pub fn with_theme(bindings: KeyBindings, theme: ColorTheme) -> Self {
        Self {
            phase: Phase::Establishing,
            payload_size: 0,
            decompressed_payload_size: 0,
            received_files: Vec::new(),
            error_message: String::new(),
            spinner: Spinner::new(SpinnerKind::Waiting, theme.primary_style()),
            progress_bar: ProgressBar::new(theme.primary_style(), theme.track_style()),
            bindings,
            theme,
        }
    }

    /// Command to run before the first message: starts the spinner.
    #[must_use]
    pub fn init(&self) -> Command {
        self.spinner.tick()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn payload_size(&self) -> u64 {
        self.payload_size
    }

    #[must_use]
    pub fn decompressed_payload_size(&self) -> u64 {
        self.decompressed_payload_size
    }

    #[must_use]
    pub fn received_files(&self) -> &[String] {
        &self.received_files
    }

    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[must_use]
    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    #[must_use]
    pub fn progress_bar(&self) -> &ProgressBar {
        &self.progress_bar
    }

    /// Handle a single message (Elm Update).
    pub fn update(&mut self, msg: ReceiverMessage) -> Command {
        match msg {
            ReceiverMessage::FileInfo { bytes } => self.on_file_info(bytes),
            ReceiverMessage::Progress { progress } => self.on_progress(progress),
            ReceiverMessage::Finished {
                files,
                payload_size,
            } => self.on_finished(files, payload_size),
            ReceiverMessage::Error { message } => {
                if self.phase != Phase::Error {
                    tracing::debug!(from = ?self.phase, "receiver entered error phase");
                }
                self.phase = Phase::Error;
                self.error_message = message;
                Command::None
            }
            ReceiverMessage::Key(key) => {
                if self.bindings.is_quit(&key) {
                    tracing::debug!(phase = ?self.phase, "quit requested");
                    Command::Quit
                } else {
                    Command::None
                }
            }
            ReceiverMessage::Resize { width, .. } => {
                self.progress_bar.set_width(progress_width(width));
                Command::None
            }
            ReceiverMessage::ProgressFrame(frame) => self.progress_bar.update(&frame),
            // Everything else keeps the spinner animating.
            other => self.spinner.update(&other),
        }
    }

    fn on_file_info(&mut self, bytes: u64) -> Command {
        if self.phase == Phase::Error {
            return Command::None;
        }
        self.payload_size = bytes;
        if self.phase == Phase::Establishing {
            self.transition(Phase::ReceivingProgress);
            self.spinner = Spinner::new(SpinnerKind::Transfer, self.theme.primary_style());
            return self.spinner.tick();
        }
        Command::None
    }

    fn on_progress(&mut self, progress: f64) -> Command {
        if self.phase >= Phase::Finished {
            return Command::None;
        }
        if self.phase == Phase::Establishing {
            self.transition(Phase::ReceivingProgress);
            // The waiting chain is still scheduled; keep it and swap glyphs.
            self.spinner.set_kind(SpinnerKind::Transfer);
        }
        self.progress_bar.set_percent(progress)
    }

    fn on_finished(&mut self, files: Vec<String>, payload_size: u64) -> Command {
        if self.phase == Phase::Error {
            return Command::None;
        }
        self.transition(Phase::Finished);
        self.received_files = files;
        self.decompressed_payload_size = payload_size;
        self.progress_bar.set_percent(1.0)
    }

    fn transition(&mut self, to: Phase) {
        if self.phase != to {
            tracing::debug!(from = ?self.phase, ?to, "receiver phase change");
            self.phase = to;
        }
    }

    /// Render the current frame (Elm View).
    #[must_use]
    pub fn view(&self) -> Text<'static> {
        match self.phase {
            Phase::Establishing => Text::from(vec![
                Line::default(),
                self.status_line(vec![
                    self.spinner.view(),
                    Span::raw(" Establishing connection with sender"),
                ]),
                Line::default(),
            ]),
            Phase::ReceivingProgress => {
                let mut lines = vec![
                    Line::default(),
                    self.status_line(vec![
                        self.spinner.view(),
                        Span::raw(" Receiving files (total size "),
                        bold(DecimalBytes(self.payload_size).to_string()),
                        Span::raw(")"),
                    ]),
                    Line::default(),
                ];
                lines.extend(self.bar_and_help());
                Text::from(lines)
            }
            Phase::Finished => {
                let mut lines = vec![
                    Line::default(),
                    self.status_line(vec![Span::raw(format!(
                        "Received {} files ({} decompressed)",
                        self.received_files.len(),
                        DecimalBytes(self.decompressed_payload_size)
                    ))]),
                    Line::default(),
                ];
                lines.extend(self.file_listing());
                lines.push(Line::default());
                lines.extend(self.bar_and_help());
                Text::from(lines)
            }
            // Raw text only: must stay legible whatever the styling state.
            // Split on '\n' alone so "\r\n" and trailing newlines survive.
            Phase::Error => Text::from(
                self.error_message
                    .split('\n')
                    .map(|line| Line::raw(line.to_string()))
                    .collect::<Vec<_>>(),
            ),
        }
    }

    /// Draw the current frame into the terminal.
    pub fn render(&self, frame: &mut Frame) {
        let area: Rect = frame.area();
        frame.render_widget(Paragraph::new(self.view()), area);
    }

    fn status_line(&self, spans: Vec<Span<'static>>) -> Line<'static> {
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(pad());
        all.extend(spans);
        Line::from(all).style(self.theme.info_style())
    }

    fn file_listing(&self) -> Vec<Line<'static>> {
        let text = format!("Received: {}", top_level_files_text(&self.received_files));
        wrap_words(&text, usize::from(MAX_WIDTH))
            .into_iter()
            .map(|line| {
                Line::from(vec![indent(PADDING), italic(line)]).style(self.theme.info_style())
            })
            .collect()
    }

    fn bar_and_help(&self) -> Vec<Line<'static>> {
        let mut bar = vec![pad()];
        bar.extend(self.progress_bar.view().spans);
        vec![
            Line::from(bar),
            Line::default(),
            Line::from(vec![
                pad(),
                Span::styled(self.bindings.help_text(), self.theme.muted_style()),
            ]),
            Line::default(),
        ]
    }
}
