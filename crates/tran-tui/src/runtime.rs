//! Event loop driving the receiver UI.
//!
//! The loop owns the terminal and multiplexes three sources into
//! [`ReceiverUi::update`]: terminal input, engine messages arriving on a
//! channel, and follow-up messages the model scheduled for itself. The frame
//! is redrawn after every pass.

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::constants::ENGINE_POLL_INTERVAL;
use crate::error::TuiError;
use crate::messages::{Command, ReceiverMessage};
use crate::model::{Phase, ReceiverUi};
use crate::scheduler::Scheduler;

pub type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Translate a terminal event into a model message.
///
/// Key releases are dropped so a single press never counts twice.
#[must_use]
pub fn translate_event(event: Event) -> Option<ReceiverMessage> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => Some(ReceiverMessage::Key(key)),
        Event::Resize(width, height) => Some(ReceiverMessage::Resize { width, height }),
        other => Some(ReceiverMessage::Terminal(other)),
    }
}

/// Receiver program: model, scheduler and engine channel.
pub struct ReceiverProgram {
    ui: ReceiverUi,
    events: Receiver<ReceiverMessage>,
    scheduler: Scheduler,
    alt_screen: bool,
    should_quit: bool,
    engine_connected: bool,
}

impl ReceiverProgram {
    /// Create a program fed by `events`.
    #[must_use]
    pub fn new(ui: ReceiverUi, events: Receiver<ReceiverMessage>) -> Self {
        Self {
            ui,
            events,
            scheduler: Scheduler::new(),
            alt_screen: true,
            should_quit: false,
            engine_connected: true,
        }
    }

    /// Draw on the alternate screen (default) or the main screen.
    #[must_use]
    pub fn with_alt_screen(mut self, alt_screen: bool) -> Self {
        self.alt_screen = alt_screen;
        self
    }

    #[must_use]
    pub fn ui(&self) -> &ReceiverUi {
        &self.ui
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn engine_connected(&self) -> bool {
        self.engine_connected
    }

    /// Run the model's init command.
    pub fn start(&mut self) {
        let cmd = self.ui.init();
        self.apply(cmd);
    }

    /// Feed one message to the model and act on the returned command.
    pub fn dispatch(&mut self, msg: ReceiverMessage) {
        if self.should_quit {
            return;
        }
        let cmd = self.ui.update(msg);
        self.apply(cmd);
    }

    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::None => {}
            Command::Quit => self.should_quit = true,
            Command::Schedule { after, message } => self.scheduler.schedule(after, *message),
        }
    }

    /// Dispatch every engine message already waiting. Returns how many.
    pub fn drain_engine(&mut self) -> usize {
        let mut handled = 0;
        while self.engine_connected && !self.should_quit {
            match self.events.try_recv() {
                Ok(msg) => {
                    self.dispatch(msg);
                    handled += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.engine_connected = false;
                    match self.ui.phase() {
                        Phase::Finished | Phase::Error => {
                            tracing::debug!("transfer engine closed its channel");
                        }
                        phase => {
                            tracing::warn!(?phase, "transfer engine disconnected before finishing");
                        }
                    }
                }
            }
        }
        handled
    }

    /// Dispatch scheduled messages due at `now`. Returns how many.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let due = self.scheduler.pop_due(now);
        let count = due.len();
        for msg in due {
            self.dispatch(msg);
        }
        count
    }

    /// How long to wait for terminal input before the next pass.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.scheduler
            .time_until_next(now)
            .map_or(ENGINE_POLL_INTERVAL, |d| d.min(ENGINE_POLL_INTERVAL))
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal(alt_screen: bool) -> io::Result<CrosstermTerminal> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if alt_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(terminal: &mut CrosstermTerminal, alt_screen: bool) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        if alt_screen {
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        }
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the event loop until a quit command.
    ///
    /// The terminal is restored even when the loop fails.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = Self::setup_terminal(self.alt_screen)?;
        let result = self.event_loop(&mut terminal);
        let restored = Self::teardown_terminal(&mut terminal, self.alt_screen);
        result?;
        restored?;
        Ok(())
    }

    fn event_loop(&mut self, terminal: &mut CrosstermTerminal) -> Result<(), TuiError> {
        let size = terminal.size()?;
        self.dispatch(ReceiverMessage::Resize {
            width: size.width,
            height: size.height,
        });
        self.start();

        loop {
            terminal.draw(|frame| self.ui.render(frame))?;

            if self.should_quit {
                break;
            }

            if event::poll(self.poll_timeout(Instant::now()))? {
                if let Some(msg) = translate_event(event::read()?) {
                    self.dispatch(msg);
                }
            }

            self.drain_engine();
            self.fire_due(Instant::now());
        }

        Ok(())
    }
}
