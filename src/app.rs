//! The refresh loop: one cooperative task ticking every 500ms, coordinating
//! keyboard input, the 60s poll cadence, optional logging, and rendering.
//! A fetch is awaited inline, so the tick pauses for its duration (bounded
//! by the per-request timeout).

use crate::{
    logger::{self, LogConfig},
    ui::{self, View, FRAME_COUNT},
    weather::{ConditionsSource, FetchOutcome, Reading},
};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// One loop iteration; also the keyboard wait and the animation rate.
pub const TICK: Duration = Duration::from_millis(500);
/// Time between successful fetches. Measured from the last success, so a
/// failed poll is retried on the next tick.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// The refresh loop and the transient display state it owns.
pub struct App {
    source: Box<dyn ConditionsSource>,
    location: String,
    debug: bool,
    log: Option<LogConfig>,
    shutdown: Arc<AtomicBool>,

    reading: Option<Reading>,
    urls: Vec<String>,
    frame_index: usize,
    last_fetch: Option<Instant>,
    last_log: Option<Instant>,
    log_error: Option<String>,
}

impl App {
    pub fn new(
        source: Box<dyn ConditionsSource>,
        location: String,
        debug: bool,
        log: Option<LogConfig>,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        Self {
            source,
            location,
            debug,
            log,
            shutdown,
            reading: None,
            urls: Vec::new(),
            frame_index: 0,
            last_fetch: None,
            last_log: None,
            log_error: None,
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            if self.shutdown.load(Ordering::SeqCst) {
                return Ok(());
            }

            // the keyboard wait doubles as the tick timer
            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if is_quit_key(&key) {
                        return Ok(());
                    }
                }
            }

            if self.fetch_due(Instant::now()) {
                let outcome = self.source.fetch().await;
                self.apply_fetch(outcome, Instant::now());
            }

            if self.log_due(Instant::now()) {
                self.write_log(Instant::now());
            }

            self.draw(terminal)?;
        }
    }

    fn fetch_due(&self, now: Instant) -> bool {
        match self.last_fetch {
            Some(at) => now.duration_since(at) > POLL_INTERVAL,
            None => true,
        }
    }

    fn apply_fetch(&mut self, outcome: FetchOutcome, now: Instant) {
        if self.debug {
            self.urls = outcome.urls;
        }
        match outcome.result {
            Ok(reading) => {
                self.reading = Some(reading);
                self.last_fetch = Some(now);
            }
            Err(err) => {
                // the previous reading stays on screen untouched
                eprintln!("Weather fetch error: {err:#}");
            }
        }
    }

    fn log_due(&self, now: Instant) -> bool {
        let Some(log) = &self.log else {
            return false;
        };
        if self.reading.is_none() {
            return false;
        }
        match self.last_log {
            Some(at) => now.duration_since(at) >= log.interval,
            None => true,
        }
    }

    fn write_log(&mut self, now: Instant) {
        let (Some(log), Some(reading)) = (&self.log, &self.reading) else {
            return;
        };
        match logger::append_reading(&log.path, Local::now(), reading) {
            Ok(()) => {
                self.last_log = Some(now);
                self.log_error = None;
            }
            Err(err) => {
                // keep running; the write is retried next tick
                self.log_error = Some(format!("{err:#}"));
            }
        }
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let view = View {
            reading: self.reading.as_ref(),
            location: &self.location,
            ticker_label: self.ticker_label(),
            frame_index: self.frame_index,
            debug: self.debug,
            urls: &self.urls,
            log_error: self.log_error.as_deref(),
        };
        terminal.draw(|frame| ui::render(frame, &view))?;

        if self.reading.is_some() {
            self.frame_index = (self.frame_index + 1) % FRAME_COUNT;
        }
        Ok(())
    }

    fn ticker_label(&self) -> &str {
        self.log.as_ref().map(|log| log.label.as_str()).unwrap_or("live")
    }
}

/// Raw mode delivers Ctrl-C as a key event rather than a signal, so it is
/// treated as a quit key alongside `q` and Escape.
fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
