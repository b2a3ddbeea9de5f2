use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::app::async_tasks::AsyncResult;

/// Events that the TUI can handle.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press event.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for notification expiry.
    Tick,
    /// A background load finished.
    AsyncResult(AsyncResult),
}

/// Polls terminal events with a configurable tick rate and drains results
/// sent back by background tasks.
pub struct EventHandler {
    tick_rate: Duration,
    rx: UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> (Self, UnboundedSender<AppEvent>) {
        let (tx, rx) = unbounded_channel();
        (Self { tick_rate, rx }, tx)
    }

    /// Block until the next event (background result, key press, resize, or tick timeout).
    pub fn next(&mut self) -> Result<AppEvent> {
        if let Ok(ev) = self.rx.try_recv() {
            return Ok(ev);
        }
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(AppEvent::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(AppEvent::Resize(w, h)),
                _ => Ok(AppEvent::Tick),
            }
        } else {
            Ok(AppEvent::Tick)
        }
    }
}
