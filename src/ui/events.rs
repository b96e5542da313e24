use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tracing::error;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal events on a background thread and hands them to the UI
/// thread one at a time.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || read_loop(tx, poll_interval));
        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Exits when the receiver is dropped or the terminal stops producing events.
fn read_loop(tx: Sender<AppEvent>, poll_interval: Duration) {
    loop {
        match event::poll(poll_interval) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                error!(%err, "terminal poll failed");
                break;
            }
        }

        let app_event = match event::read() {
            Ok(Event::Key(key)) => AppEvent::Key(key),
            Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
            Ok(_) => continue,
            Err(err) => {
                error!(%err, "terminal read failed");
                break;
            }
        };

        if tx.send(app_event).is_err() {
            break;
        }
    }
}
