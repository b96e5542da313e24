use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tracing::{debug, info};

/// Run the event loop until the user quits. The terminal is restored before
/// returning, including on error.
pub fn run(app: &mut App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    info!("ui started");

    loop {
        app.render_trigger();
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Resize(cols, rows)) => debug!(cols, rows, "terminal resized"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    info!(render_count = app.trigger().render_count(), "ui stopped");
    Ok(())
}
