use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stderr};
use std::sync::Once;

static PANIC_HOOK: Once = Once::new();

/// Puts the terminal back into cooked mode on drop.
///
/// A panic hook does the same before the default hook prints, so a panic
/// message is readable instead of lost in the alternate screen.
pub struct TerminalGuard {
    _private: (),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stderr>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard { _private: () };
    install_panic_hook();

    let mut stderr = io::stderr();
    stderr.execute(EnterAlternateScreen)?;
    stderr.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stderr))?;
    Ok((terminal, guard))
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stderr = io::stderr();
    let _ = stderr.execute(LeaveAlternateScreen);
    let _ = stderr.execute(Show);
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            default_hook(info);
        }));
    });
}
