use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen, hidden cursor. Whatever was switched on is
/// switched back off if a later step fails.
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().wrap_err("Failed to enable raw mode")?;

    if let Err(e) = execute!(stdout(), EnterAlternateScreen, cursor::Hide) {
        restore(true, false);
        return Err(e).wrap_err("Failed to enter alternate screen");
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout())) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore(true, true);
            return Err(e).wrap_err("Failed to create terminal");
        }
    };

    if let Err(e) = terminal.clear() {
        warn!("Failed to clear terminal: {e}");
    }

    match terminal.size() {
        Ok(size) => debug!("Terminal ready at {}x{}", size.width, size.height),
        Err(e) => debug!("Terminal ready, size unknown: {e}"),
    }
    Ok(terminal)
}

/// Undo [`setup_terminal`]. Never fails; problems are logged.
pub fn restore(raw_mode: bool, alternate_screen: bool) {
    let mut out = stdout();

    if let Err(e) = execute!(out, cursor::Show) {
        warn!("Failed to show cursor: {e}");
    }
    if alternate_screen {
        if let Err(e) = execute!(out, LeaveAlternateScreen) {
            warn!("Failed to leave alternate screen: {e}");
        }
    }
    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {e}");
        }
    }

    let _ = out.flush();
    debug!("Terminal restored");
}
