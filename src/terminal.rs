//! Terminal setup and teardown.
//!
//! Enter/leave alternate-screen mode and install a panic hook that restores
//! the terminal before the panic message prints, so a crash never leaves the
//! user's shell in raw mode.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::panic;

/// Enter TUI mode: raw mode plus the alternate screen.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and restore the terminal.
///
/// Safe to call multiple times; errors are ignored so cleanup always runs to
/// the end.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Aggressive restore for error paths.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}

/// Install a panic hook that restores the terminal first, then delegates to
/// the original hook so the panic message still prints readably.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Reset to the default hook to avoid affecting other tests.
        let _ = panic::take_hook();
    }

    #[test]
    fn test_leave_tui_mode_is_idempotent() {
        let mut sink = Vec::new();
        leave_tui_mode(&mut sink);
        leave_tui_mode(&mut sink);
    }
}
