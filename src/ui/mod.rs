//! Rendering for the console shell.
//!
//! [`render`] is the single entry point. It snapshots the active route and
//! theme once, then draws the persistent frame (menu, header, footer) and
//! mounts the active view in the content region. Because the snapshot
//! happens before any widget is built, every region of one pass agrees on
//! route and theme.

pub mod format;
pub mod icons;
pub mod palette;
pub mod shell;
pub mod views;

use ratatui::Frame;

use crate::app::App;
use crate::theme::{Locale, Mode, ThemeState};

pub use palette::Palette;

/// Per-pass snapshot of the global UI state.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub mode: Mode,
    pub locale: Locale,
    pub palette: &'static Palette,
}

impl RenderCtx {
    /// Take the snapshot for this render pass.
    pub fn snapshot(theme: &ThemeState) -> Self {
        let mode = theme.mode();
        Self {
            mode,
            locale: theme.locale(),
            palette: Palette::for_mode(mode),
        }
    }
}

/// Draw one full frame of the console.
pub fn render(frame: &mut Frame, app: &App) {
    let ctx = RenderCtx::snapshot(&app.theme);
    shell::render_shell(frame, app, &ctx);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_carries_matching_palette() {
        let theme = ThemeState::with_mode(Mode::Dark, Locale::EnUs);
        let ctx = RenderCtx::snapshot(&theme);
        assert_eq!(ctx.mode, Mode::Dark);
        assert_eq!(ctx.palette.fg, Palette::for_mode(Mode::Dark).fg);
    }
}
