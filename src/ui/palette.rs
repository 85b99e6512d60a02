//! Light and dark palettes.
//!
//! One palette per theme mode; render passes pick one at their entry point
//! and pass it down, so every widget drawn in the same pass styles itself
//! from the same palette.

use ratatui::style::Color;

use crate::theme::Mode;

/// Semantic colors the shell and views draw with.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Content background.
    pub bg: Color,
    /// Default text.
    pub fg: Color,
    /// Active menu entry, highlighted values.
    pub accent: Color,
    /// Chrome borders.
    pub border: Color,
    /// Secondary text (hints, timestamps).
    pub dim: Color,
    /// Running/healthy indicators.
    pub ok: Color,
    /// Failure indicators and error regions.
    pub err: Color,
    /// Loading and transitional states.
    pub warn: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Reset,
    fg: Color::Gray,
    accent: Color::Cyan,
    border: Color::DarkGray,
    dim: Color::DarkGray,
    ok: Color::LightGreen,
    err: Color::LightRed,
    warn: Color::Yellow,
};

pub const LIGHT: Palette = Palette {
    bg: Color::White,
    fg: Color::Black,
    accent: Color::Blue,
    border: Color::Gray,
    dim: Color::DarkGray,
    ok: Color::Green,
    err: Color::Red,
    warn: Color::Magenta,
};

impl Palette {
    /// The palette for a theme mode.
    pub fn for_mode(mode: Mode) -> &'static Palette {
        match mode {
            Mode::Dark => &DARK,
            Mode::Light => &LIGHT,
        }
    }
}
