//! Global theme and locale state.
//!
//! One [`ThemeState`] exists per console process. It is created once at
//! bootstrap by probing the terminal's reported color scheme and lives until
//! the process exits. Views never mutate it directly; the only mutator is
//! [`ThemeState::toggle_mode`], wired to a key in the navigation chrome.
//! Render passes snapshot the mode once at their entry point, so every view
//! drawn in the same pass observes the same value.

/// The light/dark display variant applied globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Flip to the other variant.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

/// Locale for menu labels and view headings.
///
/// Chinese is the default, matching the labels the daemons' consoles ship
/// with; English is the alternate. There is no runtime switcher, `--locale`
/// selects at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    EnUs,
}

impl Locale {
    /// BCP 47 tag, used for logging and the `--locale` flag.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::EnUs => "en-US",
        }
    }

    /// Parse a `--locale` flag value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "zh-CN" | "zh" => Some(Locale::ZhCn),
            "en-US" | "en" => Some(Locale::EnUs),
            _ => None,
        }
    }
}

/// Process-wide theme and locale state.
#[derive(Debug, Clone)]
pub struct ThemeState {
    mode: Mode,
    locale: Locale,
}

impl ThemeState {
    /// Initialize from the environment's preferred color scheme.
    ///
    /// Probes the `COLORFGBG` convention; when the probe fails the mode
    /// falls back to light, silently.
    pub fn detect(locale: Locale) -> Self {
        let mode = probe_preferred_mode().unwrap_or(Mode::Light);
        Self { mode, locale }
    }

    /// Build with an explicit mode, bypassing the probe (`--theme`).
    pub fn with_mode(mode: Mode, locale: Locale) -> Self {
        Self { mode, locale }
    }

    /// Flip light/dark. Takes effect for the next render pass as a whole.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

/// Probe the terminal's preferred color scheme.
///
/// Reads `COLORFGBG` ("<fg>;<bg>" color indices, set by several terminal
/// emulators). Background 7 or 15 is a light palette; anything else dark.
fn probe_preferred_mode() -> Option<Mode> {
    let value = std::env::var("COLORFGBG").ok()?;
    parse_colorfgbg(&value)
}

fn parse_colorfgbg(value: &str) -> Option<Mode> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    if bg == 7 || bg == 15 {
        Some(Mode::Light)
    } else {
        Some(Mode::Dark)
    }
}
