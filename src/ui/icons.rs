//! The declared icon surface.
//!
//! Every glyph the shell or a view may draw is enumerated here; views refer
//! to [`Icon`] variants, never to raw glyph strings, so the set of consumed
//! symbols is a compile-time contract.

/// Named icons available to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Overview / home.
    Home,
    /// Configuration.
    Configure,
    /// Help.
    Help,
    /// Data refresh.
    Refresh,
    /// Light mode indicator.
    Sun,
    /// Dark mode indicator.
    Moon,
    /// The server daemon.
    Server,
    /// Connection listing.
    Connections,
    /// Traffic statistics.
    Stats,
    /// Healthy / running state.
    Ok,
    /// Failed state.
    Error,
}

impl Icon {
    /// The glyph drawn for this icon.
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::Configure => "⚙",
            Icon::Help => "?",
            Icon::Refresh => "↻",
            Icon::Sun => "☀",
            Icon::Moon => "☾",
            Icon::Server => "▣",
            Icon::Connections => "⇅",
            Icon::Stats => "▤",
            Icon::Ok => "●",
            Icon::Error => "✗",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_nonempty_and_distinct_where_it_matters() {
        assert_ne!(Icon::Sun.glyph(), Icon::Moon.glyph());
        assert_ne!(Icon::Ok.glyph(), Icon::Error.glyph());
        assert!(!Icon::Refresh.glyph().is_empty());
    }
}
