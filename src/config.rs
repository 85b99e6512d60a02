//! Console configuration.
//!
//! Built from command-line flags (see [`crate::cli`]) with environment
//! fallbacks resolved at bootstrap. Builder methods follow the same
//! with-style the rest of the crate uses.

use std::time::Duration;

use crate::theme::{Locale, Mode};

/// Default admin origin of the client daemon.
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://127.0.0.1:7400";
/// Default admin origin of the server daemon.
pub const DEFAULT_SERVER_ORIGIN: &str = "http://127.0.0.1:7500";

/// Everything a console binary needs to start.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend origin the reserved `/api` prefix resolves against.
    pub api_origin: String,
    /// Basic-auth user for the admin API.
    pub user: Option<String>,
    /// Basic-auth password; filled from `--password-stdin` or the
    /// `TUNNELVIEW_PASSWORD` environment variable at bootstrap.
    pub password: Option<String>,
    /// `--password-stdin` was given; prompt before entering the TUI.
    pub prompt_password: bool,
    /// Auto-refresh period for the active view.
    pub refresh_interval: Duration,
    /// Explicit theme mode, bypassing the environment probe.
    pub theme_override: Option<Mode>,
    pub locale: Locale,
    /// Listen address for the development forwarding layer.
    #[cfg(feature = "dev-proxy")]
    pub dev_proxy: Option<std::net::SocketAddr>,
}

impl ConsoleConfig {
    /// Defaults for a given backend origin.
    pub fn new(api_origin: impl Into<String>) -> Self {
        Self {
            api_origin: api_origin.into(),
            user: None,
            password: None,
            prompt_password: false,
            refresh_interval: Duration::from_secs(10),
            theme_override: None,
            locale: Locale::default(),
            #[cfg(feature = "dev-proxy")]
            dev_proxy: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn with_theme_override(mut self, mode: Mode) -> Self {
        self.theme_override = Some(mode);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConsoleConfig::new(DEFAULT_CLIENT_ORIGIN);
        assert_eq!(config.api_origin, "http://127.0.0.1:7400");
        assert_eq!(config.refresh_interval, Duration::from_secs(10));
        assert!(config.user.is_none());
        assert_eq!(config.locale, Locale::ZhCn);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConsoleConfig::new(DEFAULT_SERVER_ORIGIN)
            .with_user("admin")
            .with_refresh_interval(Duration::from_secs(3))
            .with_theme_override(Mode::Dark)
            .with_locale(Locale::EnUs);
        assert_eq!(config.user.as_deref(), Some("admin"));
        assert_eq!(config.refresh_interval, Duration::from_secs(3));
        assert_eq!(config.theme_override, Some(Mode::Dark));
        assert_eq!(config.locale, Locale::EnUs);
    }
}
