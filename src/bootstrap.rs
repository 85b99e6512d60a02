//! One-time console bootstrap and the event loop.
//!
//! The sequence runs exactly once per mount: claim the process-wide mount
//! guard, initialize tracing, resolve credentials, probe the theme, build
//! the route table and app, enter the terminal, loop, restore the terminal.
//! A second concurrent mount attempt is rejected with
//! [`BootstrapError::AlreadyMounted`] rather than silently duplicating the
//! shell.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::EventStream;
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use crate::api::{ApiClient, BasicAuth};
use crate::app::{App, AppMessage, ConsoleKind};
use crate::config::ConsoleConfig;
use crate::error::BootstrapError;
use crate::routes::{client_routes, server_routes};
use crate::theme::ThemeState;
use crate::{events, terminal, ui};

static MOUNTED: AtomicBool = AtomicBool::new(false);

/// Proof that this process holds the single mount.
///
/// Dropping the guard releases the mount, so a console can be started again
/// after a clean shutdown; two live shells at once are impossible.
#[derive(Debug)]
pub struct MountGuard {
    _private: (),
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        MOUNTED.store(false, Ordering::SeqCst);
    }
}

/// Claim the process-wide mount.
pub fn claim_mount() -> Result<MountGuard, BootstrapError> {
    if MOUNTED.swap(true, Ordering::SeqCst) {
        return Err(BootstrapError::AlreadyMounted);
    }
    Ok(MountGuard { _private: () })
}

/// Initialize tracing. Logs go to the file named by `TUNNELVIEW_LOG`;
/// without it, tracing stays disabled so nothing writes over the TUI.
fn init_tracing() {
    let Ok(path) = std::env::var("TUNNELVIEW_LOG") else {
        return;
    };
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Resolve the basic-auth credentials for the admin API.
///
/// `--password-stdin` prompts without echo; otherwise the
/// `TUNNELVIEW_PASSWORD` environment variable is consulted.
fn resolve_auth(config: &ConsoleConfig) -> Result<Option<BasicAuth>> {
    let Some(user) = config.user.clone() else {
        return Ok(None);
    };
    let password = if config.prompt_password {
        rpassword::prompt_password("admin password: ")
            .wrap_err("reading password from stdin")?
    } else if let Some(password) = config.password.clone() {
        password
    } else {
        std::env::var("TUNNELVIEW_PASSWORD").unwrap_or_default()
    };
    Ok(Some(BasicAuth { user, password }))
}

/// Run one console to completion. The one-time entry point for both
/// binaries.
pub async fn run_console(kind: ConsoleKind, config: ConsoleConfig) -> Result<()> {
    let _mount = claim_mount()?;
    init_tracing();

    let auth = resolve_auth(&config)?;
    let theme = match config.theme_override {
        Some(mode) => ThemeState::with_mode(mode, config.locale),
        None => ThemeState::detect(config.locale),
    };
    let table = match kind {
        ConsoleKind::Client => client_routes(),
        ConsoleKind::Server => server_routes(),
    };

    #[cfg(feature = "dev-proxy")]
    if let Some(listen) = config.dev_proxy {
        let target = config.api_origin.clone();
        tokio::spawn(async move {
            if let Err(err) = crate::api::devproxy::serve(listen, target).await {
                tracing::error!(%err, "dev proxy exited");
            }
        });
    }

    let api = ApiClient::new(&config.api_origin, auth);
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(kind, table, theme, api, tx);
    app.refresh();

    terminal::setup_panic_hook();
    let mut stdout = io::stdout();
    terminal::enter_tui_mode(&mut stdout).map_err(BootstrapError::Terminal)?;

    // From here on every exit path must leave TUI mode, including a failed
    // terminal construction.
    let result = match Terminal::new(CrosstermBackend::new(stdout)).wrap_err("creating terminal") {
        Ok(mut term) => run_event_loop(&mut term, app, rx, config.refresh_interval).await,
        Err(err) => Err(err),
    };

    terminal::leave_tui_mode(&mut io::stdout());
    result
}

/// The single-threaded event loop: draw, then apply exactly one of a
/// terminal event, a fetch completion, or a refresh tick.
async fn run_event_loop<B: ratatui::backend::Backend>(
    term: &mut Terminal<B>,
    mut app: App,
    mut rx: mpsc::UnboundedReceiver<AppMessage>,
    refresh_interval: Duration,
) -> Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let mut stream = EventStream::new();
    let mut ticker = tokio::time::interval(refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick fires immediately; the initial refresh already ran.
    ticker.tick().await;

    loop {
        term.draw(|frame| ui::render(frame, &app))
            .wrap_err("drawing frame")?;

        tokio::select! {
            maybe_event = stream.next() => match maybe_event {
                Some(Ok(event)) => {
                    if let Some(action) = events::map_event(&event) {
                        app.handle_action(action);
                    }
                }
                Some(Err(err)) => tracing::warn!(%err, "terminal event error"),
                None => break,
            },
            Some(msg) = rx.recv() => app.update(msg),
            _ = ticker.tick() => app.refresh(),
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
