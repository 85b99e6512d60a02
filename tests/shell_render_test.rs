//! View shell rendering against a test backend.

use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;
use tokio::sync::mpsc;

use tunnelview::api::ApiClient;
use tunnelview::app::{Action, App, AppMessage, ConsoleKind, FetchSlot};
use tunnelview::routes::{client_routes, server_routes};
use tunnelview::theme::{Locale, Mode, ThemeState};
use tunnelview::ui;

fn test_app(kind: ConsoleKind, mode: Mode, locale: Locale) -> App {
    let (tx, rx) = mpsc::unbounded_channel::<AppMessage>();
    // The receiver is dropped; render tests never complete a fetch through
    // the channel.
    drop(rx);
    let table = match kind {
        ConsoleKind::Client => client_routes(),
        ConsoleKind::Server => server_routes(),
    };
    App::new(
        kind,
        table,
        ThemeState::with_mode(mode, locale),
        ApiClient::new("http://127.0.0.1:1", None),
        tx,
    )
}

fn render_to_text(app: &App) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_client_shell_shows_menu_and_title() {
    let app = test_app(ConsoleKind::Client, Mode::Dark, Locale::EnUs);
    let text = render_to_text(&app);
    assert!(text.contains("Client Admin"));
    assert!(text.contains("Overview"));
    assert!(text.contains("Configure"));
    assert!(text.contains("Help"));
}

#[test]
fn test_server_shell_shows_its_own_routes() {
    let app = test_app(ConsoleKind::Server, Mode::Dark, Locale::EnUs);
    let text = render_to_text(&app);
    assert!(text.contains("Server Admin"));
    assert!(text.contains("Connections"));
    assert!(text.contains("Stats"));
}

#[test]
fn test_chinese_labels_render_by_default() {
    let app = test_app(ConsoleKind::Client, Mode::Dark, Locale::ZhCn);
    let text = render_to_text(&app);
    assert!(text.contains("概"));
    assert!(text.contains("配"));
    assert!(text.contains("帮"));
}

#[test]
fn test_overview_renders_proxy_rows() {
    let mut app = test_app(ConsoleKind::Client, Mode::Dark, Locale::EnUs);
    app.client_data.status = FetchSlot::Ready(
        serde_json::from_str(
            r#"{"tcp": [{"name": "ssh-tunnel", "type": "tcp", "status": "running",
                "err": "", "local_addr": "127.0.0.1:22", "plugin": "",
                "remote_addr": "0.0.0.0:6000"}]}"#,
        )
        .unwrap(),
    );
    let text = render_to_text(&app);
    assert!(text.contains("ssh-tunnel"));
    assert!(text.contains("127.0.0.1:22"));
}

#[test]
fn test_failed_fetch_keeps_menu_visible() {
    let mut app = test_app(ConsoleKind::Client, Mode::Dark, Locale::EnUs);
    app.client_data.status = FetchSlot::Failed(tunnelview::error::ApiError::Transport(
        "connection refused".into(),
    ));
    let text = render_to_text(&app);
    // The error stays inside the content region ...
    assert!(text.contains("cannot reach the backend process"));
    // ... while the shell chrome remains.
    assert!(text.contains("Overview"));
    assert!(text.contains("quit"));
}

#[test]
fn test_not_found_view_renders_for_undeclared_path() {
    let mut app = test_app(ConsoleKind::Client, Mode::Dark, Locale::EnUs);
    app.table.navigate("/no-such-view");
    let text = render_to_text(&app);
    assert!(text.contains("404"));
    assert!(text.contains("/no-such-view"));
}

#[tokio::test]
async fn test_navigation_round_trip_restores_overview() {
    let mut app = test_app(ConsoleKind::Client, Mode::Dark, Locale::EnUs);
    app.handle_action(Action::Route(1));
    app.update(AppMessage::ClientConfig {
        generation: app.generation(),
        result: Ok("server_addr = \"10.0.0.2\"".into()),
    });
    assert!(render_to_text(&app).contains("server_addr"));

    app.handle_action(Action::Back);
    let text = render_to_text(&app);
    // Overview is active and loading again; the configure content is gone.
    assert!(!text.contains("server_addr"));
    assert!(text.contains("loading"));
}

#[tokio::test]
async fn test_reload_outcome_renders_inside_configure_view() {
    let mut app = test_app(ConsoleKind::Client, Mode::Dark, Locale::EnUs);
    app.handle_action(Action::Route(1));
    app.update(AppMessage::ClientConfig {
        generation: app.generation(),
        result: Ok("bind_port = 7000".into()),
    });
    app.handle_action(Action::ReloadConfig);
    assert!(render_to_text(&app).contains("reloading"));

    app.update(AppMessage::ConfigReloaded {
        generation: app.generation(),
        result: Ok(()),
    });
    let text = render_to_text(&app);
    assert!(text.contains("reloaded"));
    assert!(text.contains("bind_port"));
}

#[test]
fn test_light_and_dark_passes_style_differently() {
    let light = test_app(ConsoleKind::Client, Mode::Light, Locale::EnUs);
    let dark = test_app(ConsoleKind::Client, Mode::Dark, Locale::EnUs);

    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, &light)).unwrap();
    let light_has_white_bg = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .any(|cell| cell.style().bg == Some(Color::White));
    assert!(light_has_white_bg);

    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, &dark)).unwrap();
    let dark_has_white_bg = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .any(|cell| cell.style().bg == Some(Color::White));
    assert!(!dark_has_white_bg);
}

#[tokio::test]
async fn test_toggle_restyles_next_pass() {
    let mut app = test_app(ConsoleKind::Client, Mode::Dark, Locale::EnUs);
    app.handle_action(Action::ToggleTheme);
    assert_eq!(app.theme.mode(), Mode::Light);
    app.handle_action(Action::ToggleTheme);
    assert_eq!(app.theme.mode(), Mode::Dark);
}

#[test]
fn test_server_overview_counters_render() {
    let mut app = test_app(ConsoleKind::Server, Mode::Dark, Locale::EnUs);
    app.server_data.info = FetchSlot::Ready(
        serde_json::from_str(
            r#"{"version": "0.52.1", "bindPort": 7000, "curConns": 11,
                "clientCounts": 4, "totalTrafficIn": 1048576,
                "totalTrafficOut": 2097152}"#,
        )
        .unwrap(),
    );
    let text = render_to_text(&app);
    assert!(text.contains("0.52.1"));
    assert!(text.contains("7000"));
    assert!(text.contains("1.0 MiB"));
    assert!(text.contains("2.0 MiB"));
}
