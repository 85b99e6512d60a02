//! Application state and the message/action model.
//!
//! The shell owns no business data itself; it composes the route table, the
//! theme state, and per-view fetch slots filled by background tasks. All
//! mutation happens on the single event loop: terminal events become
//! [`Action`]s, background fetch completions become [`AppMessage`]s, and
//! both are applied before the next render pass, so a pass never observes a
//! torn old-route/new-theme combination.
//!
//! Every navigation or manual refresh bumps a fetch generation. Spawned
//! fetches carry the generation they started under and [`App::update`]
//! drops results from older generations, so a response arriving after the
//! user navigated away can never overwrite the new view's data.

use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{ClientStatus, ProxyInfo, ProxyType, ServerInfo};
use crate::routes::{ActiveRoute, RouteTable, ViewId};
use crate::theme::{Locale, ThemeState};

/// Which daemon this console administers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleKind {
    Client,
    Server,
}

impl ConsoleKind {
    /// Header title for the console.
    pub fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ConsoleKind::Client, Locale::ZhCn) => "客户端管理",
            (ConsoleKind::Client, Locale::EnUs) => "Client Admin",
            (ConsoleKind::Server, Locale::ZhCn) => "服务端管理",
            (ConsoleKind::Server, Locale::EnUs) => "Server Admin",
        }
    }
}

/// Lifecycle of one view's fetched data.
#[derive(Debug)]
pub enum FetchSlot<T> {
    /// Nothing requested yet.
    Idle,
    /// A fetch for the current generation is in flight.
    Loading,
    /// Data ready to render.
    Ready(T),
    /// The fetch failed; the view renders the error in its own region.
    Failed(ApiError),
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        FetchSlot::Idle
    }
}

impl<T> FetchSlot<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchSlot::Loading)
    }

    fn fill(&mut self, result: Result<T, ApiError>) {
        *self = match result {
            Ok(value) => FetchSlot::Ready(value),
            Err(err) => FetchSlot::Failed(err),
        };
    }
}

/// Data slots for the client console's views.
#[derive(Debug, Default)]
pub struct ClientData {
    pub status: FetchSlot<ClientStatus>,
    pub config: FetchSlot<String>,
    /// Outcome of the last `R` reload request on the configure view.
    pub reload: FetchSlot<()>,
}

/// Data slots for the server console's views.
#[derive(Debug)]
pub struct ServerData {
    pub info: FetchSlot<ServerInfo>,
    /// Proxy type shown by the connections view; `c` cycles it.
    pub selected_type: ProxyType,
    pub connections: FetchSlot<Vec<ProxyInfo>>,
    /// All proxies across every type, for the stats view.
    pub stats: FetchSlot<Vec<ProxyInfo>>,
}

impl Default for ServerData {
    fn default() -> Self {
        Self {
            info: FetchSlot::Idle,
            selected_type: ProxyType::Tcp,
            connections: FetchSlot::Idle,
            stats: FetchSlot::Idle,
        }
    }
}

/// Completions sent back from background fetch tasks.
#[derive(Debug)]
pub enum AppMessage {
    ClientStatus {
        generation: u64,
        result: Result<ClientStatus, ApiError>,
    },
    ClientConfig {
        generation: u64,
        result: Result<String, ApiError>,
    },
    ConfigReloaded {
        generation: u64,
        result: Result<(), ApiError>,
    },
    ServerInfo {
        generation: u64,
        result: Result<ServerInfo, ApiError>,
    },
    Connections {
        generation: u64,
        result: Result<Vec<ProxyInfo>, ApiError>,
    },
    Stats {
        generation: u64,
        result: Result<Vec<ProxyInfo>, ApiError>,
    },
}

impl AppMessage {
    fn generation(&self) -> u64 {
        match self {
            AppMessage::ClientStatus { generation, .. }
            | AppMessage::ClientConfig { generation, .. }
            | AppMessage::ConfigReloaded { generation, .. }
            | AppMessage::ServerInfo { generation, .. }
            | AppMessage::Connections { generation, .. }
            | AppMessage::Stats { generation, .. } => *generation,
        }
    }
}

/// User intents decoded from terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,
    Refresh,
    NextRoute,
    PrevRoute,
    /// Jump to the menu entry at this index (keys 1..9).
    Route(usize),
    Back,
    /// Cycle the proxy type shown by the connections view.
    CycleProxyType,
    /// Ask the client daemon to re-read its config file.
    ReloadConfig,
}

/// Top-level state for one console instance.
pub struct App {
    pub kind: ConsoleKind,
    pub table: RouteTable,
    pub theme: ThemeState,
    pub client_data: ClientData,
    pub server_data: ServerData,
    pub should_quit: bool,
    /// Wall-clock time of the last successful fetch, shown in the header.
    pub last_refresh: Option<DateTime<Local>>,
    api: Arc<ApiClient>,
    tx: mpsc::UnboundedSender<AppMessage>,
    generation: u64,
}

impl App {
    pub fn new(
        kind: ConsoleKind,
        table: RouteTable,
        theme: ThemeState,
        api: ApiClient,
        tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            kind,
            table,
            theme,
            client_data: ClientData::default(),
            server_data: ServerData::default(),
            should_quit: false,
            last_refresh: None,
            api: Arc::new(api),
            tx,
            generation: 0,
        }
    }

    /// The current fetch generation. Messages from older generations are
    /// discarded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a user intent.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => self.theme.toggle_mode(),
            Action::Refresh => self.refresh(),
            Action::NextRoute => self.step_route(1),
            Action::PrevRoute => self.step_route(-1),
            Action::Route(idx) => {
                if let Some(path) = self.table.routes().get(idx).map(|r| r.path) {
                    self.table.navigate(path);
                    self.refresh();
                }
            }
            Action::Back => {
                if self.table.back() {
                    self.refresh();
                }
            }
            Action::CycleProxyType => {
                if self.current_view() == Some(ViewId::Connections) {
                    self.server_data.selected_type = self.server_data.selected_type.next();
                    self.refresh();
                }
            }
            Action::ReloadConfig => {
                if self.current_view() == Some(ViewId::Configure) {
                    self.reload_config();
                }
            }
        }
    }

    /// Ask the daemon to reload its config; the outcome lands in the
    /// configure view's reload slot.
    fn reload_config(&mut self) {
        let generation = self.generation;
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.client_data.reload = FetchSlot::Loading;
        tokio::spawn(async move {
            let result = api.reload_client().await;
            let _ = tx.send(AppMessage::ConfigReloaded { generation, result });
        });
    }

    /// Apply a background fetch completion, discarding stale generations.
    pub fn update(&mut self, msg: AppMessage) {
        if msg.generation() != self.generation {
            tracing::debug!(
                stale = msg.generation(),
                current = self.generation,
                "discarding stale fetch result"
            );
            return;
        }
        let ok = match msg {
            AppMessage::ClientStatus { result, .. } => {
                let ok = result.is_ok();
                self.client_data.status.fill(result);
                ok
            }
            AppMessage::ClientConfig { result, .. } => {
                let ok = result.is_ok();
                self.client_data.config.fill(result);
                ok
            }
            AppMessage::ConfigReloaded { result, .. } => {
                let ok = result.is_ok();
                self.client_data.reload.fill(result);
                ok
            }
            AppMessage::ServerInfo { result, .. } => {
                let ok = result.is_ok();
                self.server_data.info.fill(result);
                ok
            }
            AppMessage::Connections { result, .. } => {
                let ok = result.is_ok();
                self.server_data.connections.fill(result);
                ok
            }
            AppMessage::Stats { result, .. } => {
                let ok = result.is_ok();
                self.server_data.stats.fill(result);
                ok
            }
        };
        if ok {
            self.last_refresh = Some(Local::now());
        }
    }

    /// Start a fresh fetch for the active view.
    ///
    /// Bumps the generation first, so anything still in flight for the old
    /// view resolves stale and gets dropped.
    pub fn refresh(&mut self) {
        self.generation += 1;
        let Some(view) = self.current_view() else {
            return;
        };
        let generation = self.generation;
        let api = self.api.clone();
        let tx = self.tx.clone();
        match view {
            ViewId::Overview => {
                self.client_data.status = FetchSlot::Loading;
                tokio::spawn(async move {
                    let result = api.client_status().await;
                    let _ = tx.send(AppMessage::ClientStatus { generation, result });
                });
            }
            ViewId::Configure => {
                self.client_data.config = FetchSlot::Loading;
                // A reload outcome is only shown until the next fetch.
                self.client_data.reload = FetchSlot::Idle;
                tokio::spawn(async move {
                    let result = api.client_config().await;
                    let _ = tx.send(AppMessage::ClientConfig { generation, result });
                });
            }
            ViewId::Help => {}
            ViewId::ServerOverview => {
                self.server_data.info = FetchSlot::Loading;
                tokio::spawn(async move {
                    let result = api.server_info().await;
                    let _ = tx.send(AppMessage::ServerInfo { generation, result });
                });
            }
            ViewId::Connections => {
                let ty = self.server_data.selected_type;
                self.server_data.connections = FetchSlot::Loading;
                tokio::spawn(async move {
                    let result = api.proxies_by_type(ty).await;
                    let _ = tx.send(AppMessage::Connections { generation, result });
                });
            }
            ViewId::Stats => {
                self.server_data.stats = FetchSlot::Loading;
                tokio::spawn(async move {
                    let result = fetch_all_proxies(&api).await;
                    let _ = tx.send(AppMessage::Stats { generation, result });
                });
            }
        }
    }

    /// The active view, `None` in the not-found state.
    pub fn current_view(&self) -> Option<ViewId> {
        match self.table.current() {
            ActiveRoute::Declared(route) => Some(route.view),
            ActiveRoute::NotFound { .. } => None,
        }
    }

    fn step_route(&mut self, delta: isize) {
        let len = self.table.routes().len() as isize;
        let current = self.table.active_index().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        let path = self.table.routes()[next].path;
        self.table.navigate(path);
        self.refresh();
    }
}

/// Collect proxy stats across every type for the stats view.
async fn fetch_all_proxies(api: &ApiClient) -> Result<Vec<ProxyInfo>, ApiError> {
    let mut all = Vec::new();
    for ty in ProxyType::ALL {
        all.extend(api.proxies_by_type(ty).await?);
    }
    Ok(all)
}
