//! tunnelview - terminal admin consoles for a reverse proxy's client and
//! server daemons.
//!
//! Two binaries share this crate: `tunnelview-client` administers the proxy
//! client daemon (overview, configure, help) and `tunnelview-server`
//! monitors the proxy server daemon (overview, connections, stats). Each
//! builds a static route table, a process-wide theme state, and an API
//! client bound to the daemon's admin origin, then mounts the view shell on
//! the terminal.

pub mod api;
pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod prelude;
pub mod routes;
pub mod terminal;
pub mod theme;
pub mod ui;
