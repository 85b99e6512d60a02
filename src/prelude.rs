//! Convenient re-exports of the crate's most used types.
//!
//! ```ignore
//! use tunnelview::prelude::*;
//! ```

pub use crate::api::{ApiClient, BasicAuth, HttpGateway};
pub use crate::app::{Action, App, AppMessage, ConsoleKind, FetchSlot};
pub use crate::config::ConsoleConfig;
pub use crate::error::{ApiError, BootstrapError, ConfigError, RouteTableError};
pub use crate::routes::{client_routes, server_routes, ActiveRoute, Route, RouteTable, ViewId};
pub use crate::theme::{Locale, Mode, ThemeState};
pub use crate::ui::{render, RenderCtx};
