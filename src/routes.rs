//! Declarative route tables.
//!
//! Each console binary builds one immutable table at startup: a static list
//! of (path, view, labels) records, in the order the menu displays them.
//! Navigation is path based, mirroring the hash-fragment routing of the
//! daemons' own web consoles: navigating to an undeclared path resolves to a
//! defined not-found state instead of failing, and every navigation pushes a
//! history entry so `back()` retraces the user's steps.

use crate::error::RouteTableError;
use crate::theme::Locale;

/// Which view body the content region mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Overview,
    Configure,
    Help,
    ServerOverview,
    Connections,
    Stats,
}

/// A (path, label, view) binding. Defined once at startup, immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: ViewId,
    label_zh: &'static str,
    label_en: &'static str,
}

impl Route {
    pub const fn new(
        path: &'static str,
        view: ViewId,
        label_zh: &'static str,
        label_en: &'static str,
    ) -> Self {
        Self {
            path,
            view,
            label_zh,
            label_en,
        }
    }

    /// Localized menu label.
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::ZhCn => self.label_zh,
            Locale::EnUs => self.label_en,
        }
    }
}

/// What the table currently resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveRoute<'a> {
    /// A declared route is active.
    Declared(&'a Route),
    /// The current path matches nothing in the table.
    NotFound { path: &'a str },
}

/// The authoritative path→view mapping for one console instance.
///
/// Two independent instances exist in practice (client console and server
/// console); they share no state.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    /// Index into `routes`, or `None` when an undeclared path is active.
    active: Option<usize>,
    /// Path active when nothing matches.
    unmatched_path: String,
    /// Previously active paths, most recent last.
    history: Vec<String>,
}

impl RouteTable {
    /// Build a table. The first route is the initial active route.
    ///
    /// Fails when the table is empty or declares the same path twice.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|r| r.path == route.path) {
                return Err(RouteTableError::DuplicatePath {
                    path: route.path.to_string(),
                });
            }
        }
        Ok(Self {
            routes,
            active: Some(0),
            unmatched_path: String::new(),
            history: Vec::new(),
        })
    }

    /// Activate the route matching `path`, pushing a history entry.
    ///
    /// An undeclared path activates the not-found state; it never panics.
    /// Navigating to the already-active path is a no-op (no history entry).
    pub fn navigate(&mut self, path: &str) {
        if self.current_path() == path {
            return;
        }
        let previous = self.current_path().to_string();
        self.history.push(previous);
        self.activate(path);
    }

    /// Return to the previously active path. `false` when history is empty.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(path) => {
                self.activate(&path);
                true
            }
            None => false,
        }
    }

    /// The currently active route, or the not-found state. Pure read.
    pub fn current(&self) -> ActiveRoute<'_> {
        match self.active {
            Some(idx) => ActiveRoute::Declared(&self.routes[idx]),
            None => ActiveRoute::NotFound {
                path: &self.unmatched_path,
            },
        }
    }

    /// The active path as a string (the unmatched path in not-found state).
    pub fn current_path(&self) -> &str {
        match self.active {
            Some(idx) => self.routes[idx].path,
            None => &self.unmatched_path,
        }
    }

    /// All declared routes, in menu order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Menu-highlight index; `None` in the not-found state.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn activate(&mut self, path: &str) {
        match self.routes.iter().position(|r| r.path == path) {
            Some(idx) => {
                self.active = Some(idx);
                self.unmatched_path.clear();
            }
            None => {
                self.active = None;
                self.unmatched_path = path.to_string();
            }
        }
    }
}

/// Route table for the client-daemon console.
pub fn client_routes() -> RouteTable {
    // Static table, unique paths by construction.
    RouteTable::new(vec![
        Route::new("/", ViewId::Overview, "概览", "Overview"),
        Route::new("/configure", ViewId::Configure, "配置", "Configure"),
        Route::new("/help", ViewId::Help, "帮助", "Help"),
    ])
    .unwrap_or_else(|_| unreachable!("static client route table is valid"))
}

/// Route table for the server-daemon console.
pub fn server_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::new("/", ViewId::ServerOverview, "概览", "Overview"),
        Route::new("/connections", ViewId::Connections, "连接", "Connections"),
        Route::new("/stats", ViewId::Stats, "统计", "Stats"),
    ])
    .unwrap_or_else(|_| unreachable!("static server route table is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_path_resolves_to_its_view() {
        let mut table = client_routes();
        for (path, view) in [
            ("/", ViewId::Overview),
            ("/configure", ViewId::Configure),
            ("/help", ViewId::Help),
        ] {
            table.navigate(path);
            match table.current() {
                ActiveRoute::Declared(route) => assert_eq!(route.view, view),
                ActiveRoute::NotFound { .. } => panic!("{path} should resolve"),
            }
        }
    }

    #[test]
    fn test_undeclared_path_is_not_found_not_panic() {
        let mut table = client_routes();
        table.navigate("/no-such-view");
        assert_eq!(
            table.current(),
            ActiveRoute::NotFound {
                path: "/no-such-view"
            }
        );
        assert_eq!(table.active_index(), None);
    }

    #[test]
    fn test_back_restores_previous_route() {
        let mut table = client_routes();
        table.navigate("/configure");
        assert!(table.back());
        assert_eq!(table.current_path(), "/");
        assert_eq!(table.active_index(), Some(0));
        // Nothing left to pop.
        assert!(!table.back());
    }

    #[test]
    fn test_navigate_to_active_path_adds_no_history() {
        let mut table = client_routes();
        table.navigate("/");
        assert!(!table.back());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/", ViewId::Overview, "概览", "Overview"),
            Route::new("/", ViewId::Help, "帮助", "Help"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicatePath {
                path: "/".to_string()
            }
        );
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(RouteTable::new(vec![]).unwrap_err(), RouteTableError::Empty);
    }

    #[test]
    fn test_tables_are_independent() {
        let mut client = client_routes();
        let server = server_routes();
        client.navigate("/help");
        assert_eq!(server.current_path(), "/");
    }

    #[test]
    fn test_labels_follow_locale() {
        let table = server_routes();
        let stats = table.routes().last().unwrap();
        assert_eq!(stats.label(Locale::ZhCn), "统计");
        assert_eq!(stats.label(Locale::EnUs), "Stats");
    }
}
