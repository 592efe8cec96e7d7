use std::sync::Arc;

use bookmarks_db::store::BookmarkStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store is an
/// injected interface so tests can swap in the in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    /// Record store for bookmark persistence.
    pub store: Arc<dyn BookmarkStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
