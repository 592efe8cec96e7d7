//! The record-store interface and its implementations.
//!
//! Handlers depend on `Arc<dyn BookmarkStore>` injected at construction,
//! so the PostgreSQL backend and the in-memory test store are
//! interchangeable behind the same trait.

use async_trait::async_trait;

use bookmarks_core::page::{Page, PageRequest};
use bookmarks_core::types::DbId;

use crate::models::bookmark::{Bookmark, NewBookmark};

pub mod memory;
pub mod postgres;

pub use memory::MemoryBookmarkStore;
pub use postgres::PgBookmarkStore;

/// Unexpected persistence failure. Surfaces to the caller as a generic
/// server error; the underlying cause goes to the log only.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Durable CRUD plus paged listing for bookmark records.
///
/// Each method is a single, independent operation against the backend;
/// atomicity of one insert/update/delete and id uniqueness are the
/// backend's responsibility. Ids are assigned by the store and never
/// reused.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Persist a new record, returning it with its assigned id.
    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError>;

    /// Fetch one record, `None` when no row has that id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Bookmark>, StoreError>;

    /// Fetch one page of records plus the collection total.
    async fn find_page(&self, request: &PageRequest) -> Result<Page<Bookmark>, StoreError>;

    /// Write title, url, and updated_at for the record's id, returning the
    /// stored row.
    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, StoreError>;

    /// Remove a record, returning whether a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Liveness probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
