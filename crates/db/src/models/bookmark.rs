//! Bookmark entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bookmarks_core::types::{DbId, Timestamp};

/// A bookmark row from the `bookmarks` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub created_at: Timestamp,
    /// Set on every update, `None` for a record that was never updated.
    pub updated_at: Option<Timestamp>,
}

/// Read projection of a [`Bookmark`] for single-item responses.
///
/// Not independently owned; always derived from the entity.
#[derive(Debug, Clone, Serialize)]
pub struct BookmarkInfo {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl From<Bookmark> for BookmarkInfo {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            title: bookmark.title,
            url: bookmark.url,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}

/// Insert DTO handed to the store. `created_at` is already stamped by the
/// handler layer; the store only assigns the id.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub created_at: Timestamp,
}

/// Wire payload for creating a bookmark.
///
/// Fields default to empty when absent so a missing field gets the same
/// field-level validation message as an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookmark {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Wire payload for updating an existing bookmark. Both fields are
/// required; partial updates are not supported. Absent fields default to
/// empty and fail validation like empty ones.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookmark {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}
