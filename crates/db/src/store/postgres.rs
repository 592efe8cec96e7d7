//! PostgreSQL-backed [`BookmarkStore`].

use async_trait::async_trait;
use sqlx::PgPool;

use bookmarks_core::page::{Page, PageRequest, SortOrder};
use bookmarks_core::types::DbId;

use crate::models::bookmark::{Bookmark, NewBookmark};
use crate::store::{BookmarkStore, StoreError};

/// Column list for `bookmarks` queries.
const COLUMNS: &str = "id, title, url, created_at, updated_at";

/// Provides data access for bookmarks backed by the `bookmarks` table.
#[derive(Clone)]
pub struct PgBookmarkStore {
    pool: PgPool,
}

impl PgBookmarkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// ORDER BY clause for a sort order. Id is the tiebreaker so pages are
/// stable when many rows share a creation timestamp.
fn order_by(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Insertion => "id ASC",
        SortOrder::CreatedAtDesc => "created_at DESC, id DESC",
        SortOrder::CreatedAtAsc => "created_at ASC, id ASC",
    }
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let query = format!(
            "INSERT INTO bookmarks (title, url, created_at) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let bookmark = sqlx::query_as::<_, Bookmark>(&query)
            .bind(&new.title)
            .bind(&new.url)
            .bind(new.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(bookmark)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Bookmark>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM bookmarks WHERE id = $1");
        let bookmark = sqlx::query_as::<_, Bookmark>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(bookmark)
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Bookmark>, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookmarks")
            .fetch_one(&self.pool)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM bookmarks \
             ORDER BY {} \
             LIMIT $1 OFFSET $2",
            order_by(request.sort)
        );
        let items = sqlx::query_as::<_, Bookmark>(&query)
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(items, request, total))
    }

    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, StoreError> {
        let query = format!(
            "UPDATE bookmarks \
             SET title = $2, url = $3, updated_at = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Bookmark>(&query)
            .bind(bookmark.id)
            .bind(&bookmark.title)
            .bind(&bookmark.url)
            .bind(bookmark.updated_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
