//! In-memory [`BookmarkStore`] for tests.
//!
//! Matches the PostgreSQL backend's observable behavior: monotonically
//! increasing ids that are never reused, stable insertion ordering, and
//! the same pagination arithmetic.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use bookmarks_core::page::{Page, PageRequest, SortOrder};
use bookmarks_core::types::DbId;

use crate::models::bookmark::{Bookmark, NewBookmark};
use crate::store::{BookmarkStore, StoreError};

#[derive(Default)]
struct Inner {
    rows: BTreeMap<DbId, Bookmark>,
    next_id: DbId,
}

/// Bookmark store held entirely in process memory.
#[derive(Default)]
pub struct MemoryBookmarkStore {
    inner: Mutex<Inner>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let bookmark = Bookmark {
            id: inner.next_id,
            title: new.title,
            url: new.url,
            created_at: new.created_at,
            updated_at: None,
        };
        inner.rows.insert(bookmark.id, bookmark.clone());
        Ok(bookmark)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Bookmark>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.get(&id).cloned())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Bookmark>, StoreError> {
        let inner = self.inner.lock().unwrap();
        // BTreeMap iteration is already ascending by id.
        let mut all: Vec<Bookmark> = inner.rows.values().cloned().collect();
        match request.sort {
            SortOrder::Insertion => {}
            SortOrder::CreatedAtDesc => {
                all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            }
            SortOrder::CreatedAtAsc => {
                all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            }
        }

        let total = all.len() as i64;
        let items = all
            .into_iter()
            .skip(request.offset().max(0) as usize)
            .take(request.size as usize)
            .collect();
        Ok(Page::new(items, request, total))
    }

    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.rows.insert(bookmark.id, bookmark.clone());
        Ok(bookmark.clone())
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
