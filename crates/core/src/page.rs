//! Pagination primitives for paged listing endpoints.
//!
//! A [`PageRequest`] carries clamped, zero-based page parameters; a
//! [`Page`] is the response envelope: one bounded slice of the collection
//! plus totals.

use serde::Serialize;

/// Default page size when the client omits `size`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on `size`; larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Ordering applied to a paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Insertion order (ascending id) -- the store default.
    #[default]
    Insertion,
    CreatedAtDesc,
    CreatedAtAsc,
}

impl SortOrder {
    /// Parse a `sort` query value.
    ///
    /// Accepts `created_at,desc` and `created_at,asc` (also with `.` or
    /// `:` separators; bare `created_at` means ascending). Anything else
    /// falls back to insertion order rather than erroring.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return SortOrder::Insertion;
        };
        let raw = raw.trim().to_ascii_lowercase();
        let (field, dir) = match raw.split_once([',', '.', ':']) {
            Some((f, d)) => (f.trim(), d.trim()),
            None => (raw.as_str(), "asc"),
        };
        match (field, dir) {
            ("created_at" | "createdat", "desc") => SortOrder::CreatedAtDesc,
            ("created_at" | "createdat", _) => SortOrder::CreatedAtAsc,
            _ => SortOrder::Insertion,
        }
    }
}

/// Validated pagination parameters for a listing query.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// Zero-based page number.
    pub page: i64,
    /// Rows per page, in `1..=MAX_PAGE_SIZE`.
    pub size: i64,
    pub sort: SortOrder,
}

impl PageRequest {
    /// Build a request from raw query values, clamping out-of-range input.
    pub fn new(page: Option<i64>, size: Option<i64>, sort: SortOrder) -> Self {
        Self {
            page: clamp_page(page),
            size: clamp_size(size),
            sort,
        }
    }

    /// Row offset of the first item on this page.
    ///
    /// Saturates instead of overflowing so an absurd `page` value yields an
    /// empty page rather than a panic or a negative OFFSET.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, SortOrder::Insertion)
    }
}

/// One page of results plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based page number this slice came from.
    pub page: i64,
    /// Requested page size (not the number of items actually returned).
    pub size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Assemble a page from one fetched slice and the collection total.
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: i64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages: total_pages(total_items, request.size),
        }
    }
}

/// Clamp a user-provided page number to non-negative.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(0).max(0)
}

/// Clamp a user-provided page size to valid bounds.
pub fn clamp_size(size: Option<i64>) -> i64 {
    size.unwrap_or(DEFAULT_PAGE_SIZE).max(1).min(MAX_PAGE_SIZE)
}

fn total_pages(total_items: i64, size: i64) -> i64 {
    if total_items <= 0 {
        0
    } else {
        (total_items + size - 1) / size
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
