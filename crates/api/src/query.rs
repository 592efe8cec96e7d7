//! Shared query parameter types for API handlers.

use serde::Deserialize;

use bookmarks_core::page::{PageRequest, SortOrder};

/// Generic pagination parameters (`?page=&size=&sort=`).
///
/// Out-of-range values are clamped rather than rejected; an unrecognized
/// `sort` falls back to the store's default ordering.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(
            params.page,
            params.size,
            SortOrder::parse(params.sort.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_first_page_default_size() {
        let request: PageRequest = PageParams::default().into();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, bookmarks_core::page::DEFAULT_PAGE_SIZE);
        assert_eq!(request.sort, SortOrder::Insertion);
    }

    #[test]
    fn sort_string_is_parsed() {
        let params = PageParams {
            page: Some(2),
            size: Some(10),
            sort: Some("created_at,desc".to_string()),
        };
        let request: PageRequest = params.into();
        assert_eq!(request.sort, SortOrder::CreatedAtDesc);
        assert_eq!(request.offset(), 20);
    }
}
