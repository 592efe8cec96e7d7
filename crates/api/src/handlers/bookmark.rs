//! Handlers for the `/bookmarks` resource.
//!
//! Each handler is one independent transaction against the record store;
//! timestamps are stamped here, never taken from the caller. Update's
//! load-then-mutate-then-save is not transactionally wrapped, so a
//! lost-update race between concurrent writers to the same id is an
//! accepted limitation.

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use chrono::Utc;

use bookmarks_core::error::CoreError;
use bookmarks_core::page::{Page, PageRequest};
use bookmarks_core::types::DbId;
use bookmarks_core::validation::validate_bookmark_payload;
use bookmarks_db::models::bookmark::{
    Bookmark, BookmarkInfo, CreateBookmark, NewBookmark, UpdateBookmark,
};

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// GET /api/bookmarks
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<Bookmark>>> {
    let request: PageRequest = params.into();
    let page = state.store.find_page(&request).await?;
    Ok(Json(page))
}

/// GET /api/bookmarks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookmarkInfo>> {
    let bookmark = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Bookmark",
            id,
        }))?;
    Ok(Json(BookmarkInfo::from(bookmark)))
}

/// POST /api/bookmarks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBookmark>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Bookmark>)> {
    let errors = validate_bookmark_payload(&input.title, &input.url);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let bookmark = state
        .store
        .insert(NewBookmark {
            title: input.title,
            url: input.url,
            created_at: Utc::now(),
        })
        .await?;

    let location = format!("/api/bookmarks/{}", bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(bookmark),
    ))
}

/// PUT /api/bookmarks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBookmark>,
) -> AppResult<Json<Bookmark>> {
    let mut bookmark = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Bookmark",
            id,
        }))?;

    let errors = validate_bookmark_payload(&input.title, &input.url);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    bookmark.title = input.title;
    bookmark.url = input.url;
    bookmark.updated_at = Some(Utc::now());

    let saved = state.store.update(&bookmark).await?;
    Ok(Json(saved))
}

/// DELETE /api/bookmarks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = state.store.delete(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Bookmark",
            id,
        }))
    }
}
