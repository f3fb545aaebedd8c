//! Author routes.
//!
//! - GET /authors - List every author
//! - GET /author-id/{id} - Fetch an author by id
//! - GET /author-isbn/{isbn} - List authors whose books include the ISBN
//! - POST /author - Create an author
//! - PUT /author-update/{id} - Replace fields on an author
//! - DELETE /author-book-delete/{id}/{isbn} - Remove the author from a book
//! - DELETE /author-delete/{id} - Delete an author

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};
use serde::Serialize;

use bookshelf_core::{Author, AuthorId, AuthorPatch, DeleteResult, Document};

use crate::error::{ApiError, ApiResult};
use crate::extract::{AppJson, AppPath};
use crate::routes::books::{BookUpdatedResponse, remove_author_from_book};
use crate::state::AppState;

/// Response for POST /author.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAddedResponse {
    pub author_added: Document<Author>,
    pub message: &'static str,
}

/// Response for PUT /author-update/{id}.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorUpdatedResponse {
    pub author_updated: Option<Document<Author>>,
    pub message: &'static str,
}

/// Response for DELETE /author-delete/{id}.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDeletedResponse {
    pub author_deleted: DeleteResult,
    pub message: &'static str,
}

pub const AUTHOR_ADDED: &str = "Author was added !!!";
pub const AUTHOR_UPDATED: &str = "Author was updated !!!";
pub const AUTHOR_DELETED: &str = "Author was Deleted !!!";

/// GET /authors
async fn list_authors(State(state): State<AppState>) -> ApiResult<Json<Vec<Document<Author>>>> {
    Ok(Json(state.authors().list_authors().await?))
}

/// GET /author-id/{id}
async fn get_author(
    State(state): State<AppState>,
    AppPath(id): AppPath<AuthorId>,
) -> ApiResult<Json<Document<Author>>> {
    state
        .authors()
        .find_author(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No Author found for the id of {}", id)))
}

/// GET /author-isbn/{isbn}
async fn get_authors_by_book(
    State(state): State<AppState>,
    AppPath(isbn): AppPath<String>,
) -> ApiResult<Json<Vec<Document<Author>>>> {
    let authors = state.authors().find_authors_by_book(&isbn).await?;
    if authors.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No Authors found for the book of {}",
            isbn
        )));
    }
    Ok(Json(authors))
}

/// POST /author
async fn create_author(
    State(state): State<AppState>,
    AppJson(author): AppJson<Author>,
) -> ApiResult<Json<AuthorAddedResponse>> {
    let created = state.authors().create_author(author).await?;
    tracing::info!(id = %created.record.id, doc_id = created.doc_id, "Author added");

    Ok(Json(AuthorAddedResponse {
        author_added: created,
        message: AUTHOR_ADDED,
    }))
}

/// PUT /author-update/{id} - `authorUpdated` is `null` on a miss.
async fn update_author(
    State(state): State<AppState>,
    AppPath(id): AppPath<AuthorId>,
    AppJson(patch): AppJson<AuthorPatch>,
) -> ApiResult<Json<AuthorUpdatedResponse>> {
    let updated = state.authors().update_author(id, patch).await?;
    if updated.is_some() {
        tracing::info!(id = %id, "Author updated");
    }

    Ok(Json(AuthorUpdatedResponse {
        author_updated: updated,
        message: AUTHOR_UPDATED,
    }))
}

/// DELETE /author-book-delete/{id}/{isbn}
async fn delete_author_from_book(
    State(state): State<AppState>,
    AppPath((author, isbn)): AppPath<(AuthorId, String)>,
) -> ApiResult<Json<BookUpdatedResponse>> {
    remove_author_from_book(&state, &isbn, author).await
}

/// DELETE /author-delete/{id}
async fn delete_author(
    State(state): State<AppState>,
    AppPath(id): AppPath<AuthorId>,
) -> ApiResult<Json<AuthorDeletedResponse>> {
    let result = state.authors().delete_author(id).await?;
    tracing::info!(id = %id, deleted = result.deleted_count, "Author delete");

    Ok(Json(AuthorDeletedResponse {
        author_deleted: result,
        message: AUTHOR_DELETED,
    }))
}

/// Build author routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(list_authors))
        .route("/author-id/{id}", get(get_author))
        .route("/author-isbn/{isbn}", get(get_authors_by_book))
        .route("/author", post(create_author))
        .route("/author-update/{id}", put(update_author))
        .route("/author-book-delete/{id}/{isbn}", delete(delete_author_from_book))
        .route("/author-delete/{id}", delete(delete_author))
}
