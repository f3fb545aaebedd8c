//! Book routes.
//!
//! - GET /books - List every book
//! - GET /book-isbn/{isbn} - Fetch a book by ISBN
//! - GET /book-category/{category} - List books in a category
//! - POST /book - Create a book
//! - PUT /book-update/{isbn} - Replace fields on a book
//! - DELETE /book-delete/{isbn} - Delete a book
//! - DELETE /book-author-delete/{isbn}/{id} - Remove an author from a book

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};
use serde::Serialize;

use bookshelf_core::{AuthorId, Book, BookPatch, DeleteResult, Document};

use crate::error::{ApiError, ApiResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Response for POST /book.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAddedResponse {
    pub book_added: Document<Book>,
    pub message: &'static str,
}

/// Response for PUT /book-update/{isbn} and both author-removal routes.
///
/// `book_updated` is `null` when the update matched no book.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdatedResponse {
    pub book_updated: Option<Document<Book>>,
    pub message: &'static str,
}

/// Response for DELETE /book-delete/{isbn}.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDeletedResponse {
    pub book_deleted: DeleteResult,
    pub message: &'static str,
}

pub const BOOK_ADDED: &str = "Book was added !!!";
pub const BOOK_UPDATED: &str = "Book was updated !!!";
pub const BOOK_DELETED: &str = "Book was Deleted !!!";
pub const AUTHOR_REMOVED_FROM_BOOK: &str = "Author was Deleted from the Book !!!";

pub(crate) fn book_not_found(isbn: &str) -> ApiError {
    ApiError::NotFound(format!("No Book found for the ISBN of {}", isbn))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /books - List every book in insertion order.
async fn list_books(State(state): State<AppState>) -> ApiResult<Json<Vec<Document<Book>>>> {
    Ok(Json(state.books().list_books().await?))
}

/// GET /book-isbn/{isbn} - Fetch the first book with the ISBN.
async fn get_book(
    State(state): State<AppState>,
    AppPath(isbn): AppPath<String>,
) -> ApiResult<Json<Document<Book>>> {
    match state.books().find_book(&isbn).await? {
        Some(book) => Ok(Json(book)),
        None => {
            tracing::debug!(isbn = %isbn, "Book not found");
            Err(book_not_found(&isbn))
        }
    }
}

/// GET /book-category/{category} - List books tagged with the category.
async fn get_books_by_category(
    State(state): State<AppState>,
    AppPath(category): AppPath<String>,
) -> ApiResult<Json<Vec<Document<Book>>>> {
    let books = state.books().find_books_by_category(&category).await?;
    if books.is_empty() {
        tracing::debug!(category = %category, "No books in category");
        return Err(ApiError::NotFound(format!(
            "No Books found for the category of {}",
            category
        )));
    }
    Ok(Json(books))
}

/// POST /book - Create a book from the request body.
async fn create_book(
    State(state): State<AppState>,
    AppJson(book): AppJson<Book>,
) -> ApiResult<Json<BookAddedResponse>> {
    let created = state.books().create_book(book).await?;
    tracing::info!(isbn = %created.record.isbn, doc_id = created.doc_id, "Book added");

    Ok(Json(BookAddedResponse {
        book_added: created,
        message: BOOK_ADDED,
    }))
}

/// PUT /book-update/{isbn} - Replace the fields present in the body.
///
/// A miss is not an error: the response carries `bookUpdated: null`.
async fn update_book(
    State(state): State<AppState>,
    AppPath(isbn): AppPath<String>,
    AppJson(patch): AppJson<BookPatch>,
) -> ApiResult<Json<BookUpdatedResponse>> {
    let updated = state.books().update_book(&isbn, patch).await?;
    match &updated {
        Some(doc) => tracing::info!(isbn = %isbn, doc_id = doc.doc_id, "Book updated"),
        None => tracing::debug!(isbn = %isbn, "Book update matched nothing"),
    }

    Ok(Json(BookUpdatedResponse {
        book_updated: updated,
        message: BOOK_UPDATED,
    }))
}

/// DELETE /book-delete/{isbn} - Delete the first book with the ISBN.
async fn delete_book(
    State(state): State<AppState>,
    AppPath(isbn): AppPath<String>,
) -> ApiResult<Json<BookDeletedResponse>> {
    let result = state.books().delete_book(&isbn).await?;
    tracing::info!(isbn = %isbn, deleted = result.deleted_count, "Book delete");

    Ok(Json(BookDeletedResponse {
        book_deleted: result,
        message: BOOK_DELETED,
    }))
}

/// Remove `author` from the book's author list. Shared by the book and the
/// author flavour of the route.
pub(crate) async fn remove_author_from_book(
    state: &AppState,
    isbn: &str,
    author: AuthorId,
) -> ApiResult<Json<BookUpdatedResponse>> {
    let Some(book) = state.books().remove_book_author(isbn, author).await? else {
        tracing::debug!(isbn = %isbn, "Book not found for author removal");
        return Err(book_not_found(isbn));
    };
    tracing::info!(isbn = %isbn, author = %author, "Author removed from book");

    Ok(Json(BookUpdatedResponse {
        book_updated: Some(book),
        message: AUTHOR_REMOVED_FROM_BOOK,
    }))
}

/// DELETE /book-author-delete/{isbn}/{id}
async fn delete_book_author(
    State(state): State<AppState>,
    AppPath((isbn, author)): AppPath<(String, AuthorId)>,
) -> ApiResult<Json<BookUpdatedResponse>> {
    remove_author_from_book(&state, &isbn, author).await
}

/// Build book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books))
        .route("/book-isbn/{isbn}", get(get_book))
        .route("/book-category/{category}", get(get_books_by_category))
        .route("/book", post(create_book))
        .route("/book-update/{isbn}", put(update_book))
        .route("/book-delete/{isbn}", delete(delete_book))
        .route("/book-author-delete/{isbn}/{id}", delete(delete_book_author))
}
