//! Publication routes.

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};
use serde::Serialize;

use bookshelf_core::{DeleteResult, Document, Publication, PublicationId, PublicationPatch};

use crate::error::{ApiError, ApiResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// Response for POST /publication.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationAddedResponse {
    pub publication_added: Document<Publication>,
    pub message: &'static str,
}

/// Response for PUT /publication-update/{id}.
///
/// `publication_updated` is `null` when the update matched no publication.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationUpdatedResponse {
    pub publication_updated: Option<Document<Publication>>,
    pub message: &'static str,
}

/// Response for DELETE /publication-delete/{id}.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDeletedResponse {
    pub publication_deleted: DeleteResult,
    pub message: &'static str,
}

pub const PUBLICATION_ADDED: &str = "Publication was added !!!";
pub const PUBLICATION_UPDATED: &str = "Publication was updated !!!";
pub const PUBLICATION_DELETED: &str = "Publication was Deleted !!!";

/// GET /publications - List every publication in insertion order.
async fn list_publications(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Document<Publication>>>> {
    Ok(Json(state.publications().list_publications().await?))
}

/// GET /publication-id/{id} - Fetch the first publication with the id.
async fn get_publication(
    State(state): State<AppState>,
    AppPath(id): AppPath<PublicationId>,
) -> ApiResult<Json<Document<Publication>>> {
    state
        .publications()
        .find_publication(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No Publication found for the id of {}", id)))
}

/// GET /publication-isbn/{isbn} - First publication listing the ISBN in its books.
async fn get_publication_by_book(
    State(state): State<AppState>,
    AppPath(isbn): AppPath<String>,
) -> ApiResult<Json<Document<Publication>>> {
    state
        .publications()
        .find_publication_by_book(&isbn)
        .await?
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!("No Publication found for the ISBN of {}", isbn))
        })
}

/// POST /publication - Create a publication from the request body.
async fn create_publication(
    State(state): State<AppState>,
    AppJson(publication): AppJson<Publication>,
) -> ApiResult<Json<PublicationAddedResponse>> {
    let created = state.publications().create_publication(publication).await?;
    tracing::info!(id = %created.record.id, doc_id = created.doc_id, "Publication added");

    Ok(Json(PublicationAddedResponse {
        publication_added: created,
        message: PUBLICATION_ADDED,
    }))
}

/// PUT /publication-update/{id} - Replace the fields present in the body.
///
/// A miss is not an error: the response carries `publicationUpdated: null`.
async fn update_publication(
    State(state): State<AppState>,
    AppPath(id): AppPath<PublicationId>,
    AppJson(patch): AppJson<PublicationPatch>,
) -> ApiResult<Json<PublicationUpdatedResponse>> {
    let updated = state.publications().update_publication(id, patch).await?;
    if updated.is_some() {
        tracing::info!(id = %id, "Publication updated");
    }

    Ok(Json(PublicationUpdatedResponse {
        publication_updated: updated,
        message: PUBLICATION_UPDATED,
    }))
}

/// DELETE /publication-delete/{id} - Delete the first publication with the id.
async fn delete_publication(
    State(state): State<AppState>,
    AppPath(id): AppPath<PublicationId>,
) -> ApiResult<Json<PublicationDeletedResponse>> {
    let result = state.publications().delete_publication(id).await?;
    tracing::info!(id = %id, deleted = result.deleted_count, "Publication delete");

    Ok(Json(PublicationDeletedResponse {
        publication_deleted: result,
        message: PUBLICATION_DELETED,
    }))
}

/// Build publication routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/publications", get(list_publications))
        .route("/publication-id/{id}", get(get_publication))
        .route("/publication-isbn/{isbn}", get(get_publication_by_book))
        .route("/publication", post(create_publication))
        .route("/publication-update/{id}", put(update_publication))
        .route("/publication-delete/{id}", delete(delete_publication))
}
