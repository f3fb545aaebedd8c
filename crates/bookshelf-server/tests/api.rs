//! HTTP API tests.
//!
//! Drives the full router (middleware included) over the in-memory store,
//! one request at a time via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use bookshelf_server::{AppState, app};
use bookshelf_store::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt;

// ============================================================================
// Helpers
// ============================================================================

fn test_app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    app(state, "*").expect("router builds")
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn mern_book() -> Value {
    json!({
        "ISBN": "12345ONE",
        "title": "Getting started with MERN",
        "authors": [1, 2, 3],
        "language": "en",
        "pubDate": "2021-07-07",
        "numOfPage": 225,
        "category": ["fiction", "programming", "tech", "web dev"],
        "publication": 1
    })
}

/// Strip the surrogate key so records can be compared with request bodies.
fn without_doc_id(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        obj.remove("_id");
    }
    value
}

// ============================================================================
// Books
// ============================================================================

#[tokio::test]
async fn test_create_then_get_book_by_isbn() {
    let app = test_app();

    let (status, created) = send(&app, Method::POST, "/book", Some(mern_book())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["message"], "Book was added !!!");
    assert_eq!(without_doc_id(created["bookAdded"].clone()), mern_book());

    let (status, fetched) = get(&app, "/book-isbn/12345ONE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(without_doc_id(fetched), mern_book());
}

#[tokio::test]
async fn test_get_book_missing_isbn() {
    let app = test_app();

    let (status, body) = get(&app, "/book-isbn/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No Book found for the ISBN of nope"}));
}

#[tokio::test]
async fn test_list_books_in_insertion_order() {
    let app = test_app();
    for isbn in ["B", "A", "C"] {
        send(&app, Method::POST, "/book", Some(json!({"ISBN": isbn}))).await;
    }

    let (status, body) = get(&app, "/books").await;
    assert_eq!(status, StatusCode::OK);
    let isbns: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["ISBN"].as_str().unwrap())
        .collect();
    assert_eq!(isbns, vec!["B", "A", "C"]);
}

#[tokio::test]
async fn test_books_by_category() {
    let app = test_app();
    send(&app, Method::POST, "/book", Some(mern_book())).await;
    send(
        &app,
        Method::POST,
        "/book",
        Some(json!({"ISBN": "1234Two", "category": ["space"]})),
    )
    .await;

    let (status, body) = get(&app, "/book-category/tech").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["ISBN"], "12345ONE");

    let (status, body) = get(&app, "/book-category/cooking").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No Books found for the category of cooking"}));
}

#[tokio::test]
async fn test_update_book_replaces_given_fields() {
    let app = test_app();
    send(&app, Method::POST, "/book", Some(mern_book())).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/book-update/12345ONE",
        Some(json!({"title": "MERN in Action"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book was updated !!!");
    assert_eq!(body["bookUpdated"]["title"], "MERN in Action");
    assert_eq!(body["bookUpdated"]["numOfPage"], 225);
}

#[tokio::test]
async fn test_update_missing_book_returns_null_with_message() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/book-update/ghost",
        Some(json!({"title": "Nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"bookUpdated": null, "message": "Book was updated !!!"}));
}

#[tokio::test]
async fn test_delete_book_reports_count() {
    let app = test_app();
    send(&app, Method::POST, "/book", Some(mern_book())).await;

    let (status, body) = send(&app, Method::DELETE, "/book-delete/12345ONE", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "bookDeleted": {"acknowledged": true, "deletedCount": 1},
            "message": "Book was Deleted !!!"
        })
    );

    let (_, body) = send(&app, Method::DELETE, "/book-delete/12345ONE", None).await;
    assert_eq!(body["bookDeleted"]["deletedCount"], 0);

    let (status, _) = get(&app, "/book-isbn/12345ONE").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_author_from_book() {
    let app = test_app();
    send(&app, Method::POST, "/book", Some(mern_book())).await;

    let (status, body) = send(&app, Method::DELETE, "/book-author-delete/12345ONE/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Author was Deleted from the Book !!!");
    assert_eq!(body["bookUpdated"]["authors"], json!([1, 3]));

    // Non-member: no-op
    let (status, body) = send(&app, Method::DELETE, "/book-author-delete/12345ONE/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookUpdated"]["authors"], json!([1, 3]));

    let (_, fetched) = get(&app, "/book-isbn/12345ONE").await;
    assert_eq!(fetched["authors"], json!([1, 3]));
}

#[tokio::test]
async fn test_remove_author_from_missing_book() {
    let app = test_app();

    let (status, body) = send(&app, Method::DELETE, "/book-author-delete/none/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No Book found for the ISBN of none"}));
}

#[tokio::test]
async fn test_author_flavoured_removal_route() {
    let app = test_app();
    send(&app, Method::POST, "/book", Some(mern_book())).await;

    let (status, body) = send(&app, Method::DELETE, "/author-book-delete/1/12345ONE", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookUpdated"]["authors"], json!([2, 3]));
}

#[tokio::test]
async fn test_unknown_body_fields_not_persisted() {
    let app = test_app();
    let mut book = mern_book();
    book["injected"] = json!("ignored");

    let (_, created) = send(&app, Method::POST, "/book", Some(book)).await;
    assert!(created["bookAdded"].get("injected").is_none());

    let (_, fetched) = get(&app, "/book-isbn/12345ONE").await;
    assert!(fetched.get("injected").is_none());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/book",
        Some(json!({"ISBN": "x", "numOfPage": "many"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// ============================================================================
// Authors
// ============================================================================

#[tokio::test]
async fn test_author_lifecycle() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/author",
        Some(json!({"id": 1, "name": "Aradhana", "books": ["12345ONE"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Author was added !!!");
    assert_eq!(body["authorAdded"]["name"], "Aradhana");

    let (status, body) = get(&app, "/author-id/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["books"], json!(["12345ONE"]));

    let (status, body) = get(&app, "/author-isbn/12345ONE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get(&app, "/authors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_author_misses() {
    let app = test_app();

    let (status, body) = get(&app, "/author-id/77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No Author found for the id of 77"}));

    let (status, body) = get(&app, "/author-isbn/0000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No Authors found for the book of 0000"}));
}

#[tokio::test]
async fn test_author_update_runs_on_first_request() {
    let app = test_app();
    send(&app, Method::POST, "/author", Some(json!({"id": 2, "name": "Elon"}))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/author-update/2",
        Some(json!({"name": "Elon Musk"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Author was updated !!!");
    assert_eq!(body["authorUpdated"]["name"], "Elon Musk");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/author-update/404",
        Some(json!({"name": "Nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authorUpdated"], Value::Null);
}

#[tokio::test]
async fn test_author_delete_matches_id_field() {
    let app = test_app();
    send(&app, Method::POST, "/author", Some(json!({"id": 1, "name": "Aradhana"}))).await;

    let (status, body) = send(&app, Method::DELETE, "/author-delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "authorDeleted": {"acknowledged": true, "deletedCount": 1},
            "message": "Author was Deleted !!!"
        })
    );

    let (status, _) = get(&app, "/author-id/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_author_reports_zero() {
    let app = test_app();

    let (status, body) = send(&app, Method::DELETE, "/author-delete/404", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "authorDeleted": {"acknowledged": true, "deletedCount": 0},
            "message": "Author was Deleted !!!"
        })
    );
}

#[tokio::test]
async fn test_non_numeric_author_id_is_bad_request() {
    let app = test_app();

    let (status, body) = get(&app, "/author-id/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// ============================================================================
// Publications
// ============================================================================

#[tokio::test]
async fn test_publication_lifecycle() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/publication",
        Some(json!({"id": 1, "name": "Writex", "books": ["12345ONE"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Publication was added !!!");

    let (status, body) = get(&app, "/publication-isbn/12345ONE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Writex");

    let (status, body) = get(&app, "/publication-id/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/publication-update/1",
        Some(json!({"books": ["12345ONE", "1234Two"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Publication was updated !!!");
    assert_eq!(body["publicationUpdated"]["books"], json!(["12345ONE", "1234Two"]));

    let (status, body) = send(&app, Method::DELETE, "/publication-delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["publicationDeleted"]["deletedCount"], 1);
    assert_eq!(body["message"], "Publication was Deleted !!!");

    let (_, body) = get(&app, "/publications").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_publication_by_isbn_miss() {
    let app = test_app();

    let (status, body) = get(&app, "/publication-isbn/1234Three").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No Publication found for the ISBN of 1234Three"}));
}

#[tokio::test]
async fn test_publication_by_id_miss() {
    let app = test_app();

    let (status, body) = get(&app, "/publication-id/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No Publication found for the id of 9"}));
}

#[tokio::test]
async fn test_update_missing_publication_returns_null_with_message() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/publication-update/9",
        Some(json!({"name": "Nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"publicationUpdated": null, "message": "Publication was updated !!!"})
    );

    let (_, body) = get(&app, "/publications").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_missing_publication_reports_zero() {
    let app = test_app();

    let (status, body) = send(&app, Method::DELETE, "/publication-delete/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "publicationDeleted": {"acknowledged": true, "deletedCount": 0},
            "message": "Publication was Deleted !!!"
        })
    );
}

#[tokio::test]
async fn test_empty_update_body_leaves_book_unchanged() {
    let app = test_app();
    send(&app, Method::POST, "/book", Some(mern_book())).await;

    let (status, body) = send(&app, Method::PUT, "/book-update/12345ONE", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(without_doc_id(body["bookUpdated"].clone()), mern_book());
}

// ============================================================================
// Misc
// ============================================================================

#[tokio::test]
async fn test_welcome_and_health() {
    let app = test_app();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["WELCOME"], "to my Backend Software for the Book Company");

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_request_id_header_is_set() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
