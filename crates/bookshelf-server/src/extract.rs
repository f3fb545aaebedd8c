//! Extractors whose rejections answer with the API's JSON error shape.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies; these
//! wrappers route the rejection through [`ApiError`] instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON request body. A malformed body, a wrong content type or a field of
/// the wrong type all become a 400 `{"error": ...}`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Path parameters. A non-numeric id becomes a 400 `{"error": ...}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
