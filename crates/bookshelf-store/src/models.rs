//! Database models for the storage layer.
//!
//! Every collection table has the same row shape, `(doc_id, doc)`, so a single
//! row type covers books, authors and publications. Rows are decoded into
//! the typed records from bookshelf-core at the store boundary.

use bookshelf_core::Document;
use serde::de::DeserializeOwned;
use sqlx::FromRow;
use sqlx::types::Json;

use crate::error::StoreResult;

/// Database row for any collection table.
#[derive(Debug, Clone, FromRow)]
pub struct DocumentRow {
    pub doc_id: i64,
    pub doc: Json<serde_json::Value>,
}

impl DocumentRow {
    /// Decode the JSONB payload into a typed document.
    pub fn decode<T: DeserializeOwned>(self) -> StoreResult<Document<T>> {
        let record = serde_json::from_value(self.doc.0)?;
        Ok(Document::new(self.doc_id, record))
    }

    /// Decode a batch of rows, failing on the first malformed document.
    pub fn decode_all<T: DeserializeOwned>(rows: Vec<Self>) -> StoreResult<Vec<Document<T>>> {
        rows.into_iter().map(Self::decode).collect()
    }
}
