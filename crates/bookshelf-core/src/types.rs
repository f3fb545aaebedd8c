//! Core data types for the Bookshelf catalog.
//!
//! Three record kinds live in the catalog, each in its own collection:
//!
//! - [`Book`], keyed informally by its ISBN string
//! - [`Author`], keyed informally by a numeric id
//! - [`Publication`], keyed informally by a numeric id
//!
//! None of the keys are enforced unique, and cross references between
//! records (`Book::authors`, `Author::books`, ...) are never checked.
//! Every stored record is handed back wrapped in a [`Document`] carrying the
//! store-assigned surrogate key.
//!
//! JSON field names match the public wire format (`ISBN`, `pubDate`,
//! `numOfPage`), so the same types serve as request bodies and responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ============================================================================
// ID Types
// ============================================================================

/// Numeric identifier of an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub i64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AuthorId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for AuthorId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Numeric identifier of a publication (publisher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicationId(pub i64);

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PublicationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for PublicationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Stored Documents
// ============================================================================

/// A record as held by a collection, together with its surrogate key.
///
/// The surrogate key is assigned by the store on insert, increases
/// monotonically per collection and defines insertion order. It serializes
/// as `_id` next to the record's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    #[serde(rename = "_id")]
    pub doc_id: i64,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Document<T> {
    pub fn new(doc_id: i64, record: T) -> Self {
        Self { doc_id, record }
    }
}

/// Acknowledgement returned by every delete, whether or not a record matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn deleted(count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: count,
        }
    }
}

/// A partial update that can be applied onto a record of type `T`.
///
/// Fields present in the patch replace the record's fields; absent fields
/// leave the record untouched.
pub trait Patch<T> {
    fn apply_to(&self, target: &mut T);

    /// True when the patch carries no field at all.
    fn is_empty(&self) -> bool;
}

// ============================================================================
// Book
// ============================================================================

/// A book in the catalog.
///
/// Also the body accepted by `POST /book`: keys outside this field set are
/// dropped during deserialization and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author ids, in credit order. Informal foreign keys.
    #[serde(default)]
    pub authors: Vec<AuthorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "pubDate", default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(rename = "numOfPage", default, skip_serializing_if = "Option::is_none")]
    pub num_of_page: Option<i64>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<PublicationId>,
}

impl Book {
    /// Create a book with only its ISBN set.
    pub fn new(isbn: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            ..Self::default()
        }
    }

    /// Remove the first occurrence of `author` from the author list.
    ///
    /// Returns `false` (and leaves the list alone) when the author is not
    /// credited on this book.
    pub fn remove_author(&mut self, author: AuthorId) -> bool {
        match self.authors.iter().position(|a| *a == author) {
            Some(index) => {
                self.authors.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }
}

/// Body accepted by `PUT /book-update/{isbn}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(rename = "ISBN", default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<AuthorId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "pubDate", default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(rename = "numOfPage", default, skip_serializing_if = "Option::is_none")]
    pub num_of_page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<PublicationId>,
}

impl Patch<Book> for BookPatch {
    fn apply_to(&self, book: &mut Book) {
        if let Some(isbn) = &self.isbn {
            book.isbn = isbn.clone();
        }
        if let Some(title) = &self.title {
            book.title = Some(title.clone());
        }
        if let Some(authors) = &self.authors {
            book.authors = authors.clone();
        }
        if let Some(language) = &self.language {
            book.language = Some(language.clone());
        }
        if let Some(pub_date) = &self.pub_date {
            book.pub_date = Some(pub_date.clone());
        }
        if let Some(pages) = self.num_of_page {
            book.num_of_page = Some(pages);
        }
        if let Some(category) = &self.category {
            book.category = category.clone();
        }
        if let Some(publication) = self.publication {
            book.publication = Some(publication);
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// Author
// ============================================================================

/// An author in the catalog. Also the body accepted by `POST /author`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISBNs of the author's books. Informal foreign keys.
    #[serde(default)]
    pub books: Vec<String>,
}

impl Author {
    pub fn new(id: impl Into<AuthorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            books: Vec::new(),
        }
    }

    pub fn lists_book(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| b == isbn)
    }
}

/// Body accepted by `PUT /author-update/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AuthorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<String>>,
}

impl Patch<Author> for AuthorPatch {
    fn apply_to(&self, author: &mut Author) {
        if let Some(id) = self.id {
            author.id = id;
        }
        if let Some(name) = &self.name {
            author.name = Some(name.clone());
        }
        if let Some(books) = &self.books {
            author.books = books.clone();
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// Publication
// ============================================================================

/// A publication (publisher) in the catalog. Also the body accepted by
/// `POST /publication`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: PublicationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISBNs of the books it published. Informal foreign keys.
    #[serde(default)]
    pub books: Vec<String>,
}

impl Publication {
    pub fn new(id: impl Into<PublicationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            books: Vec::new(),
        }
    }

    pub fn lists_book(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| b == isbn)
    }
}

/// Body accepted by `PUT /publication-update/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PublicationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PublicationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<String>>,
}

impl Patch<Publication> for PublicationPatch {
    fn apply_to(&self, publication: &mut Publication) {
        if let Some(id) = self.id {
            publication.id = id;
        }
        if let Some(name) = &self.name {
            publication.name = Some(name.clone());
        }
        if let Some(books) = &self.books {
            publication.books = books.clone();
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
