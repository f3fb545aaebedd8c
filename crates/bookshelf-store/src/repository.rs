//! Record store interfaces.
//!
//! One trait per collection. Both backends ([`crate::Store`] on PostgreSQL
//! and [`crate::MemoryStore`]) implement all three, and the HTTP layer holds
//! them as trait objects so either can be injected at startup.
//!
//! Operations keyed on `ISBN` or `id` act on the first matching record in
//! insertion order; keys are not unique.

use async_trait::async_trait;
use bookshelf_core::{
    Author, AuthorId, AuthorPatch, Book, BookPatch, DeleteResult, Document, Publication,
    PublicationId, PublicationPatch,
};

use crate::error::StoreResult;

/// Book collection operations.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Every book, in insertion order.
    async fn list_books(&self) -> StoreResult<Vec<Document<Book>>>;

    /// First book with the given ISBN.
    async fn find_book(&self, isbn: &str) -> StoreResult<Option<Document<Book>>>;

    /// Books whose category list contains `category` exactly.
    async fn find_books_by_category(&self, category: &str) -> StoreResult<Vec<Document<Book>>>;

    async fn create_book(&self, book: Book) -> StoreResult<Document<Book>>;

    /// Apply `patch` to the first book with the given ISBN and return the
    /// updated record, or `None` when nothing matched.
    async fn update_book(&self, isbn: &str, patch: BookPatch)
    -> StoreResult<Option<Document<Book>>>;

    async fn delete_book(&self, isbn: &str) -> StoreResult<DeleteResult>;

    /// Remove the first occurrence of `author` from the book's author list.
    ///
    /// Returns `None` when no book has the ISBN. Removing an author that is
    /// not credited still returns the (unchanged) book.
    async fn remove_book_author(
        &self,
        isbn: &str,
        author: AuthorId,
    ) -> StoreResult<Option<Document<Book>>>;
}

/// Author collection operations.
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn list_authors(&self) -> StoreResult<Vec<Document<Author>>>;

    async fn find_author(&self, id: AuthorId) -> StoreResult<Option<Document<Author>>>;

    /// Authors whose `books` list contains the ISBN.
    async fn find_authors_by_book(&self, isbn: &str) -> StoreResult<Vec<Document<Author>>>;

    async fn create_author(&self, author: Author) -> StoreResult<Document<Author>>;

    async fn update_author(
        &self,
        id: AuthorId,
        patch: AuthorPatch,
    ) -> StoreResult<Option<Document<Author>>>;

    async fn delete_author(&self, id: AuthorId) -> StoreResult<DeleteResult>;
}

/// Publication collection operations.
#[async_trait]
pub trait PublicationStore: Send + Sync {
    async fn list_publications(&self) -> StoreResult<Vec<Document<Publication>>>;

    async fn find_publication(
        &self,
        id: PublicationId,
    ) -> StoreResult<Option<Document<Publication>>>;

    /// First publication whose `books` list contains the ISBN.
    async fn find_publication_by_book(
        &self,
        isbn: &str,
    ) -> StoreResult<Option<Document<Publication>>>;

    async fn create_publication(
        &self,
        publication: Publication,
    ) -> StoreResult<Document<Publication>>;

    async fn update_publication(
        &self,
        id: PublicationId,
        patch: PublicationPatch,
    ) -> StoreResult<Option<Document<Publication>>>;

    async fn delete_publication(&self, id: PublicationId) -> StoreResult<DeleteResult>;
}

/// A backend providing all three collections.
pub trait Catalog: BookStore + AuthorStore + PublicationStore {}

impl<T: BookStore + AuthorStore + PublicationStore> Catalog for T {}
