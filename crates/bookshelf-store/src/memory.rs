//! In-memory store implementation.
//!
//! Mirrors the PostgreSQL backend's semantics (insertion order, first match
//! wins, no uniqueness) without any I/O. Used by tests and by the server
//! when started with `STORE_BACKEND=memory`.

use async_trait::async_trait;
use bookshelf_core::{
    Author, AuthorId, AuthorPatch, Book, BookPatch, DeleteResult, Document, Patch, Publication,
    PublicationId, PublicationPatch,
};
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::repository::{AuthorStore, BookStore, PublicationStore};

/// One collection: documents in insertion order plus the next surrogate key.
#[derive(Debug)]
struct Collection<T> {
    docs: Vec<Document<T>>,
    next_id: i64,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            docs: Vec::new(),
            next_id: 1,
        }
    }

    fn all(&self) -> Vec<Document<T>> {
        self.docs.clone()
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Document<T>> {
        self.docs.iter().find(|d| pred(&d.record)).cloned()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<Document<T>> {
        self.docs
            .iter()
            .filter(|d| pred(&d.record))
            .cloned()
            .collect()
    }

    fn insert(&mut self, record: T) -> Document<T> {
        let doc = Document::new(self.next_id, record);
        self.next_id += 1;
        self.docs.push(doc.clone());
        doc
    }

    fn find_mut(&mut self, pred: impl Fn(&T) -> bool) -> Option<&mut Document<T>> {
        self.docs.iter_mut().find(|d| pred(&d.record))
    }

    fn update(&mut self, pred: impl Fn(&T) -> bool, patch: &impl Patch<T>) -> Option<Document<T>> {
        let doc = self.find_mut(pred)?;
        patch.apply_to(&mut doc.record);
        Some(doc.clone())
    }

    fn delete(&mut self, pred: impl Fn(&T) -> bool) -> DeleteResult {
        match self.docs.iter().position(|d| pred(&d.record)) {
            Some(index) => {
                self.docs.remove(index);
                DeleteResult::deleted(1)
            }
            None => DeleteResult::deleted(0),
        }
    }
}

/// Catalog held entirely in process memory.
#[derive(Debug)]
pub struct MemoryStore {
    books: RwLock<Collection<Book>>,
    authors: RwLock<Collection<Author>>,
    publications: RwLock<Collection<Publication>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Collection::new()),
            authors: RwLock::new(Collection::new()),
            publications: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list_books(&self) -> StoreResult<Vec<Document<Book>>> {
        Ok(self.books.read().await.all())
    }

    async fn find_book(&self, isbn: &str) -> StoreResult<Option<Document<Book>>> {
        Ok(self.books.read().await.find(|b| b.isbn == isbn))
    }

    async fn find_books_by_category(&self, category: &str) -> StoreResult<Vec<Document<Book>>> {
        Ok(self.books.read().await.filter(|b| b.has_category(category)))
    }

    async fn create_book(&self, book: Book) -> StoreResult<Document<Book>> {
        Ok(self.books.write().await.insert(book))
    }

    async fn update_book(
        &self,
        isbn: &str,
        patch: BookPatch,
    ) -> StoreResult<Option<Document<Book>>> {
        Ok(self.books.write().await.update(|b| b.isbn == isbn, &patch))
    }

    async fn delete_book(&self, isbn: &str) -> StoreResult<DeleteResult> {
        Ok(self.books.write().await.delete(|b| b.isbn == isbn))
    }

    async fn remove_book_author(
        &self,
        isbn: &str,
        author: AuthorId,
    ) -> StoreResult<Option<Document<Book>>> {
        let mut books = self.books.write().await;
        Ok(books.find_mut(|b| b.isbn == isbn).map(|doc| {
            doc.record.remove_author(author);
            doc.clone()
        }))
    }
}

#[async_trait]
impl AuthorStore for MemoryStore {
    async fn list_authors(&self) -> StoreResult<Vec<Document<Author>>> {
        Ok(self.authors.read().await.all())
    }

    async fn find_author(&self, id: AuthorId) -> StoreResult<Option<Document<Author>>> {
        Ok(self.authors.read().await.find(|a| a.id == id))
    }

    async fn find_authors_by_book(&self, isbn: &str) -> StoreResult<Vec<Document<Author>>> {
        Ok(self.authors.read().await.filter(|a| a.lists_book(isbn)))
    }

    async fn create_author(&self, author: Author) -> StoreResult<Document<Author>> {
        Ok(self.authors.write().await.insert(author))
    }

    async fn update_author(
        &self,
        id: AuthorId,
        patch: AuthorPatch,
    ) -> StoreResult<Option<Document<Author>>> {
        Ok(self.authors.write().await.update(|a| a.id == id, &patch))
    }

    async fn delete_author(&self, id: AuthorId) -> StoreResult<DeleteResult> {
        Ok(self.authors.write().await.delete(|a| a.id == id))
    }
}

#[async_trait]
impl PublicationStore for MemoryStore {
    async fn list_publications(&self) -> StoreResult<Vec<Document<Publication>>> {
        Ok(self.publications.read().await.all())
    }

    async fn find_publication(
        &self,
        id: PublicationId,
    ) -> StoreResult<Option<Document<Publication>>> {
        Ok(self.publications.read().await.find(|p| p.id == id))
    }

    async fn find_publication_by_book(
        &self,
        isbn: &str,
    ) -> StoreResult<Option<Document<Publication>>> {
        Ok(self.publications.read().await.find(|p| p.lists_book(isbn)))
    }

    async fn create_publication(
        &self,
        publication: Publication,
    ) -> StoreResult<Document<Publication>> {
        Ok(self.publications.write().await.insert(publication))
    }

    async fn update_publication(
        &self,
        id: PublicationId,
        patch: PublicationPatch,
    ) -> StoreResult<Option<Document<Publication>>> {
        Ok(self.publications.write().await.update(|p| p.id == id, &patch))
    }

    async fn delete_publication(&self, id: PublicationId) -> StoreResult<DeleteResult> {
        Ok(self.publications.write().await.delete(|p| p.id == id))
    }
}
