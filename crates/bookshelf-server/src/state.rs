//! Application state shared across handlers.

use std::sync::Arc;

use bookshelf_store::{AuthorStore, BookStore, Catalog, PublicationStore};

/// Application state shared across all handlers.
///
/// Holds one handle per record store. The handles usually point at the same
/// backend, built once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    books: Arc<dyn BookStore>,
    authors: Arc<dyn AuthorStore>,
    publications: Arc<dyn PublicationStore>,
}

impl AppState {
    /// Create state backed by a single catalog backend.
    pub fn new<C: Catalog + 'static>(catalog: Arc<C>) -> Self {
        Self {
            books: catalog.clone(),
            authors: catalog.clone(),
            publications: catalog,
        }
    }

    /// Get the book record store.
    pub fn books(&self) -> &dyn BookStore {
        self.books.as_ref()
    }

    /// Get the author record store.
    pub fn authors(&self) -> &dyn AuthorStore {
        self.authors.as_ref()
    }

    /// Get the publication record store.
    pub fn publications(&self) -> &dyn PublicationStore {
        self.publications.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
