//! bookshelf-store: Storage layer for the Bookshelf catalog
//!
//! This crate provides:
//! - One record-store trait per collection ([`BookStore`], [`AuthorStore`],
//!   [`PublicationStore`])
//! - A PostgreSQL backend keeping each record as a JSONB document ([`Store`])
//! - An in-memory backend with the same semantics ([`MemoryStore`])
//! - Migration management
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookshelf_store::{BookStore, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let book = store.find_book("12345ONE").await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::DocumentRow;
pub use repository::{AuthorStore, BookStore, Catalog, PublicationStore};
pub use store::{Store, StoreConfig};

// Re-export bookshelf-core for downstream crates
pub use bookshelf_core;
