//! bookshelf-core: catalog types for the Bookshelf service
//!
//! This crate provides the record types shared by the store, the HTTP server
//! and the CLI:
//! - [`Book`], [`Author`], [`Publication`] and their update patches
//! - [`Document`], a stored record plus its surrogate key
//! - [`DeleteResult`], the acknowledgement of a delete
//!
//! It performs no I/O.

pub mod types;

pub use types::*;
