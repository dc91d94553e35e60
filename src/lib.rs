//! Bookshelf: a personal-library client.
//!
//! Talks to a local library backend (catalog CRUD, accounts, wishlists) and
//! searches it together with an external catalog through
//! [`bookshelf_search`].
//!
//! # Architecture
//!
//! - **Backend**: [`backend::LibraryBackend`] trait with an HTTP implementation
//! - **Session**: [`session::LibrarySession`] holds identity, search state and ratings
//! - **Library**: [`library::Library`] ties the backend and the search aggregator together
//! - **Wishlist, analytics, export**: thin operations over the backend

pub mod analytics;
pub mod app_dirs;
pub mod backend;
pub mod config;
pub mod error;
pub mod export;
pub mod library;
pub mod session;
pub mod wishlist;

#[cfg(test)]
pub(crate) mod test_utils;

pub use analytics::LibraryStats;
pub use backend::{Book, HttpBackend, LibraryBackend};
pub use config::LibraryConfig;
pub use error::{LibraryError, Result};
pub use export::ExportFormat;
pub use library::Library;
pub use session::{Identity, LibrarySession, Rating};

pub use bookshelf_search::{BookRecord, BookSource, RecordId, SearchSession};
