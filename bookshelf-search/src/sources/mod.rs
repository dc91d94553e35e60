//! Book source implementations.
//!
//! Each module provides a struct implementing [`crate::source::BookSourceTrait`]
//! that queries one source and normalizes its records.

pub mod catalog;
pub mod library;

pub use catalog::CatalogSource;
pub use library::LibrarySource;
