//! Client for the local library backend.
//!
//! [`LibraryBackend`] is the seam between the client and the REST service;
//! [`HttpBackend`] is the production implementation. Tests substitute
//! counting stubs or point [`HttpBackend`] at a mock server. Book search
//! goes through [`bookshelf_search`], not this trait.

pub mod http;
pub mod models;

use async_trait::async_trait;

use crate::error::Result;

pub use http::HttpBackend;
pub use models::{Book, LoginRequest, SignupRequest, WishlistEntry};

/// Operations the library backend exposes.
#[async_trait]
pub trait LibraryBackend: Send + Sync {
    /// `POST /signup`.
    async fn signup(&self, request: &SignupRequest) -> Result<()>;

    /// `POST /login`.
    async fn login(&self, request: &LoginRequest) -> Result<()>;

    /// `GET /books`: the full catalog.
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// `POST /books`.
    async fn add_book(&self, book: &Book) -> Result<()>;

    /// `PUT /books/{title}`.
    async fn update_book(&self, title: &str, book: &Book) -> Result<()>;

    /// `DELETE /books/{title}`.
    async fn delete_book(&self, title: &str) -> Result<()>;

    /// `POST /wishlist`.
    async fn add_to_wishlist(&self, entry: &WishlistEntry) -> Result<()>;

    /// `GET /wishlist/{username}`: wishlisted titles.
    async fn get_wishlist(&self, username: &str) -> Result<Vec<String>>;
}
