//! Error types for the bookshelf client.

use bookshelf_search::SearchError;

/// Top-level error type for library operations.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// An action that needs a signed-in identity was attempted without one.
    #[error("not authenticated: sign in with a username or email first")]
    NotAuthenticated,

    /// The backend rejected or could not be reached during a wishlist write.
    #[error("wishlist update failed: {0}")]
    WishlistUpdateFailed(String),

    /// The backend answered with a non-success status.
    #[error("backend error: {0}")]
    Backend(String),

    /// The backend could not be reached or its response could not be read.
    #[error("request error: {0}")]
    Request(String),

    /// Caller input failed validation before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Library export error.
    #[error("export error: {0}")]
    Export(String),

    /// Search aggregation error.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, LibraryError>;
