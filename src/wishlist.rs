//! Wishlist hand-off to the backend.
//!
//! The client keeps no wishlist state of its own: adding a search result
//! is a single pass-through write, and listing reads straight from the
//! backend.

use bookshelf_search::BookRecord;
use bookshelf_search::normalize::html_unescape;

use crate::backend::{LibraryBackend, WishlistEntry};
use crate::error::{LibraryError, Result};
use crate::session::Identity;

/// Add `record` to the wishlist of `identity`.
///
/// The backend receives the record's unescaped title.
///
/// # Errors
///
/// - [`LibraryError::NotAuthenticated`] if `identity` has neither a username
///   nor an email. The backend is not contacted.
/// - [`LibraryError::WishlistUpdateFailed`] carrying the cause if the backend
///   rejects the write or cannot be reached. Nothing is retried.
pub async fn add_to_wishlist<B: LibraryBackend + ?Sized>(
    backend: &B,
    record: &BookRecord,
    identity: &Identity,
) -> Result<()> {
    if !identity.is_present() {
        return Err(LibraryError::NotAuthenticated);
    }

    let entry = WishlistEntry {
        book_title: html_unescape(&record.title),
        username: identity.username().unwrap_or_default().to_owned(),
        email: identity.email().unwrap_or_default().to_owned(),
    };

    backend.add_to_wishlist(&entry).await.map_err(|err| {
        tracing::warn!(error = %err, record = %record.id(), "wishlist update failed");
        LibraryError::WishlistUpdateFailed(err.to_string())
    })?;

    tracing::info!(record = %record.id(), "added to wishlist");
    Ok(())
}

/// Titles on the wishlist of `identity`.
///
/// # Errors
///
/// Returns [`LibraryError::NotAuthenticated`] without contacting the backend
/// if `identity` is empty, or the backend's error otherwise.
pub async fn wishlist<B: LibraryBackend + ?Sized>(
    backend: &B,
    identity: &Identity,
) -> Result<Vec<String>> {
    let key = identity
        .wishlist_key()
        .ok_or(LibraryError::NotAuthenticated)?;
    backend.get_wishlist(key).await
}
