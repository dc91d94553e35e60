//! Shared test utilities used across multiple test modules.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bookshelf_search::{BookRecord, BookSource, RecordId};

use crate::backend::{Book, LibraryBackend, LoginRequest, SignupRequest, WishlistEntry};
use crate::error::{LibraryError, Result};

/// In-memory backend that records every call.
///
/// With `fail` set, every operation returns a [`LibraryError::Backend`].
#[derive(Default)]
pub struct StubBackend {
    pub books: Vec<Book>,
    pub wishlist: Vec<String>,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub wishlist_entries: Mutex<Vec<WishlistEntry>>,
    pub logins: Mutex<Vec<LoginRequest>>,
}

impl StubBackend {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(LibraryError::Backend("503 Service Unavailable".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LibraryBackend for StubBackend {
    async fn signup(&self, _request: &SignupRequest) -> Result<()> {
        self.record_call()
    }

    async fn login(&self, request: &LoginRequest) -> Result<()> {
        self.record_call()?;
        self.logins.lock().expect("logins lock").push(request.clone());
        Ok(())
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        self.record_call()?;
        Ok(self.books.clone())
    }

    async fn add_book(&self, _book: &Book) -> Result<()> {
        self.record_call()
    }

    async fn update_book(&self, _title: &str, _book: &Book) -> Result<()> {
        self.record_call()
    }

    async fn delete_book(&self, _title: &str) -> Result<()> {
        self.record_call()
    }

    async fn add_to_wishlist(&self, entry: &WishlistEntry) -> Result<()> {
        self.record_call()?;
        self.wishlist_entries
            .lock()
            .expect("wishlist lock")
            .push(entry.clone());
        Ok(())
    }

    async fn get_wishlist(&self, _username: &str) -> Result<Vec<String>> {
        self.record_call()?;
        Ok(self.wishlist.clone())
    }
}

/// A normalized record with placeholder fields.
pub fn record(source: BookSource, key: &str, title: &str) -> BookRecord {
    BookRecord::new(
        RecordId::new(source, key),
        title,
        "Author",
        bookshelf_search::types::PLACEHOLDER_THUMBNAIL,
        bookshelf_search::types::NO_DESCRIPTION,
    )
}
