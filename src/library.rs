//! The library client: backend, search aggregator and session operations in
//! one handle.

use std::io::Write;

use bookshelf_search::{BookRecord, SearchAggregator};

use crate::analytics::LibraryStats;
use crate::backend::{Book, HttpBackend, LibraryBackend, SignupRequest};
use crate::config::LibraryConfig;
use crate::error::{LibraryError, Result};
use crate::export::{ExportFormat, export_books};
use crate::session::LibrarySession;
use crate::wishlist;

/// Entry point for everything a signed-in user does.
///
/// Holds no per-user state; each call takes the caller's [`LibrarySession`].
pub struct Library<B = HttpBackend> {
    backend: B,
    aggregator: SearchAggregator,
}

impl Library<HttpBackend> {
    /// Build a client for the services described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Config`] for an invalid config.
    pub fn from_config(config: &LibraryConfig) -> Result<Self> {
        config.validate()?;
        let backend = HttpBackend::new(&config.backend)?;
        let aggregator = SearchAggregator::new(config.search_config())?;
        Ok(Self::new(backend, aggregator))
    }
}

impl<B: LibraryBackend> Library<B> {
    pub fn new(backend: B, aggregator: SearchAggregator) -> Self {
        Self {
            backend,
            aggregator,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register a new account. Every field is required.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidInput`] without contacting the backend
    /// if a field is blank, or the backend's error (e.g. a taken username).
    pub async fn signup(&self, email: &str, username: &str, password: &str) -> Result<()> {
        if [email, username, password].iter().any(|s| s.trim().is_empty()) {
            return Err(LibraryError::InvalidInput(
                "email, username and password are required".into(),
            ));
        }
        self.backend
            .signup(&SignupRequest {
                email: email.trim().to_owned(),
                username: username.trim().to_owned(),
                password: password.to_owned(),
            })
            .await?;
        tracing::info!(username = username.trim(), "account created");
        Ok(())
    }

    /// Sign in with a username or email.
    ///
    /// # Errors
    ///
    /// See [`LibrarySession::login`].
    pub async fn login(&self, login_input: &str, password: &str) -> Result<LibrarySession> {
        LibrarySession::login(&self.backend, login_input, password).await
    }

    /// Search both sources and install the results in `session`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Search`] if neither source answered.
    pub async fn search<'s>(
        &self,
        session: &'s mut LibrarySession,
        query: &str,
    ) -> Result<&'s [BookRecord]> {
        Ok(self.aggregator.search(session.search_mut(), query).await?)
    }

    /// Add `record` to the session user's wishlist.
    ///
    /// # Errors
    ///
    /// See [`wishlist::add_to_wishlist`].
    pub async fn add_to_wishlist(
        &self,
        session: &LibrarySession,
        record: &BookRecord,
    ) -> Result<()> {
        wishlist::add_to_wishlist(&self.backend, record, session.identity()).await
    }

    /// Add the session's selected record to the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidInput`] if nothing is selected, else as
    /// [`Library::add_to_wishlist`].
    pub async fn add_selected_to_wishlist(&self, session: &LibrarySession) -> Result<()> {
        let record = session
            .search()
            .selected()
            .ok_or_else(|| LibraryError::InvalidInput("no book selected".into()))?;
        self.add_to_wishlist(session, record).await
    }

    /// Titles on the session user's wishlist.
    ///
    /// # Errors
    ///
    /// See [`wishlist::wishlist`].
    pub async fn wishlist(&self, session: &LibrarySession) -> Result<Vec<String>> {
        wishlist::wishlist(&self.backend, session.identity()).await
    }

    /// The full local catalog.
    ///
    /// # Errors
    ///
    /// Returns the backend's error.
    pub async fn books(&self) -> Result<Vec<Book>> {
        self.backend.list_books().await
    }

    /// Add a book to the local catalog.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidInput`] without contacting the backend
    /// if title or author is blank, or the backend's error.
    pub async fn add_book(&self, book: &Book) -> Result<()> {
        validate_book(book)?;
        self.backend.add_book(book).await?;
        tracing::info!(title = %book.title, "book added");
        Ok(())
    }

    /// Replace the book stored under `title`.
    ///
    /// # Errors
    ///
    /// As [`Library::add_book`].
    pub async fn update_book(&self, title: &str, book: &Book) -> Result<()> {
        validate_book(book)?;
        self.backend.update_book(title, book).await?;
        tracing::info!(title, "book updated");
        Ok(())
    }

    /// Remove the book stored under `title`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error.
    pub async fn remove_book(&self, title: &str) -> Result<()> {
        self.backend.delete_book(title).await?;
        tracing::info!(title, "book removed");
        Ok(())
    }

    /// Catalog, wishlist and rating statistics for the session user.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the catalog or wishlist cannot be read.
    pub async fn stats(&self, session: &LibrarySession) -> Result<LibraryStats> {
        let (books, wishlist) =
            futures::future::join(self.books(), self.wishlist(session)).await;
        Ok(LibraryStats::compute(&books?, wishlist?.len(), session.ratings()))
    }

    /// Export the local catalog to `writer`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error, or [`LibraryError::Export`].
    pub async fn export<W: Write>(&self, format: ExportFormat, writer: W) -> Result<usize> {
        let books = self.books().await?;
        export_books(&books, format, writer)?;
        Ok(books.len())
    }
}

fn validate_book(book: &Book) -> Result<()> {
    if book.title.trim().is_empty() || book.author.trim().is_empty() {
        return Err(LibraryError::InvalidInput(
            "title and author are required".into(),
        ));
    }
    Ok(())
}
