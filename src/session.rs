//! Session context: who is signed in, their search state and their ratings.
//!
//! A [`LibrarySession`] is created by a successful login and consumed by
//! [`LibrarySession::logout`]. Nothing in it outlives the session.

use std::collections::HashMap;

use bookshelf_search::{RecordId, SearchSession};

use crate::backend::{LibraryBackend, LoginRequest};
use crate::error::{LibraryError, Result};

/// Who the user signed in as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    username: Option<String>,
    email: Option<String>,
}

impl Identity {
    /// Build an identity, dropping blank parts.
    pub fn new(username: Option<&str>, email: Option<&str>) -> Self {
        let clean = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        Self {
            username: clean(username),
            email: clean(email),
        }
    }

    /// Interpret a login field: anything containing `@` is an email.
    pub fn from_login_input(input: &str) -> Self {
        if input.contains('@') {
            Self::new(None, Some(input))
        } else {
            Self::new(Some(input), None)
        }
    }

    /// No identity at all.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// True when a username or an email is set.
    pub fn is_present(&self) -> bool {
        self.username.is_some() || self.email.is_some()
    }

    /// Key the backend files this user's wishlist under.
    pub fn wishlist_key(&self) -> Option<&str> {
        self.username().or(self.email())
    }
}

/// A star rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = LibraryError;

    fn try_from(stars: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(LibraryError::InvalidInput(format!(
                "rating must be between {} and {}, got {stars}",
                Self::MIN,
                Self::MAX
            )))
        }
    }
}

/// Per-user session state, passed explicitly to every operation.
#[derive(Debug)]
pub struct LibrarySession {
    identity: Identity,
    search: SearchSession,
    ratings: HashMap<RecordId, Rating>,
}

impl LibrarySession {
    pub fn new(identity: Identity) -> Self {
        tracing::info!(
            user = identity.wishlist_key().unwrap_or("<anonymous>"),
            "session started"
        );
        Self {
            identity,
            search: SearchSession::new(),
            ratings: HashMap::new(),
        }
    }

    /// Sign in against `backend` and open a session.
    ///
    /// `login_input` is a username, or an email when it contains `@`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidInput`] without contacting the backend
    /// if either field is blank, or the backend's error if it rejects the
    /// credentials.
    pub async fn login<B: LibraryBackend + ?Sized>(
        backend: &B,
        login_input: &str,
        password: &str,
    ) -> Result<Self> {
        let identity = Identity::from_login_input(login_input);
        if !identity.is_present() || password.is_empty() {
            return Err(LibraryError::InvalidInput(
                "username or email and password are required".into(),
            ));
        }
        let request = LoginRequest {
            password: password.to_owned(),
            email: identity.email().map(str::to_owned),
            username: identity.username().map(str::to_owned),
        };
        backend.login(&request).await?;
        Ok(Self::new(identity))
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchSession {
        &mut self.search
    }

    /// Rate a record for the rest of this session.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidInput`] if `stars` is outside 1..=5.
    pub fn rate(&mut self, id: &RecordId, stars: u8) -> Result<Rating> {
        let rating = Rating::try_from(stars)?;
        self.ratings.insert(id.clone(), rating);
        Ok(rating)
    }

    pub fn rating(&self, id: &RecordId) -> Option<Rating> {
        self.ratings.get(id).copied()
    }

    pub fn ratings(&self) -> impl Iterator<Item = Rating> + '_ {
        self.ratings.values().copied()
    }

    /// End the session, discarding all of its state.
    pub fn logout(self) {
        tracing::info!(
            user = self.identity.wishlist_key().unwrap_or("<anonymous>"),
            "session ended"
        );
    }
}
