//! Wire types for the library backend.

use serde::{Deserialize, Deserializer, Serialize};

/// A book as stored by the backend.
///
/// `year` is sent as text; the backend has been seen to answer with either
/// a string or a number, so both are accepted on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Base64-encoded image bytes.
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: None,
            genre: None,
            description: None,
            thumbnail: None,
            is_read: false,
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach raw image bytes, stored base64-encoded.
    pub fn with_thumbnail_bytes(mut self, bytes: &[u8]) -> Self {
        use base64::Engine as _;
        self.thumbnail = Some(base64::engine::general_purpose::STANDARD.encode(bytes));
        self
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// `POST /signup` body.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// `POST /login` body. Exactly one of `email`/`username` is sent.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// `POST /wishlist` body. Absent identity parts are sent as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WishlistEntry {
    pub book_title: String,
    pub username: String,
    pub email: String,
}

/// `GET /wishlist/{username}` body.
#[derive(Debug, Default, Deserialize)]
pub struct WishlistResponse {
    #[serde(default)]
    pub wishlist: Vec<String>,
}

/// Error body the backend sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}
