//! HTTP implementation of [`LibraryBackend`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::LibraryBackend;
use super::models::{
    Book, ErrorDetail, LoginRequest, SignupRequest, WishlistEntry, WishlistResponse,
};
use crate::config::BackendConfig;
use crate::error::{LibraryError, Result};

/// REST client for the library backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LibraryError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Use an existing client against `base_url`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// URL of `/{collection}/{segment}` with `segment` percent-encoded.
    fn item_url(&self, collection: &str, segment: &str) -> String {
        self.url(&format!("/{collection}/{}", urlencoding::encode(segment)))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| LibraryError::Request(format!("backend unreachable: {e}")))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(map_http_error(status, &body))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|e| LibraryError::Request(format!("invalid backend response: {e}")))
    }
}

/// Turn a non-success response into a [`LibraryError::Backend`], preferring
/// the backend's `detail` message when it sends one.
fn map_http_error(status: StatusCode, body: &str) -> LibraryError {
    let detail = serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .map(|e| match e.detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });
    match detail {
        Some(detail) => LibraryError::Backend(format!("{status}: {detail}")),
        None => LibraryError::Backend(status.to_string()),
    }
}

#[async_trait]
impl LibraryBackend for HttpBackend {
    async fn signup(&self, request: &SignupRequest) -> Result<()> {
        self.send(self.client.post(self.url("/signup")).json(request))
            .await
            .map(drop)
    }

    async fn login(&self, request: &LoginRequest) -> Result<()> {
        self.send(self.client.post(self.url("/login")).json(request))
            .await
            .map(drop)
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        self.send_json(self.client.get(self.url("/books"))).await
    }

    async fn add_book(&self, book: &Book) -> Result<()> {
        self.send(self.client.post(self.url("/books")).json(book))
            .await
            .map(drop)
    }

    async fn update_book(&self, title: &str, book: &Book) -> Result<()> {
        self.send(self.client.put(self.item_url("books", title)).json(book))
            .await
            .map(drop)
    }

    async fn delete_book(&self, title: &str) -> Result<()> {
        self.send(self.client.delete(self.item_url("books", title)))
            .await
            .map(drop)
    }

    async fn add_to_wishlist(&self, entry: &WishlistEntry) -> Result<()> {
        self.send(self.client.post(self.url("/wishlist")).json(entry))
            .await
            .map(drop)
    }

    async fn get_wishlist(&self, username: &str) -> Result<Vec<String>> {
        let body: WishlistResponse = self
            .send_json(self.client.get(self.item_url("wishlist", username)))
            .await?;
        Ok(body.wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_url_percent_encodes_title() {
        let backend = HttpBackend::with_client(reqwest::Client::new(), "http://lib.test/");
        assert_eq!(
            backend.item_url("books", "Hobbit, The/Part 1"),
            "http://lib.test/books/Hobbit%2C%20The%2FPart%201"
        );
    }

    #[test]
    fn map_http_error_prefers_detail() {
        let err = map_http_error(StatusCode::BAD_REQUEST, r#"{"detail":"Username taken"}"#);
        assert_eq!(err.to_string(), "backend error: 400 Bad Request: Username taken");
    }

    #[test]
    fn map_http_error_without_detail_uses_status() {
        let err = map_http_error(StatusCode::NOT_FOUND, "<html>nope</html>");
        assert_eq!(err.to_string(), "backend error: 404 Not Found");
    }

    #[test]
    fn map_http_error_structured_detail() {
        let err = map_http_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"msg":"field required"}]}"#,
        );
        assert!(err.to_string().contains("field required"));
    }
}
