//! Error types for the bookshelf-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling.

/// Errors that can occur while aggregating book search results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Neither book source could be reached. Carries the per-source causes.
    #[error("no book source available: {0}")]
    SourceUnavailable(String),

    /// A source did not answer within the configured timeout.
    #[error("source timed out: {0}")]
    Timeout(String),

    /// An HTTP request to a book source failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A source response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// A local thumbnail payload was not a loadable image.
    #[error("thumbnail decode failed: {0}")]
    ThumbnailDecodeFailed(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for bookshelf-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_source_unavailable() {
        let err = SearchError::SourceUnavailable("catalog: down; library: down".into());
        assert_eq!(
            err.to_string(),
            "no book source available: catalog: down; library: down"
        );
    }

    #[test]
    fn display_timeout() {
        let err = SearchError::Timeout("exceeded 8s limit".into());
        assert_eq!(err.to_string(), "source timed out: exceeded 8s limit");
    }

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_thumbnail() {
        let err = SearchError::ThumbnailDecodeFailed("invalid base64".into());
        assert_eq!(err.to_string(), "thumbnail decode failed: invalid base64");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("timeout_seconds must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: timeout_seconds must be greater than 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
