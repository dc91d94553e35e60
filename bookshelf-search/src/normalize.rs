//! Text normalization shared by both sources.
//!
//! Every text field of a [`BookRecord`](crate::types::BookRecord) passes
//! through here: absent values resolve to their defaults, then the result
//! is HTML-escaped.

use crate::types::{NO_DESCRIPTION, UNKNOWN};

/// Escape the five HTML-significant characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Invert [`html_escape`].
///
/// Only the five entities produced by [`html_escape`] are recognised, so
/// `html_unescape(&html_escape(s)) == s` for every `s`.
pub fn html_unescape(s: &str) -> String {
    s.replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

/// Escaped title, or [`UNKNOWN`] when absent.
pub fn title(raw: Option<&str>) -> String {
    html_escape(raw.unwrap_or(UNKNOWN))
}

/// Escaped single-author field, or [`UNKNOWN`] when absent.
pub fn author(raw: Option<&str>) -> String {
    html_escape(raw.unwrap_or(UNKNOWN))
}

/// Join an author list with `", "` and escape it.
///
/// An absent list resolves to [`UNKNOWN`]. A present but empty list joins
/// to an empty string, matching what the provider actually sent.
pub fn authors(raw: Option<&[String]>) -> String {
    match raw {
        Some(list) => html_escape(&list.join(", ")),
        None => UNKNOWN.to_owned(),
    }
}

/// Escaped description, or [`NO_DESCRIPTION`] when absent.
pub fn description(raw: Option<&str>) -> String {
    html_escape(raw.unwrap_or(NO_DESCRIPTION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_chars() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quote\""), "&quot;quote&quot;");
        assert_eq!(html_escape("O'Brien"), "O&#x27;Brien");
    }

    #[test]
    fn ampersand_escaped_once() {
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn unescape_inverts_escape() {
        for raw in ["Tom & Jerry", "<i>", "&amp; literal", "It's \"fine\"", ""] {
            assert_eq!(html_unescape(&html_escape(raw)), raw);
        }
    }

    #[test]
    fn missing_fields_use_defaults() {
        assert_eq!(title(None), "Unknown");
        assert_eq!(author(None), "Unknown");
        assert_eq!(authors(None), "Unknown");
        assert_eq!(description(None), "No description available.");
    }

    #[test]
    fn authors_joined_and_escaped() {
        let list = vec!["Terry Pratchett".to_owned(), "Neil Gaiman & co".to_owned()];
        assert_eq!(
            authors(Some(&list)),
            "Terry Pratchett, Neil Gaiman &amp; co"
        );
    }
}
