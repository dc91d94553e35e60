//! Export the local catalog to JSON or CSV.

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::backend::Book;
use crate::error::{LibraryError, Result};

/// Output format for [`export_books`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(LibraryError::InvalidInput(format!(
                "unknown export format `{other}` (expected json or csv)"
            ))),
        }
    }
}

/// One CSV row. Thumbnails and descriptions are left out.
#[derive(Serialize)]
struct CsvRow<'a> {
    title: &'a str,
    author: &'a str,
    year: &'a str,
    genre: &'a str,
    is_read: bool,
}

impl<'a> From<&'a Book> for CsvRow<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            title: &book.title,
            author: &book.author,
            year: book.year.as_deref().unwrap_or_default(),
            genre: book.genre.as_deref().unwrap_or_default(),
            is_read: book.is_read,
        }
    }
}

/// Write `books` to `writer` in `format`.
///
/// # Errors
///
/// Returns [`LibraryError::Export`] if serialization or the write fails.
pub fn export_books<W: Write>(books: &[Book], format: ExportFormat, mut writer: W) -> Result<()> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, books)
                .map_err(|e| LibraryError::Export(e.to_string()))?;
            writer
                .write_all(b"\n")
                .map_err(|e| LibraryError::Export(e.to_string()))?;
        }
        ExportFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            if books.is_empty() {
                csv.write_record(["title", "author", "year", "genre", "is_read"])
                    .map_err(|e| LibraryError::Export(e.to_string()))?;
            }
            for book in books {
                csv.serialize(CsvRow::from(book))
                    .map_err(|e| LibraryError::Export(e.to_string()))?;
            }
            csv.flush()
                .map_err(|e| LibraryError::Export(e.to_string()))?;
        }
    }
    tracing::debug!(count = books.len(), ?format, "exported books");
    Ok(())
}
