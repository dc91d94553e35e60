//! Decoding of base64 thumbnails stored by the local library.
//!
//! A payload is base64-decoded, validated as an image, converted to RGB
//! and written as JPEG into the session's thumbnail directory. The file
//! name is derived from the payload's content hash, so identical
//! thumbnails share one file and distinct ones never overwrite each other.
//!
//! Decoding and encoding are CPU-bound; async callers go through
//! [`resolve_blocking`] so the work runs on tokio's blocking pool.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use image::DynamicImage;

use crate::error::SearchError;
use crate::types::PLACEHOLDER_THUMBNAIL;

/// Decode and validate a base64 image payload.
///
/// ASCII whitespace anywhere in the payload is ignored, so line-wrapped
/// (MIME-style) base64 decodes the same as a single line.
///
/// # Errors
///
/// Returns [`SearchError::ThumbnailDecodeFailed`] if the payload is not
/// valid base64 or the bytes are not a supported image.
pub fn decode(payload: &str) -> Result<(DynamicImage, Vec<u8>), SearchError> {
    let compact: String = payload.split_ascii_whitespace().collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| SearchError::ThumbnailDecodeFailed(format!("invalid base64: {e}")))?;
    let image = image::load_from_memory(&bytes)
        .map_err(|e| SearchError::ThumbnailDecodeFailed(format!("not an image: {e}")))?;
    Ok((image, bytes))
}

/// Decode a payload and persist it under `dir`, returning the written path.
///
/// # Errors
///
/// Returns [`SearchError::ThumbnailDecodeFailed`] if decoding fails or the
/// JPEG cannot be written.
pub fn store(payload: &str, dir: &Path) -> Result<PathBuf, SearchError> {
    let (image, bytes) = decode(payload)?;
    let hash = blake3::hash(&bytes).to_hex();
    let path = dir.join(format!("{}.jpg", &hash.as_str()[..16]));

    if path.exists() {
        return Ok(path);
    }

    std::fs::create_dir_all(dir).map_err(|e| {
        SearchError::ThumbnailDecodeFailed(format!("cannot create {}: {e}", dir.display()))
    })?;
    image
        .to_rgb8()
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .map_err(|e| {
            SearchError::ThumbnailDecodeFailed(format!("cannot write {}: {e}", path.display()))
        })?;
    Ok(path)
}

/// Resolve a local record's thumbnail field. Never fails.
///
/// Empty or absent payloads and payloads that fail to decode resolve to
/// [`PLACEHOLDER_THUMBNAIL`]; decode failures are logged.
pub fn resolve(payload: Option<&str>, dir: &Path) -> String {
    let Some(payload) = payload.filter(|p| !p.trim().is_empty()) else {
        return PLACEHOLDER_THUMBNAIL.to_owned();
    };
    match store(payload, dir) {
        Ok(path) => path.to_string_lossy().into_owned(),
        Err(err) => {
            tracing::warn!(error = %err, "substituting placeholder thumbnail");
            PLACEHOLDER_THUMBNAIL.to_owned()
        }
    }
}

/// [`resolve`] on the blocking pool.
///
/// Awaiting this yields to the runtime, so a surrounding timeout can fire
/// while a large cover is still being decoded. A panicked decode resolves
/// to the placeholder.
pub async fn resolve_blocking(payload: Option<String>, dir: PathBuf) -> String {
    match tokio::task::spawn_blocking(move || resolve(payload.as_deref(), &dir)).await {
        Ok(thumbnail) => thumbnail,
        Err(err) => {
            tracing::warn!(error = %err, "thumbnail task failed");
            PLACEHOLDER_THUMBNAIL.to_owned()
        }
    }
}
