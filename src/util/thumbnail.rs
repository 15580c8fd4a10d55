//! Thumbnail decoding and size enforcement.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::CatalogError;

/// Hard cap on stored thumbnail bytes (1 MiB).
pub const MAX_THUMBNAIL_BYTES: usize = 1_048_576;

/// Thumbnail input as supplied by a caller.
pub enum ThumbnailSource {
    /// Already-decoded image bytes.
    Raw(Vec<u8>),
    /// A base64 string, optionally wrapped in a `data:` URL.
    Encoded(String),
}

/// Decodes a thumbnail source and enforces the size cap.
pub fn decode(source: ThumbnailSource) -> Result<Vec<u8>, CatalogError> {
    let bytes = match source {
        ThumbnailSource::Raw(bytes) => bytes,
        ThumbnailSource::Encoded(text) => decode_encoded(text.trim())?,
    };
    if bytes.len() > MAX_THUMBNAIL_BYTES {
        return Err(CatalogError::Validation(format!(
            "thumbnail is {} bytes, the limit is {} bytes",
            bytes.len(),
            MAX_THUMBNAIL_BYTES
        )));
    }
    Ok(bytes)
}

fn decode_encoded(text: &str) -> Result<Vec<u8>, CatalogError> {
    // Data URLs carry the payload after the first comma; if that slice does
    // not decode, fall back to treating the whole string as base64.
    if text.starts_with("data:") {
        if let Some((_, payload)) = text.split_once(',') {
            if let Ok(bytes) = STANDARD.decode(payload) {
                return Ok(bytes);
            }
        }
    }
    STANDARD
        .decode(text)
        .map_err(|e| CatalogError::Validation(format!("invalid base64 thumbnail: {e}")))
}
