//! Image helpers for the view: encoding a picked file as an inline data URI and
//! resolving where a recipe's picture comes from.

use crate::error::ImageError;
use crate::types::{ImagesConfig, Recipe};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use std::path::{Path, PathBuf};
use tracing::debug;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Where a recipe's picture should be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// Inline data URI stored on the recipe.
    Inline(&'a str),
    /// Conventional path derived from the title.
    Path(PathBuf),
}

pub fn image_source<'a>(recipe: &'a Recipe, config: &ImagesConfig) -> ImageSource<'a> {
    match recipe.image.as_deref() {
        Some(image) if !image.is_empty() => ImageSource::Inline(image),
        _ => ImageSource::Path(
            config
                .directory
                .join(recipe.image_name(&config.extension)),
        ),
    }
}

/// Reads `path` and returns `data:<mime>;base64,<payload>`.
///
/// The MIME type is sniffed from the content; unrecognized content is labelled
/// `application/octet-stream`.
pub fn encode_data_uri(path: &Path) -> Result<String, ImageError> {
    let bytes = std::fs::read(path).map_err(|source| ImageError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let uri = data_uri(&bytes);
    debug!("Encoded {} ({} bytes) as data URI", path.display(), bytes.len());
    Ok(uri)
}

pub fn data_uri(bytes: &[u8]) -> String {
    let mime = image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME);
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}
