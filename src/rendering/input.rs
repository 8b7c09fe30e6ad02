//! Source image loading.
//!
//! Accepts raw PNG bytes, a `data:image/png;base64,...` URL as produced by
//! a browser upload, or bare base64 text.

use super::png_codec::{decode_png, PNG_SIGNATURE};
use crate::error::RenderError;
use base64::Engine;
use mosaic_core::PixelBuffer;
use std::borrow::Cow;
use std::path::Path;

/// Read and decode a source image from disk
pub async fn load_image(path: &Path) -> Result<PixelBuffer, RenderError> {
    let bytes = tokio::fs::read(path).await?;
    let image = decode_input(&bytes)?;
    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded source image"
    );
    Ok(image)
}

/// Decode a source image from PNG bytes or base64 text
pub fn decode_input(bytes: &[u8]) -> Result<PixelBuffer, RenderError> {
    let png = png_bytes(bytes)?;
    decode_png(&png)
}

/// Extract the PNG stream from the supported input encodings
pub fn png_bytes(bytes: &[u8]) -> Result<Cow<'_, [u8]>, RenderError> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        return Ok(Cow::Borrowed(bytes));
    }

    let text = std::str::from_utf8(bytes)
        .map_err(|_| RenderError::Input("neither PNG data nor base64 text".to_string()))?
        .trim();

    let payload = match text.strip_prefix("data:") {
        Some(rest) => parse_data_url(rest)?,
        None => text,
    };

    // Pasted payloads are often line-wrapped
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| RenderError::Input(format!("invalid base64: {}", e)))?;

    if !decoded.starts_with(&PNG_SIGNATURE) {
        return Err(RenderError::UnsupportedImage(
            "decoded payload is not a PNG".to_string(),
        ));
    }
    Ok(Cow::Owned(decoded))
}

/// Split `image/png;base64,<payload>` and return the payload
fn parse_data_url(rest: &str) -> Result<&str, RenderError> {
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| RenderError::Input("data URL without ','".to_string()))?;

    let mut parts = header.split(';');
    let mime = parts.next().unwrap_or_default().trim();
    if !parts.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
        return Err(RenderError::Input(
            "only base64 data URLs are supported".to_string(),
        ));
    }
    if !mime.is_empty() && !mime.eq_ignore_ascii_case("image/png") {
        return Err(RenderError::UnsupportedImage(format!(
            "media type '{}', expected image/png",
            mime
        )));
    }
    Ok(payload)
}
