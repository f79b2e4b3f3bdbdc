// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image loading and encoding helpers for the retouch pipeline

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbImage};

use super::error::RetouchError;

/// Image information extracted during loading
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Detected format, if the magic bytes were recognised
    pub format: Option<ImageFormat>,
    /// Size in bytes
    pub size_bytes: usize,
}

/// Decode raw image bytes (multipart or raw body uploads)
///
/// Any format the `image` crate was built with is accepted; the format is
/// sniffed from the content, never declared by the caller.
///
/// # Returns
/// * `Ok((DynamicImage, ImageInfo))` - The decoded image and metadata
/// * `Err(RetouchError::Decode)` - Empty, truncated, corrupt or unknown data
pub fn decode_image_bytes(
    bytes: &[u8],
    max_size: usize,
) -> Result<(DynamicImage, ImageInfo), RetouchError> {
    if bytes.len() > max_size {
        return Err(RetouchError::PayloadTooLarge { max: max_size });
    }

    if bytes.is_empty() {
        return Err(RetouchError::Decode("image data is empty".to_string()));
    }

    let format = image::guess_format(bytes).ok();

    let img = image::load_from_memory(bytes).map_err(|e| RetouchError::Decode(e.to_string()))?;

    let info = ImageInfo {
        width: img.width(),
        height: img.height(),
        format,
        size_bytes: bytes.len(),
    };

    Ok((img, info))
}

/// Encode an RGB buffer as baseline JPEG at the given quality (1-100)
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, RetouchError> {
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|e| RetouchError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Get the format extension as a string
pub fn format_to_extension(format: Option<ImageFormat>) -> &'static str {
    match format {
        Some(ImageFormat::Png) => "png",
        Some(ImageFormat::Jpeg) => "jpg",
        Some(ImageFormat::WebP) => "webp",
        Some(ImageFormat::Gif) => "gif",
        Some(ImageFormat::Bmp) => "bmp",
        Some(ImageFormat::Tiff) => "tiff",
        _ => "unknown",
    }
}
