// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Decode -> normalize -> smooth -> median -> encode
//!
//! Placeholder retouch effect. A real model replaces the two filter stages;
//! the decode and encode ends stay as they are.

use std::time::Instant;

use tracing::{debug, info};

use super::error::RetouchError;
use super::filters::{adjust_brightness, median_3x3, smooth_more};
use super::image_utils::{decode_image_bytes, encode_jpeg, format_to_extension};

/// Default JPEG quality for the retouched output
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Default upload cap (10MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Output of a successful retouch
#[derive(Debug, Clone)]
pub struct RetouchOutput {
    /// Encoded JPEG bytes
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub processing_time_ms: u64,
}

impl RetouchOutput {
    pub const CONTENT_TYPE: &'static str = "image/jpeg";
}

#[derive(Debug, Clone)]
pub struct RetouchPipeline {
    pub jpeg_quality: u8,
    /// 1.0 skips the brightness stage
    pub brightness: f32,
    pub max_upload_bytes: usize,
}

impl Default for RetouchPipeline {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            brightness: 1.0,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl RetouchPipeline {
    /// Run the full pipeline over one uploaded image.
    ///
    /// Stages run in order and the first failure aborts; nothing is retried.
    pub fn process(&self, raw: &[u8]) -> Result<RetouchOutput, RetouchError> {
        let start = Instant::now();

        let (decoded, info) = decode_image_bytes(raw, self.max_upload_bytes)?;
        debug!(
            "Decoded {} image: {}x{}, {} bytes",
            format_to_extension(info.format),
            info.width,
            info.height,
            info.size_bytes
        );

        // Alpha is dropped, not composited
        let rgb = decoded.to_rgb8();
        drop(decoded);

        let smoothed = smooth_more(&rgb);
        let mut retouched = median_3x3(&smoothed);

        if (self.brightness - 1.0).abs() > f32::EPSILON {
            adjust_brightness(&mut retouched, self.brightness);
        }

        let bytes = encode_jpeg(&retouched, self.jpeg_quality)?;
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Retouch complete: {}x{}, {} -> {} bytes, {}ms",
            info.width,
            info.height,
            info.size_bytes,
            bytes.len(),
            processing_time_ms
        );

        Ok(RetouchOutput {
            bytes,
            width: retouched.width(),
            height: retouched.height(),
            processing_time_ms,
        })
    }
}

/// Retouch `raw` with the default pipeline and return the JPEG bytes.
pub fn transform(raw: &[u8]) -> Result<Vec<u8>, RetouchError> {
    RetouchPipeline::default().process(raw).map(|out| out.bytes)
}
