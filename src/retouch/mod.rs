// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Portrait retouch processing
//!
//! This module provides:
//! - Image decoding from any common raster format
//! - A placeholder two-stage smoothing effect (5x5 smooth, 3x3 median)
//! - JPEG encoding of the result
//!
//! Everything runs on CPU and holds no state between calls.

pub mod error;
pub mod filters;
pub mod image_utils;
pub mod pipeline;

pub use error::RetouchError;
pub use image_utils::{decode_image_bytes, encode_jpeg, ImageInfo};
pub use pipeline::{
    transform, RetouchOutput, RetouchPipeline, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_UPLOAD_BYTES,
};
