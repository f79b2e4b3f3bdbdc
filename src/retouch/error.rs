// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error taxonomy for the retouch pipeline and its upload surface

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetouchError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Image data exceeds maximum size of {max} bytes")]
    PayloadTooLarge { max: usize },

    #[error("No file field found in upload")]
    MissingFile,

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),

    #[error("Unhandled error: {0}")]
    Unhandled(String),
}

impl RetouchError {
    /// Status used when strict status codes are enabled
    pub fn status_code(&self) -> u16 {
        match self {
            RetouchError::Decode(_)
            | RetouchError::MissingFile
            | RetouchError::InvalidUpload(_) => 400,
            RetouchError::PayloadTooLarge { .. } => 413,
            RetouchError::UnsupportedMediaType(_) => 415,
            RetouchError::Encode(_) | RetouchError::Unhandled(_) => 500,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RetouchError::Decode(_) => "decode_error",
            RetouchError::Encode(_) => "encode_error",
            RetouchError::PayloadTooLarge { .. } => "payload_too_large",
            RetouchError::MissingFile => "missing_file",
            RetouchError::InvalidUpload(_) => "invalid_upload",
            RetouchError::UnsupportedMediaType(_) => "unsupported_media_type",
            RetouchError::Unhandled(_) => "unhandled_error",
        }
    }
}
