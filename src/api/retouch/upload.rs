// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upload extraction for POST /retouch
//!
//! Two request shapes are accepted:
//! - `multipart/form-data` with one file field (preferably named `file`)
//! - a raw body with an `image/*` or `application/octet-stream` content type

use axum::{
    extract::{FromRequest, Request},
    http::{header, StatusCode},
};
use axum_extra::extract::{multipart::MultipartError, Multipart};
use bytes::Bytes;
use tracing::debug;

use crate::api::http_server::AppState;
use crate::retouch::RetouchError;

/// Preferred multipart field name
pub const FILE_FIELD: &str = "file";

/// Read the uploaded image bytes out of the request.
pub async fn read_upload(request: Request, state: &AppState) -> Result<Bytes, RetouchError> {
    let max = state.config.max_upload_bytes;

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default();

    // Reject declared oversize bodies before reading anything
    let declared_length = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    if let Some(length) = declared_length {
        if length > state.body_limit() {
            return Err(RetouchError::PayloadTooLarge { max });
        }
    }

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| RetouchError::InvalidUpload(e.to_string()))?;
        read_file_field(&mut multipart, max).await
    } else if content_type.starts_with("image/")
        || content_type.starts_with("application/octet-stream")
    {
        debug!("Reading raw {} body", content_type);
        Bytes::from_request(request, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                RetouchError::PayloadTooLarge { max }
            } else {
                RetouchError::InvalidUpload(e.body_text())
            }
        })
    } else if content_type.is_empty() {
        Err(RetouchError::UnsupportedMediaType("none".to_string()))
    } else {
        Err(RetouchError::UnsupportedMediaType(content_type))
    }
}

/// Pick the `file` field, or failing that the first field carrying a filename.
async fn read_file_field(multipart: &mut Multipart, max: usize) -> Result<Bytes, RetouchError> {
    let mut fallback: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max))?
    {
        let is_named_file = field.name() == Some(FILE_FIELD);
        let has_file_name = field.file_name().is_some();

        if is_named_file {
            debug!(
                "Reading multipart field '{}' ({:?})",
                FILE_FIELD,
                field.file_name()
            );
            return field.bytes().await.map_err(|e| multipart_error(e, max));
        }

        if fallback.is_none() && has_file_name {
            fallback = Some(field.bytes().await.map_err(|e| multipart_error(e, max))?);
        }
    }

    fallback.ok_or(RetouchError::MissingFile)
}

fn multipart_error(err: MultipartError, max: usize) -> RetouchError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        RetouchError::PayloadTooLarge { max }
    } else {
        RetouchError::InvalidUpload(err.body_text())
    }
}
