// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Retouch endpoint handler

use axum::{
    extract::{Request, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use super::upload::read_upload;
use crate::api::errors::ApiErrorResponse;
use crate::api::http_server::AppState;
use crate::retouch::{RetouchError, RetouchOutput};

/// POST /retouch - Apply the placeholder skin retouch to an uploaded image
///
/// # Request
/// - `multipart/form-data` with a `file` field, or
/// - a raw `image/*` / `application/octet-stream` body
///
/// # Response
/// - 200 with the retouched image as `image/jpeg`
///
/// # Errors
/// Every failure is reported as `{"error": "<message>"}`. The status is 200
/// unless strict status codes are configured:
/// - 400: not a decodable image, missing file field, malformed multipart
/// - 413: upload exceeds the configured cap
/// - 415: unsupported content type
/// - 500: encoding or worker failure
pub async fn retouch_handler(State(state): State<AppState>, request: Request) -> Response {
    match retouch(&state, request).await {
        Ok(output) => (
            [(header::CONTENT_TYPE, RetouchOutput::CONTENT_TYPE)],
            output.bytes,
        )
            .into_response(),
        Err(e) => {
            warn!("Error during image processing: {} ({})", e, e.kind());
            ApiErrorResponse::new(e, state.config.strict_status_codes).into_response()
        }
    }
}

async fn retouch(state: &AppState, request: Request) -> Result<RetouchOutput, RetouchError> {
    // 1. Read the upload
    let raw = read_upload(request, state).await?;
    debug!("Retouch upload received: {} bytes", raw.len());

    // 2. Run the CPU-bound pipeline off the async workers
    let pipeline = state.pipeline.clone();
    tokio::task::spawn_blocking(move || pipeline.process(&raw))
        .await
        .map_err(|e| RetouchError::Unhandled(format!("Retouch task failed: {}", e)))?
}
