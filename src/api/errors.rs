// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::retouch::RetouchError;

/// Body of every failed `/retouch` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&RetouchError> for ErrorResponse {
    fn from(err: &RetouchError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Error response wrapper
///
/// Existing clients expect failures with status 200, so the per-kind status
/// is only used when `strict` is set.
pub struct ApiErrorResponse {
    pub error: RetouchError,
    pub strict: bool,
}

impl ApiErrorResponse {
    pub fn new(error: RetouchError, strict: bool) -> Self {
        Self { error, strict }
    }

    pub fn status(&self) -> StatusCode {
        if self.strict {
            StatusCode::from_u16(self.error.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::OK
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::from(&self.error))).into_response()
    }
}
