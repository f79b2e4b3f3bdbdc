// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::Json;
use serde::{Deserialize, Serialize};

pub const STATUS_MESSAGE: &str = "AI Skin Retouch Pro Backend is running.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub message: String,
}

impl Default for StatusResponse {
    fn default() -> Self {
        Self {
            message: STATUS_MESSAGE.to_string(),
        }
    }
}

/// GET / - Liveness message
pub async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse::default())
}
