// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod retouch;

pub use errors::{ApiErrorResponse, ErrorResponse};
pub use handlers::{root_handler, StatusResponse};
pub use http_server::{create_app, start_server, AppState};
pub use retouch::retouch_handler;
