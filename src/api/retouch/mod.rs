// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Retouch API endpoint module
//!
//! Provides POST /retouch for smoothing an uploaded portrait.

pub mod handler;
pub mod upload;

pub use handler::retouch_handler;
pub use upload::{read_upload, FILE_FIELD};
