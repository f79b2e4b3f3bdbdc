// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration from CLI flags and environment variables

use anyhow::{bail, Result};
use clap::Parser;

use crate::retouch::{RetouchPipeline, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_UPLOAD_BYTES};

/// Retouch Node
#[derive(Parser, Debug, Clone)]
#[command(name = "retouch-node")]
#[command(version)]
#[command(about = "HTTP backend that retouches uploaded portrait images", long_about = None)]
pub struct RetouchConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "RETOUCH_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen_addr: String,

    /// Largest accepted upload in bytes
    #[arg(long, env = "RETOUCH_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// JPEG quality of the returned image (1-100)
    #[arg(long, env = "RETOUCH_JPEG_QUALITY", default_value_t = DEFAULT_JPEG_QUALITY)]
    pub jpeg_quality: u8,

    /// Brightness factor applied after smoothing (1.0 = unchanged)
    #[arg(long, env = "RETOUCH_BRIGHTNESS", default_value_t = 1.0)]
    pub brightness: f32,

    /// Report failures with a per-kind HTTP status instead of 200
    #[arg(long, env = "RETOUCH_STRICT_STATUS_CODES", default_value_t = false)]
    pub strict_status_codes: bool,
}

impl Default for RetouchConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            brightness: 1.0,
            strict_status_codes: false,
        }
    }
}

impl RetouchConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            bail!(
                "jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            );
        }
        if self.max_upload_bytes == 0 {
            bail!("max_upload_bytes must be greater than 0");
        }
        if !self.brightness.is_finite() || self.brightness <= 0.0 {
            bail!("brightness must be a positive number, got {}", self.brightness);
        }
        Ok(())
    }

    pub fn pipeline(&self) -> RetouchPipeline {
        RetouchPipeline {
            jpeg_quality: self.jpeg_quality,
            brightness: self.brightness,
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
