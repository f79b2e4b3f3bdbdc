// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use retouch_node::{api::start_server, config::RetouchConfig, version};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before reading configuration
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = RetouchConfig::parse();
    config.validate()?;

    info!("Starting {}", version::get_version_string());
    info!(
        "Config: listen={}, max_upload={} bytes, jpeg_quality={}, brightness={}, strict_status_codes={}",
        config.listen_addr,
        config.max_upload_bytes,
        config.jpeg_quality,
        config.brightness,
        config.strict_status_codes
    );

    start_server(config).await
}
