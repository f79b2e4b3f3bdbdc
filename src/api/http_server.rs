// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::handlers::root_handler;
use super::retouch::retouch_handler;
use crate::config::RetouchConfig;
use crate::retouch::RetouchPipeline;

/// Room left above the upload cap for multipart framing and headers
pub const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Shared, read-only state built once at startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RetouchConfig>,
    pub pipeline: Arc<RetouchPipeline>,
}

impl AppState {
    pub fn new(config: RetouchConfig) -> Self {
        let pipeline = config.pipeline();
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn new_for_test() -> Self {
        Self::new(RetouchConfig::default())
    }

    /// Largest request body the router will buffer
    pub fn body_limit(&self) -> usize {
        self.config
            .max_upload_bytes
            .saturating_add(MULTIPART_OVERHEAD)
    }
}

pub fn create_app(state: AppState) -> Router {
    let body_limit = state.body_limit();

    Router::new()
        .route("/", get(root_handler))
        .route("/retouch", post(retouch_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(config: RetouchConfig) -> Result<()> {
    let addr = config.listen_addr.parse::<SocketAddr>()?;
    let state = AppState::new(config);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Retouch server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Retouch server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
