//! HTTP front end.
//!
//! A single lookup route:
//! - `/?postcode=<code>` returns every catalog provider with its distance
//!   from the postcode, as a JSON array in catalog order
//! - `/health` for probes
//!
//! All responses carry `Access-Control-Allow-Origin: *`.

mod error;
mod handlers;
mod routes;

pub use error::ApiError;
pub use routes::create_router;

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::{Geocoder, PostcodesIo};
use crate::config::{GeocoderConfig, ServerConfig};

/// Shared state for the web server. Read-only across requests.
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    pub fn from_config(config: &GeocoderConfig) -> anyhow::Result<Self> {
        let geocoder = PostcodesIo::from_config(config)?;
        Ok(Self::new(Arc::new(geocoder)))
    }
}

/// Start the web server and run until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
