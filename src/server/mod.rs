//! HTTP API for collaborators.
//!
//! Serves the message contract badge renderers and popups consume:
//! - `GET /domain/{domain}` - classification for a root domain
//! - `GET /check?url=…` - full navigation-style check of a URL
//! - `GET /threshold` / `PUT /threshold` - threshold read/update
//!
//! The server binds loopback only and runs until the process exits.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use handlers::{check_handler, domain_info_handler, get_threshold_handler, set_threshold_handler};
pub use types::ApiState;

fn router(state: ApiState) -> Router {
    Router::new()
        .route("/domain/{domain}", get(domain_info_handler))
        .route("/check", get(check_handler))
        .route(
            "/threshold",
            get(get_threshold_handler).put(set_threshold_handler),
        )
        .with_state(state)
}

/// Binds the API server on the given loopback port and serves forever.
pub async fn start_api_server(port: u16, state: ApiState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to port {}: {}", port, e))?;
    serve_on(listener, state).await
}

/// Serves the API on an already-bound listener.
///
/// Split out from [`start_api_server`] so tests can bind port 0 and learn
/// the actual address first.
pub async fn serve_on(listener: TcpListener, state: ApiState) -> Result<(), anyhow::Error> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("API server listening on http://{}/", addr);
        log::info!("  - Domain info: http://{}/domain/{{domain}}", addr);
        log::info!("  - URL check:   http://{}/check?url=...", addr);
        log::info!("  - Threshold:   http://{}/threshold", addr);
    }

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
