pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/introduce", post(routes::introduce::introduce))
        .route("/ensure-checklist", post(routes::checklist::ensure))
        .route("/tdd/start", post(routes::tdd::start))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serve on a pre-bound listener, so the caller can report the actual port
/// when it asked the OS for one (`port = 0`).
pub async fn serve_on(listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("MCP checklist server listening on http://{addr}");
    axum::serve(listener, build_router()).await?;
    Ok(())
}
