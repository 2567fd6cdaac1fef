//! HTTP backend for TENeT.
//!
//! Serves a single liveness endpoint, `GET /api/health`, behind an allow-all
//! CORS policy so browser clients on any origin can reach it.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, LogFormat};
pub use error::{Result, ServerError};

/// Service name embedded in the health message.
pub const SERVICE_NAME: &str = "TENeT";

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/api/health", get(routes::health::check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serves `app` on an already-bound listener until the server stops.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Binds the configured address and serves the application router.
pub async fn run(config: &Config) -> Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(%addr, "Starting {SERVICE_NAME} Backend on http://{addr}");

    serve(listener, create_app()).await
}
