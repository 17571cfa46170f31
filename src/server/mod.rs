//! HTTP surface: the tree endpoint, a health check, and the static frontend.
//!
//! Routes:
//!
//! - `GET /api/tree?path=..&depth=..&hidden=..` returns a [`TreeResponse`](crate::TreeResponse) as JSON.
//! - `GET /api/health` returns the server status and version.
//! - Any other path is served from the configured static directory, with `/`
//!   mapped to `index.html`.

mod cors;
mod error;
mod handlers;
mod params;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

pub use cors::build_cors_layer;
pub use error::{ApiError, ApiErrorResponse, ServerError};
pub use handlers::HealthResponse;
pub use params::TreeQuery;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/tree", get(handlers::tree))
        .route("/health", get(handlers::health));

    let static_files = ServeDir::new(&state.config.server.static_dir);
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn serve(config: AppConfig) -> Result<(), ServerError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let static_dir = config.server.static_dir.clone();
    let app = build_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        "treescope v{} listening on http://{} (static files from {})",
        env!("CARGO_PKG_VERSION"),
        addr,
        static_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
