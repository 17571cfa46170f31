use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::engine::build_tree;
use crate::types::TreeResponse;

use super::AppState;
use super::error::ApiError;
use super::params::TreeQuery;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /api/tree
///
/// Root-level failures such as a missing path are still a 200 with an
/// `{"error": ...}` body; only unparseable queries and a failed build task
/// produce a 400.
pub async fn tree(
    State(state): State<AppState>,
    query: Result<Query<TreeQuery>, QueryRejection>,
) -> Result<Json<TreeResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let options = query.into_options(&state.config.tree)?;

    tracing::debug!(root = %options.root.display(), depth = options.max_depth, "Tree request");
    let response = tokio::task::spawn_blocking(move || build_tree(&options))
        .await
        .map_err(|e| ApiError::BuildFailed(format!("tree build failed: {}", e)))?;

    Ok(Json(response))
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
