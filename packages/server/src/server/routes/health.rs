use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    resource_search: ResourceSearchHealth,
}

#[derive(Serialize)]
pub struct ResourceSearchHealth {
    configured: bool,
}

/// Health check endpoint
///
/// The server is healthy whenever it can answer; `resource_search`
/// reports whether the completion provider has a credential, since an
/// unconfigured provider degrades /api/local-resources to 503.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        resource_search: ResourceSearchHealth {
            configured: state.search.is_some(),
        },
    })
}
