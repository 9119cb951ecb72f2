use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use resources::ResourceError;

use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct LocalResourcesQuery {
    #[serde(default)]
    location: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    message: String,

    /// Present (true) only when the failure is a missing credential,
    /// so clients can prompt for configuration instead of retrying
    #[serde(skip_serializing_if = "Option::is_none")]
    needs_key: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Find local support resources for a location.
///
/// Check order matters to callers: a blank location is rejected before
/// the credential check, and a missing credential is reported
/// distinctly from a failed completion call. A successful search with
/// zero parseable resources returns an empty array, not an error.
pub async fn local_resources_handler(
    Extension(state): Extension<AppState>,
    Query(query): Query<LocalResourcesQuery>,
) -> Response {
    if query.location.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: "Location is required".to_string(),
                needs_key: None,
                error: None,
            }),
        )
            .into_response();
    }

    let Some(search) = &state.search else {
        return needs_configuration_response();
    };

    match search.search(&query.location).await {
        Ok(found) => Json(found).into_response(),
        Err(ResourceError::Config(_)) => needs_configuration_response(),
        Err(err) => {
            error!(error = %err, location = %query.location, "local resource search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to fetch local resources".to_string(),
                    needs_key: None,
                    error: Some(err.to_string()),
                }),
            )
                .into_response()
        }
    }
}

fn needs_configuration_response() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            message: "Service unavailable: API key not configured".to_string(),
            needs_key: Some(true),
            error: None,
        }),
    )
        .into_response()
}
