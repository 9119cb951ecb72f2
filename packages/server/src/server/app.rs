//! Application setup and server configuration.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use resources::{ai::Perplexity, Completion, ResourceSearch};

use crate::server::routes::{health_handler, local_resources_handler};

/// Shared application state
///
/// The provider is boxed behind the `Completion` trait so tests can
/// swap in a mock without a credential.
#[derive(Clone)]
pub struct AppState {
    /// Search pipeline; absent when no completion credential is
    /// configured at startup
    pub search: Option<Arc<ResourceSearch<Box<dyn Completion>>>>,
}

impl AppState {
    /// State backed by an arbitrary completion provider.
    pub fn with_provider(provider: impl Completion + 'static) -> Self {
        let boxed: Box<dyn Completion> = Box::new(provider);
        Self {
            search: Some(Arc::new(ResourceSearch::new(boxed))),
        }
    }

    /// State with no provider configured.
    pub fn unconfigured() -> Self {
        Self { search: None }
    }
}

/// Build the Axum application router
pub fn build_app(perplexity_api_key: Option<String>) -> Router {
    let state = match perplexity_api_key {
        Some(key) => AppState::with_provider(Perplexity::new(key)),
        None => AppState::unconfigured(),
    };
    build_app_with_state(state)
}

/// Build the router from explicit state (used by tests to inject mocks)
pub fn build_app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/local-resources", get(local_resources_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
