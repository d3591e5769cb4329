//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{SourceFetcher, TransformPipeline};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<SourceFetcher>,
    pub pipeline: Arc<TransformPipeline>,
}

/// Create application state from configuration.
pub fn create_app_state(config: Arc<AppConfig>) -> anyhow::Result<AppState> {
    let fetcher = Arc::new(SourceFetcher::new(&config.fetch)?);
    let pipeline = Arc::new(TransformPipeline::new());

    Ok(AppState { fetcher, pipeline })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. CORS is
/// unrestricted: the transform endpoint is a public API and must be
/// callable from any origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/image", get(handle_image))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // The pipeline enforces its own 20MB ceiling with a proper error
        // body; the framework default limit would reject large payloads
        // before it gets the chance.
        .layer(DefaultBodyLimit::disable())
}

// Wrapper handler to extract state components for the underlying API handler

async fn handle_image(
    axum::extract::State(state): axum::extract::State<AppState>,
    query: axum::extract::Query<api::ImageQuery>,
    body: axum::body::Bytes,
) -> Result<axum::response::Response, ApiError> {
    api::handle_image(
        axum::extract::State(state.fetcher),
        axum::extract::State(state.pipeline),
        query,
        body,
    )
    .await
}
