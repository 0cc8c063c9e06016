//! Route table and middleware stack.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    // Base64 inflates payloads by ~4/3, so the body limit sits above the
    // decoded-size cap enforced in the upload handler.
    let body_limit = state.config.max_upload_bytes * 4 / 3 + 1024;

    Router::new()
        .route("/", get(handlers::home::homepage))
        .route("/i/{key}", get(handlers::image::fetch_image))
        .route("/u/{key}", post(handlers::upload::upload_image))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
