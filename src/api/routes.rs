//! All routes for the HTTP API.

use std::sync::LazyLock;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower_http::cors::CorsLayer;

use crate::api;

pub(crate) mod ai {
    //! The routes for AI-backed analysis.

    pub(crate) mod detect_pests;
}

/// The API router.
pub(super) static ROUTER: LazyLock<Router> = LazyLock::new(|| {
    Router::new()
        .route(
            "/api/ai/detect-pests",
            // Uploaded images may be any size.
            post(ai::detect_pests::post).layer(DefaultBodyLimit::disable()),
        )
        .fallback(|| async { api::Error::RouteNotFound })
        // Any origin may call the API, with credentials.
        .layer(CorsLayer::very_permissive())
});
