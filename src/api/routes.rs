use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;

/// Creates the health-check router
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
}
