use axum::http::StatusCode;

pub const HEALTH_MESSAGE: &str = "🎬 Reelbot is running!";

/// Health check endpoint for hosting platforms
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTH_MESSAGE)
}
