pub mod handlers;
pub mod routes;

pub use routes::create_router;

use crate::error::AppResult;

/// Serves the health endpoint on `host:port` until the process exits
pub async fn serve(host: &str, port: u16) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Health endpoint listening");
    axum::serve(listener, create_router()).await?;
    Ok(())
}
