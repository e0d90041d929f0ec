//! Server setup and routing.

pub mod error;
pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{llm::CompletionModel, server::state::AppState};

/// Create the API router with all routes.
pub fn create_router<M>(state: AppState<M>) -> Router
where
    M: CompletionModel + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::home))
        .route("/submit", post(handlers::submit::<M>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP server until the process is terminated.
pub async fn run_server<M>(state: AppState<M>, addr: SocketAddr) -> std::io::Result<()>
where
    M: CompletionModel + Clone + Send + Sync + 'static,
{
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await
}
