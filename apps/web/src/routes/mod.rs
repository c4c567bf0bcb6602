pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::curriculum::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_submit),
        )
        .route("/api/v1/render", post(handlers::handle_render))
        .fallback(not_found)
        .with_state(state)
}
