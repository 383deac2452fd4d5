//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/interactions", post(handlers::interactions::handle_interaction))
        .route("/health", get(handlers::health::health))
        .with_state(state)
}
