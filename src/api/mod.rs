pub mod recommend;

pub use recommend::recommend_routes;

use crate::frontend;
use crate::services::Recommender;
use axum::{routing::get, Router};
use std::sync::Arc;

pub struct AppState {
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }
}

/// API routes plus the embedded frontend fallback. Middleware is layered on in `main`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", recommend_routes().with_state(state))
        // Frontend - catch-all route (must be last)
        .fallback(get(frontend::serve_frontend))
}
