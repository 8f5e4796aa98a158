use crate::api::AppState;
use crate::error::Result;
use crate::models::RecommendationResponse;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub mood: Option<String>,
}

pub fn recommend_routes() -> Router<Arc<AppState>> {
    Router::new().route("/recommend", get(recommend))
}

/// GET /api/recommend?mood=<mood>
async fn recommend(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<RecommendParams>, QueryRejection>,
) -> Result<Json<RecommendationResponse>> {
    // A malformed query string is treated like a missing mood.
    let mood = params
        .ok()
        .and_then(|Query(params)| params.mood)
        .unwrap_or_default();

    let mut rng = StdRng::from_entropy();
    let recommendation = state.recommender.recommend(&mood, &mut rng).await?;

    tracing::info!(
        "Recommended {:?} for mood {}",
        recommendation.exercise.name.as_deref().unwrap_or("unnamed exercise"),
        recommendation.mood
    );

    Ok(Json(recommendation))
}
