use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown mood. Please choose one of the provided moods.")]
    InvalidMood,

    #[error("Server is missing API_NINJAS_KEY configuration.")]
    Configuration,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("No exercises found for this mood. Try another mood or adjust the mapping.")]
    NoResults,
}

const UPSTREAM_MESSAGE: &str =
    "Something went wrong talking to the external APIs. Please try again in a moment.";

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidMood => StatusCode::BAD_REQUEST,
            AppError::Configuration | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NoResults => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::InvalidMood | AppError::NoResults => self.to_string(),
            AppError::Configuration => {
                tracing::error!("Recommendation requested but API_NINJAS_KEY is not set");
                self.to_string()
            }
            AppError::Upstream(ref detail) => {
                tracing::error!("Upstream error: {}", detail);
                UPSTREAM_MESSAGE.to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
