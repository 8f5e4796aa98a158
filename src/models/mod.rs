pub mod mood;
pub mod recommendation;

pub use mood::{ExerciseQuery, Mood, MoodProfiles};
pub use recommendation::{ExerciseRecord, QuoteRecord, RecommendationResponse};
