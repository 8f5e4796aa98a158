use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ExerciseRecord, MoodProfiles, RecommendationResponse};
use crate::services::exercises::{ExerciseClient, ExerciseSource};
use crate::services::quotes::{QuoteClient, QuoteSource};
use rand::Rng;
use std::sync::Arc;

pub struct Recommender {
    profiles: MoodProfiles,
    /// `None` when no exercise API key is configured.
    exercises: Option<Arc<dyn ExerciseSource>>,
    quotes: Arc<dyn QuoteSource>,
}

impl Recommender {
    pub fn new(
        profiles: MoodProfiles,
        exercises: Option<Arc<dyn ExerciseSource>>,
        quotes: Arc<dyn QuoteSource>,
    ) -> Self {
        Self {
            profiles,
            exercises,
            quotes,
        }
    }

    pub fn from_config(config: &Config, profiles: MoodProfiles) -> Self {
        let exercises = config.exercise_api_key.as_ref().map(|key| {
            Arc::new(ExerciseClient::new(config.exercise_api_url.clone(), key.clone()))
                as Arc<dyn ExerciseSource>
        });
        let quotes = Arc::new(QuoteClient::new(config.quote_api_url.clone()));

        Self::new(profiles, exercises, quotes)
    }

    pub fn is_configured(&self) -> bool {
        self.exercises.is_some()
    }

    pub async fn recommend<R>(&self, mood: &str, rng: &mut R) -> Result<RecommendationResponse>
    where
        R: Rng + Send,
    {
        let exercises = self.exercises.as_ref().ok_or(AppError::Configuration)?;
        let (mood, query) = self.profiles.resolve(mood)?;

        // Both calls must succeed; the first failure drops the other future.
        let (candidates, quote) =
            tokio::try_join!(exercises.search(query), self.quotes.random_quote())?;

        tracing::debug!("{} candidate exercises for mood {}", candidates.len(), mood);

        let exercise = pick_exercise(candidates, rng).ok_or(AppError::NoResults)?;

        Ok(RecommendationResponse {
            mood,
            exercise,
            quote,
        })
    }
}

/// Uniform random choice; `None` for an empty slate.
pub fn pick_exercise<R>(mut candidates: Vec<ExerciseRecord>, rng: &mut R) -> Option<ExerciseRecord>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
