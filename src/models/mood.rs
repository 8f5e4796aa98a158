use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Stressed,
    Anxious,
    Sad,
    Unmotivated,
    Energetic,
    Happy,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Stressed,
        Mood::Anxious,
        Mood::Sad,
        Mood::Unmotivated,
        Mood::Energetic,
        Mood::Happy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Unmotivated => "unmotivated",
            Mood::Energetic => "energetic",
            Mood::Happy => "happy",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == lowered)
            .ok_or(AppError::InvalidMood)
    }
}

/// Exercise search parameters, serialized as the exercise API's query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseQuery {
    #[serde(rename = "type")]
    pub category: String,
    pub difficulty: String,
}

impl ExerciseQuery {
    pub fn new(category: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            difficulty: difficulty.into(),
        }
    }
}

/// Immutable mood -> exercise parameter table, built once at startup.
#[derive(Debug, Clone)]
pub struct MoodProfiles {
    profiles: HashMap<Mood, ExerciseQuery>,
}

impl MoodProfiles {
    pub fn new(profiles: impl IntoIterator<Item = (Mood, ExerciseQuery)>) -> Self {
        Self {
            profiles: profiles.into_iter().collect(),
        }
    }

    pub fn get(&self, mood: Mood) -> Option<&ExerciseQuery> {
        self.profiles.get(&mood)
    }

    /// Parses a raw mood label and returns it with its search parameters.
    pub fn resolve(&self, raw: &str) -> Result<(Mood, &ExerciseQuery)> {
        let mood: Mood = raw.parse()?;
        let query = self.get(mood).ok_or(AppError::InvalidMood)?;
        Ok((mood, query))
    }
}

impl Default for MoodProfiles {
    fn default() -> Self {
        Self::new([
            (Mood::Stressed, ExerciseQuery::new("stretching", "beginner")),
            (Mood::Anxious, ExerciseQuery::new("stretching", "intermediate")),
            (Mood::Sad, ExerciseQuery::new("cardio", "beginner")),
            (Mood::Unmotivated, ExerciseQuery::new("strength", "beginner")),
            (Mood::Energetic, ExerciseQuery::new("cardio", "intermediate")),
            (Mood::Happy, ExerciseQuery::new("cardio", "intermediate")),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Stressed".parse::<Mood>().unwrap(), Mood::Stressed);
        assert_eq!("HAPPY".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!("unmotivated".parse::<Mood>().unwrap(), Mood::Unmotivated);
    }

    #[test]
    fn test_unknown_and_empty_moods_are_rejected() {
        for raw in ["", "bored", " sad", "sad "] {
            assert!(matches!(raw.parse::<Mood>(), Err(AppError::InvalidMood)), "{raw:?}");
        }
    }

    #[test]
    fn test_default_profiles_cover_every_mood() {
        let profiles = MoodProfiles::default();
        for mood in Mood::ALL {
            assert!(profiles.get(mood).is_some(), "missing profile for {mood}");
        }

        let (mood, query) = profiles.resolve("Stressed").unwrap();
        assert_eq!(mood, Mood::Stressed);
        assert_eq!(query, &ExerciseQuery::new("stretching", "beginner"));
    }

    #[test]
    fn test_resolve_rejects_moods_without_a_profile() {
        let profiles = MoodProfiles::new([(Mood::Sad, ExerciseQuery::new("cardio", "beginner"))]);

        assert!(profiles.resolve("sad").is_ok());
        assert!(matches!(profiles.resolve("happy"), Err(AppError::InvalidMood)));
    }

    #[test]
    fn test_query_serializes_with_api_field_names() {
        let value = serde_json::to_value(ExerciseQuery::new("cardio", "beginner")).unwrap();
        assert_eq!(value, serde_json::json!({"type": "cardio", "difficulty": "beginner"}));
    }
}
