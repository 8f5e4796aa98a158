use crate::models::Mood;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EQUIPMENT: &str = "Bodyweight / simple equipment";
pub const DEFAULT_QUOTE_TEXT: &str = "Keep going. Small steps still count.";
pub const DEFAULT_QUOTE_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    #[serde(rename = "muscle")]
    pub target_muscle: Option<String>,
    #[serde(rename = "difficulty")]
    pub difficulty_level: Option<String>,
    /// Display string, already joined and defaulted.
    #[serde(rename = "equipments")]
    pub equipment: String,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub text: String,
    pub author: String,
}

impl Default for QuoteRecord {
    fn default() -> Self {
        Self {
            text: DEFAULT_QUOTE_TEXT.to_string(),
            author: DEFAULT_QUOTE_AUTHOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub mood: Mood,
    pub exercise: ExerciseRecord,
    pub quote: QuoteRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_uses_front_end_field_names() {
        let response = RecommendationResponse {
            mood: Mood::Anxious,
            exercise: ExerciseRecord {
                name: Some("Child's pose".to_string()),
                category: Some("stretching".to_string()),
                target_muscle: Some("lower_back".to_string()),
                difficulty_level: Some("intermediate".to_string()),
                equipment: "mat".to_string(),
                instructions: None,
            },
            quote: QuoteRecord::default(),
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "mood": "anxious",
                "exercise": {
                    "name": "Child's pose",
                    "type": "stretching",
                    "muscle": "lower_back",
                    "difficulty": "intermediate",
                    "equipments": "mat",
                    "instructions": null
                },
                "quote": {
                    "text": DEFAULT_QUOTE_TEXT,
                    "author": "Unknown"
                }
            })
        );
    }
}
