use crate::error::{AppError, Result};
use crate::models::recommendation::DEFAULT_EQUIPMENT;
use crate::models::{ExerciseQuery, ExerciseRecord};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

#[async_trait]
pub trait ExerciseSource: Send + Sync {
    /// Returns every exercise matching the query. An empty vec means no matches.
    async fn search(&self, query: &ExerciseQuery) -> Result<Vec<ExerciseRecord>>;
}

/// Client for the API Ninjas exercise endpoint.
#[derive(Debug, Clone)]
pub struct ExerciseClient {
    url: String,
    api_key: String,
    client: Client,
}

fn text_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Fields of an unexpected type read as absent instead of rejecting the entry.
pub fn exercise_from_value(raw: &Value) -> ExerciseRecord {
    ExerciseRecord {
        name: text_field(raw, "name"),
        category: text_field(raw, "type"),
        target_muscle: text_field(raw, "muscle"),
        difficulty_level: text_field(raw, "difficulty"),
        equipment: normalize_equipment(raw.get("equipments")),
        instructions: text_field(raw, "instructions"),
    }
}

/// Lists are joined for display; a missing or blank value gets the default text.
pub fn normalize_equipment(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => DEFAULT_EQUIPMENT.to_string(),
    }
}

impl ExerciseClient {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            url,
            api_key,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ExerciseSource for ExerciseClient {
    async fn search(&self, query: &ExerciseQuery) -> Result<Vec<ExerciseRecord>> {
        tracing::debug!(
            "Searching exercises: type={} difficulty={}",
            query.category,
            query.difficulty
        );

        let response = self
            .client
            .get(&self.url)
            .query(query)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Exercise request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Exercise API returned status: {} - {}",
                status, body
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read exercise response: {}", e)))?;

        // Anything but a JSON array counts as an empty result set.
        let items = match serde_json::from_str::<Value>(&response_text) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                tracing::warn!("Exercise API returned a non-array body");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::warn!(
                    "Exercise API returned unparsable body: {} - {}",
                    e,
                    response_text.chars().take(200).collect::<String>()
                );
                return Ok(Vec::new());
            }
        };

        tracing::debug!("Found {} exercises", items.len());

        Ok(items.iter().map(exercise_from_value).collect())
    }
}
