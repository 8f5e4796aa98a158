use crate::error::{AppError, Result};
use crate::models::QuoteRecord;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn random_quote(&self) -> Result<QuoteRecord>;
}

/// Client for ZenQuotes-style random quote endpoints.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    url: String,
    client: Client,
}

impl QuoteClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }
}

fn first_text<'a>(raw: Option<&'a Value>, keys: &[&str]) -> Option<&'a str> {
    let raw = raw?;
    keys.iter()
        .filter_map(|key| raw.get(key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}

/// Accepts `[{q, a}]` (ZenQuotes) or `{quote, author}`; anything missing falls back.
pub fn quote_from_body(body: &Value) -> QuoteRecord {
    let raw = match body {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    let fallback = QuoteRecord::default();
    QuoteRecord {
        text: first_text(raw, &["q", "quote"])
            .map(str::to_string)
            .unwrap_or(fallback.text),
        author: first_text(raw, &["a", "author"])
            .map(str::to_string)
            .unwrap_or(fallback.author),
    }
}

#[async_trait]
impl QuoteSource for QuoteClient {
    async fn random_quote(&self) -> Result<QuoteRecord> {
        tracing::debug!("Fetching random quote from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Quote request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Quote API returned status: {} - {}",
                status, body
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read quote response: {}", e)))?;

        match serde_json::from_str::<Value>(&response_text) {
            Ok(body) => Ok(quote_from_body(&body)),
            Err(e) => {
                tracing::warn!("Quote API returned unparsable body, using fallback quote: {}", e);
                Ok(QuoteRecord::default())
            }
        }
    }
}
