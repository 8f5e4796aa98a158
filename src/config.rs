use anyhow::Context;
use std::env;

pub const DEFAULT_EXERCISE_API_URL: &str = "https://api.api-ninjas.com/v1/exercises";
pub const DEFAULT_QUOTE_API_URL: &str = "https://zenquotes.io/api/random";

#[derive(Debug, Clone)]
pub struct Config {
    /// API Ninjas key. Optional at startup; every recommendation fails until it is set.
    pub exercise_api_key: Option<String>,
    pub exercise_api_url: String,
    pub quote_api_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Allowed CORS origins. A single "*" allows any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let exercise_api_key = lookup("API_NINJAS_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let server_port: u16 = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", port))?,
            None => 3000,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            exercise_api_key,
            exercise_api_url: lookup("EXERCISE_API_URL")
                .unwrap_or_else(|| DEFAULT_EXERCISE_API_URL.to_string()),
            quote_api_url: lookup("QUOTE_API_URL")
                .unwrap_or_else(|| DEFAULT_QUOTE_API_URL.to_string()),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            cors_origins,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}
