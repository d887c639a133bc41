use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Bounds every data-store call made by the services
    pub store_timeout_ms: u64,
    // Admin premium grants
    pub default_premium_days: u32,
    // Nutrition estimator
    pub nutrition_api_url: String,
    pub nutrition_api_key: Option<String>,
    pub nutrition_model: String,
    pub nutrition_timeout_ms: u64,
    pub nutrition_cache_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            store_timeout_ms: env::var("STORE_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,
            default_premium_days: env::var("DEFAULT_PREMIUM_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            nutrition_api_url: env::var("NUTRITION_API_URL").unwrap_or_else(|_| {
                "https://ai.gateway.lovable.dev/v1/chat/completions".to_string()
            }),
            nutrition_api_key: env::var("NUTRITION_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            nutrition_model: env::var("NUTRITION_MODEL")
                .unwrap_or_else(|_| "google/gemini-3-flash-preview".to_string()),
            nutrition_timeout_ms: env::var("NUTRITION_TIMEOUT_MS")
                .unwrap_or_else(|_| "15000".to_string())
                .parse()?,
            nutrition_cache_enabled: env::var("NUTRITION_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    pub fn nutrition_timeout(&self) -> Duration {
        Duration::from_millis(self.nutrition_timeout_ms)
    }
}
