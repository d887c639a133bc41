use super::error::NutritionServiceError;
use super::model::{cache_key, NutritionEstimate};
use crate::infrastructure::repositories::{EstimatorError, NutritionRepository};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

const MAX_FOOD_NAME_LENGTH: usize = 200;

pub struct NutritionService {
    estimator: Arc<dyn NutritionRepository>,
    timeout: Duration,
    cache: Option<Cache<String, NutritionEstimate>>,
}

impl NutritionService {
    pub fn new(estimator: Arc<dyn NutritionRepository>, timeout: Duration, cache_enabled: bool) -> Self {
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(500)
                    .time_to_idle(Duration::from_secs(60 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            estimator,
            timeout,
            cache,
        }
    }
}

#[async_trait]
pub trait NutritionServiceApi: Send + Sync {
    /// Estimate nutrition facts for a food name.
    ///
    /// Failures are recoverable for the caller: food logging never depends
    /// on an estimate being available.
    async fn estimate(&self, food_name: &str) -> Result<NutritionEstimate, NutritionServiceError>;
}

#[async_trait]
impl NutritionServiceApi for NutritionService {
    async fn estimate(&self, food_name: &str) -> Result<NutritionEstimate, NutritionServiceError> {
        let food_name = food_name.trim();
        if food_name.is_empty() {
            return Err(NutritionServiceError::Invalid(
                "food_name is required".to_string(),
            ));
        }
        if food_name.chars().count() > MAX_FOOD_NAME_LENGTH {
            return Err(NutritionServiceError::Invalid(format!(
                "food_name must be at most {} characters",
                MAX_FOOD_NAME_LENGTH
            )));
        }

        let key = cache_key(food_name);
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&key).await {
                tracing::debug!(food_name = food_name, "Nutrition cache hit");
                return Ok(cached);
            }
        }

        let estimate = match tokio::time::timeout(self.timeout, self.estimator.estimate(food_name)).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    food_name = food_name,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Nutrition estimate timed out"
                );
                return Err(EstimatorError::Failed("estimator timed out".to_string()).into());
            }
        };
        let estimate = estimate.clamped();

        if let Some(cache) = &self.cache {
            cache.insert(key, estimate.clone()).await;
        }

        Ok(estimate)
    }
}
