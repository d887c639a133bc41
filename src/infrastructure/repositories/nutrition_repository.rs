use crate::domain::nutrition::NutritionEstimate;
use async_trait::async_trait;

/// Failure modes of an estimator call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimatorError {
    #[error("rate limited by the estimator")]
    RateLimited,
    #[error("estimator quota exhausted")]
    QuotaExhausted,
    #[error("estimation failed: {0}")]
    Failed(String),
}

/// Estimates nutrition facts for a free-text food name.
///
/// Abstracts the AI provider behind the estimator (an OpenAI-compatible
/// gateway in production). Implementations return non-negative values only.
#[async_trait]
pub trait NutritionRepository: Send + Sync {
    async fn estimate(&self, food_name: &str) -> Result<NutritionEstimate, EstimatorError>;
}
