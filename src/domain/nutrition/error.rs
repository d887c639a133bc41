use crate::error::AppError;
use crate::infrastructure::repositories::EstimatorError;

#[derive(Debug, thiserror::Error)]
pub enum NutritionServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("rate limited")]
    RateLimited,
    #[error("quota exhausted")]
    QuotaExhausted,
    #[error("estimation failed: {0}")]
    EstimationFailed(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<EstimatorError> for NutritionServiceError {
    fn from(err: EstimatorError) -> Self {
        match err {
            EstimatorError::RateLimited => NutritionServiceError::RateLimited,
            EstimatorError::QuotaExhausted => NutritionServiceError::QuotaExhausted,
            EstimatorError::Failed(msg) => NutritionServiceError::EstimationFailed(msg),
        }
    }
}

impl From<NutritionServiceError> for AppError {
    fn from(err: NutritionServiceError) -> Self {
        match err {
            NutritionServiceError::Invalid(msg) => AppError::InvalidInput(msg),
            NutritionServiceError::RateLimited => AppError::RateLimitExceeded(
                "Rate limit exceeded, please try again later.".to_string(),
            ),
            NutritionServiceError::QuotaExhausted => {
                AppError::PaymentRequired("AI credits exhausted.".to_string())
            }
            NutritionServiceError::EstimationFailed(msg) => AppError::UpstreamUnavailable(msg),
            NutritionServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
