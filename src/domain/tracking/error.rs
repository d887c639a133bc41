use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TrackingServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("entry not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for TrackingServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidInput(msg) => TrackingServiceError::Invalid(msg),
            AppError::NotFound(_) => TrackingServiceError::NotFound,
            AppError::UpstreamUnavailable(msg) => TrackingServiceError::Unavailable(msg),
            _ => TrackingServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<TrackingServiceError> for AppError {
    fn from(err: TrackingServiceError) -> Self {
        match err {
            TrackingServiceError::Invalid(msg) => AppError::InvalidInput(msg),
            TrackingServiceError::NotFound => AppError::NotFound("Entry not found".to_string()),
            TrackingServiceError::Unavailable(msg) => AppError::UpstreamUnavailable(msg),
            TrackingServiceError::Dependency(msg) => AppError::Internal(msg),
            TrackingServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
