use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ReportServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidInput(msg) => ReportServiceError::Invalid(msg),
            AppError::UpstreamUnavailable(msg) => ReportServiceError::Unavailable(msg),
            _ => ReportServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ReportServiceError> for AppError {
    fn from(err: ReportServiceError) -> Self {
        match err {
            ReportServiceError::Invalid(msg) => AppError::InvalidInput(msg),
            ReportServiceError::Unavailable(msg) => AppError::UpstreamUnavailable(msg),
            ReportServiceError::Dependency(msg) => AppError::Internal(msg),
            ReportServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
