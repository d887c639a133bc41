use crate::domain::entitlement::EntitlementServiceError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("voucher not found")]
    VoucherNotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Entitlement(#[from] EntitlementServiceError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for AdminServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidInput(msg) => AdminServiceError::Invalid(msg),
            AppError::Conflict(msg) => AdminServiceError::Conflict(msg),
            AppError::UpstreamUnavailable(msg) => AdminServiceError::Unavailable(msg),
            _ => AdminServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<AdminServiceError> for AppError {
    fn from(err: AdminServiceError) -> Self {
        match err {
            AdminServiceError::Invalid(msg) => AppError::InvalidInput(msg),
            AdminServiceError::VoucherNotFound => {
                AppError::NotFound("Voucher not found".to_string())
            }
            AdminServiceError::Conflict(msg) => AppError::Conflict(msg),
            AdminServiceError::Unavailable(msg) => AppError::UpstreamUnavailable(msg),
            AdminServiceError::Entitlement(e) => e.into(),
            AdminServiceError::Dependency(msg) => AppError::Internal(msg),
            AdminServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
