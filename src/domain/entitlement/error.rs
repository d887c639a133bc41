use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum EntitlementServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("voucher not found")]
    VoucherNotFound,
    #[error("voucher inactive")]
    VoucherInactive,
    #[error("voucher expired")]
    VoucherExpired,
    #[error("voucher exhausted")]
    VoucherExhausted,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for EntitlementServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidInput(msg) => EntitlementServiceError::Invalid(msg),
            AppError::Conflict(msg) => EntitlementServiceError::Conflict(msg),
            AppError::UpstreamUnavailable(msg) => EntitlementServiceError::Unavailable(msg),
            _ => EntitlementServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<EntitlementServiceError> for AppError {
    fn from(err: EntitlementServiceError) -> Self {
        match err {
            EntitlementServiceError::Invalid(msg) => AppError::InvalidInput(msg),
            EntitlementServiceError::VoucherNotFound => {
                AppError::NotFound("Invalid voucher code".to_string())
            }
            EntitlementServiceError::VoucherInactive => {
                AppError::Inactive("Voucher has been disabled".to_string())
            }
            EntitlementServiceError::VoucherExpired => {
                AppError::Expired("Voucher has expired".to_string())
            }
            EntitlementServiceError::VoucherExhausted => {
                AppError::Exhausted("Voucher usage limit reached".to_string())
            }
            EntitlementServiceError::ProfileNotFound => {
                AppError::NotFound("Profile not found".to_string())
            }
            EntitlementServiceError::Conflict(msg) => AppError::Conflict(msg),
            EntitlementServiceError::Unavailable(msg) => AppError::UpstreamUnavailable(msg),
            EntitlementServiceError::Dependency(msg) => AppError::Internal(msg),
            EntitlementServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
