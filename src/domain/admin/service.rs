use super::dto::{AnalyticsResponse, CreateVoucherRequest, PlatformStats};
use super::error::AdminServiceError;
use crate::domain::entitlement::{normalize_code, EntitlementServiceApi, Voucher};
use crate::domain::user::Profile;
use crate::infrastructure::db::bounded;
use crate::infrastructure::repositories::{AnalyticsRepository, ProfileRepository, VoucherRepository};
use chrono::{DateTime, Days, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const TOP_USERS_LIMIT: i64 = 5;

static VOUCHER_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9_-]{3,32}$").expect("voucher code pattern is valid"));

/// Administration operations. Route-level admin checks happen in the
/// middleware; this service assumes an authorized caller.
pub struct AdminService {
    profile_repo: Arc<ProfileRepository>,
    voucher_repo: Arc<VoucherRepository>,
    analytics_repo: Arc<AnalyticsRepository>,
    entitlement: Arc<dyn EntitlementServiceApi>,
    store_timeout: Duration,
}

impl AdminService {
    pub fn new(
        profile_repo: Arc<ProfileRepository>,
        voucher_repo: Arc<VoucherRepository>,
        analytics_repo: Arc<AnalyticsRepository>,
        entitlement: Arc<dyn EntitlementServiceApi>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            profile_repo,
            voucher_repo,
            analytics_repo,
            entitlement,
            store_timeout,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<Profile>, AdminServiceError> {
        let profiles = bounded(
            self.store_timeout,
            "list_profiles",
            self.profile_repo.list_all(),
        )
        .await?;
        Ok(profiles)
    }

    pub async fn set_premium(
        &self,
        admin_id: Uuid,
        user_id: Uuid,
        active: bool,
        duration_days: Option<u32>,
    ) -> Result<Profile, AdminServiceError> {
        let profile = self
            .entitlement
            .set_premium(user_id, active, duration_days)
            .await?;

        tracing::info!(
            admin_id = %admin_id,
            user_id = %user_id,
            active,
            "Admin premium update"
        );

        Ok(profile)
    }

    pub async fn set_suspended(
        &self,
        admin_id: Uuid,
        user_id: Uuid,
        suspended: bool,
    ) -> Result<Profile, AdminServiceError> {
        if admin_id == user_id && suspended {
            return Err(AdminServiceError::Invalid(
                "Administrators cannot suspend themselves".to_string(),
            ));
        }

        let profile = self.entitlement.set_suspended(user_id, suspended).await?;

        tracing::info!(
            admin_id = %admin_id,
            user_id = %user_id,
            suspended,
            "Admin suspension update"
        );

        Ok(profile)
    }

    pub async fn list_vouchers(&self) -> Result<Vec<Voucher>, AdminServiceError> {
        let vouchers = bounded(
            self.store_timeout,
            "list_vouchers",
            self.voucher_repo.list_all(),
        )
        .await?;
        Ok(vouchers)
    }

    pub async fn create_voucher(
        &self,
        request: CreateVoucherRequest,
    ) -> Result<Voucher, AdminServiceError> {
        self.create_voucher_at(request, Utc::now()).await
    }

    /// Voucher creation against an explicit clock
    pub async fn create_voucher_at(
        &self,
        request: CreateVoucherRequest,
        now: DateTime<Utc>,
    ) -> Result<Voucher, AdminServiceError> {
        let code = validate_voucher_request(&request)?;
        let expiry_date = voucher_expiry(now, request.expires_in_days)?;

        let voucher = bounded(
            self.store_timeout,
            "create_voucher",
            self.voucher_repo.create(
                &code,
                request.duration_days,
                request.usage_limit,
                expiry_date,
            ),
        )
        .await?;

        tracing::info!(
            voucher_id = %voucher.id,
            code = %voucher.code,
            duration_days = voucher.duration_days,
            usage_limit = voucher.usage_limit,
            expiry_date = %voucher.expiry_date,
            "Voucher created"
        );

        Ok(voucher)
    }

    pub async fn set_voucher_active(
        &self,
        voucher_id: Uuid,
        active: bool,
    ) -> Result<Voucher, AdminServiceError> {
        let voucher = bounded(
            self.store_timeout,
            "set_voucher_active",
            self.voucher_repo.set_active(voucher_id, active),
        )
        .await?
        .ok_or(AdminServiceError::VoucherNotFound)?;

        tracing::info!(voucher_id = %voucher_id, active, "Voucher toggled");

        Ok(voucher)
    }

    pub async fn delete_voucher(&self, voucher_id: Uuid) -> Result<(), AdminServiceError> {
        let deleted = bounded(
            self.store_timeout,
            "delete_voucher",
            self.voucher_repo.delete(voucher_id),
        )
        .await?;

        if !deleted {
            return Err(AdminServiceError::VoucherNotFound);
        }

        tracing::info!(voucher_id = %voucher_id, "Voucher deleted");
        Ok(())
    }

    pub async fn stats(&self) -> Result<PlatformStats, AdminServiceError> {
        let stats = bounded(
            self.store_timeout,
            "platform_stats",
            self.analytics_repo.platform_stats(),
        )
        .await?;
        Ok(stats)
    }

    pub async fn analytics(&self) -> Result<AnalyticsResponse, AdminServiceError> {
        let (daily_signups, top_users) = tokio::try_join!(
            bounded(
                self.store_timeout,
                "daily_signups",
                self.analytics_repo.daily_signups(),
            ),
            bounded(
                self.store_timeout,
                "top_users",
                self.analytics_repo.top_users(TOP_USERS_LIMIT),
            ),
        )?;

        Ok(AnalyticsResponse {
            daily_signups,
            top_users,
        })
    }
}

/// Validate a creation request and return the normalized code
fn validate_voucher_request(request: &CreateVoucherRequest) -> Result<String, AdminServiceError> {
    let code = normalize_code(&request.code);
    if !VOUCHER_CODE.is_match(&code) {
        return Err(AdminServiceError::Invalid(
            "code must be 3-32 characters of A-Z, 0-9, '_' or '-'".to_string(),
        ));
    }

    for (field, value) in [
        ("duration_days", request.duration_days),
        ("usage_limit", request.usage_limit),
        ("expires_in_days", request.expires_in_days),
    ] {
        if value < 1 {
            return Err(AdminServiceError::Invalid(format!(
                "{} must be at least 1",
                field
            )));
        }
    }

    Ok(code)
}

fn voucher_expiry(now: DateTime<Utc>, expires_in_days: i32) -> Result<DateTime<Utc>, AdminServiceError> {
    u64::try_from(expires_in_days)
        .ok()
        .and_then(|days| now.checked_add_days(Days::new(days)))
        .ok_or_else(|| AdminServiceError::Invalid("expires_in_days is out of range".to_string()))
}
