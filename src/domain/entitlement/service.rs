use super::error::EntitlementServiceError;
use super::model::{normalize_code, PremiumStatus, Redemption, RedemptionWrite};
use super::EntitlementStore;
use crate::domain::user::Profile;
use crate::infrastructure::db::bounded;
use async_trait::async_trait;
use chrono::{DateTime, Days, Utc};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const MAX_CODE_LENGTH: usize = 64;

pub struct EntitlementService {
    store: Arc<dyn EntitlementStore>,
    store_timeout: Duration,
    default_premium_days: u32,
}

impl EntitlementService {
    pub fn new(
        store: Arc<dyn EntitlementStore>,
        store_timeout: Duration,
        default_premium_days: u32,
    ) -> Self {
        Self {
            store,
            store_timeout,
            default_premium_days,
        }
    }
}

#[async_trait]
pub trait EntitlementServiceApi: Send + Sync {
    /// Redeem a voucher code for a user.
    ///
    /// On success the profile becomes premium until `now + duration_days`
    /// (overwriting any previous expiry) and the voucher's usage counter grows
    /// by exactly one. Every failure path leaves both records untouched.
    async fn redeem_voucher(
        &self,
        user_id: Uuid,
        raw_code: &str,
    ) -> Result<DateTime<Utc>, EntitlementServiceError>;

    async fn premium_status(&self, user_id: Uuid) -> Result<PremiumStatus, EntitlementServiceError>;

    /// Administrator grant or revoke; never touches vouchers
    async fn set_premium(
        &self,
        user_id: Uuid,
        active: bool,
        duration_days: Option<u32>,
    ) -> Result<Profile, EntitlementServiceError>;

    /// Advisory flag; access denial happens in the auth middleware
    async fn set_suspended(
        &self,
        user_id: Uuid,
        suspended: bool,
    ) -> Result<Profile, EntitlementServiceError>;
}

#[async_trait]
impl EntitlementServiceApi for EntitlementService {
    async fn redeem_voucher(
        &self,
        user_id: Uuid,
        raw_code: &str,
    ) -> Result<DateTime<Utc>, EntitlementServiceError> {
        self.redeem_voucher_at(user_id, raw_code, Utc::now()).await
    }

    async fn premium_status(&self, user_id: Uuid) -> Result<PremiumStatus, EntitlementServiceError> {
        let profile = self.find_profile(user_id).await?;
        Ok(PremiumStatus::of(&profile, Utc::now()))
    }

    async fn set_premium(
        &self,
        user_id: Uuid,
        active: bool,
        duration_days: Option<u32>,
    ) -> Result<Profile, EntitlementServiceError> {
        self.set_premium_at(user_id, active, duration_days, Utc::now())
            .await
    }

    async fn set_suspended(
        &self,
        user_id: Uuid,
        suspended: bool,
    ) -> Result<Profile, EntitlementServiceError> {
        let profile = bounded(
            self.store_timeout,
            "set_suspended",
            self.store.set_suspended(user_id, suspended),
        )
        .await?
        .ok_or(EntitlementServiceError::ProfileNotFound)?;

        tracing::info!(user_id = %user_id, suspended, "Suspension updated");

        Ok(profile)
    }
}

impl EntitlementService {
    /// Redemption against an explicit clock
    pub async fn redeem_voucher_at(
        &self,
        user_id: Uuid,
        raw_code: &str,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, EntitlementServiceError> {
        let code = normalize_code(raw_code);
        if code.is_empty() {
            return Err(EntitlementServiceError::Invalid(
                "Voucher code is required".to_string(),
            ));
        }
        if code.len() > MAX_CODE_LENGTH {
            return Err(EntitlementServiceError::Invalid(
                "Voucher code is too long".to_string(),
            ));
        }

        let voucher = bounded(
            self.store_timeout,
            "find_voucher_by_code",
            self.store.find_voucher_by_code(&code),
        )
        .await?
        .filter(|voucher| voucher.active)
        .ok_or(EntitlementServiceError::VoucherNotFound)?;

        voucher.check_redeemable(now)?;

        self.find_profile(user_id).await?;

        let premium_expiry = add_days(now, voucher.duration_days)?;
        let redemption = Redemption {
            voucher_id: voucher.id,
            user_id,
            redeemed_at: now,
            premium_expiry,
        };

        let write = bounded(
            self.store_timeout,
            "apply_redemption",
            self.store.apply_redemption(&redemption),
        )
        .await?;

        match write {
            RedemptionWrite::Applied(_) => {
                tracing::info!(
                    user_id = %user_id,
                    voucher_id = %voucher.id,
                    code = %code,
                    premium_expiry = %premium_expiry,
                    "Voucher redeemed"
                );
                Ok(premium_expiry)
            }
            RedemptionWrite::ProfileMissing => Err(EntitlementServiceError::ProfileNotFound),
            RedemptionWrite::VoucherUnavailable => {
                Err(self.classify_lost_redemption(voucher.id, now).await)
            }
        }
    }

    /// Admin grant against an explicit clock
    pub async fn set_premium_at(
        &self,
        user_id: Uuid,
        active: bool,
        duration_days: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<Profile, EntitlementServiceError> {
        let premium_expiry = if active {
            let days = duration_days.unwrap_or(self.default_premium_days);
            if days == 0 {
                return Err(EntitlementServiceError::Invalid(
                    "duration_days must be at least 1".to_string(),
                ));
            }
            let days = i32::try_from(days).map_err(|_| {
                EntitlementServiceError::Invalid("duration_days is too large".to_string())
            })?;
            Some(add_days(now, days)?)
        } else {
            None
        };

        let profile = bounded(
            self.store_timeout,
            "set_premium",
            self.store.set_premium(user_id, active, premium_expiry),
        )
        .await?
        .ok_or(EntitlementServiceError::ProfileNotFound)?;

        tracing::info!(
            user_id = %user_id,
            active,
            premium_expiry = ?premium_expiry,
            "Premium updated by administrator"
        );

        Ok(profile)
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Profile, EntitlementServiceError> {
        bounded(
            self.store_timeout,
            "find_profile",
            self.store.find_profile(user_id),
        )
        .await?
        .ok_or(EntitlementServiceError::ProfileNotFound)
    }

    /// The conditional increment matched nothing: someone else changed the
    /// voucher between our read and our write. Re-read to say why.
    async fn classify_lost_redemption(
        &self,
        voucher_id: Uuid,
        now: DateTime<Utc>,
    ) -> EntitlementServiceError {
        let current = match bounded(
            self.store_timeout,
            "find_voucher",
            self.store.find_voucher(voucher_id),
        )
        .await
        {
            Ok(current) => current,
            Err(e) => return e.into(),
        };

        let error = match current {
            None => EntitlementServiceError::VoucherNotFound,
            Some(voucher) => match voucher.check_redeemable(now) {
                Err(reason) => reason,
                Ok(()) => EntitlementServiceError::Conflict(
                    "Voucher changed during redemption, please retry".to_string(),
                ),
            },
        };

        tracing::warn!(
            voucher_id = %voucher_id,
            error = %error,
            "Voucher redemption lost a concurrent update"
        );

        error
    }
}

/// Calendar-day addition
fn add_days(now: DateTime<Utc>, days: i32) -> Result<DateTime<Utc>, EntitlementServiceError> {
    let days = u64::try_from(days)
        .ok()
        .filter(|days| *days > 0)
        .ok_or_else(|| EntitlementServiceError::Invalid("duration must be positive".to_string()))?;

    now.checked_add_days(Days::new(days))
        .ok_or_else(|| EntitlementServiceError::Invalid("duration is out of range".to_string()))
}
