use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::error::EntitlementServiceError;
use crate::domain::user::Profile;

/// A redeemable code granting a fixed-length premium period.
///
/// `used_count <= usage_limit` holds after every redemption.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Voucher {
    pub id: Uuid,
    pub code: String,
    pub duration_days: i32,
    pub usage_limit: i32,
    pub used_count: i32,
    pub expiry_date: DateTime<Utc>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Voucher {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry_date
    }

    pub fn is_exhausted(&self) -> bool {
        self.used_count >= self.usage_limit
    }

    pub fn remaining_uses(&self) -> i32 {
        (self.usage_limit - self.used_count).max(0)
    }

    /// Check the redeemability rules in order: kill-switch, expiry, usage.
    pub fn check_redeemable(&self, now: DateTime<Utc>) -> Result<(), EntitlementServiceError> {
        if !self.active {
            return Err(EntitlementServiceError::VoucherInactive);
        }
        if self.is_expired(now) {
            return Err(EntitlementServiceError::VoucherExpired);
        }
        if self.is_exhausted() {
            return Err(EntitlementServiceError::VoucherExhausted);
        }
        Ok(())
    }
}

/// Trim and upper-case a voucher code so lookups are case-insensitive
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Premium is active only while the expiry lies strictly in the future
pub fn is_entitlement_active(profile: &Profile, now: DateTime<Utc>) -> bool {
    profile.is_premium && profile.premium_expiry.is_some_and(|expiry| expiry > now)
}

/// Everything the store needs to apply a redemption in one unit
#[derive(Debug, Clone)]
pub struct Redemption {
    pub voucher_id: Uuid,
    pub user_id: Uuid,
    pub redeemed_at: DateTime<Utc>,
    pub premium_expiry: DateTime<Utc>,
}

/// Outcome of the conditional redemption write
#[derive(Debug, Clone)]
pub enum RedemptionWrite {
    /// Usage counter incremented and profile updated
    Applied(Profile),
    /// The conditional increment matched nothing; nothing was written
    VoucherUnavailable,
    /// The profile vanished; nothing was written
    ProfileMissing,
}

/// Response for GET /api/premium
#[derive(Debug, Serialize, Deserialize)]
pub struct PremiumStatus {
    pub is_premium: bool,
    pub premium_expiry: Option<DateTime<Utc>>,
    pub active: bool,
}

impl PremiumStatus {
    pub fn of(profile: &Profile, now: DateTime<Utc>) -> Self {
        Self {
            is_premium: profile.is_premium,
            premium_expiry: profile.premium_expiry,
            active: is_entitlement_active(profile, now),
        }
    }
}

#[cfg(test)]
pub(crate) fn voucher_fixture(code: &str, now: DateTime<Utc>) -> Voucher {
    Voucher {
        id: Uuid::new_v4(),
        code: code.to_string(),
        duration_days: 7,
        usage_limit: 1,
        used_count: 0,
        expiry_date: now + chrono::Duration::days(30),
        active: true,
        created_at: now,
    }
}
