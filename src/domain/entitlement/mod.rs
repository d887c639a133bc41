pub mod error;
pub mod model;
pub mod service;

pub use error::EntitlementServiceError;
pub use model::{
    is_entitlement_active, normalize_code, PremiumStatus, Redemption, RedemptionWrite, Voucher,
};
pub use service::{EntitlementService, EntitlementServiceApi};

use crate::domain::user::Profile;
use crate::error::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Data store seam for the entitlement rules.
///
/// `apply_redemption` must increment `used_count` only while
/// `active AND redeemed_at <= expiry_date AND used_count < usage_limit`,
/// and write the profile in the same unit, or write nothing at all.
#[async_trait]
pub trait EntitlementStore: Send + Sync {
    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>>;

    async fn find_voucher_by_code(&self, code: &str) -> AppResult<Option<Voucher>>;

    async fn find_voucher(&self, voucher_id: Uuid) -> AppResult<Option<Voucher>>;

    async fn apply_redemption(&self, redemption: &Redemption) -> AppResult<RedemptionWrite>;

    async fn set_premium(
        &self,
        user_id: Uuid,
        is_premium: bool,
        premium_expiry: Option<DateTime<Utc>>,
    ) -> AppResult<Option<Profile>>;

    async fn set_suspended(&self, user_id: Uuid, suspended: bool) -> AppResult<Option<Profile>>;
}

/// Request for POST /api/premium/redeem
#[derive(Debug, Serialize, Deserialize)]
pub struct RedeemVoucherRequest {
    pub code: String,
}

/// Response for POST /api/premium/redeem
#[derive(Debug, Serialize, Deserialize)]
pub struct RedeemVoucherResponse {
    pub premium_expiry: DateTime<Utc>,
}
