use super::{ProfileRepository, VoucherRepository};
use crate::domain::entitlement::{EntitlementStore, Redemption, RedemptionWrite, Voucher};
use crate::domain::user::Profile;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// PostgreSQL-backed entitlement store.
///
/// Redemption runs in one transaction: the voucher row is claimed with a
/// conditional increment (row-locked by the UPDATE), so two concurrent
/// redemptions of the last remaining use cannot both match.
pub struct EntitlementRepository {
    pool: Arc<DbPool>,
    profiles: Arc<ProfileRepository>,
    vouchers: Arc<VoucherRepository>,
}

impl EntitlementRepository {
    pub fn new(
        pool: Arc<DbPool>,
        profiles: Arc<ProfileRepository>,
        vouchers: Arc<VoucherRepository>,
    ) -> Self {
        Self {
            pool,
            profiles,
            vouchers,
        }
    }
}

#[async_trait]
impl EntitlementStore for EntitlementRepository {
    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        self.profiles.find_by_user_id(user_id).await
    }

    async fn find_voucher_by_code(&self, code: &str) -> AppResult<Option<Voucher>> {
        self.vouchers.find_by_code(code).await
    }

    async fn find_voucher(&self, voucher_id: Uuid) -> AppResult<Option<Voucher>> {
        self.vouchers.find_by_id(voucher_id).await
    }

    async fn apply_redemption(&self, redemption: &Redemption) -> AppResult<RedemptionWrite> {
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE vouchers
            SET used_count = used_count + 1
            WHERE id = $1
              AND active
              AND expiry_date >= $2
              AND used_count < usage_limit
            RETURNING id
            "#,
        )
        .bind(redemption.voucher_id)
        .bind(redemption.redeemed_at)
        .fetch_optional(&mut *tx)
        .await?;

        if claimed.is_none() {
            tx.rollback().await?;
            return Ok(RedemptionWrite::VoucherUnavailable);
        }

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET is_premium = TRUE, premium_expiry = $1, updated_at = $2
            WHERE user_id = $3
            RETURNING *
            "#,
        )
        .bind(redemption.premium_expiry)
        .bind(redemption.redeemed_at)
        .bind(redemption.user_id)
        .fetch_optional(&mut *tx)
        .await?;

        match profile {
            Some(profile) => {
                tx.commit().await?;
                Ok(RedemptionWrite::Applied(profile))
            }
            None => {
                tx.rollback().await?;
                Ok(RedemptionWrite::ProfileMissing)
            }
        }
    }

    async fn set_premium(
        &self,
        user_id: Uuid,
        is_premium: bool,
        premium_expiry: Option<DateTime<Utc>>,
    ) -> AppResult<Option<Profile>> {
        self.profiles
            .set_premium(user_id, is_premium, premium_expiry)
            .await
    }

    async fn set_suspended(&self, user_id: Uuid, suspended: bool) -> AppResult<Option<Profile>> {
        self.profiles.set_suspended(user_id, suspended).await
    }
}
