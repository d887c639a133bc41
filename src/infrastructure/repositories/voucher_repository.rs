use crate::domain::entitlement::Voucher;
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

pub struct VoucherRepository {
    pool: Arc<DbPool>,
}

impl VoucherRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Find a voucher by its normalized code, active or not
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<Voucher>> {
        let pool = self.pool.as_ref();
        let voucher = sqlx::query_as::<_, Voucher>("SELECT * FROM vouchers WHERE code = $1")
            .bind(code)
            .fetch_optional(pool)
            .await?;

        Ok(voucher)
    }

    pub async fn find_by_id(&self, voucher_id: Uuid) -> AppResult<Option<Voucher>> {
        let pool = self.pool.as_ref();
        let voucher = sqlx::query_as::<_, Voucher>("SELECT * FROM vouchers WHERE id = $1")
            .bind(voucher_id)
            .fetch_optional(pool)
            .await?;

        Ok(voucher)
    }

    /// All vouchers, newest first
    pub async fn list_all(&self) -> AppResult<Vec<Voucher>> {
        let pool = self.pool.as_ref();
        let vouchers =
            sqlx::query_as::<_, Voucher>("SELECT * FROM vouchers ORDER BY created_at DESC")
                .fetch_all(pool)
                .await?;

        Ok(vouchers)
    }

    /// Create a new voucher; the code must already be normalized
    pub async fn create(
        &self,
        code: &str,
        duration_days: i32,
        usage_limit: i32,
        expiry_date: DateTime<Utc>,
    ) -> AppResult<Voucher> {
        let pool = self.pool.as_ref();
        let voucher = sqlx::query_as::<_, Voucher>(
            r#"
            INSERT INTO vouchers (id, code, duration_days, usage_limit, used_count, expiry_date, active, created_at)
            VALUES ($1, $2, $3, $4, 0, $5, TRUE, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(code)
        .bind(duration_days)
        .bind(usage_limit)
        .bind(expiry_date)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict(format!("Voucher code {} already exists", code));
                }
            }
            AppError::from(e)
        })?;

        Ok(voucher)
    }

    /// Flip the administrator kill-switch
    pub async fn set_active(&self, voucher_id: Uuid, active: bool) -> AppResult<Option<Voucher>> {
        let pool = self.pool.as_ref();
        let voucher = sqlx::query_as::<_, Voucher>(
            r#"
            UPDATE vouchers
            SET active = $1
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(active)
        .bind(voucher_id)
        .fetch_optional(pool)
        .await?;

        Ok(voucher)
    }

    pub async fn delete(&self, voucher_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM vouchers WHERE id = $1")
            .bind(voucher_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
