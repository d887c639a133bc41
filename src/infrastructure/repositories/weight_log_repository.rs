use crate::domain::report::WeightEntry;
use crate::domain::tracking::WeightLog;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

pub struct WeightLogRepository {
    pool: Arc<DbPool>,
}

impl WeightLogRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Record the weight for a day, replacing any earlier value of that day
    pub async fn upsert(&self, user_id: Uuid, date: NaiveDate, weight: Decimal) -> AppResult<WeightLog> {
        let pool = self.pool.as_ref();
        let log = sqlx::query_as::<_, WeightLog>(
            r#"
            INSERT INTO weight_logs (id, user_id, date, weight, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, date)
            DO UPDATE SET weight = EXCLUDED.weight
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .bind(weight)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(log)
    }

    /// Most recent `limit` entries, returned in ascending date order
    pub async fn history(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<WeightLog>> {
        let pool = self.pool.as_ref();
        let logs = sqlx::query_as::<_, WeightLog>(
            r#"
            SELECT * FROM (
                SELECT * FROM weight_logs
                WHERE user_id = $1
                ORDER BY date DESC
                LIMIT $2
            ) recent
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(logs)
    }

    /// Latest weight recorded strictly before `date`
    pub async fn latest_before(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<Decimal>> {
        let pool = self.pool.as_ref();
        let weight = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT weight
            FROM weight_logs
            WHERE user_id = $1 AND date < $2
            ORDER BY date DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(weight)
    }

    pub async fn report_entries(
        &self,
        user_id: Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<Vec<WeightEntry>> {
        let pool = self.pool.as_ref();
        let entries = sqlx::query_as::<_, WeightEntry>(
            r#"
            SELECT date, weight
            FROM weight_logs
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}
