use crate::domain::report::HealthEntry;
use crate::domain::tracking::{CreateHealthLogRequest, HealthLog};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

// Listing and report share one range predicate and ordering
const RANGE_FILTER: &str = r#"
    WHERE user_id = $1
      AND ($2::date IS NULL OR date >= $2)
      AND ($3::date IS NULL OR date <= $3)
    ORDER BY date, created_at
"#;

fn range_query(columns: &str) -> String {
    format!("SELECT {} FROM health_logs {}", columns, RANGE_FILTER)
}

pub struct HealthLogRepository {
    pool: Arc<DbPool>,
}

impl HealthLogRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Append a health entry; the request must already be validated
    pub async fn create(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        entry: &CreateHealthLogRequest,
    ) -> AppResult<HealthLog> {
        let pool = self.pool.as_ref();
        let log = sqlx::query_as::<_, HealthLog>(
            r#"
            INSERT INTO health_logs (id, user_id, date, calories_burned, sleep_hours, spo2_avg, bpm_avg, steps, water_ml, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .bind(entry.calories_burned)
        .bind(entry.sleep_hours)
        .bind(entry.spo2_avg)
        .bind(entry.bpm_avg)
        .bind(entry.steps)
        .bind(entry.water_ml)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(log)
    }

    /// Latest entry of a given day
    pub async fn find_latest_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<HealthLog>> {
        let pool = self.pool.as_ref();
        let log = sqlx::query_as::<_, HealthLog>(
            r#"
            SELECT * FROM health_logs
            WHERE user_id = $1 AND date = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(log)
    }

    pub async fn find_in_range(
        &self,
        user_id: Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<Vec<HealthLog>> {
        let pool = self.pool.as_ref();
        let sql = range_query("*");
        let logs = sqlx::query_as::<_, HealthLog>(&sql)
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;

        Ok(logs)
    }

    /// Report input, ordered by date then insertion
    pub async fn report_entries(
        &self,
        user_id: Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<Vec<HealthEntry>> {
        let pool = self.pool.as_ref();
        let sql = range_query("date, calories_burned, sleep_hours, spo2_avg, steps, water_ml");
        let entries = sqlx::query_as::<_, HealthEntry>(&sql)
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}
