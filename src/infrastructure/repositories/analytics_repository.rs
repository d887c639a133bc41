use crate::domain::admin::{DailySignups, PlatformStats, TopUser};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;

/// Read-only aggregates for the administration dashboard
pub struct AnalyticsRepository {
    pool: Arc<DbPool>,
}

impl AnalyticsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn platform_stats(&self) -> AppResult<PlatformStats> {
        let pool = self.pool.as_ref();
        let stats = sqlx::query_as::<_, PlatformStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM profiles) AS total_users,
                (SELECT COUNT(*) FROM profiles WHERE is_premium) AS premium_users,
                (SELECT COUNT(*) FROM vouchers WHERE active) AS active_vouchers,
                (SELECT COUNT(*) FROM food_logs) AS total_food_logs
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(stats)
    }

    /// New profiles per UTC calendar day, oldest day first
    pub async fn daily_signups(&self) -> AppResult<Vec<DailySignups>> {
        let pool = self.pool.as_ref();
        let rows = sqlx::query_as::<_, DailySignups>(
            r#"
            SELECT (created_at AT TIME ZONE 'UTC')::date AS date, COUNT(*) AS count
            FROM profiles
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Users with the most food entries
    pub async fn top_users(&self, limit: i64) -> AppResult<Vec<TopUser>> {
        let pool = self.pool.as_ref();
        let rows = sqlx::query_as::<_, TopUser>(
            r#"
            SELECT f.user_id, COALESCE(p.full_name, 'Unknown') AS name, COUNT(*) AS logs
            FROM food_logs f
            LEFT JOIN profiles p ON p.user_id = f.user_id
            GROUP BY f.user_id, p.full_name
            ORDER BY logs DESC, f.user_id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
