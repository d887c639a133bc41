use crate::domain::report::FoodEntry;
use crate::domain::tracking::{FoodLog, MealType};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Fields of a new food entry
pub struct NewFoodLog<'a> {
    pub food_name: &'a str,
    pub meal_type: MealType,
    pub calories: Option<Decimal>,
    pub protein: Option<Decimal>,
    pub carbs: Option<Decimal>,
    pub fat: Option<Decimal>,
    pub date: NaiveDate,
}

pub struct FoodLogRepository {
    pool: Arc<DbPool>,
}

impl FoodLogRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, entry: NewFoodLog<'_>) -> AppResult<FoodLog> {
        let pool = self.pool.as_ref();
        let log = sqlx::query_as::<_, FoodLog>(
            r#"
            INSERT INTO food_logs (id, user_id, food_name, meal_type, calories, protein, carbs, fat, date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(entry.food_name)
        .bind(entry.meal_type)
        .bind(entry.calories)
        .bind(entry.protein)
        .bind(entry.carbs)
        .bind(entry.fat)
        .bind(entry.date)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(log)
    }

    /// Entries of one day, newest first
    pub async fn find_by_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<FoodLog>> {
        let pool = self.pool.as_ref();
        let logs = sqlx::query_as::<_, FoodLog>(
            r#"
            SELECT * FROM food_logs
            WHERE user_id = $1 AND date = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(logs)
    }

    /// Delete an entry owned by the user
    pub async fn delete(&self, user_id: Uuid, log_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM food_logs WHERE id = $1 AND user_id = $2")
            .bind(log_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Report input, ordered by date then insertion
    pub async fn report_entries(
        &self,
        user_id: Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<Vec<FoodEntry>> {
        let pool = self.pool.as_ref();
        let entries = sqlx::query_as::<_, FoodEntry>(
            r#"
            SELECT date, calories, protein, carbs, fat
            FROM food_logs
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date, created_at
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
