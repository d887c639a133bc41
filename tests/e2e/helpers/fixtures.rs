use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use fittrack_backend::domain::entitlement::Voucher;
use fittrack_backend::domain::user::Profile;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// SQL fixtures written straight to the test database
pub struct TestFixtures {
    pool: PgPool,
}

#[allow(dead_code)]
impl TestFixtures {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_profile(&self, full_name: &str) -> Result<Profile> {
        self.insert_profile(Some(full_name), Utc::now()).await
    }

    pub async fn create_profile_created_at(
        &self,
        full_name: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Result<Profile> {
        self.insert_profile(full_name, created_at).await
    }

    async fn insert_profile(
        &self,
        full_name: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, user_id, full_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn create_admin(&self, full_name: &str) -> Result<Profile> {
        let profile = self.create_profile(full_name).await?;
        sqlx::query("INSERT INTO user_roles (id, user_id, role) VALUES ($1, $2, 'admin')")
            .bind(Uuid::new_v4())
            .bind(profile.user_id)
            .execute(&self.pool)
            .await?;
        Ok(profile)
    }

    pub async fn set_body(
        &self,
        user_id: Uuid,
        current_weight: Decimal,
        goal_weight: Decimal,
        height_cm: Decimal,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE profiles SET current_weight = $1, goal_weight = $2, height_cm = $3 WHERE user_id = $4",
        )
        .bind(current_weight)
        .bind(goal_weight)
        .bind(height_cm)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn set_suspended(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE profiles SET suspended = TRUE WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn find_profile(&self, user_id: Uuid) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(profile)
    }

    pub async fn create_voucher(
        &self,
        code: &str,
        duration_days: i32,
        usage_limit: i32,
        expires_in: Duration,
    ) -> Result<Voucher> {
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
        .bind(Utc::now() + expires_in)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(voucher)
    }

    pub async fn deactivate_voucher(&self, voucher_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE vouchers SET active = FALSE WHERE id = $1")
            .bind(voucher_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn find_voucher(&self, voucher_id: Uuid) -> Result<Voucher> {
        let voucher = sqlx::query_as::<_, Voucher>("SELECT * FROM vouchers WHERE id = $1")
            .bind(voucher_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(voucher)
    }

    pub async fn create_food_log(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        calories: Option<Decimal>,
    ) -> Result<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO food_logs (id, user_id, food_name, meal_type, calories, date, created_at)
            VALUES ($1, $2, 'Fixture meal', 'lunch', $3, $4, NOW())
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(calories)
        .bind(date)
        .execute(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn create_health_log(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        calories_burned: Option<Decimal>,
        sleep_hours: Option<Decimal>,
        spo2_avg: Option<Decimal>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO health_logs (id, user_id, date, calories_burned, sleep_hours, spo2_avg, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, clock_timestamp())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .bind(calories_burned)
        .bind(sleep_hours)
        .bind(spo2_avg)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn create_weight_log(&self, user_id: Uuid, date: NaiveDate, weight: Decimal) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO weight_logs (id, user_id, date, weight, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .bind(weight)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
