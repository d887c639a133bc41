use crate::domain::auth::Role;
use crate::domain::user::Profile;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

pub struct ProfileRepository {
    pool: Arc<DbPool>,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Find the profile owned by a user
    pub async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let pool = self.pool.as_ref();
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(profile)
    }

    /// Resolve the caller's role; users without a role row are plain users
    pub async fn find_role(&self, user_id: Uuid) -> AppResult<Role> {
        let pool = self.pool.as_ref();
        let is_admin = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM user_roles
                WHERE user_id = $1 AND role = 'admin'
            )
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(if is_admin { Role::Admin } else { Role::User })
    }

    /// All profiles, newest first
    pub async fn list_all(&self) -> AppResult<Vec<Profile>> {
        let pool = self.pool.as_ref();
        let profiles =
            sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY created_at DESC")
                .fetch_all(pool)
                .await?;

        Ok(profiles)
    }

    /// Update self-service profile fields, keeping the ones not provided
    pub async fn update_details(
        &self,
        user_id: Uuid,
        full_name: Option<&str>,
        goal_weight: Option<Decimal>,
        height_cm: Option<Decimal>,
    ) -> AppResult<Option<Profile>> {
        let pool = self.pool.as_ref();
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET full_name = COALESCE($1, full_name),
                goal_weight = COALESCE($2, goal_weight),
                height_cm = COALESCE($3, height_cm),
                updated_at = $4
            WHERE user_id = $5
            RETURNING *
            "#,
        )
        .bind(full_name)
        .bind(goal_weight)
        .bind(height_cm)
        .bind(Utc::now())
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    /// Mirror the latest logged weight onto the profile
    pub async fn set_current_weight(&self, user_id: Uuid, weight: Decimal) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            UPDATE profiles
            SET current_weight = $1, updated_at = $2
            WHERE user_id = $3
            "#,
        )
        .bind(weight)
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Overwrite premium flag and expiry together
    pub async fn set_premium(
        &self,
        user_id: Uuid,
        is_premium: bool,
        premium_expiry: Option<DateTime<Utc>>,
    ) -> AppResult<Option<Profile>> {
        let pool = self.pool.as_ref();
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET is_premium = $1, premium_expiry = $2, updated_at = $3
            WHERE user_id = $4
            RETURNING *
            "#,
        )
        .bind(is_premium)
        .bind(premium_expiry)
        .bind(Utc::now())
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    pub async fn set_suspended(&self, user_id: Uuid, suspended: bool) -> AppResult<Option<Profile>> {
        let pool = self.pool.as_ref();
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET suspended = $1, updated_at = $2
            WHERE user_id = $3
            RETURNING *
            "#,
        )
        .bind(suspended)
        .bind(Utc::now())
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }
}
