use super::dto::{MeResponse, TodayDto, TodayFoodDto, UpdateProfileRequest};
use super::error::UserServiceError;
use super::model::Profile;
use crate::domain::auth::Role;
use crate::domain::entitlement::is_entitlement_active;
use crate::domain::tracking::{FoodTotals, MAX_WEIGHT};
use crate::infrastructure::db::bounded;
use crate::infrastructure::repositories::{FoodLogRepository, HealthLogRepository, ProfileRepository};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const MAX_NAME_LENGTH: usize = 100;
const MAX_HEIGHT_CM: i64 = 300;

pub struct UserService {
    profile_repo: Arc<ProfileRepository>,
    food_repo: Arc<FoodLogRepository>,
    health_repo: Arc<HealthLogRepository>,
    store_timeout: Duration,
}

impl UserService {
    pub fn new(
        profile_repo: Arc<ProfileRepository>,
        food_repo: Arc<FoodLogRepository>,
        health_repo: Arc<HealthLogRepository>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            profile_repo,
            food_repo,
            health_repo,
            store_timeout,
        }
    }

    /// Profile plus today's dashboard figures
    pub async fn get_me(&self, user_id: Uuid, role: Role) -> Result<MeResponse, UserServiceError> {
        let now = Utc::now();
        let today = now.date_naive();

        let (profile, food, health) = tokio::try_join!(
            bounded(
                self.store_timeout,
                "find_profile",
                self.profile_repo.find_by_user_id(user_id),
            ),
            bounded(
                self.store_timeout,
                "today_food_logs",
                self.food_repo.find_by_date(user_id, today),
            ),
            bounded(
                self.store_timeout,
                "today_health_log",
                self.health_repo.find_latest_for_date(user_id, today),
            ),
        )?;

        let profile = profile.ok_or(UserServiceError::NotFound)?;
        let totals = FoodTotals::from_entries(&food);

        Ok(MeResponse {
            premium_active: is_entitlement_active(&profile, now),
            bmi: profile.bmi(),
            weight_progress: profile.weight_progress(),
            today: TodayDto {
                food: TodayFoodDto::from(&totals),
                health: health.map(Into::into),
            },
            profile,
            role,
        })
    }

    /// Update self-service fields; fields left out keep their value
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<Profile, UserServiceError> {
        let full_name = validate_update(&request)?;

        let profile = bounded(
            self.store_timeout,
            "update_profile",
            self.profile_repo.update_details(
                user_id,
                full_name,
                request.goal_weight,
                request.height_cm,
            ),
        )
        .await?
        .ok_or(UserServiceError::NotFound)?;

        tracing::info!(user_id = %user_id, "Profile updated");

        Ok(profile)
    }
}

/// Validate an update and return the trimmed name, if any
fn validate_update(request: &UpdateProfileRequest) -> Result<Option<&str>, UserServiceError> {
    let full_name = match request.full_name.as_deref().map(str::trim) {
        Some("") => {
            return Err(UserServiceError::Invalid(
                "full_name must not be empty".to_string(),
            ))
        }
        Some(name) if name.chars().count() > MAX_NAME_LENGTH => {
            return Err(UserServiceError::Invalid(format!(
                "full_name must be at most {} characters",
                MAX_NAME_LENGTH
            )))
        }
        other => other,
    };

    if matches!(request.goal_weight, Some(w) if w <= Decimal::ZERO) {
        return Err(UserServiceError::Invalid(
            "goal_weight must be greater than zero".to_string(),
        ));
    }
    if matches!(request.goal_weight, Some(w) if w > MAX_WEIGHT) {
        return Err(UserServiceError::Invalid(format!(
            "goal_weight must be at most {}",
            MAX_WEIGHT
        )));
    }
    if matches!(request.height_cm, Some(h) if h <= Decimal::ZERO || h > Decimal::from(MAX_HEIGHT_CM)) {
        return Err(UserServiceError::Invalid(format!(
            "height_cm must be between 0 and {}",
            MAX_HEIGHT_CM
        )));
    }

    Ok(full_name)
}
