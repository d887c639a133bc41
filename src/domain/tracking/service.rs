use super::dto::{CreateFoodLogRequest, CreateHealthLogRequest, DateRangeQuery, FoodDayResponse, LogWeightRequest};
use super::error::TrackingServiceError;
use super::model::{FoodLog, FoodTotals, HealthLog, WeightLog};
use crate::infrastructure::db::bounded;
use crate::infrastructure::repositories::{
    FoodLogRepository, HealthLogRepository, NewFoodLog, ProfileRepository, WeightLogRepository,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const MAX_FOOD_NAME_LENGTH: usize = 200;
const WEIGHT_HISTORY_LIMIT: i64 = 90;
// Largest values the NUMERIC(8,2) and NUMERIC(6,2) columns hold
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);
pub const MAX_WEIGHT: Decimal = Decimal::from_parts(999_999, 0, 0, false, 2);

pub struct TrackingService {
    food_repo: Arc<FoodLogRepository>,
    health_repo: Arc<HealthLogRepository>,
    weight_repo: Arc<WeightLogRepository>,
    profile_repo: Arc<ProfileRepository>,
    store_timeout: Duration,
}

impl TrackingService {
    pub fn new(
        food_repo: Arc<FoodLogRepository>,
        health_repo: Arc<HealthLogRepository>,
        weight_repo: Arc<WeightLogRepository>,
        profile_repo: Arc<ProfileRepository>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            food_repo,
            health_repo,
            weight_repo,
            profile_repo,
            store_timeout,
        }
    }

    pub async fn log_food(
        &self,
        user_id: Uuid,
        request: CreateFoodLogRequest,
    ) -> Result<FoodLog, TrackingServiceError> {
        let food_name = validate_food_log(&request)?;
        let date = request.date.unwrap_or_else(today);

        let entry = NewFoodLog {
            food_name,
            meal_type: request.meal_type,
            calories: request.calories,
            protein: request.protein,
            carbs: request.carbs,
            fat: request.fat,
            date,
        };

        let log = bounded(
            self.store_timeout,
            "create_food_log",
            self.food_repo.create(user_id, entry),
        )
        .await?;

        tracing::info!(
            user_id = %user_id,
            log_id = %log.id,
            meal_type = %log.meal_type,
            date = %log.date,
            "Food logged"
        );

        Ok(log)
    }

    /// Entries of one day (today by default), newest first, with totals
    pub async fn food_for_day(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<FoodDayResponse, TrackingServiceError> {
        let date = date.unwrap_or_else(today);
        let entries = bounded(
            self.store_timeout,
            "list_food_logs",
            self.food_repo.find_by_date(user_id, date),
        )
        .await?;
        let totals = FoodTotals::from_entries(&entries);

        Ok(FoodDayResponse {
            date,
            entries,
            totals,
        })
    }

    pub async fn delete_food(&self, user_id: Uuid, log_id: Uuid) -> Result<(), TrackingServiceError> {
        let deleted = bounded(
            self.store_timeout,
            "delete_food_log",
            self.food_repo.delete(user_id, log_id),
        )
        .await?;

        if !deleted {
            return Err(TrackingServiceError::NotFound);
        }

        tracing::info!(user_id = %user_id, log_id = %log_id, "Food log deleted");
        Ok(())
    }

    /// Record the day's weight and mirror it onto the profile
    pub async fn log_weight(
        &self,
        user_id: Uuid,
        request: LogWeightRequest,
    ) -> Result<WeightLog, TrackingServiceError> {
        validate_weight(request.weight)?;
        let date = request.date.unwrap_or_else(today);

        let log = bounded(
            self.store_timeout,
            "upsert_weight_log",
            self.weight_repo.upsert(user_id, date, request.weight),
        )
        .await?;

        bounded(
            self.store_timeout,
            "set_current_weight",
            self.profile_repo.set_current_weight(user_id, request.weight),
        )
        .await?;

        tracing::info!(user_id = %user_id, date = %date, "Weight logged");

        Ok(log)
    }

    pub async fn weight_history(&self, user_id: Uuid) -> Result<Vec<WeightLog>, TrackingServiceError> {
        let logs = bounded(
            self.store_timeout,
            "weight_history",
            self.weight_repo.history(user_id, WEIGHT_HISTORY_LIMIT),
        )
        .await?;

        Ok(logs)
    }

    pub async fn log_health(
        &self,
        user_id: Uuid,
        request: CreateHealthLogRequest,
    ) -> Result<HealthLog, TrackingServiceError> {
        validate_health_log(&request)?;
        let date = request.date.unwrap_or_else(today);

        let log = bounded(
            self.store_timeout,
            "create_health_log",
            self.health_repo.create(user_id, date, &request),
        )
        .await?;

        tracing::info!(user_id = %user_id, log_id = %log.id, date = %date, "Health metrics logged");

        Ok(log)
    }

    pub async fn health_logs(
        &self,
        user_id: Uuid,
        range: DateRangeQuery,
    ) -> Result<Vec<HealthLog>, TrackingServiceError> {
        validate_range(&range)?;

        let logs = bounded(
            self.store_timeout,
            "list_health_logs",
            self.health_repo.find_in_range(user_id, range.from, range.to),
        )
        .await?;

        Ok(logs)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn invalid(msg: impl Into<String>) -> TrackingServiceError {
    TrackingServiceError::Invalid(msg.into())
}

fn amount(field: &str, value: Option<Decimal>) -> Result<(), TrackingServiceError> {
    match value {
        Some(v) if v < Decimal::ZERO => {
            Err(invalid(format!("{} must not be negative", field)))
        }
        Some(v) if v > MAX_AMOUNT => {
            Err(invalid(format!("{} must be at most {}", field, MAX_AMOUNT)))
        }
        _ => Ok(()),
    }
}

/// Validate a food entry and return its trimmed name
fn validate_food_log(request: &CreateFoodLogRequest) -> Result<&str, TrackingServiceError> {
    let food_name = request.food_name.trim();
    if food_name.is_empty() {
        return Err(invalid("food_name is required"));
    }
    if food_name.chars().count() > MAX_FOOD_NAME_LENGTH {
        return Err(invalid(format!(
            "food_name must be at most {} characters",
            MAX_FOOD_NAME_LENGTH
        )));
    }

    amount("calories", request.calories)?;
    amount("protein", request.protein)?;
    amount("carbs", request.carbs)?;
    amount("fat", request.fat)?;

    Ok(food_name)
}

fn validate_weight(weight: Decimal) -> Result<(), TrackingServiceError> {
    if weight <= Decimal::ZERO {
        return Err(invalid("weight must be greater than zero"));
    }
    if weight > MAX_WEIGHT {
        return Err(invalid(format!("weight must be at most {}", MAX_WEIGHT)));
    }
    Ok(())
}

fn validate_health_log(request: &CreateHealthLogRequest) -> Result<(), TrackingServiceError> {
    amount("calories_burned", request.calories_burned)?;

    if let Some(sleep) = request.sleep_hours {
        if sleep < Decimal::ZERO || sleep > Decimal::from(24) {
            return Err(invalid("sleep_hours must be between 0 and 24"));
        }
    }
    if let Some(spo2) = request.spo2_avg {
        if spo2 < Decimal::ZERO || spo2 > Decimal::ONE_HUNDRED {
            return Err(invalid("spo2_avg must be between 0 and 100"));
        }
    }

    for (field, value) in [
        ("bpm_avg", request.bpm_avg),
        ("steps", request.steps),
        ("water_ml", request.water_ml),
    ] {
        if matches!(value, Some(v) if v < 0) {
            return Err(invalid(format!("{} must not be negative", field)));
        }
    }

    Ok(())
}

pub(crate) fn validate_range(range: &DateRangeQuery) -> Result<(), TrackingServiceError> {
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if from > to {
            return Err(invalid("from must not be after to"));
        }
    }
    Ok(())
}
