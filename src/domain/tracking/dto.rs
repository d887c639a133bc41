use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::{FoodLog, FoodTotals, HealthLog, MealType};

/// Request for POST /api/food
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFoodLogRequest {
    pub food_name: String,
    pub meal_type: MealType,
    #[serde(default)]
    pub calories: Option<Decimal>,
    #[serde(default)]
    pub protein: Option<Decimal>,
    #[serde(default)]
    pub carbs: Option<Decimal>,
    #[serde(default)]
    pub fat: Option<Decimal>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Response for GET /api/food
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodDayResponse {
    pub date: NaiveDate,
    pub entries: Vec<FoodLog>,
    pub totals: FoodTotals,
}

/// Request for POST /api/weight
#[derive(Debug, Serialize, Deserialize)]
pub struct LogWeightRequest {
    pub weight: Decimal,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Request for POST /api/health-logs
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateHealthLogRequest {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub calories_burned: Option<Decimal>,
    #[serde(default)]
    pub sleep_hours: Option<Decimal>,
    #[serde(default)]
    pub spo2_avg: Option<Decimal>,
    #[serde(default)]
    pub bpm_avg: Option<i32>,
    #[serde(default)]
    pub steps: Option<i32>,
    #[serde(default)]
    pub water_ml: Option<i32>,
}

/// Query for GET /api/food
#[derive(Debug, Default, Deserialize)]
pub struct FoodDayQuery {
    pub date: Option<NaiveDate>,
}

/// Query for date-ranged listings
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthLogsResponse {
    pub entries: Vec<HealthLog>,
}
