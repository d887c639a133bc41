use crate::domain::auth::Role;
use crate::domain::tracking::{FoodTotals, HealthLog};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::Profile;

/// Response for GET /api/me
#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub profile: Profile,
    pub role: Role,
    pub premium_active: bool,
    pub today: TodayDto,
    pub bmi: Option<Decimal>,
    pub weight_progress: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayDto {
    pub food: TodayFoodDto,
    pub health: Option<TodayHealthDto>,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TodayFoodDto {
    pub calories: Decimal,
    pub protein: Decimal,
}

impl From<&FoodTotals> for TodayFoodDto {
    fn from(totals: &FoodTotals) -> Self {
        Self {
            calories: totals.calories,
            protein: totals.protein,
        }
    }
}

/// Latest health entry of the day
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TodayHealthDto {
    pub calories_burned: Option<Decimal>,
    pub sleep_hours: Option<Decimal>,
    pub spo2_avg: Option<Decimal>,
    pub bpm_avg: Option<i32>,
    pub steps: Option<i32>,
    pub water_ml: Option<i32>,
}

impl From<HealthLog> for TodayHealthDto {
    fn from(log: HealthLog) -> Self {
        Self {
            calories_burned: log.calories_burned,
            sleep_hours: log.sleep_hours,
            spo2_avg: log.spo2_avg,
            bpm_avg: log.bpm_avg,
            steps: log.steps,
            water_ml: log.water_ml,
        }
    }
}

/// Request for PATCH /api/me
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub goal_weight: Option<Decimal>,
    #[serde(default)]
    pub height_cm: Option<Decimal>,
}
