use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "breakfast"),
            MealType::Lunch => write!(f, "lunch"),
            MealType::Dinner => write!(f, "dinner"),
            MealType::Snack => write!(f, "snack"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub meal_type: MealType,
    pub calories: Option<Decimal>,
    pub protein: Option<Decimal>,
    pub carbs: Option<Decimal>,
    pub fat: Option<Decimal>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HealthLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub calories_burned: Option<Decimal>,
    pub sleep_hours: Option<Decimal>,
    pub spo2_avg: Option<Decimal>,
    pub bpm_avg: Option<i32>,
    pub steps: Option<i32>,
    pub water_ml: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// At most one per (user, date); later writes replace the value
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeightLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Summed macros over a set of food entries
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodTotals {
    pub calories: Decimal,
    pub protein: Decimal,
    pub carbs: Decimal,
    pub fat: Decimal,
}

impl FoodTotals {
    pub fn from_entries(entries: &[FoodLog]) -> Self {
        entries.iter().fold(Self::default(), |acc, entry| Self {
            calories: acc.calories + entry.calories.unwrap_or_default(),
            protein: acc.protein + entry.protein.unwrap_or_default(),
            carbs: acc.carbs + entry.carbs.unwrap_or_default(),
            fat: acc.fat + entry.fat.unwrap_or_default(),
        })
    }
}
