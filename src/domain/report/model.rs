use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

/// Food intake as seen by the reporter
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct FoodEntry {
    pub date: NaiveDate,
    pub calories: Option<Decimal>,
    pub protein: Option<Decimal>,
    pub carbs: Option<Decimal>,
    pub fat: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct HealthEntry {
    pub date: NaiveDate,
    pub calories_burned: Option<Decimal>,
    pub sleep_hours: Option<Decimal>,
    pub spo2_avg: Option<Decimal>,
    pub steps: Option<i32>,
    pub water_ml: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight: Decimal,
}

/// Day-over-day weight change against the most recent earlier weigh-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightChange {
    /// No weigh-in that day, or nothing earlier to compare against
    Unavailable,
    /// Percent change, scaled to two decimals
    Percent(Decimal),
}

impl std::fmt::Display for WeightChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightChange::Unavailable => write!(f, "unavailable"),
            WeightChange::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

impl Serialize for WeightChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the merged daily report
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub calories_taken: Decimal,
    pub calories_burned: Decimal,
    pub deficit: Decimal,
    pub weight_change_pct: WeightChange,
    pub sleep_hours: Decimal,
    pub spo2_avg: Option<Decimal>,
}

/// Response for GET /api/reports
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub rows: Vec<DailyReport>,
}
