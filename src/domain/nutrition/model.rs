use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estimated nutrition facts for one serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEstimate {
    pub calories: Decimal,
    pub protein: Decimal,
    pub carbs: Decimal,
    pub fat: Decimal,
}

impl NutritionEstimate {
    /// Estimators occasionally return negative values; floor them at zero
    pub fn clamped(self) -> Self {
        Self {
            calories: self.calories.max(Decimal::ZERO),
            protein: self.protein.max(Decimal::ZERO),
            carbs: self.carbs.max(Decimal::ZERO),
            fat: self.fat.max(Decimal::ZERO),
        }
    }
}

/// Request for POST /api/nutrition/estimate
#[derive(Debug, Serialize, Deserialize)]
pub struct EstimateNutritionRequest {
    pub food_name: String,
}

/// Cache key for a food name
pub fn cache_key(food_name: &str) -> String {
    food_name.trim().to_lowercase()
}
