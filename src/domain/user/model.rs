use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One profile per user. Created at signup by the identity provider hook.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub is_premium: bool,
    pub premium_expiry: Option<DateTime<Utc>>,
    pub suspended: bool,
    pub current_weight: Option<Decimal>,
    pub goal_weight: Option<Decimal>,
    pub height_cm: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Body mass index with one decimal, when weight and height are known
    pub fn bmi(&self) -> Option<Decimal> {
        let weight = self.current_weight?;
        let height_m = self.height_cm? / Decimal::ONE_HUNDRED;
        if weight.is_zero() || height_m.is_zero() {
            return None;
        }
        Some((weight / (height_m * height_m)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Progress towards the goal weight as a capped percentage
    pub fn weight_progress(&self) -> u32 {
        match (self.current_weight, self.goal_weight) {
            (Some(current), Some(goal)) if !current.is_zero() && !goal.is_zero() => {
                let pct = (goal / current * Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
                pct.to_u32().unwrap_or(0).min(100)
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
pub(crate) fn profile_fixture(user_id: Uuid) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        user_id,
        full_name: Some("Test User".to_string()),
        is_premium: false,
        premium_expiry: None,
        suspended: false,
        current_weight: None,
        goal_weight: None,
        height_cm: None,
        created_at: now,
        updated_at: now,
    }
}
