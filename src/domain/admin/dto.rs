use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Response for GET /api/admin/stats
#[derive(Debug, Serialize, Deserialize, FromRow, PartialEq)]
pub struct PlatformStats {
    pub total_users: i64,
    pub premium_users: i64,
    pub active_vouchers: i64,
    pub total_food_logs: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, PartialEq)]
pub struct DailySignups {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, PartialEq)]
pub struct TopUser {
    pub user_id: Uuid,
    pub name: String,
    pub logs: i64,
}

/// Response for GET /api/admin/analytics
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub daily_signups: Vec<DailySignups>,
    pub top_users: Vec<TopUser>,
}

/// Request for POST /api/admin/vouchers
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateVoucherRequest {
    pub code: String,
    pub duration_days: i32,
    pub usage_limit: i32,
    pub expires_in_days: i32,
}

/// Request for PATCH /api/admin/vouchers/:id
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateVoucherRequest {
    pub active: bool,
}

/// Request for POST /api/admin/users/:userId/premium
#[derive(Debug, Serialize, Deserialize)]
pub struct SetPremiumRequest {
    pub active: bool,
    #[serde(default)]
    pub duration_days: Option<u32>,
}

/// Request for POST /api/admin/users/:userId/suspension
#[derive(Debug, Serialize, Deserialize)]
pub struct SetSuspensionRequest {
    pub suspended: bool,
}
