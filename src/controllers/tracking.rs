use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::tracking::{
    CreateFoodLogRequest, CreateHealthLogRequest, DateRangeQuery, FoodDayQuery, FoodDayResponse,
    FoodLog, HealthLog, HealthLogsResponse, LogWeightRequest, TrackingService, WeightLog,
};
use crate::{error::AppResult, infrastructure::auth::AuthUser};

pub struct TrackingController {
    tracking_service: Arc<TrackingService>,
}

impl TrackingController {
    pub fn new(tracking_service: Arc<TrackingService>) -> Self {
        Self { tracking_service }
    }

    /// POST /api/food - Log a food entry
    pub async fn create_food(
        State(controller): State<Arc<TrackingController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<CreateFoodLogRequest>,
    ) -> AppResult<(StatusCode, Json<FoodLog>)> {
        let log = controller
            .tracking_service
            .log_food(auth_user.user_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(log)))
    }

    /// GET /api/food?date= - Entries and totals of one day
    pub async fn list_food(
        State(controller): State<Arc<TrackingController>>,
        Extension(auth_user): Extension<AuthUser>,
        Query(query): Query<FoodDayQuery>,
    ) -> AppResult<Json<FoodDayResponse>> {
        let day = controller
            .tracking_service
            .food_for_day(auth_user.user_id, query.date)
            .await?;
        Ok(Json(day))
    }

    /// DELETE /api/food/{id}
    pub async fn delete_food(
        State(controller): State<Arc<TrackingController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(log_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller
            .tracking_service
            .delete_food(auth_user.user_id, log_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// POST /api/weight - Record the day's weight
    pub async fn log_weight(
        State(controller): State<Arc<TrackingController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<LogWeightRequest>,
    ) -> AppResult<Json<WeightLog>> {
        let log = controller
            .tracking_service
            .log_weight(auth_user.user_id, request)
            .await?;
        Ok(Json(log))
    }

    /// GET /api/weight - Recent weight history
    pub async fn weight_history(
        State(controller): State<Arc<TrackingController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<Vec<WeightLog>>> {
        let logs = controller
            .tracking_service
            .weight_history(auth_user.user_id)
            .await?;
        Ok(Json(logs))
    }

    /// POST /api/health-logs
    pub async fn create_health_log(
        State(controller): State<Arc<TrackingController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<CreateHealthLogRequest>,
    ) -> AppResult<(StatusCode, Json<HealthLog>)> {
        let log = controller
            .tracking_service
            .log_health(auth_user.user_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(log)))
    }

    /// GET /api/health-logs?from=&to=
    pub async fn list_health_logs(
        State(controller): State<Arc<TrackingController>>,
        Extension(auth_user): Extension<AuthUser>,
        Query(range): Query<DateRangeQuery>,
    ) -> AppResult<Json<HealthLogsResponse>> {
        let entries = controller
            .tracking_service
            .health_logs(auth_user.user_id, range)
            .await?;
        Ok(Json(HealthLogsResponse { entries }))
    }
}
