use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::admin::{
    AdminService, AnalyticsResponse, CreateVoucherRequest, PlatformStats, SetPremiumRequest,
    SetSuspensionRequest, UpdateVoucherRequest,
};
use crate::domain::entitlement::Voucher;
use crate::domain::user::Profile;
use crate::{error::AppResult, infrastructure::auth::AuthUser};

pub struct AdminController {
    admin_service: Arc<AdminService>,
}

impl AdminController {
    pub fn new(admin_service: Arc<AdminService>) -> Self {
        Self { admin_service }
    }

    /// GET /api/admin/users
    pub async fn list_users(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<Vec<Profile>>> {
        let users = controller.admin_service.list_users().await?;
        Ok(Json(users))
    }

    /// POST /api/admin/users/{userId}/premium - Grant or revoke premium
    pub async fn set_premium(
        State(controller): State<Arc<AdminController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(user_id): Path<Uuid>,
        Json(request): Json<SetPremiumRequest>,
    ) -> AppResult<Json<Profile>> {
        let profile = controller
            .admin_service
            .set_premium(auth_user.user_id, user_id, request.active, request.duration_days)
            .await?;
        Ok(Json(profile))
    }

    /// POST /api/admin/users/{userId}/suspension
    pub async fn set_suspension(
        State(controller): State<Arc<AdminController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(user_id): Path<Uuid>,
        Json(request): Json<SetSuspensionRequest>,
    ) -> AppResult<Json<Profile>> {
        let profile = controller
            .admin_service
            .set_suspended(auth_user.user_id, user_id, request.suspended)
            .await?;
        Ok(Json(profile))
    }

    /// GET /api/admin/vouchers
    pub async fn list_vouchers(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<Vec<Voucher>>> {
        let vouchers = controller.admin_service.list_vouchers().await?;
        Ok(Json(vouchers))
    }

    /// POST /api/admin/vouchers
    pub async fn create_voucher(
        State(controller): State<Arc<AdminController>>,
        Json(request): Json<CreateVoucherRequest>,
    ) -> AppResult<(StatusCode, Json<Voucher>)> {
        let voucher = controller.admin_service.create_voucher(request).await?;
        Ok((StatusCode::CREATED, Json(voucher)))
    }

    /// PATCH /api/admin/vouchers/{id} - Kill-switch
    pub async fn update_voucher(
        State(controller): State<Arc<AdminController>>,
        Path(voucher_id): Path<Uuid>,
        Json(request): Json<UpdateVoucherRequest>,
    ) -> AppResult<Json<Voucher>> {
        let voucher = controller
            .admin_service
            .set_voucher_active(voucher_id, request.active)
            .await?;
        Ok(Json(voucher))
    }

    /// DELETE /api/admin/vouchers/{id}
    pub async fn delete_voucher(
        State(controller): State<Arc<AdminController>>,
        Path(voucher_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.admin_service.delete_voucher(voucher_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// GET /api/admin/stats
    pub async fn stats(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<PlatformStats>> {
        let stats = controller.admin_service.stats().await?;
        Ok(Json(stats))
    }

    /// GET /api/admin/analytics
    pub async fn analytics(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<AnalyticsResponse>> {
        let analytics = controller.admin_service.analytics().await?;
        Ok(Json(analytics))
    }
}
