use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::domain::entitlement::{
    EntitlementServiceApi, PremiumStatus, RedeemVoucherRequest, RedeemVoucherResponse,
};
use crate::{error::AppResult, infrastructure::auth::AuthUser};

pub struct PremiumController {
    entitlement_service: Arc<dyn EntitlementServiceApi>,
}

impl PremiumController {
    pub fn new(entitlement_service: Arc<dyn EntitlementServiceApi>) -> Self {
        Self {
            entitlement_service,
        }
    }

    /// POST /api/premium/redeem - Redeem a voucher code
    pub async fn redeem(
        State(controller): State<Arc<PremiumController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<RedeemVoucherRequest>,
    ) -> AppResult<Json<RedeemVoucherResponse>> {
        let premium_expiry = controller
            .entitlement_service
            .redeem_voucher(auth_user.user_id, &request.code)
            .await?;
        Ok(Json(RedeemVoucherResponse { premium_expiry }))
    }

    /// GET /api/premium - Current entitlement
    pub async fn status(
        State(controller): State<Arc<PremiumController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<PremiumStatus>> {
        let status = controller
            .entitlement_service
            .premium_status(auth_user.user_id)
            .await?;
        Ok(Json(status))
    }
}
