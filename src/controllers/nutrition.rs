use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::domain::nutrition::{EstimateNutritionRequest, NutritionEstimate, NutritionServiceApi};
use crate::{error::AppResult, infrastructure::auth::AuthUser};

pub struct NutritionController {
    nutrition_service: Arc<dyn NutritionServiceApi>,
}

impl NutritionController {
    pub fn new(nutrition_service: Arc<dyn NutritionServiceApi>) -> Self {
        Self { nutrition_service }
    }

    /// POST /api/nutrition/estimate - AI nutrition estimate for a food name
    pub async fn estimate(
        State(controller): State<Arc<NutritionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<EstimateNutritionRequest>,
    ) -> AppResult<Json<NutritionEstimate>> {
        tracing::debug!(user_id = %auth_user.user_id, "Nutrition estimate requested");
        let estimate = controller
            .nutrition_service
            .estimate(&request.food_name)
            .await?;
        Ok(Json(estimate))
    }
}
