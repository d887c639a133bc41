use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::domain::user::{MeResponse, Profile, UpdateProfileRequest, UserService};
use crate::{error::AppResult, infrastructure::auth::AuthUser};

pub struct UserController {
    user_service: Arc<UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// GET /api/me - Profile and today's dashboard
    pub async fn get_me(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<MeResponse>> {
        let response = controller
            .user_service
            .get_me(auth_user.user_id, auth_user.role)
            .await?;
        Ok(Json(response))
    }

    /// PATCH /api/me - Update profile details
    pub async fn update_me(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<UpdateProfileRequest>,
    ) -> AppResult<Json<Profile>> {
        let profile = controller
            .user_service
            .update_profile(auth_user.user_id, request)
            .await?;
        Ok(Json(profile))
    }
}
