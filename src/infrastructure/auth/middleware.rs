use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Extension,
};
use std::sync::Arc;

use crate::domain::auth::{JwtManager, Role};
use crate::infrastructure::config::Config;
use crate::{error::AppError, infrastructure::repositories::ProfileRepository};
use uuid::Uuid;

/// Caller identity injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Authentication middleware
pub async fn auth_middleware(
    State((profile_repo, config)): State<(Arc<ProfileRepository>, Arc<Config>)>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let jwt_manager = JwtManager::new(config.jwt_secret.clone());
    let claims = jwt_manager.validate_token(token)?;
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid user ID in token".to_string()))?;

    // Every signed-up user has a profile
    let profile = profile_repo
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    if profile.suspended {
        tracing::warn!(user_id = %user_id, "Suspended user denied");
        return Err(AppError::Forbidden("Account suspended".to_string()));
    }

    let role = profile_repo.find_role(user_id).await?;

    request.extensions_mut().insert(AuthUser {
        user_id,
        email: claims.email,
        role,
    });

    Ok(next.run(request).await)
}

/// Admin guard; must run after `auth_middleware`
pub async fn require_admin(
    Extension(auth_user): Extension<AuthUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !auth_user.role.is_admin() {
        tracing::warn!(user_id = %auth_user.user_id, "Non-admin denied on admin route");
        return Err(AppError::Forbidden("Admin role required".to_string()));
    }

    Ok(next.run(request).await)
}
