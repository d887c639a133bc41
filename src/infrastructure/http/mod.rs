use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    admin::AdminController, health, nutrition::NutritionController, premium::PremiumController,
    report::ReportController, tracking::TrackingController, user::UserController,
};
use crate::domain::{
    admin::AdminService, entitlement::EntitlementService, nutrition::NutritionService,
    report::ReportService, tracking::TrackingService, user::UserService,
};
use crate::infrastructure::auth::{auth_middleware, request_id_middleware, require_admin};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::repositories::{
    AnalyticsRepository, EntitlementRepository, FoodLogRepository, HealthLogRepository,
    NutritionRepository, ProfileRepository, VoucherRepository, WeightLogRepository,
};

/// Wire repositories, services and controllers into the application router
pub fn build_app(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    estimator: Arc<dyn NutritionRepository>,
) -> Router {
    let store_timeout = config.store_timeout();

    // 1. Repositories
    tracing::info!("Instantiating repositories...");
    let profile_repo = Arc::new(ProfileRepository::new(pool.clone()));
    let voucher_repo = Arc::new(VoucherRepository::new(pool.clone()));
    let food_repo = Arc::new(FoodLogRepository::new(pool.clone()));
    let health_repo = Arc::new(HealthLogRepository::new(pool.clone()));
    let weight_repo = Arc::new(WeightLogRepository::new(pool.clone()));
    let analytics_repo = Arc::new(AnalyticsRepository::new(pool.clone()));
    let entitlement_repo = Arc::new(EntitlementRepository::new(
        pool.clone(),
        profile_repo.clone(),
        voucher_repo.clone(),
    ));

    // 2. Services
    tracing::info!("Instantiating services...");
    let entitlement_service = Arc::new(EntitlementService::new(
        entitlement_repo,
        store_timeout,
        config.default_premium_days,
    ));
    let admin_service = Arc::new(AdminService::new(
        profile_repo.clone(),
        voucher_repo,
        analytics_repo,
        entitlement_service.clone(),
        store_timeout,
    ));
    let tracking_service = Arc::new(TrackingService::new(
        food_repo.clone(),
        health_repo.clone(),
        weight_repo.clone(),
        profile_repo.clone(),
        store_timeout,
    ));
    let report_service = Arc::new(ReportService::new(
        food_repo.clone(),
        health_repo.clone(),
        weight_repo,
        store_timeout,
    ));
    let user_service = Arc::new(UserService::new(
        profile_repo.clone(),
        food_repo,
        health_repo,
        store_timeout,
    ));
    let nutrition_service = Arc::new(NutritionService::new(
        estimator,
        config.nutrition_timeout(),
        config.nutrition_cache_enabled,
    ));

    // 3. Controllers
    tracing::info!("Instantiating controllers...");
    let premium_controller = Arc::new(PremiumController::new(entitlement_service));
    let admin_controller = Arc::new(AdminController::new(admin_service));
    let tracking_controller = Arc::new(TrackingController::new(tracking_service));
    let report_controller = Arc::new(ReportController::new(report_service));
    let user_controller = Arc::new(UserController::new(user_service));
    let nutrition_controller = Arc::new(NutritionController::new(nutrition_service));

    let auth_state = (profile_repo, config);

    // Premium routes (require authentication)
    let premium_routes = Router::new()
        .route("/api/premium", get(PremiumController::status))
        .route("/api/premium/redeem", post(PremiumController::redeem))
        .with_state(premium_controller)
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // User routes (require authentication)
    let user_routes = Router::new()
        .route(
            "/api/me",
            get(UserController::get_me).patch(UserController::update_me),
        )
        .with_state(user_controller)
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // Tracking routes (require authentication)
    let tracking_routes = Router::new()
        .route(
            "/api/food",
            get(TrackingController::list_food).post(TrackingController::create_food),
        )
        .route(
            "/api/food/:id",
            axum::routing::delete(TrackingController::delete_food),
        )
        .route(
            "/api/weight",
            get(TrackingController::weight_history).post(TrackingController::log_weight),
        )
        .route(
            "/api/health-logs",
            get(TrackingController::list_health_logs).post(TrackingController::create_health_log),
        )
        .with_state(tracking_controller)
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // Report routes (require authentication)
    let report_routes = Router::new()
        .route("/api/reports", get(ReportController::get_report))
        .with_state(report_controller)
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // Nutrition routes (require authentication)
    let nutrition_routes = Router::new()
        .route("/api/nutrition/estimate", post(NutritionController::estimate))
        .with_state(nutrition_controller)
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // Admin routes (require authentication and the admin role)
    let admin_routes = Router::new()
        .route("/api/admin/users", get(AdminController::list_users))
        .route(
            "/api/admin/users/:userId/premium",
            post(AdminController::set_premium),
        )
        .route(
            "/api/admin/users/:userId/suspension",
            post(AdminController::set_suspension),
        )
        .route(
            "/api/admin/vouchers",
            get(AdminController::list_vouchers).post(AdminController::create_voucher),
        )
        .route(
            "/api/admin/vouchers/:id",
            axum::routing::patch(AdminController::update_voucher)
                .delete(AdminController::delete_voucher),
        )
        .route("/api/admin/stats", get(AdminController::stats))
        .route("/api/admin/analytics", get(AdminController::analytics))
        .with_state(admin_controller)
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(premium_routes)
        .merge(user_routes)
        .merge(tracking_routes)
        .merge(report_routes)
        .merge(nutrition_routes)
        .merge(admin_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    estimator: Arc<dyn NutritionRepository>,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.host, config.port);
    let app = build_app(pool, config, estimator);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
