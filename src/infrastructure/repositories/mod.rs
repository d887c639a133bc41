pub mod analytics_repository;
pub mod entitlement_repository;
pub mod food_log_repository;
pub mod gateway_nutrition_repository;
pub mod health_log_repository;
pub mod nutrition_repository;
pub mod profile_repository;
pub mod voucher_repository;
pub mod weight_log_repository;

pub use analytics_repository::AnalyticsRepository;
pub use entitlement_repository::EntitlementRepository;
pub use food_log_repository::{FoodLogRepository, NewFoodLog};
pub use gateway_nutrition_repository::GatewayNutritionRepository;
pub use health_log_repository::HealthLogRepository;
pub use nutrition_repository::{EstimatorError, NutritionRepository};
pub use profile_repository::ProfileRepository;
pub use voucher_repository::VoucherRepository;
pub use weight_log_repository::WeightLogRepository;
