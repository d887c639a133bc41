pub mod error;
pub mod model;
pub mod service;

pub use error::NutritionServiceError;
pub use model::{EstimateNutritionRequest, NutritionEstimate};
pub use service::{NutritionService, NutritionServiceApi};
