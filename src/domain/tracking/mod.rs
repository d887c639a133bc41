pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{
    CreateFoodLogRequest, CreateHealthLogRequest, DateRangeQuery, FoodDayQuery, FoodDayResponse,
    HealthLogsResponse, LogWeightRequest,
};
pub use error::TrackingServiceError;
pub use model::{FoodLog, FoodTotals, HealthLog, MealType, WeightLog};
pub use service::{TrackingService, MAX_WEIGHT};
