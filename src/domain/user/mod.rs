pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{MeResponse, TodayDto, TodayFoodDto, TodayHealthDto, UpdateProfileRequest};
pub use error::UserServiceError;
pub use model::Profile;
pub use service::UserService;
