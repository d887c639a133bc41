pub mod dto;
pub mod error;
pub mod service;

pub use dto::{
    AnalyticsResponse, CreateVoucherRequest, DailySignups, PlatformStats, SetPremiumRequest,
    SetSuspensionRequest, TopUser, UpdateVoucherRequest,
};
pub use error::AdminServiceError;
pub use service::AdminService;
