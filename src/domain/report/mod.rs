pub mod builder;
pub mod error;
pub mod model;
pub mod service;

pub use builder::{build_report, build_report_from};
pub use error::ReportServiceError;
pub use model::{DailyReport, FoodEntry, HealthEntry, ReportResponse, WeightChange, WeightEntry};
pub use service::ReportService;
