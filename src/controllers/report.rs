use axum::{
    extract::{Query, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::domain::report::{ReportResponse, ReportService};
use crate::domain::tracking::DateRangeQuery;
use crate::{error::AppResult, infrastructure::auth::AuthUser};

pub struct ReportController {
    report_service: Arc<ReportService>,
}

impl ReportController {
    pub fn new(report_service: Arc<ReportService>) -> Self {
        Self { report_service }
    }

    /// GET /api/reports?from=&to= - Merged daily report
    pub async fn get_report(
        State(controller): State<Arc<ReportController>>,
        Extension(auth_user): Extension<AuthUser>,
        Query(range): Query<DateRangeQuery>,
    ) -> AppResult<Json<ReportResponse>> {
        let rows = controller
            .report_service
            .build_for_user(auth_user.user_id, range)
            .await?;
        Ok(Json(ReportResponse {
            from: range.from,
            to: range.to,
            rows,
        }))
    }
}
