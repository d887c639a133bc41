use super::builder::build_report_from;
use super::error::ReportServiceError;
use super::model::DailyReport;
use crate::domain::tracking::DateRangeQuery;
use crate::infrastructure::db::bounded;
use crate::infrastructure::repositories::{
    FoodLogRepository, HealthLogRepository, WeightLogRepository,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub struct ReportService {
    food_repo: Arc<FoodLogRepository>,
    health_repo: Arc<HealthLogRepository>,
    weight_repo: Arc<WeightLogRepository>,
    store_timeout: Duration,
}

impl ReportService {
    pub fn new(
        food_repo: Arc<FoodLogRepository>,
        health_repo: Arc<HealthLogRepository>,
        weight_repo: Arc<WeightLogRepository>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            food_repo,
            health_repo,
            weight_repo,
            store_timeout,
        }
    }

    /// Build the daily report for one user over an optional date range.
    ///
    /// The three sources are fetched concurrently; a failure of any one of
    /// them fails the whole report. A bounded range is seeded with the last
    /// weigh-in before `from` so weight changes match the unbounded report.
    pub async fn build_for_user(
        &self,
        user_id: Uuid,
        range: DateRangeQuery,
    ) -> Result<Vec<DailyReport>, ReportServiceError> {
        if let (Some(from), Some(to)) = (range.from, range.to) {
            if from > to {
                return Err(ReportServiceError::Invalid(
                    "from must not be after to".to_string(),
                ));
            }
        }

        let weight_seed = async {
            match range.from {
                Some(from) => self.weight_repo.latest_before(user_id, from).await,
                None => Ok(None),
            }
        };

        let (food, health, weight, initial_weight) = tokio::try_join!(
            bounded(
                self.store_timeout,
                "food_report_entries",
                self.food_repo.report_entries(user_id, range.from, range.to),
            ),
            bounded(
                self.store_timeout,
                "health_report_entries",
                self.health_repo.report_entries(user_id, range.from, range.to),
            ),
            bounded(
                self.store_timeout,
                "weight_report_entries",
                self.weight_repo.report_entries(user_id, range.from, range.to),
            ),
            bounded(self.store_timeout, "weight_report_seed", weight_seed),
        )?;

        let rows = build_report_from(initial_weight, &food, &health, &weight);

        tracing::info!(
            user_id = %user_id,
            food_entries = food.len(),
            health_entries = health.len(),
            weight_entries = weight.len(),
            rows = rows.len(),
            "Report built"
        );

        Ok(rows)
    }
}
