use crate::api::{AnalyticsSummary, ApiClient, ApiError};
use chrono::NaiveDate;
use std::rc::Rc;

#[derive(Clone)]
pub struct AnalyticsRepository {
    client: Rc<ApiClient>,
}

impl AnalyticsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_summary(&self, date: NaiveDate) -> Result<AnalyticsSummary, ApiError> {
        self.client.fetch_attendance_analytics(Some(date)).await
    }
}
