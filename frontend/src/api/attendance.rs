use chrono::NaiveDate;
use serde_json::Value;

use super::{
    client::{encode_segment, ApiClient},
    types::{
        AnalyticsSummary, ApiError, AttendanceRecord, AttendanceStatus, UpdateAttendanceStatus,
    },
};

impl ApiClient {
    /// Rows that do not parse are logged and skipped; only a body that is
    /// not a list fails the call.
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/attendance").await;
        let response = self.send(self.http_client().get(url)).await?;
        let rows: Vec<Value> = Self::parse_json(response).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<AttendanceRecord>(row) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("Skipping attendance record: {}", err);
                    None
                }
            })
            .collect())
    }

    /// Persists a status change for one (employee, date) row. A success body
    /// that is not a record is still a success.
    pub async fn update_attendance_status(
        &self,
        employee_id: &str,
        date: &str,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>, ApiError> {
        let url = self
            .endpoint(&format!("/attendance/{}", encode_segment(employee_id)))
            .await;
        let body = UpdateAttendanceStatus {
            status,
            date: date.to_string(),
        };
        let response = self.send(self.http_client().put(url).json(&body)).await?;
        Self::parse_optional_json(response).await
    }

    pub async fn fetch_attendance_analytics(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<AnalyticsSummary, ApiError> {
        let url = self.endpoint("/attendance/analytics").await;
        let mut request = self.http_client().get(url);
        if let Some(date) = date {
            request = request.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }
        let response = self.send(request).await?;
        Self::parse_json(response).await
    }
}
