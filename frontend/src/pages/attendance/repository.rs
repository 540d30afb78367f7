use crate::api::{ApiClient, ApiError, AttendanceRecord, AttendanceStatus};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_records(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance().await
    }

    pub async fn update_status(
        &self,
        employee_id: String,
        date: String,
        status: AttendanceStatus,
    ) -> Result<(), ApiError> {
        self.client
            .update_attendance_status(&employee_id, &date, status)
            .await
            .map(|_| ())
    }
}
