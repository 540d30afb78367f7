use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, Employee, EmployeePayload},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    /// Creates an employee. The image, if any, must already be base64 encoded.
    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees").await;
        let response = self
            .send(self.http_client().post(url).json(payload))
            .await?;
        let created: Option<Employee> = Self::parse_optional_json(response).await?;
        Ok(created.unwrap_or_else(|| echo_employee(payload)))
    }

    pub async fn update_employee(
        &self,
        employee_id: &str,
        payload: &EmployeePayload,
    ) -> Result<Employee, ApiError> {
        let url = self
            .endpoint(&format!("/employees/{}", encode_segment(employee_id)))
            .await;
        let response = self
            .send(self.http_client().put(url).json(payload))
            .await?;
        let updated: Option<Employee> = Self::parse_optional_json(response).await?;
        Ok(updated.unwrap_or_else(|| echo_employee(payload)))
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/employees/{}", encode_segment(employee_id)))
            .await;
        let response = self.send(self.http_client().delete(url)).await?;
        Self::ensure_success(response).await.map(|_| ())
    }
}

fn echo_employee(payload: &EmployeePayload) -> Employee {
    Employee {
        employee_id: payload.employee_id.clone(),
        full_name: payload.full_name.clone(),
        email: payload.email.clone(),
        phone_number: payload.phone_number.clone(),
        department: payload.department.clone(),
        image_base64: payload.image_base64.clone(),
    }
}
