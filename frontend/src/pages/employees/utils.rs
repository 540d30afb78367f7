use crate::{
    api::{ApiError, Employee, EmployeePayload},
    utils::{
        image::{jpeg_data_url, EncodedImage, PLACEHOLDER_AVATAR},
        sort::{SortValue, SortableRow},
    },
};

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeColumn {
    Id,
    Name,
    Email,
    Phone,
    Department,
}

impl SortableRow for Employee {
    type Column = EmployeeColumn;

    fn sort_value(&self, column: EmployeeColumn) -> SortValue<'_> {
        match column {
            EmployeeColumn::Id => SortValue::Text(&self.employee_id),
            EmployeeColumn::Name => SortValue::Text(&self.full_name),
            EmployeeColumn::Email => SortValue::Text(&self.email),
            EmployeeColumn::Phone => SortValue::Text(&self.phone_number),
            EmployeeColumn::Department => SortValue::Text(&self.department),
        }
    }
}

pub fn avatar_src(employee: &Employee) -> String {
    employee
        .image_src()
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    /// Newly picked image; replaces the stored one on submit.
    pub image: Option<EncodedImage>,
    pub existing_image: Option<String>,
    /// Set when the form edits an existing record.
    pub editing_id: Option<String>,
}

impl EmployeeFormState {
    pub fn for_edit(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            department: employee.department.clone(),
            image: None,
            existing_image: employee.image_base64.clone().filter(|raw| !raw.is_empty()),
            editing_id: Some(employee.employee_id.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Employee"
        } else {
            "Add Employee"
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn preview_src(&self) -> Option<String> {
        self.image
            .as_ref()
            .map(EncodedImage::preview_src)
            .or_else(|| self.existing_image.as_deref().map(jpeg_data_url))
    }

    pub fn is_valid(&self) -> bool {
        [
            &self.employee_id,
            &self.full_name,
            &self.email,
            &self.phone_number,
            &self.department,
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }

    pub fn to_payload(&self) -> Result<EmployeePayload, ApiError> {
        if !self.is_valid() {
            return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        let employee_id = self
            .editing_id
            .clone()
            .unwrap_or_else(|| self.employee_id.trim().to_string());
        Ok(EmployeePayload {
            employee_id,
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            department: self.department.trim().to_string(),
            image_base64: self.image.as_ref().map(|image| image.base64.clone()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
        self.success = None;
    }
}
