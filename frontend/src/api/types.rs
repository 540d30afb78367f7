use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "employeeID")]
    pub employee_id: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
    #[serde(default)]
    pub department: String,
    #[serde(
        rename = "imageBase64",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_base64: Option<String>,
}

impl Employee {
    pub fn image_src(&self) -> Option<String> {
        self.image_base64
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(crate::utils::image::jpeg_data_url)
    }
}

/// Body for `POST /employees` and `PUT /employees/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    #[serde(rename = "employeeID")]
    pub employee_id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub department: String,
    #[serde(rename = "imageBase64", skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "present" => Ok(AttendanceStatus::Present),
            "late" => Ok(AttendanceStatus::Late),
            "absent" => Ok(AttendanceStatus::Absent),
            _ => Err(ApiError::validation(format!(
                "Unknown attendance status: {value}"
            ))),
        }
    }
}

/// Servers are not consistent about status casing.
impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|err: ApiError| serde::de::Error::custom(err.error))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "employeeID")]
    pub employee_id: String,
    #[serde(rename = "attenDate")]
    pub date: String,
    #[serde(rename = "checkInTime", default)]
    pub check_in_time: Option<String>,
    #[serde(rename = "empStatus")]
    pub status: AttendanceStatus,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(
        rename = "imageBase64",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_base64: Option<String>,
}

impl AttendanceRecord {
    pub fn image_src(&self) -> Option<String> {
        if let Some(url) = self.image_url.as_deref().filter(|url| !url.is_empty()) {
            return Some(url.to_string());
        }
        self.image_base64
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(crate::utils::image::jpeg_data_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAttendanceStatus {
    #[serde(rename = "empStatus")]
    pub status: AttendanceStatus,
    #[serde(rename = "attenDate")]
    pub date: String,
}

/// Server-computed attendance aggregate for one day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub total_records: u32,
    #[serde(default)]
    pub present_count: u32,
    #[serde(default)]
    pub late_count: u32,
    #[serde(default)]
    pub absent_count: u32,
    #[serde(default)]
    pub attendance_rate: Option<f64>,
    #[serde(default)]
    pub late_rate: Option<f64>,
    #[serde(default)]
    pub absent_rate: Option<f64>,
    #[serde(default)]
    pub average_check_in_time: Option<String>,
    #[serde(default)]
    pub earliest_check_in_time: Option<String>,
    #[serde(default)]
    pub latest_check_in_time: Option<String>,
    #[serde(default)]
    pub peak_hour: Option<Value>,
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn parse_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "PARSE_ERROR".to_string(),
            details: None,
        }
    }

    /// Builds an error for a non-success response. A JSON body carrying
    /// `error`/`message` keeps the server's wording and code.
    pub fn from_status(status: u16, reason: Option<&str>, body: &str) -> Self {
        let fallback_code = format!("HTTP_{status}");
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            let message = map
                .get("error")
                .or_else(|| map.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string);
            if let Some(message) = message {
                let code = map
                    .get("code")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or(fallback_code);
                return Self {
                    error: message,
                    code,
                    details: map.get("details").cloned(),
                };
            }
        }
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!(
                "Request failed with status {status}{}",
                reason.map(|r| format!(" ({r})")).unwrap_or_default()
            )
        } else {
            trimmed.to_string()
        };
        Self {
            error: message,
            code: fallback_code,
            details: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }
}
