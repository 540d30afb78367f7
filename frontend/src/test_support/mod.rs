#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};

    pub fn employee(id: &str, name: &str) -> Employee {
        Employee {
            employee_id: id.into(),
            full_name: name.into(),
            email: format!("{}@example.com", id.to_lowercase()),
            phone_number: "555-0100".into(),
            department: "Engineering".into(),
            image_base64: None,
        }
    }

    pub fn attendance(id: &str, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: id.into(),
            date: date.into(),
            check_in_time: Some(format!("{date}T09:00:00Z")),
            status,
            image_url: None,
            image_base64: None,
        }
    }
}
