#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use chrono::NaiveDate;
use serde_json::json;

fn employee_json(id: &str) -> serde_json::Value {
    json!({
        "employeeID": id,
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "phoneNumber": "555-0100",
        "department": "Engineering"
    })
}

fn attendance_json(id: &str, date: &str, status: &str) -> serde_json::Value {
    json!({
        "employeeID": id,
        "attenDate": date,
        "checkInTime": format!("{date}T09:00:00Z"),
        "empStatus": status
    })
}

fn payload(id: &str) -> EmployeePayload {
    EmployeePayload {
        employee_id: id.into(),
        full_name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        phone_number: "555-0100".into(),
        department: "Engineering".into(),
        image_base64: Some("QUJD".into()),
    }
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/test"))
}

#[tokio::test]
async fn employee_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/test/employees");
        then.status(200)
            .json_body(json!([employee_json("E1"), employee_json("E2")]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/test/employees");
        then.status(201).json_body(employee_json("E3"));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/test/employees/E3");
        then.status(200).json_body(employee_json("E3"));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/test/employees/E3");
        then.status(204).body("");
    });

    let client = api_client(&server);
    let employees = client.list_employees().await.expect("list");
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].employee_id, "E2");

    let created = client.create_employee(&payload("E3")).await.expect("create");
    assert_eq!(created.employee_id, "E3");

    let updated = client
        .update_employee("E3", &payload("E3"))
        .await
        .expect("update");
    assert_eq!(updated.full_name, "Ada Lovelace");

    client.delete_employee("E3").await.expect("delete");
    assert_eq!(server.hits(DELETE, "/test/employees/E3"), 1);
}

#[tokio::test]
async fn create_employee_sends_base64_image_in_json_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/test/employees");
        then.status(200).body("");
    });

    let client = api_client(&server);
    let created = client.create_employee(&payload("E9")).await.expect("create");
    assert_eq!(created.employee_id, "E9");
    assert_eq!(created.image_base64.as_deref(), Some("QUJD"));

    let sent = server.received();
    assert_eq!(sent.len(), 1);
    let body = sent[0].body.clone().expect("json body");
    assert_eq!(body["employeeID"], json!("E9"));
    assert_eq!(body["imageBase64"], json!("QUJD"));
}

#[tokio::test]
async fn update_employee_encodes_identifier() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/test/employees/E%201");
        then.status(200).json_body(json!({ "message": "updated" }));
    });

    let client = api_client(&server);
    let updated = client
        .update_employee("E 1", &payload("E 1"))
        .await
        .expect("update");
    assert_eq!(updated.employee_id, "E 1");
}

#[tokio::test]
async fn attendance_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/test/attendance");
        then.status(200).json_body(json!([
            attendance_json("E1", "2024-01-02", "Present"),
            attendance_json("E1", "2024-01-01", "Late")
        ]));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/test/attendance/E1");
        then.status(200)
            .json_body(attendance_json("E1", "2024-01-01", "Absent"));
    });

    let client = api_client(&server);
    let records = client.list_attendance().await.expect("list");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].status, AttendanceStatus::Late);

    let updated = client
        .update_attendance_status("E1", "2024-01-01", AttendanceStatus::Absent)
        .await
        .expect("update");
    assert_eq!(updated.map(|r| r.status), Some(AttendanceStatus::Absent));

    let sent = server.received();
    let body = sent.last().and_then(|r| r.body.clone()).expect("body");
    assert_eq!(
        body,
        json!({ "empStatus": "Absent", "attenDate": "2024-01-01" })
    );
}

#[tokio::test]
async fn analytics_request_carries_date_query() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/test/attendance/analytics");
        then.status(200).json_body(json!({
            "date": "2024-01-01",
            "totalRecords": 10,
            "presentCount": 8,
            "lateCount": 1,
            "absentCount": 1,
            "attendanceRate": 80
        }));
    });

    let client = api_client(&server);
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let summary = client
        .fetch_attendance_analytics(Some(date))
        .await
        .expect("analytics");
    assert_eq!(summary.present_count, 8);
    assert_eq!(summary.attendance_rate, Some(80.0));

    let sent = server.received();
    assert_eq!(sent[0].query.as_deref(), Some("date=2024-01-01"));

    client
        .fetch_attendance_analytics(None)
        .await
        .expect("analytics without date");
    assert_eq!(server.received()[1].query, None);
}

#[tokio::test]
async fn server_errors_propagate_with_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/test/employees");
        then.status(500)
            .json_body(json!({ "error": "database unavailable", "code": "DB_DOWN" }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/test/employees/E1");
        then.status(404).body("Employee not found");
    });

    let client = api_client(&server);
    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err.error, "database unavailable");
    assert_eq!(err.code, "DB_DOWN");

    let err = client.delete_employee("E1").await.unwrap_err();
    assert_eq!(err.error, "Employee not found");
    assert_eq!(err.code, "HTTP_404");
}

#[tokio::test]
async fn unreadable_attendance_rows_are_skipped() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/test/attendance");
        then.status(200).json_body(json!([
            { "employeeID": "E1", "attenDate": "2024-01-01", "empStatus": "present" },
            { "employeeID": "E2", "attenDate": "2024-01-01", "empStatus": "Sick" },
            { "employeeID": "E3", "attenDate": "2024-01-01", "empStatus": "Absent" }
        ]));
    });

    let records = api_client(&server).list_attendance().await.expect("list");
    let ids: Vec<&str> = records.iter().map(|r| r.employee_id.as_str()).collect();
    assert_eq!(ids, ["E1", "E3"]);
    assert_eq!(records[0].status, AttendanceStatus::Present);
}

#[tokio::test]
async fn malformed_list_payload_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/test/attendance");
        then.status(200).json_body(json!({ "items": [] }));
    });

    let err = api_client(&server).list_attendance().await.unwrap_err();
    assert_eq!(err.code, "PARSE_ERROR");
}

#[tokio::test]
async fn unreachable_host_is_a_request_failure() {
    let client = ApiClient::new_with_base_url("http://unregistered-host/test");
    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}
