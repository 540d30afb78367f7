use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Milliseconds since the Unix epoch. Naive values are read as UTC;
/// missing or unparseable values map to 0.
pub fn timestamp_millis(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return 0;
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.timestamp_millis();
    }
    parse_naive(raw)
        .map(|naive| naive.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Time of day for a check-in, shown in the browser's zone.
pub fn format_check_in(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return "N/A".into();
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format("%H:%M:%S").to_string();
    }
    parse_naive(raw)
        .map(|naive| naive.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "N/A".into())
}
