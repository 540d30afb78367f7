use crate::api::AnalyticsSummary;
use serde_json::Value;
use std::f64::consts::PI;

pub const NOT_AVAILABLE: &str = "N/A";

pub const PRESENT_COLOR: &str = "#16a34a";
pub const LATE_COLOR: &str = "#f97316";
pub const ABSENT_COLOR: &str = "#dc2626";

pub const PIE_CENTER: f64 = 100.0;
pub const PIE_RADIUS: f64 = 90.0;

pub const BAR_BASELINE: f64 = 180.0;
pub const BAR_MAX_HEIGHT: f64 = 160.0;
pub const BAR_WIDTH: f64 = 60.0;
pub const BAR_GAP: f64 = 30.0;

/// Server rates are shown as given, trimmed to two decimals.
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) if rate.is_finite() => format!("{}%", (rate * 100.0).round() / 100.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_optional(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_peak_hour(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => format_optional(Some(text)),
        Some(Value::Number(number)) => number
            .as_u64()
            .filter(|hour| *hour < 24)
            .map(|hour| format!("{:02}:00", hour))
            .unwrap_or_else(|| number.to_string()),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub count: u32,
    pub color: &'static str,
    pub path: String,
}

fn point_on_circle(angle: f64) -> (f64, f64) {
    (
        PIE_CENTER + PIE_RADIUS * angle.cos(),
        PIE_CENTER + PIE_RADIUS * angle.sin(),
    )
}

fn full_circle_path() -> String {
    format!(
        "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
        PIE_CENTER - PIE_RADIUS,
        PIE_CENTER,
        PIE_CENTER + PIE_RADIUS,
        PIE_CENTER,
        PIE_CENTER - PIE_RADIUS,
        PIE_CENTER,
        r = PIE_RADIUS
    )
}

/// Wedges for the present/late/absent distribution, clockwise from twelve
/// o'clock. Empty categories produce no wedge.
pub fn pie_slices(summary: &AnalyticsSummary) -> Vec<PieSlice> {
    let parts = [
        ("Present", summary.present_count, PRESENT_COLOR),
        ("Late", summary.late_count, LATE_COLOR),
        ("Absent", summary.absent_count, ABSENT_COLOR),
    ];
    let total: u32 = parts.iter().map(|(_, count, _)| *count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    parts
        .into_iter()
        .filter(|(_, count, _)| *count > 0)
        .map(|(label, count, color)| {
            let sweep = 2.0 * PI * f64::from(count) / f64::from(total);
            let path = if count == total {
                full_circle_path()
            } else {
                let (x1, y1) = point_on_circle(start);
                let (x2, y2) = point_on_circle(start + sweep);
                let large_arc = if sweep > PI { 1 } else { 0 };
                format!(
                    "M {c:.2} {c:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z",
                    c = PIE_CENTER,
                    r = PIE_RADIUS,
                )
            };
            start += sweep;
            PieSlice {
                label,
                count,
                color,
                path,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateBar {
    pub label: &'static str,
    pub rate: Option<f64>,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

pub fn rate_bars(summary: &AnalyticsSummary) -> Vec<RateBar> {
    [
        ("Attendance", summary.attendance_rate, PRESENT_COLOR),
        ("Late", summary.late_rate, LATE_COLOR),
        ("Absent", summary.absent_rate, ABSENT_COLOR),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (label, rate, color))| {
        let share = rate
            .filter(|rate| rate.is_finite())
            .unwrap_or(0.0)
            .clamp(0.0, 100.0)
            / 100.0;
        let height = share * BAR_MAX_HEIGHT;
        RateBar {
            label,
            rate,
            color,
            x: BAR_GAP + index as f64 * (BAR_WIDTH + BAR_GAP),
            y: BAR_BASELINE - height,
            height,
        }
    })
    .collect()
}
