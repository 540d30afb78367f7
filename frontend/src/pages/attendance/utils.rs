use super::editor::RowKey;
use crate::{
    api::{AttendanceRecord, AttendanceStatus},
    utils::sort::{SortValue, SortableRow},
};
use std::collections::HashMap;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load attendance records.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceColumn {
    EmployeeId,
    Date,
    CheckIn,
    Status,
}

impl SortableRow for AttendanceRecord {
    type Column = AttendanceColumn;

    fn sort_value(&self, column: AttendanceColumn) -> SortValue<'_> {
        match column {
            AttendanceColumn::EmployeeId => SortValue::Text(&self.employee_id),
            AttendanceColumn::Date => SortValue::Timestamp(Some(self.date.as_str())),
            AttendanceColumn::CheckIn => SortValue::Timestamp(self.check_in_time.as_deref()),
            AttendanceColumn::Status => SortValue::Text(self.status.as_str()),
        }
    }
}

pub fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold bg-green-100 text-green-800"
        }
        AttendanceStatus::Late => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold bg-orange-100 text-orange-800"
        }
        AttendanceStatus::Absent => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold bg-red-100 text-red-800"
        }
    }
}

/// Overlays statuses saved during this session onto the fetched rows.
pub fn apply_committed(
    rows: Vec<AttendanceRecord>,
    committed: &HashMap<RowKey, AttendanceStatus>,
) -> Vec<AttendanceRecord> {
    if committed.is_empty() {
        return rows;
    }
    rows.into_iter()
        .map(|mut record| {
            if let Some(status) = committed.get(&RowKey::of(&record)) {
                record.status = *status;
            }
            record
        })
        .collect()
}
