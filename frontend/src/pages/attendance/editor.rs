//! Per-row edit state for the attendance table.
//!
//! A row is identified by `(employee id, date)`. The mode map and the
//! pending-status map always agree: a row has a pending status exactly
//! while it is `Editing` or `Saving`.

use crate::api::{AttendanceRecord, AttendanceStatus};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub employee_id: String,
    pub date: String,
}

impl RowKey {
    pub fn of(record: &AttendanceRecord) -> Self {
        Self {
            employee_id: record.employee_id.clone(),
            date: record.date.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
    Saving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStep {
    /// The row was not in edit mode.
    NotEditing,
    /// Pending status equals the stored one; the row went back to viewing.
    NoChange,
    Persist {
        key: RowKey,
        status: AttendanceStatus,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceEditor {
    modes: HashMap<RowKey, RowMode>,
    pending: HashMap<RowKey, AttendanceStatus>,
}

impl AttendanceEditor {
    pub fn mode(&self, key: &RowKey) -> RowMode {
        self.modes.get(key).copied().unwrap_or_default()
    }

    pub fn pending(&self, key: &RowKey) -> Option<AttendanceStatus> {
        self.pending.get(key).copied()
    }

    pub fn active_rows(&self) -> usize {
        self.modes.len()
    }

    pub fn begin_edit(&mut self, record: &AttendanceRecord) {
        let key = RowKey::of(record);
        if self.mode(&key) != RowMode::Viewing {
            return;
        }
        self.pending.insert(key.clone(), record.status);
        self.modes.insert(key, RowMode::Editing);
    }

    pub fn set_pending(&mut self, key: &RowKey, status: AttendanceStatus) {
        if self.mode(key) == RowMode::Editing {
            self.pending.insert(key.clone(), status);
        }
    }

    pub fn cancel(&mut self, key: &RowKey) {
        if self.mode(key) == RowMode::Editing {
            self.finish(key);
        }
    }

    pub fn prepare_save(&mut self, record: &AttendanceRecord) -> SaveStep {
        let key = RowKey::of(record);
        if self.mode(&key) != RowMode::Editing {
            return SaveStep::NotEditing;
        }
        let status = self.pending(&key).unwrap_or(record.status);
        if status == record.status {
            self.finish(&key);
            return SaveStep::NoChange;
        }
        self.modes.insert(key.clone(), RowMode::Saving);
        SaveStep::Persist { key, status }
    }

    /// Success returns the row to viewing; failure puts it back into editing
    /// with the pending status kept for another attempt.
    pub fn complete_save(&mut self, key: &RowKey, succeeded: bool) {
        if self.mode(key) != RowMode::Saving {
            return;
        }
        if succeeded {
            self.finish(key);
        } else {
            self.modes.insert(key.clone(), RowMode::Editing);
        }
    }

    fn finish(&mut self, key: &RowKey) {
        self.modes.remove(key);
        self.pending.remove(key);
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.modes.len() == self.pending.len()
            && self.modes.keys().all(|key| self.pending.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::attendance;
    use AttendanceStatus::*;

    #[test]
    fn edit_on_one_row_leaves_others_alone() {
        let first = attendance("E1", "2024-01-01", Present);
        let second = attendance("E1", "2024-01-02", Late);
        let mut editor = AttendanceEditor::default();

        editor.begin_edit(&first);
        editor.begin_edit(&second);
        editor.set_pending(&RowKey::of(&second), Absent);
        editor.cancel(&RowKey::of(&first));

        assert_eq!(editor.mode(&RowKey::of(&first)), RowMode::Viewing);
        assert_eq!(editor.pending(&RowKey::of(&first)), None);
        assert_eq!(editor.mode(&RowKey::of(&second)), RowMode::Editing);
        assert_eq!(editor.pending(&RowKey::of(&second)), Some(Absent));
        assert!(editor.is_consistent());
    }

    #[test]
    fn same_employee_different_dates_are_distinct_rows() {
        let first = attendance("E1", "2024-01-01", Present);
        let mut editor = AttendanceEditor::default();
        editor.begin_edit(&first);
        let other = RowKey {
            employee_id: "E1".into(),
            date: "2024-01-02".into(),
        };
        assert_eq!(editor.mode(&other), RowMode::Viewing);
        editor.set_pending(&other, Absent);
        assert_eq!(editor.pending(&other), None);
    }

    #[test]
    fn unchanged_save_behaves_like_cancel() {
        let record = attendance("E1", "2024-01-01", Present);
        let mut editor = AttendanceEditor::default();
        editor.begin_edit(&record);
        assert_eq!(editor.prepare_save(&record), SaveStep::NoChange);
        assert_eq!(editor.mode(&RowKey::of(&record)), RowMode::Viewing);
        assert_eq!(editor.active_rows(), 0);
    }

    #[test]
    fn changed_save_moves_through_saving() {
        let record = attendance("E1", "2024-01-01", Present);
        let key = RowKey::of(&record);
        let mut editor = AttendanceEditor::default();
        editor.begin_edit(&record);
        editor.set_pending(&key, Late);

        let step = editor.prepare_save(&record);
        assert_eq!(
            step,
            SaveStep::Persist {
                key: key.clone(),
                status: Late
            }
        );
        assert_eq!(editor.mode(&key), RowMode::Saving);
        editor.set_pending(&key, Absent);
        editor.cancel(&key);
        assert_eq!(editor.pending(&key), Some(Late));

        editor.complete_save(&key, true);
        assert_eq!(editor.mode(&key), RowMode::Viewing);
        assert!(editor.is_consistent());
    }

    #[test]
    fn failed_save_returns_to_editing_with_pending_value() {
        let record = attendance("E1", "2024-01-01", Present);
        let key = RowKey::of(&record);
        let mut editor = AttendanceEditor::default();
        editor.begin_edit(&record);
        editor.set_pending(&key, Absent);
        let _ = editor.prepare_save(&record);
        editor.complete_save(&key, false);
        assert_eq!(editor.mode(&key), RowMode::Editing);
        assert_eq!(editor.pending(&key), Some(Absent));
        assert!(editor.is_consistent());
    }

    #[test]
    fn save_without_edit_is_ignored() {
        let record = attendance("E1", "2024-01-01", Present);
        let mut editor = AttendanceEditor::default();
        assert_eq!(editor.prepare_save(&record), SaveStep::NotEditing);
        editor.complete_save(&RowKey::of(&record), true);
        assert_eq!(editor, AttendanceEditor::default());
    }
}
