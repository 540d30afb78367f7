use super::{
    editor::{AttendanceEditor, RowKey, RowMode, SaveStep},
    repository::AttendanceRepository,
    utils::{apply_committed, AttendanceColumn},
};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, AttendanceStatus},
    utils::sort::{sorted_view, SortState},
};
use leptos::*;
use std::{collections::HashMap, rc::Rc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub key: RowKey,
    pub status: AttendanceStatus,
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub records_resource: Resource<(), Result<Vec<AttendanceRecord>, ApiError>>,
    pub committed: RwSignal<HashMap<RowKey, AttendanceStatus>>,
    pub sort: RwSignal<Option<SortState<AttendanceColumn>>>,
    pub rows: Memo<Vec<AttendanceRecord>>,
    pub editor: RwSignal<AttendanceEditor>,
    pub save_error: RwSignal<Option<ApiError>>,
    pub save_action: Action<StatusUpdate, Result<(), ApiError>>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = AttendanceRepository::new_with_client(Rc::new(api));

        let committed = create_rw_signal(HashMap::<RowKey, AttendanceStatus>::new());
        let repo_for_list = repository.clone();
        let records_resource = create_resource(
            || (),
            move |_| {
                let repo = repo_for_list.clone();
                async move {
                    let result = repo.fetch_records().await;
                    match &result {
                        Ok(records) => log::debug!("Loaded {} attendance records", records.len()),
                        Err(err) => log::error!("Failed to load attendance records: {}", err),
                    }
                    result
                }
            },
        );

        let sort = create_rw_signal(None::<SortState<AttendanceColumn>>);
        let rows = create_memo(move |_| {
            let fetched = records_resource
                .get()
                .and_then(Result::ok)
                .unwrap_or_default();
            let merged = committed.with(|committed| apply_committed(fetched, committed));
            sorted_view(&merged, sort.get())
        });

        let editor = create_rw_signal(AttendanceEditor::default());
        let save_error = create_rw_signal(None::<ApiError>);

        let save_action = create_action(move |update: &StatusUpdate| {
            let repo = repository.clone();
            let StatusUpdate { key, status } = update.clone();
            async move {
                let result = repo
                    .update_status(key.employee_id.clone(), key.date.clone(), status)
                    .await;
                match &result {
                    Ok(()) => {
                        log::info!(
                            "Updated attendance for {} on {} to {}",
                            key.employee_id,
                            key.date,
                            status
                        );
                        committed.update(|committed| {
                            committed.insert(key.clone(), status);
                        });
                        editor.update(|editor| editor.complete_save(&key, true));
                    }
                    Err(err) => {
                        log::error!(
                            "Failed to update attendance for {} on {}: {}",
                            key.employee_id,
                            key.date,
                            err
                        );
                        editor.update(|editor| editor.complete_save(&key, false));
                        save_error.set(Some(err.clone()));
                    }
                }
                result
            }
        });

        Self {
            records_resource,
            committed,
            sort,
            rows,
            editor,
            save_error,
            save_action,
        }
    }

    pub fn sort_by(&self, column: AttendanceColumn) {
        self.sort
            .update(|state| *state = Some(SortState::toggle(*state, column)));
    }

    pub fn mode(&self, key: &RowKey) -> RowMode {
        self.editor.with(|editor| editor.mode(key))
    }

    pub fn begin_edit(&self, record: &AttendanceRecord) {
        self.save_error.set(None);
        self.editor.update(|editor| editor.begin_edit(record));
    }

    pub fn set_pending(&self, key: &RowKey, status: AttendanceStatus) {
        self.editor.update(|editor| editor.set_pending(key, status));
    }

    pub fn cancel(&self, key: &RowKey) {
        self.editor.update(|editor| editor.cancel(key));
    }

    /// Persists the row only when its pending status differs from the
    /// stored one.
    pub fn save(&self, record: &AttendanceRecord) {
        let step = self
            .editor
            .try_update(|editor| editor.prepare_save(record))
            .unwrap_or(SaveStep::NotEditing);
        if let SaveStep::Persist { key, status } = step {
            self.save_error.set(None);
            self.save_action.dispatch(StatusUpdate { key, status });
        }
    }
}
