use super::{
    components::table::{AttendanceTable, RowHandlers},
    editor::RowKey,
    layout::AttendanceFrame,
    utils::{AttendanceColumn, LOAD_ERROR_MESSAGE},
    view_model::AttendanceViewModel,
};
use crate::{
    api::{AttendanceRecord, AttendanceStatus},
    components::{
        error::InlineErrorMessage,
        layout::{ErrorMessage, LoadingSpinner},
    },
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = AttendanceViewModel::new();
    let loading = vm.records_resource.loading();
    let load_failed =
        Signal::derive(move || matches!(vm.records_resource.get(), Some(Err(_))));

    let handlers = RowHandlers {
        on_edit: Callback::new(move |record: AttendanceRecord| vm.begin_edit(&record)),
        on_pending: Callback::new(move |(key, status): (RowKey, AttendanceStatus)| {
            vm.set_pending(&key, status)
        }),
        on_save: Callback::new(move |record: AttendanceRecord| vm.save(&record)),
        on_cancel: Callback::new(move |key: RowKey| vm.cancel(&key)),
    };
    let on_sort = Callback::new(move |column: AttendanceColumn| vm.sort_by(column));

    view! {
        <AttendanceFrame>
            <InlineErrorMessage error=vm.save_error />
            <Show when=move || load_failed.get()>
                <ErrorMessage message=LOAD_ERROR_MESSAGE />
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <AttendanceTable
                    rows=vm.rows
                    sort=vm.sort
                    on_sort=on_sort
                    editor=vm.editor
                    handlers=handlers
                />
            </Show>
        </AttendanceFrame>
    }
}
