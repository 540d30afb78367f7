use crate::{
    api::{AttendanceRecord, AttendanceStatus},
    components::{
        empty_state::EmptyState,
        table::{SortableHeader, BODY_CELL_CLASS, HEADER_CELL_CLASS},
    },
    pages::attendance::{
        editor::{AttendanceEditor, RowKey, RowMode},
        utils::{status_badge_class, AttendanceColumn},
    },
    utils::{image::PLACEHOLDER_AVATAR, sort::SortState, time::format_check_in},
};
use leptos::*;
use std::str::FromStr;

#[derive(Clone, Copy)]
pub struct RowHandlers {
    pub on_edit: Callback<AttendanceRecord>,
    pub on_pending: Callback<(RowKey, AttendanceStatus)>,
    pub on_save: Callback<AttendanceRecord>,
    pub on_cancel: Callback<RowKey>,
}

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    view! { <span class=status_badge_class(status)>{status.as_str()}</span> }
}

#[component]
fn StatusCell(
    record: AttendanceRecord,
    editor: RwSignal<AttendanceEditor>,
    on_pending: Callback<(RowKey, AttendanceStatus)>,
) -> impl IntoView {
    let key = RowKey::of(&record);
    let mode_key = key.clone();
    let mode = Signal::derive(move || editor.with(|editor| editor.mode(&mode_key)));
    let pending_key = key.clone();
    let selected = Signal::derive(move || {
        editor
            .with(|editor| editor.pending(&pending_key))
            .unwrap_or(record.status)
    });
    let status = record.status;

    move || match mode.get() {
        RowMode::Viewing => view! { <StatusBadge status=status /> }.into_view(),
        RowMode::Editing | RowMode::Saving => {
            let key = key.clone();
            view! {
                <select
                    class="border border-border rounded px-2 py-1 text-sm"
                    aria-label="Attendance status"
                    disabled=move || mode.get() == RowMode::Saving
                    on:change=move |ev| {
                        if let Ok(status) = AttendanceStatus::from_str(&event_target_value(&ev)) {
                            on_pending.call((key.clone(), status));
                        }
                    }
                >
                    {AttendanceStatus::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.as_str()
                                    selected=move || selected.get() == option
                                >
                                    {option.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_view()
        }
    }
}

#[component]
fn RowActions(
    record: AttendanceRecord,
    editor: RwSignal<AttendanceEditor>,
    handlers: RowHandlers,
) -> impl IntoView {
    let key = RowKey::of(&record);
    let mode_key = key.clone();
    let mode = Signal::derive(move || editor.with(|editor| editor.mode(&mode_key)));

    move || {
        let record = record.clone();
        let key = key.clone();
        match mode.get() {
            RowMode::Viewing => view! {
                <button
                    type="button"
                    class="px-3 py-1 rounded text-sm bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| handlers.on_edit.call(record.clone())
                >
                    {"Edit"}
                </button>
            }
            .into_view(),
            RowMode::Editing | RowMode::Saving => {
                let saving = mode.get() == RowMode::Saving;
                view! {
                    <div class="flex gap-2">
                        <button
                            type="button"
                            class="px-3 py-1 rounded text-sm bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=saving
                            on:click=move |_| handlers.on_save.call(record.clone())
                        >
                            {if saving { "Saving..." } else { "Save" }}
                        </button>
                        <button
                            type="button"
                            class="px-3 py-1 rounded text-sm bg-surface-muted text-fg disabled:opacity-50"
                            disabled=saving
                            on:click=move |_| handlers.on_cancel.call(key.clone())
                        >
                            {"Cancel"}
                        </button>
                    </div>
                }
                .into_view()
            }
        }
    }
}

#[component]
pub fn AttendanceTable(
    #[prop(into)] rows: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] sort: Signal<Option<SortState<AttendanceColumn>>>,
    on_sort: Callback<AttendanceColumn>,
    editor: RwSignal<AttendanceEditor>,
    handlers: RowHandlers,
) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No attendance records found" /> }
        >
            <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                <table class="min-w-full divide-y divide-border">
                    <thead>
                        <tr>
                            <th class=HEADER_CELL_CLASS scope="col">{"Image"}</th>
                            <SortableHeader
                                column=AttendanceColumn::EmployeeId
                                label="Employee ID"
                                sort=sort
                                on_sort=on_sort
                            />
                            <SortableHeader column=AttendanceColumn::Date label="Date" sort=sort on_sort=on_sort/>
                            <SortableHeader
                                column=AttendanceColumn::CheckIn
                                label="Check-In Time"
                                sort=sort
                                on_sort=on_sort
                            />
                            <SortableHeader column=AttendanceColumn::Status label="Status" sort=sort on_sort=on_sort/>
                            <th class=HEADER_CELL_CLASS scope="col">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || rows.get()
                            key=|record| record.clone()
                            children=move |record: AttendanceRecord| {
                                let image = record
                                    .image_src()
                                    .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string());
                                view! {
                                    <tr class="hover:bg-surface-muted">
                                        <td class=BODY_CELL_CLASS>
                                            <img
                                                class="h-10 w-10 rounded object-cover"
                                                src=image
                                                alt=format!("Check-in of {}", record.employee_id)
                                            />
                                        </td>
                                        <td class=BODY_CELL_CLASS>{record.employee_id.clone()}</td>
                                        <td class=BODY_CELL_CLASS>{record.date.clone()}</td>
                                        <td class=BODY_CELL_CLASS>
                                            {format_check_in(record.check_in_time.as_deref())}
                                        </td>
                                        <td class=BODY_CELL_CLASS>
                                            <StatusCell
                                                record=record.clone()
                                                editor=editor
                                                on_pending=handlers.on_pending
                                            />
                                        </td>
                                        <td class=BODY_CELL_CLASS>
                                            <RowActions record=record editor=editor handlers=handlers />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
