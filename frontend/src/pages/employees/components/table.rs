use crate::{
    api::Employee,
    components::{
        empty_state::EmptyState,
        table::{SortableHeader, BODY_CELL_CLASS, HEADER_CELL_CLASS},
    },
    pages::employees::utils::{avatar_src, EmployeeColumn},
    utils::sort::SortState,
};
use leptos::*;

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] sort: Signal<Option<SortState<EmployeeColumn>>>,
    on_sort: Callback<EmployeeColumn>,
    on_edit: Callback<Employee>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !employees.with(Vec::is_empty)
            fallback=|| {
                view! {
                    <EmptyState
                        title="No employees found"
                        description="Use \"Add Employee\" to create the first record."
                    />
                }
            }
        >
            <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                <table class="min-w-full divide-y divide-border">
                    <thead>
                        <tr>
                            <th class=HEADER_CELL_CLASS scope="col">{"Image"}</th>
                            <SortableHeader column=EmployeeColumn::Id label="ID" sort=sort on_sort=on_sort/>
                            <SortableHeader column=EmployeeColumn::Name label="Name" sort=sort on_sort=on_sort/>
                            <SortableHeader column=EmployeeColumn::Email label="Email" sort=sort on_sort=on_sort/>
                            <SortableHeader column=EmployeeColumn::Phone label="Phone" sort=sort on_sort=on_sort/>
                            <SortableHeader
                                column=EmployeeColumn::Department
                                label="Department"
                                sort=sort
                                on_sort=on_sort
                            />
                            <th class=HEADER_CELL_CLASS scope="col">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || employees.get()
                            key=|employee| employee.clone()
                            children=move |employee: Employee| {
                                let for_edit = employee.clone();
                                let for_delete = employee.clone();
                                view! {
                                    <tr class="hover:bg-surface-muted">
                                        <td class=BODY_CELL_CLASS>
                                            <img
                                                class="h-10 w-10 rounded-full object-cover"
                                                src=avatar_src(&employee)
                                                alt=format!("{} avatar", employee.full_name)
                                            />
                                        </td>
                                        <td class=BODY_CELL_CLASS>{employee.employee_id.clone()}</td>
                                        <td class=BODY_CELL_CLASS>{employee.full_name.clone()}</td>
                                        <td class=BODY_CELL_CLASS>{employee.email.clone()}</td>
                                        <td class=BODY_CELL_CLASS>{employee.phone_number.clone()}</td>
                                        <td class=BODY_CELL_CLASS>{employee.department.clone()}</td>
                                        <td class=BODY_CELL_CLASS>
                                            <div class="flex gap-2">
                                                <button
                                                    type="button"
                                                    class="px-3 py-1 rounded text-sm bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                                                    on:click=move |_| on_edit.call(for_edit.clone())
                                                >
                                                    {"Edit"}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="px-3 py-1 rounded text-sm bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                                                    on:click=move |_| on_delete.call(for_delete.clone())
                                                >
                                                    {"Delete"}
                                                </button>
                                            </div>
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
