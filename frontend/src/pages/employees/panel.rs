use super::{
    components::{form::EmployeeForm, table::EmployeeTable},
    layout::EmployeesFrame,
    utils::EmployeeColumn,
    view_model::EmployeesViewModel,
};
use crate::{
    api::Employee,
    components::{
        confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage,
        layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
        modal::{ErrorDialog, Modal},
    },
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = EmployeesViewModel::new();
    let loading = vm.employees_resource.loading();
    let load_error = Signal::derive(move || {
        vm.employees_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| format!("Failed to load employees: {}", err))
    });
    let action_error = Signal::derive(move || vm.messages.get().error);
    let success = Signal::derive(move || vm.messages.get().success);
    let success_text = Signal::derive(move || success.get().unwrap_or_default());
    let load_error_text = Signal::derive(move || load_error.get().unwrap_or_default());
    let form_title = Signal::derive(move || vm.form.with(|form| form.title().to_string()));
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|employee| {
                format!(
                    "Delete {} ({})? This cannot be undone.",
                    employee.full_name, employee.employee_id
                )
            })
            .unwrap_or_default()
    });

    let on_add = Callback::new(move |_| vm.open_create());
    let on_sort = Callback::new(move |column: EmployeeColumn| vm.sort_by(column));
    let on_edit = Callback::new(move |employee: Employee| vm.open_edit(&employee));
    let on_delete = Callback::new(move |employee: Employee| vm.request_delete(employee));
    let on_submit = Callback::new(move |_| vm.submit());
    let on_close_form = Callback::new(move |_| vm.close_form());
    let on_confirm_delete = Callback::new(move |_| vm.confirm_delete());
    let on_cancel_delete = Callback::new(move |_| vm.cancel_delete());

    view! {
        <EmployeesFrame on_add=on_add>
            <Show when=move || success.get().is_some()>
                <SuccessMessage message=success_text />
            </Show>
            <InlineErrorMessage error=action_error />
            <Show when=move || load_error.get().is_some()>
                <ErrorMessage message=load_error_text />
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <EmployeeTable
                    employees=vm.sorted_employees
                    sort=vm.sort
                    on_sort=on_sort
                    on_edit=on_edit
                    on_delete=on_delete
                />
            </Show>
            <Modal
                is_open=Signal::derive(move || vm.form_open.get())
                title=form_title
                on_close=on_close_form
                wide=true
            >
                <EmployeeForm
                    form=vm.form
                    error=vm.form_error
                    pending=vm.save_action.pending()
                    on_submit=on_submit
                    on_cancel=on_close_form
                />
            </Modal>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete Employee"
                message=delete_message
                confirm_label="Delete"
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
                destructive=true
            />
            <ErrorDialog message=vm.error_dialog />
        </EmployeesFrame>
    }
}
