use super::{
    repository::EmployeesRepository,
    utils::{EmployeeColumn, EmployeeFormState, MessageState},
};
use crate::{
    api::{ApiClient, ApiError, Employee, EmployeePayload},
    utils::sort::{sorted_view, SortState},
};
use leptos::*;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
const SUCCESS_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(EmployeePayload),
    Update {
        employee_id: String,
        payload: EmployeePayload,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Create,
    Update,
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub reload: RwSignal<u32>,
    pub sort: RwSignal<Option<SortState<EmployeeColumn>>>,
    pub sorted_employees: Memo<Vec<Employee>>,
    pub form: RwSignal<EmployeeFormState>,
    pub form_open: RwSignal<bool>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub messages: RwSignal<MessageState>,
    pub error_dialog: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub save_action: Action<SaveRequest, (SaveKind, Result<Employee, ApiError>)>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = EmployeesRepository::new_with_client(Rc::new(api));

        let reload = create_rw_signal(0u32);
        let repo_for_list = repository.clone();
        let employees_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repo_for_list.clone();
                async move {
                    let result = repo.fetch_employees().await;
                    if let Err(err) = &result {
                        log::error!("Failed to load employees: {}", err);
                    }
                    result
                }
            },
        );

        let sort = create_rw_signal(None::<SortState<EmployeeColumn>>);
        let sorted_employees = create_memo(move |_| {
            let rows = employees_resource
                .get()
                .and_then(Result::ok)
                .unwrap_or_default();
            sorted_view(&rows, sort.get())
        });

        let form = create_rw_signal(EmployeeFormState::default());
        let form_open = create_rw_signal(false);
        let form_error = create_rw_signal(None::<ApiError>);
        let messages = create_rw_signal(MessageState::default());
        let error_dialog = create_rw_signal(None::<String>);
        let pending_delete = create_rw_signal(None::<Employee>);

        let repo_for_save = repository.clone();
        let save_action = create_action(move |request: &SaveRequest| {
            let repo = repo_for_save.clone();
            let request = request.clone();
            async move {
                let (kind, result) = match request {
                    SaveRequest::Create(payload) => {
                        (SaveKind::Create, repo.create_employee(payload).await)
                    }
                    SaveRequest::Update {
                        employee_id,
                        payload,
                    } => (
                        SaveKind::Update,
                        repo.update_employee(employee_id, payload).await,
                    ),
                };
                match &result {
                    Ok(employee) => {
                        log::info!("Saved employee {}", employee.employee_id);
                        form_open.set(false);
                        form.update(EmployeeFormState::reset);
                        messages.update(|state| {
                            state.set_success(match kind {
                                SaveKind::Create => "Employee added successfully.",
                                SaveKind::Update => "Employee updated successfully.",
                            })
                        });
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(err) => {
                        log::error!("Failed to save employee: {}", err);
                        match kind {
                            SaveKind::Create => {
                                error_dialog.set(Some(format!("Failed to add employee: {}", err)))
                            }
                            SaveKind::Update => form_error.set(Some(err.clone())),
                        }
                    }
                }
                (kind, result)
            }
        });

        let repo_for_delete = repository;
        let delete_action = create_action(move |employee_id: &String| {
            let repo = repo_for_delete.clone();
            let employee_id = employee_id.clone();
            async move {
                let result = repo.delete_employee(employee_id.clone()).await;
                match &result {
                    Ok(()) => {
                        log::info!("Deleted employee {}", employee_id);
                        messages
                            .update(|state| state.set_success("Employee deleted successfully."));
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(err) => {
                        log::error!("Failed to delete employee {}: {}", employee_id, err);
                        messages.update(|state| state.set_error(err.clone()));
                    }
                }
                result
            }
        });

        create_effect(move |_| {
            if let Some(message) = messages.with(|state| state.success.clone()) {
                dismiss_success_later(messages, message);
            }
        });

        Self {
            employees_resource,
            reload,
            sort,
            sorted_employees,
            form,
            form_open,
            form_error,
            messages,
            error_dialog,
            pending_delete,
            save_action,
            delete_action,
        }
    }

    pub fn open_create(&self) {
        self.form.set(EmployeeFormState::default());
        self.form_error.set(None);
        self.form_open.set(true);
    }

    pub fn open_edit(&self, employee: &Employee) {
        self.form.set(EmployeeFormState::for_edit(employee));
        self.form_error.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.form_error.set(None);
        self.form.update(EmployeeFormState::reset);
    }

    /// Validates the form; only a complete form reaches the network.
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        match current.to_payload() {
            Ok(payload) => {
                self.form_error.set(None);
                let request = match current.editing_id {
                    Some(employee_id) => SaveRequest::Update {
                        employee_id,
                        payload,
                    },
                    None => SaveRequest::Create(payload),
                };
                self.save_action.dispatch(request);
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }

    pub fn sort_by(&self, column: EmployeeColumn) {
        self.sort
            .update(|state| *state = Some(SortState::toggle(*state, column)));
    }

    pub fn request_delete(&self, employee: Employee) {
        self.messages.update(MessageState::clear);
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(employee.employee_id);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn dismiss_success_later(messages: RwSignal<MessageState>, message: String) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
        let _ = messages.try_update(|state| {
            if state.success.as_deref() == Some(message.as_str()) {
                state.success = None;
            }
        });
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn dismiss_success_later(_messages: RwSignal<MessageState>, _message: String) {}
