use crate::{
    api::ApiError, components::error::InlineErrorMessage,
    pages::employees::utils::EmployeeFormState, utils::image,
};
use leptos::{ev, *};
use wasm_bindgen::JsCast;

type Getter = fn(&EmployeeFormState) -> String;
type Setter = fn(&mut EmployeeFormState, String);

#[component]
fn TextField(
    form: RwSignal<EmployeeFormState>,
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    get: Getter,
    set: Setter,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                class="mt-1 w-full border border-border rounded px-2 py-1 disabled:opacity-60"
                disabled=move || disabled.get()
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| set(state, value));
                }
            />
        </div>
    }
}

#[component]
pub fn EmployeeForm(
    form: RwSignal<EmployeeFormState>,
    error: RwSignal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = Signal::derive(move || form.with(EmployeeFormState::is_editing));
    let preview = Signal::derive(move || form.with(EmployeeFormState::preview_src));

    let on_image_change = move |ev: ev::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };
        spawn_local(async move {
            match image::read_file(&file).await {
                Ok(encoded) => {
                    log::debug!("Encoded image {} ({})", encoded.file_name, encoded.mime_type);
                    form.update(|state| state.image = Some(encoded));
                }
                Err(err) => {
                    log::error!("Failed to read image: {}", err);
                    error.set(Some(err));
                }
            }
        });
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="space-y-4" on:submit=submit>
            <InlineErrorMessage error=error />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField
                    form=form
                    id="employee-id"
                    label="Employee ID"
                    get=|state| state.employee_id.clone()
                    set=|state, value| state.employee_id = value
                    disabled=editing
                />
                <TextField
                    form=form
                    id="employee-full-name"
                    label="Full Name"
                    get=|state| state.full_name.clone()
                    set=|state, value| state.full_name = value
                />
                <TextField
                    form=form
                    id="employee-email"
                    label="Email"
                    input_type="email"
                    get=|state| state.email.clone()
                    set=|state, value| state.email = value
                />
                <TextField
                    form=form
                    id="employee-phone"
                    label="Phone Number"
                    input_type="tel"
                    get=|state| state.phone_number.clone()
                    set=|state, value| state.phone_number = value
                />
                <TextField
                    form=form
                    id="employee-department"
                    label="Department"
                    get=|state| state.department.clone()
                    set=|state, value| state.department = value
                />
                <div>
                    <label for="employee-image" class="block text-sm font-medium text-fg">{"Image"}</label>
                    <input
                        id="employee-image"
                        type="file"
                        accept="image/*"
                        class="mt-1 w-full text-sm"
                        on:change=on_image_change
                    />
                </div>
            </div>
            {move || {
                preview
                    .get()
                    .map(|src| {
                        view! {
                            <img
                                class="h-24 w-24 rounded object-cover border border-border"
                                src=src
                                alt="Selected image preview"
                            />
                        }
                    })
            }}
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                    on:click=move |_| on_cancel.call(())
                >
                    {"Cancel"}
                </button>
                <button
                    type="submit"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || {
                        if pending.get() {
                            "Saving..."
                        } else if editing.get() {
                            "Update"
                        } else {
                            "Add"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn edit_form_uses_update_label() {
        let html = render_to_string(move || {
            let form = create_rw_signal(EmployeeFormState::for_edit(&employee("E5", "Ada")));
            let error = create_rw_signal(None);
            view! {
                <EmployeeForm
                    form=form
                    error=error
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Update"));
        assert!(html.contains("Employee ID"));
        assert!(!html.contains("Selected image preview"));
    }

    #[test]
    fn validation_error_is_shown_inline() {
        let html = render_to_string(move || {
            let form = create_rw_signal(EmployeeFormState::default());
            let error = create_rw_signal(Some(ApiError::validation("All fields are required.")));
            view! {
                <EmployeeForm
                    form=form
                    error=error
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("All fields are required."));
        assert!(!html.contains("Update"));
    }
}
