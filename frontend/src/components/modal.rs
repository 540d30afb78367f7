use leptos::ev::KeyboardEvent;
use leptos::*;

/// Centered dialog with a backdrop. Escape, the backdrop and the header
/// close button all call `on_close`.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let panel_class = if wide {
        "relative z-[61] w-full max-w-2xl rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
    } else {
        "relative z-[61] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
    };
    let title_text = Signal::derive(move || title.get());
    let children = store_value(children);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <div
                    class="fixed inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></div>
                <div
                    class=panel_class
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

/// Blocking notice for failures that should not be missed.
#[component]
pub fn ErrorDialog(message: RwSignal<Option<String>>) -> impl IntoView {
    let is_open = Signal::derive(move || message.with(Option::is_some));
    let on_close = Callback::new(move |_| message.set(None));
    view! {
        <Modal is_open=is_open title="Error" on_close=on_close>
            <p class="text-sm text-status-error-text">
                {move || message.get().unwrap_or_default()}
            </p>
            <div class="flex justify-end">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| message.set(None)
                >
                    {"OK"}
                </button>
            </div>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_title_and_children_when_open() {
        let html = render_to_string(move || {
            view! {
                <Modal
                    is_open=Signal::derive(|| true)
                    title="Add Employee"
                    on_close=Callback::new(|_| {})
                >
                    <p>"modal body"</p>
                </Modal>
            }
        });
        assert!(html.contains("Add Employee"));
        assert!(html.contains("modal body"));
        assert!(html.contains("role=\"dialog\""));
    }

    #[test]
    fn error_dialog_follows_message_signal() {
        let html = render_to_string(move || {
            let message = create_rw_signal(Some("Failed to add employee.".to_string()));
            view! { <ErrorDialog message=message /> }
        });
        assert!(html.contains("Failed to add employee."));

        let html = render_to_string(move || {
            let message = create_rw_signal(None::<String>);
            view! { <ErrorDialog message=message /> }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
