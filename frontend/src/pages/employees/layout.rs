use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn EmployeesFrame(on_add: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <Layout title="Employees">
            <div class="space-y-6">
                <div class="flex flex-col gap-3 md:flex-row md:items-end md:justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">{"Employee Management"}</h1>
                        <p class="mt-1 text-sm text-fg-muted">
                            {"Add, edit and remove employee records. Click a column header to sort."}
                        </p>
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| on_add.call(())
                    >
                        {"Add Employee"}
                    </button>
                </div>
                {children()}
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn frame_renders_header_and_children() {
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            view! {
                <EmployeesFrame on_add=Callback::new(|_| {})>
                    <div>{"child"}</div>
                </EmployeesFrame>
            }
        });
        assert!(html.contains("Employee Management"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("child"));
    }
}
