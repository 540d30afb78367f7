use leptos::*;
use leptos_meta::Title;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/employees", "Employees"),
    ("/attendance", "Attendance"),
    ("/analytics", "Analytics"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">"Staffboard"</h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden md:flex space-x-4">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a
                                            href=*href
                                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        >
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                        <button
                            type="button"
                            class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d=move || {
                                        if menu_open.get() {
                                            "M6 18L18 6M6 6l12 12"
                                        } else {
                                            "M4 6h16M4 12h16M4 18h16"
                                        }
                                    }
                                />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="md:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a
                                            href=*href
                                            class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    let title = title
        .map(|title| format!("{title} | Staffboard"))
        .unwrap_or_else(|| "Staffboard".to_string());
    view! {
        <Title text=title/>
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status" aria-label="Loading">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
            role="alert"
        >
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{move || message.get()}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{move || message.get()}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_navigation() {
        let html = render_to_string(move || view! { <Header /> });
        assert!(html.contains("Staffboard"));
        for (href, label) in NAV_LINKS {
            assert!(html.contains(href));
            assert!(html.contains(label));
        }
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            view! { <Layout title="Employees"><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("<header"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn success_message_follows_its_signal() {
        let html = render_to_string(move || {
            let message = create_rw_signal("Employee added successfully.".to_string());
            let text = Signal::derive(move || message.get());
            message.set("Employee updated successfully.".to_string());
            view! { <SuccessMessage message=text /> }
        });
        assert!(html.contains("Employee updated successfully."));
        assert!(!html.contains("Employee added successfully."));
    }
}
