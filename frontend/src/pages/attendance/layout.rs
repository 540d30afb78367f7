use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AttendanceFrame(children: Children) -> impl IntoView {
    view! {
        <Layout title="Attendance">
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{"Attendance Management"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        {"Review daily check-ins and correct a record's status inline."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
