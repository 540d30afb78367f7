use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AnalyticsFrame(children: Children) -> impl IntoView {
    view! {
        <Layout title="Analytics">
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-fg">{"Attendance Analytics"}</h1>
                {children()}
            </div>
        </Layout>
    }
}
