use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::pages::{analytics::AnalyticsPage, attendance::AttendancePage, employees::EmployeesPage};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/attendance", "/analytics"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=EmployeesPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/analytics" view=AnalyticsPage/>
            </Routes>
        </Router>
    }
}
