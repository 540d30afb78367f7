use crate::{
    api::AnalyticsSummary,
    pages::analytics::utils::{format_optional, format_peak_hour, format_rate},
};
use leptos::*;

#[component]
fn SummaryCard(
    label: &'static str,
    value: String,
    #[prop(optional)] accent: &'static str,
) -> impl IntoView {
    let colour = if accent.is_empty() { "text-fg" } else { accent };
    let value_class = format!("mt-2 text-2xl font-semibold {}", colour);
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4">
            <p class="text-sm font-medium text-fg-muted">{label}</p>
            <p class=value_class>{value}</p>
        </div>
    }
}

#[component]
pub fn SummaryCards(summary: AnalyticsSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-4">
            <SummaryCard label="Total Records" value=summary.total_records.to_string() />
            <SummaryCard
                label="Present"
                value=summary.present_count.to_string()
                accent="text-green-700"
            />
            <SummaryCard label="Late" value=summary.late_count.to_string() accent="text-orange-700" />
            <SummaryCard label="Absent" value=summary.absent_count.to_string() accent="text-red-700" />
            <SummaryCard label="Attendance Rate" value=format_rate(summary.attendance_rate) />
            <SummaryCard
                label="Average Check-In Time"
                value=format_optional(summary.average_check_in_time.as_deref())
            />
            <SummaryCard
                label="Earliest Check-In"
                value=format_optional(summary.earliest_check_in_time.as_deref())
            />
            <SummaryCard
                label="Latest Check-In"
                value=format_optional(summary.latest_check_in_time.as_deref())
            />
            <SummaryCard label="Peak Hour" value=format_peak_hour(summary.peak_hour.as_ref()) />
        </div>
    }
}
