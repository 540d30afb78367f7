use super::{
    components::{
        cards::SummaryCards,
        charts::{DistributionPie, RateBars},
    },
    layout::AnalyticsFrame,
    view_model::AnalyticsViewModel,
};
use crate::{
    components::layout::{ErrorMessage, LoadingSpinner},
    utils::time::parse_date_input,
};
use leptos::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let vm = AnalyticsViewModel::new();
    let date_value = Signal::derive(move || vm.date.get().format("%Y-%m-%d").to_string());
    let error_text = Signal::derive(move || {
        vm.error
            .get()
            .map(|err| format!("Failed to load analytics: {}", err))
    });
    let error_message = Signal::derive(move || error_text.get().unwrap_or_default());

    view! {
        <AnalyticsFrame>
            <div class="flex items-center gap-3">
                <label for="analytics-date" class="text-sm font-medium text-fg">
                    {"Date"}
                </label>
                <input
                    id="analytics-date"
                    type="date"
                    class="border border-border rounded px-2 py-1 text-sm"
                    prop:value=date_value
                    on:change=move |ev| {
                        if let Some(date) = parse_date_input(&event_target_value(&ev)) {
                            vm.set_date(date);
                        }
                    }
                />
            </div>
            <Show when=move || error_text.with(Option::is_some)>
                <ErrorMessage message=error_message />
            </Show>
            {move || match vm.summary.get() {
                None if vm.error.with(Option::is_none) => view! { <LoadingSpinner /> }.into_view(),
                None => ().into_view(),
                Some(summary) => {
                    view! {
                        <div
                            class="space-y-6"
                            class:opacity-60=move || vm.loading.get()
                        >
                            <h2 class="text-lg font-semibold text-fg">
                                {format!("Attendance Analytics for {}", summary.date)}
                            </h2>
                            <SummaryCards summary=summary.clone() />
                            <div class="grid gap-6 md:grid-cols-2">
                                <DistributionPie summary=summary.clone() />
                                <RateBars summary=summary />
                            </div>
                        </div>
                    }
                    .into_view()
                }
            }}
        </AnalyticsFrame>
    }
}
