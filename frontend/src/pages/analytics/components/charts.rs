use crate::{
    api::AnalyticsSummary,
    pages::analytics::utils::{
        format_rate, pie_slices, rate_bars, BAR_BASELINE, BAR_WIDTH, PIE_CENTER, PIE_RADIUS,
    },
};
use leptos::*;

const CHART_CARD_CLASS: &str = "bg-surface-elevated shadow rounded-lg p-4";

#[component]
pub fn DistributionPie(summary: AnalyticsSummary) -> impl IntoView {
    let slices = pie_slices(&summary);
    let empty = slices.is_empty();
    let legend = slices
        .iter()
        .map(|slice| {
            let swatch = format!("background-color: {}", slice.color);
            view! {
                <li class="flex items-center gap-2 text-sm text-fg">
                    <span class="inline-block h-3 w-3 rounded-sm" style=swatch></span>
                    {format!("{}: {}", slice.label, slice.count)}
                </li>
            }
        })
        .collect_view();
    let wedges = slices
        .into_iter()
        .map(|slice| {
            view! {
                <path d=slice.path fill=slice.color stroke="white" stroke-width="1">
                    <title>{format!("{}: {}", slice.label, slice.count)}</title>
                </path>
            }
        })
        .collect_view();

    view! {
        <div class=CHART_CARD_CLASS>
            <h2 class="text-lg font-semibold text-fg mb-2">{"Status Distribution"}</h2>
            {if empty {
                view! { <p class="text-sm text-fg-muted">{"No attendance recorded for this date."}</p> }
                    .into_view()
            } else {
                view! {
                    <div class="flex items-center gap-6">
                        <svg
                            viewBox=format!("0 0 {0} {0}", PIE_CENTER * 2.0)
                            class="h-48 w-48"
                            role="img"
                            aria-label="Attendance status distribution"
                        >
                            {wedges}
                        </svg>
                        <ul class="space-y-1">{legend}</ul>
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

#[component]
pub fn RateBars(summary: AnalyticsSummary) -> impl IntoView {
    let bars = rate_bars(&summary)
        .into_iter()
        .map(|bar| {
            let center = bar.x + BAR_WIDTH / 2.0;
            view! {
                <g>
                    <rect
                        x=format!("{:.1}", bar.x)
                        y=format!("{:.1}", bar.y)
                        width=format!("{:.1}", BAR_WIDTH)
                        height=format!("{:.1}", bar.height)
                        fill=bar.color
                    />
                    <text
                        x=format!("{:.1}", center)
                        y=format!("{:.1}", (bar.y - 6.0).max(12.0))
                        text-anchor="middle"
                        class="fill-current text-xs"
                    >
                        {format_rate(bar.rate)}
                    </text>
                    <text
                        x=format!("{:.1}", center)
                        y=format!("{:.1}", BAR_BASELINE + 16.0)
                        text-anchor="middle"
                        class="fill-current text-xs"
                    >
                        {bar.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class=CHART_CARD_CLASS>
            <h2 class="text-lg font-semibold text-fg mb-2">{"Rates"}</h2>
            <svg viewBox="0 0 300 200" class="h-48 w-full" role="img" aria-label="Attendance rates">
                <line
                    x1="0"
                    y1=format!("{:.1}", BAR_BASELINE)
                    x2="300"
                    y2=format!("{:.1}", BAR_BASELINE)
                    stroke="currentColor"
                    stroke-opacity="0.3"
                />
                {bars}
            </svg>
        </div>
    }
}
