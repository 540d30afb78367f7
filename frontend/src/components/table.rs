use crate::utils::sort::{SortDirection, SortState};
use leptos::*;

pub const HEADER_CELL_CLASS: &str =
    "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
pub const BODY_CELL_CLASS: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
        None => "",
    }
}

pub fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    direction.map(SortDirection::aria_label).unwrap_or("none")
}

/// Column header that toggles the table's sort when clicked.
#[component]
pub fn SortableHeader<K>(
    column: K,
    label: &'static str,
    #[prop(into)] sort: Signal<Option<SortState<K>>>,
    on_sort: Callback<K>,
) -> impl IntoView
where
    K: Copy + PartialEq + 'static,
{
    let direction = Signal::derive(move || SortState::direction_for(sort.get(), column));

    view! {
        <th class=HEADER_CELL_CLASS scope="col" aria-sort=move || aria_sort(direction.get())>
            <button
                type="button"
                class="inline-flex items-center gap-1 uppercase tracking-wider hover:text-fg"
                on:click=move |_| on_sort.call(column)
            >
                <span>{label}</span>
                <span class="text-[10px]" aria-hidden="true">
                    {move || sort_indicator(direction.get())}
                </span>
            </button>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_and_aria_follow_direction() {
        assert_eq!(sort_indicator(None), "");
        assert_eq!(sort_indicator(Some(SortDirection::Ascending)), "▲");
        assert_eq!(aria_sort(Some(SortDirection::Descending)), "descending");
        assert_eq!(aria_sort(None), "none");
    }
}
