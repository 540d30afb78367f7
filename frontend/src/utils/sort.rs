use std::cmp::Ordering;

use crate::utils::time::timestamp_millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortState<K> {
    /// Same key flips the direction, a new key starts ascending.
    pub fn toggle(current: Option<SortState<K>>, key: K) -> SortState<K> {
        match current {
            Some(state) if state.key == key => SortState {
                key,
                direction: state.direction.toggled(),
            },
            _ => SortState {
                key,
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn direction_for(current: Option<SortState<K>>, key: K) -> Option<SortDirection> {
        current
            .filter(|state| state.key == key)
            .map(|state| state.direction)
    }
}

/// Value a row exposes for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Timestamp(Option<&'a str>),
    Text(&'a str),
    Unsortable,
}

pub trait SortableRow {
    type Column: Copy + PartialEq;

    fn sort_value(&self, column: Self::Column) -> SortValue<'_>;
}

pub fn compare_values(left: &SortValue<'_>, right: &SortValue<'_>) -> Ordering {
    match (left, right) {
        (SortValue::Timestamp(a), SortValue::Timestamp(b)) => {
            timestamp_millis(*a).cmp(&timestamp_millis(*b))
        }
        (SortValue::Text(a), SortValue::Text(b)) => locale_compare(a, b),
        _ => Ordering::Equal,
    }
}

/// Returns an ordered copy of `rows`; the source slice is left untouched.
/// Ties keep their source order in both directions.
pub fn sorted_view<T>(rows: &[T], sort: Option<SortState<T::Column>>) -> Vec<T>
where
    T: SortableRow + Clone,
{
    let mut view = rows.to_vec();
    let Some(SortState { key, direction }) = sort else {
        return view;
    };
    view.sort_by(|a, b| {
        let left = a.sort_value(key);
        let right = b.sort_value(key);
        match direction {
            SortDirection::Ascending => compare_values(&left, &right),
            SortDirection::Descending => compare_values(&right, &left),
        }
    });
    view
}

#[cfg(target_arch = "wasm32")]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let result = js_sys::JsString::from(a).locale_compare(
        b,
        &js_sys::Array::new(),
        &js_sys::Object::new(),
    );
    result.cmp(&0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn browser_locale_compare_orders_names() {
        assert_eq!(locale_compare("alice", "Bob"), Ordering::Less);
        assert_eq!(locale_compare("Bob", "alice"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }
}
