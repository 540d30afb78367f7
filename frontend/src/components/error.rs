use crate::api::ApiError;
use leptos::*;

/// Field messages carried in `details.errors` of a validation error.
pub fn validation_messages(error: &ApiError) -> Vec<String> {
    if !error.is_validation() {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn shows_code(error: &ApiError) -> bool {
    !error.code.is_empty() && error.code != "UNKNOWN" && !error.is_validation()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
                role="alert"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            let messages = validation_messages(&e);
                            if !messages.is_empty() {
                                view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {messages
                                            .into_iter()
                                            .map(|message| view! { <li>{message}</li> })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_view()
                            } else if shows_code(&e) {
                                view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> }
                                    .into_view()
                            } else {
                                ().into_view()
                            }
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_messages_ignore_other_codes() {
        let error = ApiError {
            error: "Bad".into(),
            code: "HTTP_400".into(),
            details: Some(json!({ "errors": ["ignored"] })),
        };
        assert!(validation_messages(&error).is_empty());
        assert!(shows_code(&error));
        assert!(!shows_code(&ApiError::unknown("boom")));
    }
}
