use crate::api::{ApiError, AUTH_EXPIRED_CODE};
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let code = &e.code;
                    if code == AUTH_EXPIRED_CODE {
                        return view! {
                            <div class="text-sm">"Your session has expired. Please log in again."</div>
                        }.into_view();
                    }
                    if code == "VALIDATION_ERROR" {
                        if let Some(errors) = e
                            .details
                            .as_ref()
                            .and_then(|details| details.get("errors"))
                            .and_then(|v| v.as_array())
                        {
                            return view! {
                                <ul class="list-disc list-inside text-sm">
                                    {errors.iter().map(|err| {
                                        view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                    }).collect_view()}
                                </ul>
                            }.into_view();
                        }
                    }
                    if code != "UNKNOWN" && !code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Please fix the highlighted fields".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["Email is required", "Password is required"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Please fix the highlighted fields"));
        assert!(html.contains("Email is required"));
        assert!(html.contains("Password is required"));
    }

    #[test]
    fn inline_error_renders_code_when_present() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed("Network down")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Network down"));
        assert!(html.contains("Code: REQUEST_FAILED"));
    }

    #[test]
    fn inline_error_explains_expired_session() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::auth_expired(401)));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Auth error: 401"));
        assert!(html.contains("Please log in again."));
    }

    #[test]
    fn inline_error_is_empty_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
