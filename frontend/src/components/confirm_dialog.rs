use leptos::ev::KeyboardEvent;
use leptos::*;

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
    /// Extra body content rendered under the message, e.g. a reason field.
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
    } else {
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
    };
    let header_class = if destructive {
        "flex items-start justify-between gap-3 -mx-6 -mt-6 px-6 py-4 rounded-t-lg bg-action-danger-bg text-action-danger-text"
    } else {
        "flex items-start justify-between gap-3"
    };

    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());
    let confirm_label_text = Signal::derive(move || label_or(confirm_label.get(), "OK"));
    let cancel_label_text = Signal::derive(move || label_or(cancel_label.get(), "Cancel"));

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <div class=header_class>
                        <h2 class="text-lg font-semibold">{move || title_text.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="opacity-75 hover:opacity-100"
                            on:click=move |_| on_cancel.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    <p class="text-sm text-fg-muted">{move || message_text.get()}</p>
                    {children.clone().map(|body| body())}
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_label_text.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_button_class
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_label_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_with_default_labels() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <ConfirmDialog
                    is_open=is_open
                    title="Session expired"
                    message="Your session has expired. Please log in again."
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Session expired"));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Please log in again."));
        assert!(html.contains("OK"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn confirm_dialog_renders_body_children() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <ConfirmDialog
                    is_open=is_open
                    title="Reject"
                    message="Enter reason for rejection:"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    confirm_label="Reject"
                    destructive=true
                >
                    <textarea id="reject-reason"></textarea>
                </ConfirmDialog>
            }
        });
        assert!(html.contains("reject-reason"));
        assert!(html.contains("Reject"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="t"
                    message="hidden-message"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("hidden-message"));
    }

    #[test]
    fn blank_labels_fall_back() {
        assert_eq!(label_or("  ".into(), "OK"), "OK");
        assert_eq!(label_or("Go to Login".into(), "OK"), "Go to Login");
    }
}
