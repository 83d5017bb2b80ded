use crate::components::confirm_dialog::ConfirmDialog;
use leptos::*;
use web_sys::HtmlTextAreaElement;

#[component]
pub fn RejectReasonDialog(
    is_open: Signal<bool>,
    reason: RwSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ConfirmDialog
            is_open=is_open
            title="Reject request"
            message="Enter reason for rejection:"
            on_confirm=on_confirm
            on_cancel=on_cancel
            confirm_label="Reject"
            destructive=true
        >
            <textarea
                id="reject-reason-input"
                rows="3"
                class="w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm"
                prop:value=move || reason.get()
                on:input=move |ev| reason.set(event_target::<HtmlTextAreaElement>(&ev).value())
            ></textarea>
        </ConfirmDialog>
    }
}

#[component]
pub fn SessionExpiredDialog(is_open: Signal<bool>, on_leave: Callback<()>) -> impl IntoView {
    view! {
        <ConfirmDialog
            is_open=is_open
            title="Session expired"
            message="Your session has expired. Please log in again."
            on_confirm=on_leave
            on_cancel=on_leave
            confirm_label="Go to Login"
            cancel_label="Close"
        />
    }
}
