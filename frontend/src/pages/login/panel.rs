use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    let email_input = Callback::new(move |value: String| vm.form.email.set(value));
    let password_input = Callback::new(move |value: String| vm.form.password.set(value));

    view! {
        <LoginForm
            email=vm.form.email.read_only()
            password=vm.form.password.read_only()
            error=vm.error.into()
            pending=pending.into()
            on_email_input=email_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
