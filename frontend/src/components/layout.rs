use crate::{components::theme::ThemeToggle, state::auth::{self, use_auth}};
use leptos::*;

const PUBLIC_LINKS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/advance-bot", "Advance Bot"),
    ("/traditional-bot", "Traditional Bot"),
];

const LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let is_authenticated = move || auth.get().is_authenticated;
    let logout = auth::use_logout();
    let on_logout = move |_| {
        set_menu_open.set(false);
        logout.call(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    let session_links = move |block: bool| {
        let class = if block {
            format!("block {}", LINK_CLASS)
        } else {
            LINK_CLASS.to_string()
        };
        view! {
            <Show
                when=is_authenticated
                fallback={
                    let class = class.clone();
                    move || view! { <a href="/login" class=class.clone()>"Admin Login"</a> }
                }
            >
                <a href="/dashboard" class=class.clone()>"Dashboard"</a>
                <button type="button" on:click=on_logout class=class.clone()>
                    "Logout"
                </button>
            </Show>
        }
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <a href="/" class="text-xl font-bold text-fg">"MOH"</a>
                    </div>
                    <div class="flex items-center gap-2">
                        <nav class="hidden lg:flex space-x-4 items-center">
                            {PUBLIC_LINKS
                                .iter()
                                .map(|(href, label)| view! { <a href=*href class=LINK_CLASS>{*label}</a> })
                                .collect_view()}
                            {session_links(false)}
                        </nav>
                        <ThemeToggle />
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <i class=move || if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }></i>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2" on:click=move |_| set_menu_open.set(false)>
                            {PUBLIC_LINKS
                                .iter()
                                .map(|(href, label)| {
                                    view! { <a href=*href class=format!("block {}", LINK_CLASS)>{*label}</a> }
                                })
                                .collect_view()}
                            {session_links(true)}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border bg-surface-elevated">
            <div class="max-w-7xl mx-auto px-4 py-4 flex flex-col sm:flex-row justify-between gap-2 text-sm text-fg-muted">
                <span>"© 2025 Unified System Solutions. All Rights Reserved."</span>
                <div class="flex gap-4">
                    <a href="/privacy-policy" class="hover:text-fg">"Privacy Policy"</a>
                    <a href="/terms-and-conditions" class="hover:text-fg">"Terms and Conditions"</a>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-surface">
            <Header/>
            <main class="flex-1 w-full max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_dashboard_and_logout_when_signed_in() {
        let html = render_to_string(move || {
            provide_auth(true);
            view! { <Header /> }
        });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Logout"));
        assert!(!html.contains("Admin Login"));
    }

    #[test]
    fn header_shows_login_link_when_signed_out() {
        let html = render_to_string(move || {
            provide_auth(false);
            view! { <Header /> }
        });
        assert!(html.contains("Admin Login"));
        assert!(html.contains("Advance Bot"));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn layout_renders_children_and_footer_links() {
        let html = render_to_string(move || {
            provide_auth(false);
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("/privacy-policy"));
        assert!(html.contains("/terms-and-conditions"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
