use crate::state::theme::{provide_theme, use_theme, Theme};
use leptos::*;

/// Restores the persisted theme, applies it to `<html>`, and exposes it to
/// the subtree.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    provide_theme();
    view! { <>{children()}</> }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();

    let on_click = move |_| {
        theme_state.toggle();
    };

    view! {
        <button
            type="button"
            class="relative inline-flex h-6 w-11 items-center rounded-full bg-surface-muted transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2"
            on:click=on_click
            aria-label="Toggle theme"
            aria-pressed=move || (current_theme.get() == Theme::Dark).to_string()
        >
            <span class="sr-only">"Toggle theme"</span>
            <span
                class=move || {
                    if current_theme.get() == Theme::Dark {
                        "inline-block h-4 w-4 transform rounded-full transition-transform translate-x-6 bg-action-primary-bg"
                    } else {
                        "inline-block h-4 w-4 transform rounded-full transition-transform translate-x-1 bg-surface-elevated"
                    }
                }
            />
            <span class="absolute left-1 top-1/2 -translate-y-1/2 text-xs">
                <i class=move || {
                    if current_theme.get() == Theme::Dark { "fas fa-moon" } else { "fas fa-sun" }
                }></i>
            </span>
        </button>
    }
}
