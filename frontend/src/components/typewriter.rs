use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::{cell::Cell, rc::Rc};

pub const DEFAULT_INTERVAL_MS: u32 = 100;

pub fn typed_prefix(text: &str, visible_chars: usize) -> String {
    text.chars().take(visible_chars).collect()
}

/// Reveals `text` one character per tick. Stops ticking once unmounted.
#[component]
pub fn Typewriter(
    #[prop(into)] text: String,
    #[prop(default = DEFAULT_INTERVAL_MS)] interval_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(0usize);
    let total = text.chars().count();
    let cancelled = Rc::new(Cell::new(false));
    {
        let cancelled = cancelled.clone();
        on_cleanup(move || cancelled.set(true));
    }
    create_effect(move |started: Option<()>| {
        if started.is_some() {
            return;
        }
        let cancelled = cancelled.clone();
        spawn_local(async move {
            for step in 1..=total {
                TimeoutFuture::new(interval_ms).await;
                if cancelled.get() {
                    break;
                }
                set_visible.set(step);
            }
        });
    });
    view! { <span class=class>{move || typed_prefix(&text, visible.get())}</span> }
}

#[cfg(test)]
mod tests {
    use super::typed_prefix;

    #[test]
    fn prefix_counts_characters_not_bytes() {
        assert_eq!(typed_prefix("What can I help with?", 4), "What");
        assert_eq!(typed_prefix("héllo", 2), "hé");
        assert_eq!(typed_prefix("abc", 10), "abc");
        assert_eq!(typed_prefix("abc", 0), "");
    }
}
