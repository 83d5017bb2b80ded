use leptos::*;

use crate::utils::storage;

pub const THEME_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => DARK_CLASS,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn system_prefers_dark() -> bool {
    storage::window()
        .ok()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn stored_theme() -> Option<Theme> {
    storage::local_storage()
        .ok()?
        .get_item(THEME_KEY)
        .ok()
        .flatten()
        .and_then(|raw| Theme::parse(&raw))
}

/// Saved preference first, then the OS colour scheme.
pub fn initial_theme() -> Theme {
    stored_theme().unwrap_or(if system_prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    })
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme: create_rw_signal(initial_theme()),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        if let Ok(storage) = storage::local_storage() {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
        self.apply_to_dom();
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    fn apply_to_dom(&self) {
        let Some(root) = storage::document()
            .ok()
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let is_dark = self.theme.get_untracked() == Theme::Dark;
        let _ = root.class_list().toggle_with_force(DARK_CLASS, is_dark);
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_default()
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new();
    provide_context(state);
    state.apply_to_dom();
    state
}
