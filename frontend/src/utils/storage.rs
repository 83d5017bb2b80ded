use web_sys::{Document, Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

// Host builds (SSR tests) have no browser globals to call into.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("No window object".to_string())
}

pub fn document() -> Result<Document, String> {
    window()?.document().ok_or_else(|| "No document".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn redirect_to(path: &str) {
    if let Ok(window) = window() {
        let location = window.location();
        if location.pathname().map(|p| p == path).unwrap_or(false) {
            return;
        }
        let _ = location.set_href(path);
    }
}
