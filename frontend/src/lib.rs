use leptos::spawn_local;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod utils;

/// Browser entry point: wires logging, starts the runtime config fetch and
/// mounts the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("Starting CareBot frontend (wasm)");

    // window.__CAREBOT_ENV (env.js) wins over ./config.json when present.
    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
