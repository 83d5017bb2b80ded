use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::storage;

pub const DEFAULT_API_BASE_URL: &str = "https://medical-permits.vercel.app";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = storage::window().ok()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__CAREBOT_ENV (env.js) wins over window.__CAREBOT_CONFIG.
    read_global_key("__CAREBOT_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__CAREBOT_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.api_base_url else {
        return;
    };
    let Ok(w) = storage::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__CAREBOT_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    if storage::window().is_err() {
        bail!("runtime config is only served to the browser");
    }
    let resp = reqwest::get("./config.json")
        .await
        .context("requesting ./config.json")?;
    if !resp.status().is_success() {
        bail!("./config.json answered {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("decoding ./config.json")
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            write_window_config(&cfg);
            if let Some(url) = cfg.api_base_url.filter(|u| !u.trim().is_empty()) {
                return cache_base_url(&url);
            }
        }
        Err(err) => log::debug!("no runtime config, using default API: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_whitespace_and_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://api.example.test// "),
            "https://api.example.test"
        );
        assert_eq!(normalize_base_url(DEFAULT_API_BASE_URL), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn runtime_config_accepts_missing_fields() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.api_base_url.is_none());
    }
}
