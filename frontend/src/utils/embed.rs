use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

use super::storage;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("document is unavailable: {0}")]
    NoDocument(String),
    #[error("failed to create <script> for {src}")]
    CreateScript { src: String },
    #[error("failed to attach <script> for {src}")]
    Attach { src: String },
}

pub fn script_id(prefix: &str, index: usize) -> String {
    format!("{}-script-{}", prefix, index)
}

/// Third-party scripts appended to `<body>`.
///
/// The handle owns the injected nodes: dropping it removes every script it
/// added, plus the optional leftover element the widget renders on its own.
pub struct EmbeddedScripts {
    document: Document,
    ids: Vec<String>,
    leftover_selector: Option<&'static str>,
}

impl EmbeddedScripts {
    pub fn inject(prefix: &str, sources: &[&str]) -> Result<Self, EmbedError> {
        let document = storage::document().map_err(EmbedError::NoDocument)?;
        let body = document
            .body()
            .ok_or_else(|| EmbedError::NoDocument("no <body>".into()))?;

        let mut embedded = Self {
            document: document.clone(),
            ids: Vec::with_capacity(sources.len()),
            leftover_selector: None,
        };
        for (index, src) in sources.iter().enumerate() {
            let id = script_id(prefix, index);
            if let Some(stale) = document.get_element_by_id(&id) {
                stale.remove();
            }
            let script = document
                .create_element("script")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
                .ok_or_else(|| EmbedError::CreateScript {
                    src: src.to_string(),
                })?;
            script.set_src(src);
            script.set_async(true);
            script.set_id(&id);
            body.append_child(&script).map_err(|_| EmbedError::Attach {
                src: src.to_string(),
            })?;
            embedded.ids.push(id);
        }
        log::debug!("embedded {} script(s) under `{}`", embedded.ids.len(), prefix);
        Ok(embedded)
    }

    pub fn with_leftover(mut self, selector: &'static str) -> Self {
        self.leftover_selector = Some(selector);
        self
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl Drop for EmbeddedScripts {
    fn drop(&mut self) {
        for id in &self.ids {
            if let Some(element) = self.document.get_element_by_id(id) {
                element.remove();
            }
        }
        if let Some(selector) = self.leftover_selector {
            if let Ok(Some(element)) = self.document.query_selector(selector) {
                element.remove();
            }
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn dropping_the_handle_removes_injected_scripts() {
        let document = storage::document().unwrap();
        let embedded =
            EmbeddedScripts::inject("probe", &["data:text/javascript,void 0"]).unwrap();
        assert_eq!(embedded.ids(), ["probe-script-0".to_string()]);
        assert!(document.get_element_by_id("probe-script-0").is_some());

        drop(embedded);
        assert!(document.get_element_by_id("probe-script-0").is_none());
    }
}
