//! Persistent credential store.
//!
//! The token and its expiry live in browser-origin storage under two fixed
//! keys. Everything that needs the session goes through [`SessionStore`] so
//! tests can swap in [`MemorySessionStore`].

use base64::{
    engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD},
    Engine as _,
};
use chrono::Utc;
use serde_json::Value;
use std::{cell::RefCell, rc::Rc};
use thiserror::Error;

use crate::utils::storage as storage_utils;

pub const TOKEN_KEY: &str = "authToken";
pub const EXPIRY_KEY: &str = "authTokenExpiry";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("persistent storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}` to persistent storage")]
    Write { key: &'static str },
}

pub type SharedSessionStore = Rc<dyn SessionStore>;

pub trait SessionStore {
    fn token(&self) -> Option<String>;

    /// Expiry in milliseconds since the epoch, when one was recorded.
    fn expiry_ms(&self) -> Option<i64>;

    /// Stores the token and, when the token carries an `exp` claim, its expiry.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    fn clear(&self);

    fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now().timestamp_millis())
    }

    fn is_valid_at(&self, now_ms: i64) -> bool {
        let token = match self.token() {
            Some(token) if !token.is_empty() => token,
            _ => return false,
        };
        match self.expiry_ms().or_else(|| decode_expiry_ms(&token)) {
            Some(expiry) if expiry > 0 => now_ms < expiry,
            // No known expiry: the server is the judge.
            _ => true,
        }
    }
}

/// Reads the `exp` claim (seconds) of a signed token and returns it in milliseconds.
pub fn decode_expiry_ms(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let payload = payload.trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;
    let claims: Value = serde_json::from_slice(&decoded).ok()?;
    let exp = claims.get("exp")?.as_f64()?;
    Some((exp * 1000.0) as i64)
}

/// `localStorage`-backed store used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn token(&self) -> Option<String> {
        storage_utils::local_storage()
            .ok()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
    }

    fn expiry_ms(&self) -> Option<i64> {
        let raw = storage_utils::local_storage()
            .ok()?
            .get_item(EXPIRY_KEY)
            .ok()
            .flatten()?;
        raw.trim().parse::<f64>().ok().map(|v| v as i64)
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        let storage = storage_utils::local_storage().map_err(SessionError::Unavailable)?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|_| SessionError::Write { key: TOKEN_KEY })?;
        match decode_expiry_ms(token) {
            Some(expiry) => storage
                .set_item(EXPIRY_KEY, &expiry.to_string())
                .map_err(|_| SessionError::Write { key: EXPIRY_KEY })?,
            None => {
                log::warn!("token has no readable expiry; treating it as open-ended");
                let _ = storage.remove_item(EXPIRY_KEY);
            }
        }
        Ok(())
    }

    fn clear(&self) {
        match storage_utils::local_storage() {
            Ok(storage) => {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(EXPIRY_KEY);
            }
            Err(err) => log::warn!("cannot clear session: {}", err),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
    expiry_ms: RefCell<Option<i64>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        let _ = store.save(token);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn expiry_ms(&self) -> Option<i64> {
        *self.expiry_ms.borrow()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.token.borrow_mut() = Some(token.to_string());
        *self.expiry_ms.borrow_mut() = decode_expiry_ms(token);
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
        self.expiry_ms.borrow_mut().take();
    }
}

#[cfg(test)]
pub(crate) fn signed_token(exp_seconds: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(
        serde_json::json!({ "sub": "admin@moh.gov", "exp": exp_seconds })
            .to_string()
            .as_bytes(),
    );
    format!("{}.{}.signature", header, claims)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_persists_token_and_expiry_keys() {
        let store = BrowserSessionStore;
        let exp = Utc::now().timestamp() + 3600;
        store.save(&signed_token(exp)).unwrap();

        let storage = storage_utils::local_storage().unwrap();
        assert!(storage.get_item(TOKEN_KEY).unwrap().is_some());
        assert_eq!(store.expiry_ms(), Some(exp * 1000));
        assert!(store.is_valid());

        store.clear();
        assert!(storage.get_item(EXPIRY_KEY).unwrap().is_none());
        assert!(!store.is_valid());
    }
}
