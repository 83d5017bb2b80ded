use crate::api::{ApiError, LoginRequest};
use leptos::*;
use serde_json::json;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push("Email is required");
    }
    if password.is_empty() {
        errors.push("Password is required");
    }
    if errors.is_empty() {
        return Ok(());
    }
    let mut error = ApiError::validation("Please enter your email and password");
    error.details = Some(json!({ "errors": errors }));
    Err(error)
}
