use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{
    header,
    multipart::{Form, Part},
    Client, RequestBuilder, Response, StatusCode,
};
use serde_json::Value;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    api::types::*,
    config,
    state::session::{BrowserSessionStore, SharedSessionStore},
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

pub fn is_auth_failure_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 401..=403)
}

type FailureHandler = Rc<dyn Fn(u16)>;

/// Latch between "the server rejected our token" and the session-expired prompt.
///
/// The first rejection of an episode runs the handler; later rejections are
/// swallowed until [`AuthFailureGuard::reset`] is called after a fresh login.
#[derive(Clone, Default)]
pub struct AuthFailureGuard {
    triggered: Rc<Cell<bool>>,
    handler: Rc<RefCell<Option<FailureHandler>>>,
}

impl AuthFailureGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_failure(&self, handler: impl Fn(u16) + 'static) {
        *self.handler.borrow_mut() = Some(Rc::new(handler));
    }

    pub fn clear_handler(&self) {
        self.handler.borrow_mut().take();
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.get()
    }

    pub fn reset(&self) {
        self.triggered.set(false);
    }

    /// Returns `true` only for the call that opened the episode.
    pub fn trigger(&self, status: u16) -> bool {
        if self.triggered.replace(true) {
            return false;
        }
        let handler = self.handler.borrow().clone();
        if let Some(handler) = handler {
            handler(status);
        }
        true
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SharedSessionStore,
    auth_failure: AuthFailureGuard,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: Rc::new(BrowserSessionStore),
            auth_failure: AuthFailureGuard::new(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(config::normalize_base_url(&base_url.into())),
            ..Self::new()
        }
    }

    pub fn with_session(mut self, session: SharedSessionStore) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &SharedSessionStore {
        &self.session
    }

    pub fn auth_failure(&self) -> &AuthFailureGuard {
        &self.auth_failure
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        if let Some(mocked) = mock::respond(&request) {
            return mocked;
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/signin").await;
        let response = self.execute(self.client.post(&url).json(request)).await?;

        if response.status().is_success() {
            let login: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))?;
            self.session
                .save(&login.token)
                .map_err(|e| ApiError::unknown(format!("Could not store session: {}", e)))?;
            self.auth_failure.reset();
            log::info!("signed in as {}", request.email);
            Ok(login)
        } else {
            let message = match response.json::<MessageResponse>().await {
                Ok(body) => body
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "Login failed".to_string()),
                Err(_) => "Invalid credentials or server error".to_string(),
            };
            Err(ApiError::request_failed(message))
        }
    }

    pub fn logout(&self) {
        self.session.clear();
        log::info!("signed out");
    }

    /// Sends `builder` with the stored bearer token.
    ///
    /// 401/402/403 open an auth-failure episode and fail the call; any other
    /// status is returned with its JSON body.
    pub async fn fetch_with_auth(&self, builder: RequestBuilder) -> Result<FetchResponse, ApiError> {
        let result = self.send_authorized(builder).await;
        if let Err(err) = &result {
            log::error!("fetch_with_auth error: {}", err);
        }
        result
    }

    async fn send_authorized(&self, mut builder: RequestBuilder) -> Result<FetchResponse, ApiError> {
        if let Some(token) = self.session.token().filter(|t| !t.is_empty()) {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let response = self.execute(builder).await?;
        let status = response.status();
        if is_auth_failure_status(status) {
            if self.auth_failure.trigger(status.as_u16()) {
                log::warn!("session rejected by server ({})", status);
            }
            return Err(ApiError::auth_expired(status.as_u16()));
        }
        let data: Value = response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))?;
        Ok(FetchResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            data,
        })
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let url = self.endpoint("/getAllUsersData").await;
        let response = self.fetch_with_auth(self.client.get(&url)).await?;
        if !response.ok {
            return Err(ApiError::request_failed(format!(
                "Failed to fetch user data ({})",
                response.status
            )));
        }
        Ok(normalize_users(response.data))
    }

    pub async fn update_status(
        &self,
        reference_number: &str,
        payload: &StatusUpdateRequest,
    ) -> Result<FetchResponse, ApiError> {
        let url = self
            .endpoint(&format!("/update/{}", encode_segment(reference_number)))
            .await;
        self.fetch_with_auth(self.client.post(&url).json(payload))
            .await
    }

    pub async fn update_details(
        &self,
        reference_number: &str,
        form: &DetailsForm,
        authorization_letter: Option<FileUpload>,
        medical_doc: Option<FileUpload>,
    ) -> Result<FetchResponse, ApiError> {
        let mut multipart = Form::new();
        for (name, value) in form.fields() {
            multipart = multipart.text(name, value.to_string());
        }
        multipart = multipart.text("referenceNumber", reference_number.to_string());
        if let Some(file) = authorization_letter {
            multipart = multipart.part("authorization_letter", file_part(file)?);
        }
        if let Some(file) = medical_doc {
            multipart = multipart.part("medical_doc", file_part(file)?);
        }

        let url = self
            .endpoint(&format!("/updateData/{}", encode_segment(reference_number)))
            .await;
        self.fetch_with_auth(self.client.put(&url).multipart(multipart))
            .await
    }
}

fn file_part(file: FileUpload) -> Result<Part, ApiError> {
    let part = Part::bytes(file.bytes).file_name(file.file_name);
    match file.content_type {
        Some(mime) => part
            .mime_str(&mime)
            .map_err(|e| ApiError::validation(format!("Unsupported file type {}: {}", mime, e))),
        None => Ok(part),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock::{register_mock, MockResponse, TestResponder};


#[cfg(not(all(test, not(target_arch = "wasm32"))))]
mod mock {
    use super::{ApiError, Response};

    #[inline]
    pub(super) fn respond(_request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
        None
    }
}
