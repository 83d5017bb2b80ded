#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        requests: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        reply: Reply,
    }

    #[derive(Clone)]
    enum Reply {
        Respond(MockResponse),
        NetworkError,
    }

    /// What the client actually sent, for assertions.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub authorization: Option<String>,
        pub content_type: Option<String>,
        pub json: Option<Value>,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            let server = Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}", id),
            };
            register_mock(server.base.clone(), Arc::new(server.clone()));
            server
        }

        pub fn base_url(&self) -> String {
            self.base.clone()
        }

        pub fn url(&self, path: &str) -> String {
            format!("{}{}", self.base, path)
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let reply = if then.network_error {
                Reply::NetworkError
            } else {
                let status = then.status.unwrap_or(200);
                Reply::Respond(match then.text.take() {
                    Some(text) => MockResponse::text(status, text),
                    None => MockResponse::json(
                        status,
                        then.body.take().unwrap_or_else(|| serde_json::json!({})),
                    ),
                })
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                reply,
            });
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").requests.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.requests()
                .iter()
                .filter(|r| r.method == method && r.path == path)
                .count()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path().to_string();
            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;

            let header = |name: reqwest::header::HeaderName| {
                request
                    .headers()
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            };
            let json = request
                .body()
                .and_then(|b| b.as_bytes())
                .and_then(|bytes| serde_json::from_slice(bytes).ok());
            inner.requests.push(RecordedRequest {
                method: method.clone(),
                path: path.clone(),
                authorization: header(reqwest::header::AUTHORIZATION),
                content_type: header(reqwest::header::CONTENT_TYPE),
                json,
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == *method && route.path == path)
                .cloned();

            match route.map(|route| route.reply) {
                Some(Reply::Respond(response)) => Ok(response),
                Some(Reply::NetworkError) => Err(ApiError::request_failed(
                    "Request failed: connection refused",
                )),
                None => Err(ApiError::unknown(format!("No mock for {} {}", method, path))),
            }
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        text: Option<String>,
        network_error: bool,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn text_body(&mut self, body: &str) -> &mut Self {
            self.text = Some(body.to_string());
            self
        }

        pub fn network_error(&mut self) -> &mut Self {
            self.network_error = true;
            self
        }
    }
}
