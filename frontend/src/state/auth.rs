use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository::LoginRepository,
    utils::storage,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub loading: bool,
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}

fn create_auth_context() -> AuthContext {
    let api_client = use_api_client();
    create_signal(AuthState {
        is_authenticated: api_client.session().is_valid(),
        loading: false,
    })
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(_) => {
            set_auth_state.update(|state| {
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| {
                state.is_authenticated = false;
                state.loading = false;
            });
            Err(error)
        }
    }
}

/// Drops the stored session. Used by logout and by the session-expired prompt.
pub fn end_session(client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    client.logout();
    set_auth_state.update(|state| {
        state.is_authenticated = false;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::new_with_client(Rc::new(use_api_client()));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let client = use_api_client();
    Callback::new(move |_| {
        end_session(&client, set_auth);
        storage::redirect_to("/login");
    })
}
