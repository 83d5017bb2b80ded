use crate::{
    components::layout::LoadingSpinner,
    state::auth::{use_api_client, use_auth},
    utils::storage,
};
use leptos::*;

/// Renders `children` only while a valid session is stored; otherwise the
/// stale session is dropped and the browser is sent to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let client = use_api_client();
    let session_valid = client.session().is_valid();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated && session_valid);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        if is_loading.get() || is_authenticated.get() {
            return;
        }
        client.logout();
        storage::redirect_to("/login");
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAuth;
    use crate::api::ApiClient;
    use crate::state::session::{signed_token, MemorySessionStore};
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_with_client;
    use leptos::*;
    use std::rc::Rc;

    fn client_with(token: Option<String>) -> ApiClient {
        let store = match token {
            Some(token) => MemorySessionStore::with_token(&token),
            None => MemorySessionStore::new(),
        };
        ApiClient::new_with_base_url("http://unused").with_session(Rc::new(store))
    }

    fn render_guarded(client: ApiClient, is_authenticated: bool) -> String {
        render_with_client(client, move || {
            provide_auth(is_authenticated);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        })
    }

    #[test]
    fn require_auth_renders_children_with_valid_session() {
        let token = signed_token(chrono::Utc::now().timestamp() + 600);
        let html = render_guarded(client_with(Some(token)), true);
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_without_session() {
        let html = render_guarded(client_with(None), true);
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_for_expired_token() {
        let token = signed_token(chrono::Utc::now().timestamp() - 600);
        let html = render_guarded(client_with(Some(token)), true);
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_signed_out() {
        let token = signed_token(chrono::Utc::now().timestamp() + 600);
        let html = render_guarded(client_with(Some(token)), false);
        assert!(!html.contains("protected-content"));
    }
}
