use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireAuth, theme::ThemeProvider},
    pages::{
        bots::{AdvanceBotPage, TraditionalBotPage},
        dashboard::DashboardPage,
        home::HomePage,
        legal::{PrivacyPolicyPage, TermsPage},
        login::LoginPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/advance-bot",
    "/traditional-bot",
    "/login",
    "/privacy-policy",
    "/terms-and-conditions",
    "/dashboard",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/advance-bot",
    "/traditional-bot",
    "/login",
    "/privacy-policy",
    "/terms-and-conditions",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <ThemeProvider>
            <AuthProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=HomeRoute/>
                        <Route path="/advance-bot" view=AdvanceBotRoute/>
                        <Route path="/traditional-bot" view=TraditionalBotRoute/>
                        <Route path="/login" view=LoginRoute/>
                        <Route path="/privacy-policy" view=PrivacyPolicyRoute/>
                        <Route path="/terms-and-conditions" view=TermsRoute/>
                        <Route path="/dashboard" view=ProtectedDashboard/>
                    </Routes>
                </Router>
            </AuthProvider>
        </ThemeProvider>
    }
}

#[component]
fn HomeRoute() -> impl IntoView {
    view! { <Title text="MOH | Unified System Solutions"/><HomePage/> }
}

#[component]
fn AdvanceBotRoute() -> impl IntoView {
    view! { <Title text="MOH | Advance Bot"/><AdvanceBotPage/> }
}

#[component]
fn TraditionalBotRoute() -> impl IntoView {
    view! { <Title text="MOH | Traditional Bot"/><TraditionalBotPage/> }
}

#[component]
fn LoginRoute() -> impl IntoView {
    view! { <Title text="MOH | Admin Login"/><LoginPage/> }
}

#[component]
fn PrivacyPolicyRoute() -> impl IntoView {
    view! { <Title text="MOH | Privacy Policy"/><PrivacyPolicyPage/> }
}

#[component]
fn TermsRoute() -> impl IntoView {
    view! { <Title text="MOH | Terms and Conditions"/><TermsPage/> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <Title text="MOH | Dashboard"/>
        <RequireAuth><DashboardPage/></RequireAuth>
    }
}
