use crate::components::{
    bot_webchat::{BotVariant, BotWebchat},
    layout::Layout,
};
use leptos::*;

#[component]
fn BotPage(variant: BotVariant) -> impl IntoView {
    view! {
        <Layout>
            <div class="p-8 text-center h-[calc(100vh-200px)]">
                <h1 class="text-4xl font-bold mb-4 text-fg">{variant.heading()}</h1>
                <p class="text-fg-muted mb-8">{variant.tagline()}</p>
                <BotWebchat variant=variant />
            </div>
        </Layout>
    }
}

#[component]
pub fn AdvanceBotPage() -> impl IntoView {
    view! { <BotPage variant=BotVariant::Advance /> }
}

#[component]
pub fn TraditionalBotPage() -> impl IntoView {
    view! { <BotPage variant=BotVariant::Traditional /> }
}
