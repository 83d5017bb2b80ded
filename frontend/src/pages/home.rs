use crate::components::{bot_webchat::BotVariant, layout::Layout};
use leptos::*;

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    link_to: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-lg shadow-lg p-8 flex flex-col items-center text-center w-full max-w-sm">
            <div class="bg-surface-muted rounded-full p-4 mb-6">
                <i class=format!("{} text-2xl", icon)></i>
            </div>
            <h3 class="text-2xl font-bold text-fg mb-4">{title}</h3>
            <p class="text-fg-muted mb-6 flex-grow">{description}</p>
            <a href=link_to class="mt-auto font-semibold text-action-primary-bg hover:underline">
                "Read More →"
            </a>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let bots = [BotVariant::Advance, BotVariant::Traditional];
    view! {
        <Layout>
            <div class="px-6 py-16 text-center">
                <h1 class="text-5xl font-extrabold text-fg mb-4">"Unified System Solutions"</h1>
                <p class="text-lg text-fg-muted max-w-3xl mx-auto mb-16">
                    "Providing seamless and efficient healthcare assistance through advanced technology and streamlined administrative tools."
                </p>
                <div class="flex flex-col md:flex-row justify-center items-stretch gap-8">
                    {bots
                        .into_iter()
                        .map(|bot| view! {
                            <FeatureCard
                                icon="fas fa-robot"
                                title=bot.title()
                                description=bot.summary()
                                link_to=bot.path()
                            />
                        })
                        .collect_view()}
                    <FeatureCard
                        icon="fas fa-user-shield"
                        title="Admin Dashboard"
                        description="Admin Dashboard enables efficient management, allowing administrators to approve, reject, or update the status of user requests seamlessly."
                        link_to="/login"
                    />
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn home_page_links_every_section() {
        let html = render_to_string(move || {
            provide_auth(false);
            view! { <HomePage /> }
        });
        assert!(html.contains("Unified System Solutions"));
        assert!(html.contains("href=\"/advance-bot\""));
        assert!(html.contains("href=\"/traditional-bot\""));
        assert!(html.contains("Admin Dashboard"));
    }
}
