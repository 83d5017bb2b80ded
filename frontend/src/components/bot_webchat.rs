use crate::utils::embed::EmbeddedScripts;
use leptos::*;
use std::{cell::RefCell, rc::Rc};

const WIDGET_PREFIX: &str = "botpress";
const WIDGET_CONTAINER: &str = ".bp-widget-container";
const INJECT_SCRIPT: &str = "https://cdn.botpress.cloud/webchat/v2.2/inject.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotVariant {
    Advance,
    Traditional,
}

impl BotVariant {
    /// Loader first, then the bot-specific configuration.
    pub fn scripts(&self) -> [&'static str; 2] {
        match self {
            BotVariant::Advance => [
                INJECT_SCRIPT,
                "https://files.bpcontent.cloud/2025/01/20/14/20250120140504-UZOZ5RMR.js",
            ],
            BotVariant::Traditional => [
                INJECT_SCRIPT,
                "https://files.bpcontent.cloud/2025/01/16/07/20250116070617-HY2WY6Q5.js",
            ],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BotVariant::Advance => "Advance Bot",
            BotVariant::Traditional => "Traditional Bot",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            BotVariant::Advance => "Advance Health Bot",
            BotVariant::Traditional => "Traditional Health Bot",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            BotVariant::Advance => "This bot supports Arabic for seamless communication.",
            BotVariant::Traditional => "This bot communicates in English for straightforward support.",
        }
    }

    /// Summary shown on the landing page card.
    pub fn summary(&self) -> &'static str {
        match self {
            BotVariant::Advance => "Advanced Health Bot supports Arabic, ensuring seamless communication for users, enhancing accessibility and providing efficient, personalized healthcare assistance.",
            BotVariant::Traditional => "Traditional Health Bot communicates in English, offering straightforward support, efficient service, and personalized assistance for seamless healthcare transactions.",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            BotVariant::Advance => "/advance-bot",
            BotVariant::Traditional => "/traditional-bot",
        }
    }
}

/// Mounts the chat widget for `variant`. The injected scripts and the
/// widget's own container are removed again when this view is disposed.
#[component]
pub fn BotWebchat(variant: BotVariant) -> impl IntoView {
    let embedded: Rc<RefCell<Option<EmbeddedScripts>>> = Rc::new(RefCell::new(None));
    {
        let embedded = embedded.clone();
        create_effect(move |_| {
            if embedded.borrow().is_some() {
                return;
            }
            match EmbeddedScripts::inject(WIDGET_PREFIX, &variant.scripts()) {
                Ok(scripts) => {
                    *embedded.borrow_mut() = Some(scripts.with_leftover(WIDGET_CONTAINER));
                }
                Err(err) => log::error!("failed to embed {}: {}", variant.title(), err),
            }
        });
    }
    on_cleanup(move || {
        if embedded.borrow_mut().take().is_some() {
            log::debug!("removed {} widget", variant.title());
        }
    });

    view! {
        <div id="botpress-webchat-container" class="h-full w-full" data-bot=variant.path()></div>
    }
}
