//! Chat route: `/` for the default assistant, `/a/:agent_id` for an agent.
//!
//! SYSTEM CONTEXT
//! ==============
//! Switching between agents keeps this component mounted, so the active agent
//! is reloaded from the route parameter instead of relying on remounts.
//! Leaving the chat routes unmounts `ChatLayout`, which resets the
//! conversation.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::conversation::Conversation;
use crate::config::ClientConfig;
use crate::pages::chat_layout::ChatLayout;
use crate::state::stores::ChatStores;

fn normalize_agent_id(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty())
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let stores = expect_context::<ChatStores>();
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let params = use_params_map();
    let last_agent_id = RwSignal::new(None::<Option<String>>);

    let agent_id = move || normalize_agent_id(params.read().get("agent_id"));

    Effect::new(move || {
        let next = agent_id();
        if last_agent_id.get_untracked().as_ref() == Some(&next) {
            return;
        }
        last_agent_id.set(Some(next.clone()));
        stores.load_agent(config.clone(), next);
    });

    view! {
        <ChatLayout stores=stores>
            <Conversation stores=stores/>
        </ChatLayout>
    }
}
