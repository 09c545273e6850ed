//! Auxiliary panel beside the chat: agent summary plus its tools.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by `ChatLayout` inside its transition wrapper. Loads the managed
//! tool list for the active agent and hands it to `AssistantTools`.

use leptos::prelude::*;

use crate::components::assistant_tools::AssistantTools;
use crate::config::ClientConfig;
use crate::state::stores::ChatStores;
use crate::state::tools::{ToolsLoad, ToolsState};

#[component]
pub fn AgentRightPanel(stores: ChatStores) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let last_loaded_agent = RwSignal::new(None::<Option<String>>);

    // Reload tools whenever the active agent changes, including the first render.
    // While an agent is loading its id is not known yet; wait for it.
    Effect::new(move || {
        let Some(agent_id) = stores.agents.with(|a| (!a.loading).then(|| a.agent_id().map(str::to_owned))) else {
            return;
        };
        if last_loaded_agent.get_untracked().as_ref() == Some(&agent_id) {
            return;
        }
        last_loaded_agent.set(Some(agent_id.clone()));
        stores.load_tools(config.clone(), agent_id);
    });

    let title = move || {
        stores.agents.with(|a| {
            a.agent
                .as_ref()
                .map(|agent| agent.name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Tools".to_owned())
        })
    };
    let description = move || stores.agents.with(|a| a.agent.as_ref().and_then(|agent| agent.description.clone()));
    let is_open = move || stores.agents.with(|a| a.is_agents_right_panel_open);
    let agent_error = move || stores.agents.with(|a| a.error.clone());
    let tools_status = move || stores.tools.with(ToolsState::status);

    let tools = Signal::derive(move || stores.tools.with(|t| t.items.clone().unwrap_or_default()));
    let agent = Signal::derive(move || stores.agents.with(|a| a.agent.clone()));

    view! {
        <aside class="agent-panel">
            <div class="agent-panel__header">
                <span class="agent-panel__title">{title}</span>
                <Show when=is_open>
                    <button
                        class="agent-panel__close"
                        title="Close panel"
                        on:click=move |_| stores.agents.update(|a| a.set_right_panel_open(false))
                    >
                        "✕"
                    </button>
                </Show>
            </div>
            {move || description().map(|text| view! { <p class="agent-panel__description">{text}</p> })}

            {move || agent_error().map(|message| view! { <div class="agent-panel__error">{message}</div> })}

            <Show
                when=move || tools_status() == ToolsLoad::Ready
                fallback=move || match tools_status() {
                    ToolsLoad::Failed(message) => view! { <div class="agent-panel__error">{message}</div> }.into_any(),
                    _ => view! { <div class="agent-panel__loading">"Loading tools…"</div> }.into_any(),
                }
            >
                <AssistantTools stores=stores tools=tools agent=agent/>
            </Show>
        </aside>
    }
}
