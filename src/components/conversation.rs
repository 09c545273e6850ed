//! Main chat column: header controls plus the message list.
//!
//! Message streaming belongs to the chat backend; this view only renders what
//! the conversation store holds.

use leptos::prelude::*;

use crate::components::deployment_select::DeploymentSelect;
use crate::state::stores::ChatStores;

#[component]
pub fn Conversation(stores: ChatStores) -> impl IntoView {
    let title = move || {
        stores
            .conversation
            .with(|c| c.name.clone())
            .or_else(|| stores.agents.with(|a| a.agent.as_ref().map(|agent| agent.name.clone())))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "New conversation".to_owned())
    };
    let is_empty = move || stores.conversation.with(|c| c.messages.is_empty());

    view! {
        <div class="conversation">
            <header class="conversation__header">
                <span class="conversation__title">{title}</span>
                <DeploymentSelect stores=stores/>
                <button
                    class="conversation__panel-toggle"
                    title="Toggle tools panel"
                    on:click=move |_| stores.agents.update(|a| a.toggle_right_panel())
                >
                    "☰"
                </button>
            </header>

            <div class="conversation__messages">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <div class="conversation__empty">"Start a new conversation"</div> }
                >
                    {move || {
                        stores
                            .conversation
                            .with(|c| c.messages.clone())
                            .into_iter()
                            .map(|msg| {
                                view! {
                                    <div class=format!("conversation__message conversation__message--{}", msg.role)>
                                        {msg.text}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </div>
        </div>
    }
}
