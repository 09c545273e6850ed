//! Handle bundle for the chat view's shared stores.
//!
//! ARCHITECTURE
//! ============
//! Each store is an `RwSignal` owned by the root component. `ChatStores`
//! groups the handles into one `Copy` value that is passed explicitly into
//! `ChatLayout` and `AssistantTools`, so those components never reach for a
//! hidden global. Other components may still share the same signals; no
//! reader assumes exclusive ownership.
//!
//! Loaders fetch in the browser and write into the owning store. On the
//! server they are no-ops and the view renders its "not loaded" state.

#[cfg(test)]
#[path = "stores_test.rs"]
mod stores_test;

use leptos::prelude::*;

use super::agents::AgentsState;
use super::banner::BannerState;
use super::conversation::ConversationState;
use super::deployments::DeploymentsState;
use super::experimental::ExperimentalState;
use super::params::{ParamsPatch, ParamsState, toggle_tool};
use super::tools::ToolsState;
use super::ui::ViewportState;
use crate::config::ClientConfig;

#[derive(Clone, Copy, Debug)]
pub struct ChatStores {
    pub params: RwSignal<ParamsState>,
    pub conversation: RwSignal<ConversationState>,
    pub agents: RwSignal<AgentsState>,
    pub banner: RwSignal<BannerState>,
    pub deployments: RwSignal<DeploymentsState>,
    pub tools: RwSignal<ToolsState>,
    pub experimental: RwSignal<ExperimentalState>,
    pub viewport: RwSignal<ViewportState>,
}

impl ChatStores {
    pub fn new() -> Self {
        Self {
            params: RwSignal::new(ParamsState::default()),
            conversation: RwSignal::new(ConversationState::default()),
            agents: RwSignal::new(AgentsState::default()),
            banner: RwSignal::new(BannerState::default()),
            deployments: RwSignal::new(DeploymentsState::default()),
            tools: RwSignal::new(ToolsState::default()),
            experimental: RwSignal::new(ExperimentalState::default()),
            viewport: RwSignal::new(ViewportState::default()),
        }
    }

    /// Clear the active conversation and the tool selection that belonged to it.
    ///
    /// The selected deployment survives; it is a client preference rather than
    /// conversation state.
    pub fn reset_conversation(&self) {
        self.conversation.update(ConversationState::reset);
        self.params.update(|p| p.tools = None);
    }

    pub fn set_params(&self, patch: ParamsPatch) {
        self.params.update(|p| p.merge(patch));
    }

    /// Relay a tool toggle to the parameter store.
    pub fn toggle_tool(&self, name: &str, checked: bool) {
        self.params.update(|p| {
            let tools = toggle_tool(p.enabled_tools(), name, checked);
            p.merge(ParamsPatch { tools: Some(tools), ..ParamsPatch::default() });
        });
    }

    pub fn load_deployments(&self, config: ClientConfig) {
        let deployments = self.deployments;
        deployments.update(|d| d.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_deployments(&config, true).await;
            deployments.update(|d| {
                d.loading = false;
                match result {
                    Ok(items) => {
                        d.items = Some(items);
                        d.error = None;
                    }
                    Err(e) => {
                        leptos::logging::warn!("deployments fetch failed: {e}");
                        d.error = Some(e.to_string());
                    }
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
            deployments.update(|d| d.loading = false);
        }
    }

    /// Load the managed tools for `agent_id`, dropping the previous list.
    pub fn load_tools(&self, config: ClientConfig, agent_id: Option<String>) {
        let tools = self.tools;
        let generation = tools.try_update(ToolsState::begin_load).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_managed_tools(&config, agent_id.as_deref())
                .await
                .map_err(|e| {
                    leptos::logging::warn!("tools fetch failed: {e}");
                    e.to_string()
                });
            let applied = tools.try_update(|t| t.finish_load(generation, result)).unwrap_or(false);
            if !applied {
                leptos::logging::log!("dropping stale tools response (generation {generation})");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, agent_id, generation);
            tools.update(|t| t.loading = false);
        }
    }

    pub fn load_experimental_features(&self, config: ClientConfig) {
        let experimental = self.experimental;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_experimental_features(&config).await {
                Ok(features) => experimental.update(|x| {
                    x.features = Some(features);
                    x.error = None;
                }),
                Err(e) => {
                    leptos::logging::warn!("experimental features fetch failed: {e}");
                    experimental.update(|x| x.error = Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, experimental);
        }
    }

    /// Load the agent for `/a/:agent_id`; `None` clears the active agent.
    ///
    /// A response for an agent the route already moved away from is dropped.
    pub fn load_agent(&self, config: ClientConfig, agent_id: Option<String>) {
        let agents = self.agents;
        let Some(agent_id) = agent_id.filter(|id| !id.is_empty()) else {
            agents.update(AgentsState::clear_agent);
            return;
        };
        let generation = agents.try_update(AgentsState::begin_load).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_agent(&config, &agent_id).await.map_err(|e| {
                leptos::logging::warn!("agent {agent_id} fetch failed: {e}");
                e.to_string()
            });
            let applied = agents.try_update(|a| a.finish_load(generation, result)).unwrap_or(false);
            if !applied {
                leptos::logging::log!("dropping stale response for agent {agent_id}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, agent_id, generation);
            agents.update(|a| a.loading = false);
        }
    }
}

impl Default for ChatStores {
    fn default() -> Self {
        Self::new()
    }
}
