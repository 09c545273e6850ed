//! Chat layout: primary content plus the collapsible agent panel.
//!
//! ARCHITECTURE
//! ============
//! The layout owns three independent reactive rules; none depends on the
//! order the others run in:
//!
//! 1. Teardown resets the conversation exactly once (`ConversationResetGuard`
//!    held by the owner's cleanup).
//! 2. Once deployments load and nothing is selected, the first available
//!    deployment is selected. An existing selection is never replaced.
//! 3. Turning on the experimental langchain flag posts one advisory banner.
//!
//! Panel presentation is derived from the agents store's open flag and the
//! viewport breakpoint; see `state::ui`.
//!
//! TRADE-OFFS
//! ==========
//! Deployments and feature flags load here rather than at the app root so a
//! route that never shows the chat never pays for them.

#[cfg(test)]
#[path = "chat_layout_test.rs"]
mod chat_layout_test;

use leptos::prelude::*;

use crate::components::agent_right_panel::AgentRightPanel;
use crate::config::ClientConfig;
use crate::state::banner::BannerLatch;
use crate::state::conversation::ConversationResetGuard;
use crate::state::deployments::select_default_deployment;
use crate::state::experimental::{ExperimentalState, LANGCHAIN_ADVISORY};
use crate::state::params::ParamsPatch;
use crate::state::stores::ChatStores;
use crate::state::ui::{docked_panel_width_px, panel_mode, panel_styling};
use crate::util::transition::use_panel_transition;
use crate::util::viewport::install_viewport_tracking;

fn panel_class(modifier: &str, docked: bool, overlay: bool) -> String {
    let mut class = format!("chat-layout__panel {modifier}");
    if docked {
        class.push_str(" chat-layout__panel--docked");
    }
    if overlay {
        class.push_str(" chat-layout__panel--overlay");
    }
    class
}

/// Reset the conversation when the current owner is cleaned up.
fn reset_conversation_on_cleanup(stores: ChatStores) {
    let reset_guard = ConversationResetGuard::new(move || {
        leptos::logging::log!("chat layout unmounted; resetting conversation");
        stores.reset_conversation();
    });
    on_cleanup(move || drop(reset_guard));
}

/// Select the first available deployment when none is selected.
///
/// Writes only when the pick differs from what the store holds, so a rerun
/// never notifies subscribers again. Returns whether a write happened.
fn apply_default_deployment(stores: ChatStores) -> bool {
    let (current, stored) = stores.params.with(|p| {
        (p.selected_deployment().map(str::to_owned), p.deployment.clone())
    });
    let pick = stores
        .deployments
        .with(|d| select_default_deployment(current.as_deref(), d.items.as_deref()));
    match pick {
        Some(name) if stored.as_deref() != Some(name.as_str()) => {
            leptos::logging::log!("selecting default deployment {name}");
            stores.set_params(ParamsPatch { deployment: Some(name), ..ParamsPatch::default() });
            true
        }
        _ => false,
    }
}

/// Post the langchain advisory once per off-to-on flip of the flag.
fn post_langchain_advisory(stores: ChatStores, latch: RwSignal<BannerLatch>) -> bool {
    let enabled = stores.experimental.with(ExperimentalState::langchain_mode);
    let fire = latch.try_update(|latch| latch.observe(enabled)).unwrap_or(false);
    if fire {
        stores.banner.update(|b| b.set_message(LANGCHAIN_ADVISORY));
    }
    fire
}

#[component]
pub fn ChatLayout(stores: ChatStores, children: Children) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();

    reset_conversation_on_cleanup(stores);

    if !stores.deployments.with_untracked(|d| d.is_loaded() || d.loading) {
        stores.load_deployments(config.clone());
    }
    if stores.experimental.with_untracked(|x| x.features.is_none()) {
        stores.load_experimental_features(config.clone());
    }
    install_viewport_tracking(stores.viewport, &config);

    Effect::new(move || {
        apply_default_deployment(stores);
    });

    let banner_latch = RwSignal::new(BannerLatch::default());
    Effect::new(move || {
        post_langchain_advisory(stores, banner_latch);
    });

    let is_open = move || stores.agents.with(|a| a.is_agents_right_panel_open);
    let is_desktop = move || stores.viewport.with(|v| v.is_desktop);
    let transition = use_panel_transition(
        move || panel_mode(is_open(), is_desktop()).is_visible(),
        config.panel_transition_ms,
    );

    let class = move || {
        let styling = panel_styling(is_open(), is_desktop());
        panel_class(transition.with(|t| t.css_modifier()), styling.docked, styling.overlay)
    };
    let style = move || {
        if is_desktop() {
            let width = docked_panel_width_px(stores.viewport.with(|v| v.is_wide));
            format!("width: {width}px;")
        } else {
            String::new()
        }
    };

    view! {
        <div class="chat-layout">
            <div class="chat-layout__main">{children()}</div>
            <Show when=move || transition.with(|t| t.is_mounted())>
                <div class=class style=style>
                    <AgentRightPanel stores=stores/>
                </div>
            </Show>
        </div>
    }
}
