//! Tool toggles for the active assistant.
//!
//! ARCHITECTURE
//! ============
//! The panel renders a pure projection of `(agent, managed tools, enabled
//! params)`. It keeps no toggle state of its own: a toggle dispatches to the
//! parameter store and the next render reads `checked` back from there.
//!
//! The four render shapes are enumerated by `ToolsViewState` so every branch
//! of the panel can be tested without a browser.

#[cfg(test)]
#[path = "assistant_tools_test.rs"]
mod assistant_tools_test;

use leptos::prelude::*;

use crate::components::toggle_card::ToggleCard;
use crate::net::types::{Agent, ManagedTool, ToolRef};
use crate::state::stores::ChatStores;
use crate::state::tools::partition_tools;

pub const TOOL_FALLBACK_ICON: &str = "circles-four";

const TOOL_ICONS: &[(&str, &str)] = &[
    ("web_search", "web"),
    ("wikipedia", "web"),
    ("tavily_web_search", "web"),
    ("python_interpreter", "code"),
    ("toolkit_python_interpreter", "code"),
    ("calculator", "calculator"),
    ("toolkit_calculator", "calculator"),
    ("read_document", "desktop"),
    ("search_file", "desktop"),
    ("google_drive", "google-drive"),
];

/// Which sections of the panel render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolsViewState {
    /// Nothing usable and nothing to connect.
    Empty,
    /// Only tools that need the user to authenticate.
    NeedsAuthOnly,
    /// Both groups; a divider separates them.
    Mixed,
    AvailableOnly,
}

impl ToolsViewState {
    pub fn from_counts(available: usize, unauthed: usize) -> Self {
        match (available > 0, unauthed > 0) {
            (false, false) => Self::Empty,
            (false, true) => Self::NeedsAuthOnly,
            (true, true) => Self::Mixed,
            (true, false) => Self::AvailableOnly,
        }
    }

    pub fn shows_empty_message(self) -> bool {
        matches!(self, Self::Empty | Self::NeedsAuthOnly)
    }

    pub fn shows_action_required(self) -> bool {
        matches!(self, Self::NeedsAuthOnly | Self::Mixed)
    }

    pub fn shows_divider(self) -> bool {
        self == Self::Mixed
    }

    pub fn shows_toggle_list(self) -> bool {
        matches!(self, Self::Mixed | Self::AvailableOnly)
    }
}

/// Message shown in place of the toggle list.
///
/// The backticks and `${...}` are part of the displayed text.
pub fn no_tools_message(agent: Option<&Agent>) -> String {
    let name = agent.map(|a| a.name.as_str()).unwrap_or_default();
    format!("`${{{name}}} does not use any tools.`")
}

pub fn tool_label(tool: &ManagedTool) -> String {
    tool.display_name
        .as_deref()
        .or(tool.name.as_deref())
        .unwrap_or_default()
        .to_owned()
}

pub fn tool_icon(name: Option<&str>) -> &'static str {
    let name = name.unwrap_or_default();
    TOOL_ICONS
        .iter()
        .find(|(id, _)| *id == name)
        .map_or(TOOL_FALLBACK_ICON, |(_, icon)| *icon)
}

/// Render model for one toggle card.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolToggle {
    pub name: String,
    pub label: String,
    pub icon: &'static str,
    pub description: String,
    pub error_message: Option<String>,
    pub checked: bool,
    pub disabled: bool,
}

pub fn tool_toggles(available: &[ManagedTool], enabled: &[ToolRef], agent: Option<&Agent>) -> Vec<ToolToggle> {
    let disabled = agent.is_some_and(Agent::pins_tools);
    available
        .iter()
        .map(|tool| {
            let name = tool.name.clone().unwrap_or_default();
            ToolToggle {
                checked: enabled.iter().any(|t| t.name == name),
                label: tool_label(tool),
                icon: tool_icon(tool.name.as_deref()),
                description: tool.description.clone().unwrap_or_default(),
                error_message: tool.error_message.clone(),
                disabled,
                name,
            }
        })
        .collect()
}

/// One "connect your data" link; `href == None` renders a disabled link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectLink {
    pub key: String,
    pub label: String,
    pub href: Option<String>,
}

pub fn connect_links(unauthed: &[ManagedTool]) -> Vec<ConnectLink> {
    unauthed
        .iter()
        .map(|tool| ConnectLink {
            key: tool.name.clone().unwrap_or_default(),
            label: tool_label(tool),
            href: tool.auth_url.clone().filter(|url| !url.is_empty()),
        })
        .collect()
}

/// Tools for the assistant to use in the conversation.
#[component]
pub fn AssistantTools(
    stores: ChatStores,
    tools: Signal<Vec<ManagedTool>>,
    agent: Signal<Option<Agent>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let partition = Memo::new(move |_| agent.with(|a| tools.with(|t| partition_tools(a.as_ref(), t))));
    let view_state = move || {
        partition.with(|p| ToolsViewState::from_counts(p.available.len(), p.unauthed.len()))
    };
    let links = Signal::derive(move || partition.with(|p| connect_links(&p.unauthed)));

    let toggles = move || {
        let enabled = stores.params.with(|p| p.enabled_tools().to_vec());
        agent.with(|a| partition.with(|p| tool_toggles(&p.available, &enabled, a.as_ref())))
    };

    view! {
        <section class=format!("assistant-tools {class}")>
            <article class="assistant-tools__body">
                <Show when=move || view_state().shows_empty_message()>
                    <p class="assistant-tools__empty">{move || agent.with(|a| no_tools_message(a.as_ref()))}</p>
                </Show>

                <Show when=move || view_state().shows_action_required()>
                    <div class="assistant-tools__action-required">
                        <span class="assistant-tools__label">"Action Required"</span>
                        <span class="icon icon--warning" aria-hidden="true"></span>
                    </div>
                    <ConnectDataBox links=links/>
                </Show>

                <Show when=move || view_state().shows_divider()>
                    <hr class="assistant-tools__divider"/>
                </Show>

                <Show when=move || view_state().shows_toggle_list()>
                    <div class="assistant-tools__list">
                        {move || {
                            toggles()
                                .into_iter()
                                .map(|toggle| {
                                    let name = toggle.name.clone();
                                    let on_toggle = Callback::new(move |checked: bool| {
                                        stores.toggle_tool(&name, checked);
                                    });
                                    view! {
                                        <ToggleCard
                                            label=toggle.label
                                            icon=toggle.icon
                                            description=toggle.description
                                            error_message=toggle.error_message
                                            checked=toggle.checked
                                            disabled=toggle.disabled
                                            on_toggle=on_toggle
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </article>
        </section>
    }
}

/// Info box that prompts the user to connect their data to enable tools.
#[component]
fn ConnectDataBox(links: Signal<Vec<ConnectLink>>) -> impl IntoView {
    view! {
        <div class="connect-data">
            <div class="connect-data__intro">
                <h5 class="connect-data__title">"Connect your data"</h5>
                <p>
                    "In order to get the most accurate answers grounded on your data, connect the following:"
                </p>
            </div>
            <div class="connect-data__links">
                {move || {
                    links
                        .get()
                        .into_iter()
                        .map(|link| {
                            let disabled = link.href.is_none();
                            view! {
                                <a
                                    class="btn btn--secondary connect-data__link"
                                    class:connect-data__link--disabled=disabled
                                    href=link.href
                                    aria-disabled=disabled.then_some("true")
                                    data-tool=link.key
                                >
                                    <span>{link.label}</span>
                                    <span class="icon icon--arrow-up-right" aria-hidden="true"></span>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
