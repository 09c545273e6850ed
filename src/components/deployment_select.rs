//! Deployment picker bound to `params.deployment`.
//!
//! Shares the deployment field with `ChatLayout`'s default-selection rule;
//! either may write it, and both read back whatever the store holds.

#[cfg(test)]
#[path = "deployment_select_test.rs"]
mod deployment_select_test;

use leptos::prelude::*;

use crate::state::params::ParamsPatch;
use crate::state::stores::ChatStores;

fn placeholder_label(loaded: bool, failed: bool) -> &'static str {
    if failed {
        "Deployments unavailable"
    } else if loaded {
        "No deployment available"
    } else {
        "Loading…"
    }
}

#[component]
pub fn DeploymentSelect(stores: ChatStores) -> impl IntoView {
    let selected = move || stores.params.with(|p| p.selected_deployment().unwrap_or_default().to_owned());
    let options = move || {
        stores
            .deployments
            .with(|d| d.available().map(|dep| dep.name.clone()).collect::<Vec<_>>())
    };
    let loaded = move || stores.deployments.with(|d| d.is_loaded());
    let failed = move || stores.deployments.with(|d| d.error.is_some());

    let on_change = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        if name.is_empty() {
            return;
        }
        stores.set_params(ParamsPatch { deployment: Some(name), ..ParamsPatch::default() });
    };

    view! {
        <label class="deployment-select">
            <span class="deployment-select__label">"Deployment"</span>
            <select
                class="deployment-select__input"
                disabled=move || !loaded() || options().is_empty()
                prop:value=selected
                on:change=on_change
            >
                <Show when=move || selected().is_empty()>
                    <option value="" selected=true>
                        {move || placeholder_label(loaded(), failed())}
                    </option>
                </Show>
                {move || {
                    let current = selected();
                    options()
                        .into_iter()
                        .map(|name| {
                            let is_current = name == current;
                            let label = name.clone();
                            view! {
                                <option value=name selected=is_current>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
