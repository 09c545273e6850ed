//! Single-slot advisory banner.

use leptos::prelude::*;

use crate::state::stores::ChatStores;

#[component]
pub fn BannerBar(stores: ChatStores) -> impl IntoView {
    let message = move || stores.banner.with(|b| b.message.clone());

    view! {
        {move || {
            message().map(|text| {
                view! {
                    <div class="banner" role="status">
                        <span class="banner__text">{text}</span>
                        <button
                            class="banner__dismiss"
                            title="Dismiss"
                            on:click=move |_| stores.banner.update(|b| b.dismiss())
                        >
                            "✕"
                        </button>
                    </div>
                }
            })
        }}
    }
}
