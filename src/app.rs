//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::banner_bar::BannerBar;
use crate::config::ClientConfig;
use crate::pages::chat::ChatPage;
use crate::state::stores::ChatStores;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the shared stores once and hands them to the chat routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let stores = ChatStores::new();
    provide_context(config);
    provide_context(stores);

    view! {
        <Stylesheet id="leptos" href="/pkg/assistants-web.css"/>
        <Title text="Assistants"/>

        <BannerBar stores=stores/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=(StaticSegment("a"), ParamSegment("agent_id")) view=ChatPage/>
            </Routes>
        </Router>
    }
}
