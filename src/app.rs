//! Application shell and SSR document.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` renders the HTML document for server-side rendering; `App`
//! provides the shared chat state via context and mounts the single
//! route. The ssr host binary and the hydrate entry point both go
//! through these two functions.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::pages::home::HomePage;
use crate::state::chat::ChatState;

/// HTML document for server rendering; hydration picks up inside `<body>`.
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

/// Root component: shared state, metadata, and the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One chat session per mount; remounting is the only way to clear the
    // transcript.
    provide_context(RwSignal::new(ChatState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/govdata-insight.css"/>
        <Title text="GovData Insight"/>
        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
