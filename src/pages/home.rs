//! Landing page composing the chat experience.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the shared query signal: the example list and controls bar write
//! into it, and the chat interface auto-submits each distinct value
//! exactly once.

use leptos::prelude::*;

use crate::components::background_decor::BackgroundDecor;
use crate::components::chat_interface::ChatInterface;
use crate::components::controls_bar::ControlsBar;
use crate::components::example_queries::ExampleQueries;
use crate::components::header::Header;
use crate::components::hero_section::HeroSection;
use crate::components::insights_panel::InsightsPanel;

/// The single route of the app.
#[component]
pub fn HomePage() -> impl IntoView {
    let initial_query = RwSignal::new(String::new());
    let on_select = Callback::new(move |query: String| initial_query.set(query));

    view! {
        <div class="page">
            <BackgroundDecor/>
            <Header/>
            <HeroSection/>
            <main class="page__main">
                <ExampleQueries on_select=on_select/>
                <ControlsBar on_compose=on_select/>
                <ChatInterface initial_query=initial_query/>
                <InsightsPanel/>
            </main>
            <footer class="page__footer">
                <p>
                    "Data sourced from "
                    <a href="https://data.gov.in" target="_blank" rel="noopener noreferrer">
                        "data.gov.in"
                    </a>
                    " - Government of India's Open Data Portal"
                </p>
            </footer>
        </div>
    }
}
