//! Welcome card with the three capability callouts.

use leptos::prelude::*;

/// One capability row inside the hero card.
#[component]
fn Feature(
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    /// Color tone modifier appended to the feature class.
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("hero__feature hero__feature--{tone}")>
            <div class="hero__feature-icon" aria-hidden="true">{icon}</div>
            <div>
                <p class="hero__feature-title">{title}</p>
                <p class="hero__feature-desc">{desc}</p>
            </div>
        </div>
    }
}

/// Intro section shown above the example questions.
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__card">
                <h2 class="hero__title">
                    <span class="hero__title-icon" aria-hidden="true">"🌾"</span>
                    "Welcome to GovData Insight"
                </h2>
                <p class="hero__lead">
                    "Ask complex questions about India's agricultural economy and climate patterns. "
                    "Our AI pulls live data from "
                    <a class="hero__link" href="https://data.gov.in" target="_blank" rel="noreferrer">
                        "data.gov.in"
                    </a>
                    " to provide comprehensive insights."
                </p>
                <div class="hero__features">
                    <Feature
                        icon="📡"
                        title="Real-time Data"
                        desc="Access live datasets from government portals"
                        tone="green"
                    />
                    <Feature
                        icon="📊"
                        title="Deep Analysis"
                        desc="Compare trends across states and districts"
                        tone="blue"
                    />
                    <Feature
                        icon="🤖"
                        title="AI-Powered"
                        desc="Natural language queries with cited sources"
                        tone="cyan"
                    />
                </div>
            </div>
        </section>
    }
}
