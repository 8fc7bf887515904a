//! Site header with product name and strapline.

use leptos::prelude::*;

/// Top-of-page banner.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__logo" aria-hidden="true">"🗃️✨"</div>
                <div>
                    <h1 class="site-header__title">"GovData Insight"</h1>
                    <p class="site-header__subtitle">
                        "AI-Powered Agricultural & Climate Data Analysis"
                    </p>
                </div>
            </div>
        </header>
    }
}
