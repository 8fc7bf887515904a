//! KPI card with icon, headline value, and optional subtitle.

use leptos::prelude::*;

/// One headline figure in the KPI row.
#[component]
pub fn InsightCard(
    title: &'static str,
    value: String,
    #[prop(optional_no_strip)] subtitle: Option<String>,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="insight-card">
            <div class="insight-card__icon" aria-hidden="true">{icon}</div>
            <div>
                <p class="insight-card__title">{title}</p>
                <p class="insight-card__value">{value}</p>
                {subtitle.map(|text| view! { <p class="insight-card__subtitle">{text}</p> })}
            </div>
        </div>
    }
}
