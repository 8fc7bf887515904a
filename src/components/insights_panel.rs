//! Charts, KPI cards, comparison table, and citations for the current
//! answer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the transcript from context and re-derives every view model from
//! the most recent assistant answer on each change; nothing is cached
//! across messages. Older answers stay in the transcript but never drive
//! the visualizations.

use leptos::prelude::*;

use crate::components::bar_chart::BarChart;
use crate::components::insight_card::InsightCard;
use crate::net::types::StateComparison;
use crate::state::chat::ChatState;
use crate::state::insights::{self, Kpis};
use crate::util::format::{group_thousands, round_whole};

/// Everything rendered below the transcript for the current answer.
#[component]
pub fn InsightsPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let answer = Memo::new(move |_| chat.get().current_answer().cloned());
    let analysis = Memo::new(move |_| answer.get().and_then(|response| response.analysis));
    let rainfall = Memo::new(move |_| analysis.get().as_ref().and_then(insights::rainfall_chart));
    let crops = Memo::new(move |_| analysis.get().as_ref().and_then(insights::crop_chart));
    let kpis = Memo::new(move |_| analysis.get().as_ref().map(insights::kpis));
    let comparison = Memo::new(move |_| {
        analysis
            .get()
            .map(|analysis| analysis.state_comparison)
            .unwrap_or_default()
    });
    let citations = Memo::new(move |_| {
        answer
            .get()
            .map(|response| response.citations)
            .unwrap_or_default()
    });

    view! {
        <Show when=move || answer.get().is_some()>
            <div class="insights">
                <div class="insights__charts">
                    {move || {
                        rainfall.get().map(|model| view! { <BarChart model=model tone="rainfall"/> })
                    }}
                    {move || {
                        crops.get().map(|model| view! { <BarChart model=model tone="crops"/> })
                    }}
                </div>
                {move || {
                    let rows = comparison.get();
                    (!rows.is_empty()).then(|| comparison_section(chat, rows))
                }}
                {move || {
                    let list = citations.get();
                    (!list.is_empty()).then(|| citations_section(list))
                }}
                {move || kpis.get().map(kpi_cards)}
            </div>
        </Show>
    }
}

/// Collapsible per-state comparison table. Rainfall cells round to whole
/// millimetres; production keeps thousands grouping.
fn comparison_section(chat: RwSignal<ChatState>, rows: Vec<StateComparison>) -> impl IntoView {
    let expanded = move || chat.get().show_details;
    let toggle = move |_| chat.update(|state| state.show_details = !state.show_details);

    view! {
        <div class="insights__details">
            <button
                class="insights__details-toggle"
                on:click=toggle
                aria-expanded=move || expanded().to_string()
                aria-controls="details-panel"
            >
                {move || if expanded() { "Hide Details" } else { "Show Details" }}
            </button>
            <Show when=expanded>
                <div id="details-panel" class="insights__table-wrap">
                    <table class="insights__table">
                        <thead>
                            <tr>
                                <th>"State"</th>
                                <th>"Avg Rainfall (mm)"</th>
                                <th>"Min"</th>
                                <th>"Max"</th>
                                <th>"Total Production"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td class="insights__table-state">{row.state.clone()}</td>
                                            <td>{round_whole(row.average_rainfall)}</td>
                                            <td>{round_whole(row.min_rainfall)}</td>
                                            <td>{round_whole(row.max_rainfall)}</td>
                                            <td>{group_thousands(row.production)}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

/// Source links for the datasets behind the answer.
fn citations_section(citations: Vec<String>) -> impl IntoView {
    view! {
        <div class="insights__citations">
            <p class="insights__citations-heading">"Citations"</p>
            <ul class="insights__citations-list">
                {citations
                    .into_iter()
                    .map(|url| {
                        view! {
                            <li>
                                <a
                                    class="insights__citation-link"
                                    href=url.clone()
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    {url.clone()}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// The three headline cards.
fn kpi_cards(kpis: Kpis) -> impl IntoView {
    view! {
        <div class="insights__kpis">
            <InsightCard title="Avg Rainfall" value=kpis.rainfall_display() icon="🌧️"/>
            <InsightCard title="Total Production" value=kpis.production_display() icon="🌾"/>
            <InsightCard
                title="Correlation"
                value=kpis.correlation_display()
                subtitle=kpis.interpretation.clone()
                icon="📊"
            />
        </div>
    }
}
