//! Inline SVG bar chart rendered from a derived chart model.
//!
//! DESIGN
//! ======
//! The chart is static markup: geometry comes from `util::chart_layout`
//! and the model never changes in place (the insights panel hands over a
//! fresh model whenever the current answer changes).

use leptos::prelude::*;

use crate::state::insights::ChartModel;
use crate::util::chart_layout::layout_bars;
use crate::util::format::group_thousands;

const PLOT_WIDTH: f64 = 640.0;
const PLOT_HEIGHT: f64 = 220.0;
const LABEL_BAND: f64 = 56.0;
const BAR_GAP: f64 = 10.0;

/// Vertical bar chart with per-bar hover titles and a series caption.
#[component]
pub fn BarChart(
    model: ChartModel,
    /// Color tone modifier appended to the chart class.
    tone: &'static str,
) -> impl IntoView {
    let values: Vec<f64> = model.bars.iter().map(|bar| bar.value).collect();
    let rects = layout_bars(&values, PLOT_WIDTH, PLOT_HEIGHT, BAR_GAP);
    let view_box = format!("0 0 {PLOT_WIDTH} {}", PLOT_HEIGHT + LABEL_BAND);
    let label_y = PLOT_HEIGHT + 18.0;

    view! {
        <figure class=format!("bar-chart bar-chart--{tone}")>
            <figcaption class="bar-chart__title">{model.title}</figcaption>
            <svg class="bar-chart__plot" viewBox=view_box role="img" aria-label=model.series_label>
                {model
                    .bars
                    .iter()
                    .zip(&rects)
                    .map(|(bar, rect)| {
                        let label_x = rect.x + rect.width / 2.0;
                        view! {
                            <g>
                                <rect
                                    class="bar-chart__bar"
                                    x=rect.x
                                    y=rect.y
                                    width=rect.width
                                    height=rect.height
                                >
                                    <title>
                                        {format!("{}: {}", bar.label, group_thousands(bar.value))}
                                    </title>
                                </rect>
                                <text
                                    class="bar-chart__label"
                                    x=label_x
                                    y=label_y
                                    text-anchor="middle"
                                >
                                    {bar.label.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <p class="bar-chart__series">{model.series_label}</p>
        </figure>
    }
}
