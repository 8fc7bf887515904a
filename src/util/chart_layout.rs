//! Bar geometry for the inline SVG charts.
//!
//! DESIGN
//! ======
//! Chart components stay purely presentational: all pixel math lives here
//! so the scaling rules can be unit tested without a DOM.

#[cfg(test)]
#[path = "chart_layout_test.rs"]
mod chart_layout_test;

/// A positioned bar in plot-local pixel coordinates (origin top-left).
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out vertical bars across `plot_width`, scaled so the largest value
/// fills `plot_height`.
///
/// Values that are negative or non-finite render as zero-height bars; when
/// every value is zero the baseline stays flat rather than dividing by
/// zero.
pub fn layout_bars(values: &[f64], plot_width: f64, plot_height: f64, gap: f64) -> Vec<BarRect> {
    if values.is_empty() || plot_width <= 0.0 || plot_height <= 0.0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    let bar_width = ((plot_width - gap * (count + 1.0)) / count).max(1.0);
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let clamped = if value.is_finite() { value.max(0.0) } else { 0.0 };
            let height = if max > 0.0 {
                clamped / max * plot_height
            } else {
                0.0
            };
            #[allow(clippy::cast_precision_loss)]
            let x = gap + (i as f64) * (bar_width + gap);
            BarRect {
                x,
                y: plot_height - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}
