//! Pure view-model derivation from the current assistant answer.
//!
//! DESIGN
//! ======
//! Derivations re-run whenever the current answer changes and are never
//! cached across messages. Each function reads exactly one `Analysis`
//! sub-field and degrades to `None`/placeholder on its own, so a partial
//! payload renders whatever it can.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use crate::net::types::Analysis;
use crate::util::format::{group_thousands, round_whole};

/// How many crops the production chart shows.
pub const CROP_CHART_LIMIT: usize = 10;

/// Data for one rendered bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartModel {
    pub title: &'static str,
    pub series_label: &'static str,
    pub bars: Vec<BarDatum>,
}

/// One labelled bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

/// Rainfall-by-state chart: one bar per record, input order preserved.
pub fn rainfall_chart(analysis: &Analysis) -> Option<ChartModel> {
    if analysis.rainfall_analysis.is_empty() {
        return None;
    }
    let bars = analysis
        .rainfall_analysis
        .iter()
        .map(|record| BarDatum {
            label: record.state.clone(),
            value: record.average_rainfall,
        })
        .collect();
    Some(ChartModel {
        title: "Rainfall by State",
        series_label: "Average Annual Rainfall (mm)",
        bars,
    })
}

/// Top crops by production, descending, capped at [`CROP_CHART_LIMIT`].
///
/// Absent when there is no crop-level data: a first record without a crop
/// identifier marks the list as a state-only aggregate, which the rainfall
/// chart and comparison table cover instead.
pub fn crop_chart(analysis: &Analysis) -> Option<ChartModel> {
    let records = &analysis.crop_analysis;
    let first = records.first()?;
    if !first.crop.as_deref().is_some_and(|crop| !crop.is_empty()) {
        return None;
    }

    let mut sorted = records.clone();
    sorted.sort_by(|a, b| {
        b.production
            .unwrap_or(0.0)
            .total_cmp(&a.production.unwrap_or(0.0))
    });
    sorted.truncate(CROP_CHART_LIMIT);

    let bars = sorted
        .into_iter()
        .map(|record| BarDatum {
            label: match record.crop {
                Some(crop) => format!("{crop} ({})", record.state),
                None => record.state,
            },
            value: record.production.unwrap_or(0.0),
        })
        .collect();
    Some(ChartModel {
        title: "Top Crops by Production",
        series_label: "Production (units)",
        bars,
    })
}

/// The three headline figures shown above the input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Kpis {
    /// Arithmetic mean of the per-state rainfall averages.
    pub avg_rainfall_mm: Option<f64>,
    /// Sum of production over all crop entries.
    pub total_production: Option<f64>,
    /// Raw correlation coefficient, when the service computed one.
    pub correlation: Option<f64>,
    pub interpretation: Option<String>,
}

impl Kpis {
    /// `"875 mm"`, or a dash placeholder when no rainfall rows came back.
    #[must_use]
    pub fn rainfall_display(&self) -> String {
        self.avg_rainfall_mm
            .map_or_else(|| "-".to_owned(), |avg| format!("{} mm", round_whole(avg)))
    }

    /// Grouped production total, or a dash placeholder.
    #[must_use]
    pub fn production_display(&self) -> String {
        self.total_production
            .map_or_else(|| "-".to_owned(), group_thousands)
    }

    /// Raw coefficient, or `"N/A"` when null/absent.
    #[must_use]
    pub fn correlation_display(&self) -> String {
        self.correlation
            .map_or_else(|| "N/A".to_owned(), |value| format!("{value}"))
    }
}

/// Derive the KPI triple. Each figure degrades to its placeholder
/// independently of the others.
#[allow(clippy::cast_precision_loss)]
pub fn kpis(analysis: &Analysis) -> Kpis {
    let avg_rainfall_mm = if analysis.rainfall_analysis.is_empty() {
        None
    } else {
        let sum: f64 = analysis
            .rainfall_analysis
            .iter()
            .map(|record| record.average_rainfall)
            .sum();
        Some(sum / analysis.rainfall_analysis.len() as f64)
    };

    let total_production = if analysis.crop_analysis.is_empty() {
        None
    } else {
        Some(
            analysis
                .crop_analysis
                .iter()
                .map(|record| record.production.unwrap_or(0.0))
                .sum(),
        )
    };

    let (correlation, interpretation) = match &analysis.correlation_analysis {
        Some(corr) => (corr.correlation, corr.interpretation.clone()),
        None => (None, None),
    };

    Kpis {
        avg_rainfall_mm,
        total_production,
        correlation,
        interpretation,
    }
}
