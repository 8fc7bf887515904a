//! Wire DTOs for the analysis-service boundary.
//!
//! DESIGN
//! ======
//! Every optional field decodes independently: the service omits analysis
//! sub-objects freely depending on the question, so a partial payload must
//! never fail the whole response. Numeric fields tolerate integral floats
//! because the upstream pipeline emits numbers through a dataframe layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /query`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Natural-language question, verbatim from the input field.
    pub query: String,
}

/// One complete answer from the analysis service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Human-readable answer text (markdown tolerated).
    #[serde(default = "missing_summary")]
    pub summary: String,
    /// Structured analysis payload, when the question produced one.
    #[serde(default)]
    pub analysis: Option<Analysis>,
    /// What the service believes the query referred to; informational only,
    /// never validated or corrected client-side.
    #[serde(default)]
    pub entities: Option<Entities>,
    /// Citation URLs for the datasets behind the answer.
    #[serde(default)]
    pub citations: Vec<String>,
    /// Label of the upstream data portal, when known.
    #[serde(default)]
    pub data_source: Option<String>,
}

fn missing_summary() -> String {
    "No result found.".to_owned()
}

/// Structured analysis payload. Each sub-field is independently optional;
/// there are no cross-field consistency guarantees.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Per-state average rainfall, in the service's own ordering.
    #[serde(default)]
    pub rainfall_analysis: Vec<RainfallRecord>,
    /// Per-crop (or per-state aggregate) production figures.
    #[serde(default)]
    pub crop_analysis: Vec<CropRecord>,
    /// Rainfall/production correlation, when the question asked for one.
    #[serde(default)]
    pub correlation_analysis: Option<CorrelationAnalysis>,
    /// Per-state min/max/average rainfall and production totals.
    #[serde(default)]
    pub state_comparison: Vec<StateComparison>,
}

/// One state's average rainfall figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RainfallRecord {
    #[serde(rename = "State", default)]
    pub state: String,
    /// Average annual rainfall in millimetres.
    #[serde(rename = "Average_Rainfall", default)]
    pub average_rainfall: f64,
}

/// One crop production figure.
///
/// `crop` is absent for state-only aggregates; its presence on the first
/// record is what distinguishes crop-level data from state rollups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Crop", default)]
    pub crop: Option<String>,
    /// Production volume in the dataset's own units.
    #[serde(rename = "Production", default)]
    pub production: Option<f64>,
}

/// Correlation result with the service's plain-language reading of it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationAnalysis {
    /// Pearson coefficient, or `null` when it could not be computed.
    #[serde(default)]
    pub correlation: Option<f64>,
    #[serde(default)]
    pub interpretation: Option<String>,
}

/// One row of the per-state comparison table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateComparison {
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Average_Rainfall", default)]
    pub average_rainfall: f64,
    #[serde(rename = "Min_Rainfall", default)]
    pub min_rainfall: f64,
    #[serde(rename = "Max_Rainfall", default)]
    pub max_rainfall: f64,
    #[serde(rename = "Production", default)]
    pub production: f64,
}

/// Entities the service extracted from the question.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub crops: Vec<String>,
    /// Analysis window in years.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub years: Option<i64>,
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
