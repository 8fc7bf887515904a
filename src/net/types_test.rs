use super::*;

// =============================================================
// Helpers
// =============================================================

fn full_response_json() -> &'static str {
    r#"{
        "summary": "Rainfall and production are positively correlated.",
        "analysis": {
            "rainfall_analysis": [
                {"State": "Punjab", "Average_Rainfall": 650},
                {"State": "Maharashtra", "Average_Rainfall": 1100.5}
            ],
            "crop_analysis": [
                {"State": "Punjab", "Crop": "Wheat", "Production": 17000},
                {"State": "Punjab", "Crop": "Rice", "Production": 12000}
            ],
            "correlation_analysis": {"correlation": 0.82, "interpretation": "strong positive"},
            "state_comparison": [
                {"State": "Punjab", "Average_Rainfall": 650, "Min_Rainfall": 400, "Max_Rainfall": 900, "Production": 29000}
            ]
        },
        "entities": {"states": ["Punjab", "Maharashtra"], "crops": ["Wheat"], "years": 5},
        "citations": ["https://data.gov.in/resource/abc"],
        "data_source": "data.gov.in"
    }"#
}

// =============================================================
// QueryRequest
// =============================================================

#[test]
fn query_request_serializes_expected_body() {
    let body = QueryRequest {
        query: "Compare rainfall in Punjab".to_owned(),
    };
    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        r#"{"query":"Compare rainfall in Punjab"}"#
    );
}

// =============================================================
// QueryResponse — full payload
// =============================================================

#[test]
fn query_response_decodes_full_payload() {
    let resp: QueryResponse = serde_json::from_str(full_response_json()).unwrap();
    assert_eq!(resp.summary, "Rainfall and production are positively correlated.");
    assert_eq!(resp.citations.len(), 1);
    assert_eq!(resp.data_source.as_deref(), Some("data.gov.in"));

    let analysis = resp.analysis.unwrap();
    assert_eq!(analysis.rainfall_analysis.len(), 2);
    assert_eq!(analysis.rainfall_analysis[0].state, "Punjab");
    assert!((analysis.rainfall_analysis[1].average_rainfall - 1100.5).abs() < 1e-9);
    assert_eq!(analysis.crop_analysis[0].crop.as_deref(), Some("Wheat"));
    assert_eq!(
        analysis.correlation_analysis.unwrap().correlation,
        Some(0.82)
    );
    assert_eq!(analysis.state_comparison[0].max_rainfall, 900.0);

    let entities = resp.entities.unwrap();
    assert_eq!(entities.states, vec!["Punjab", "Maharashtra"]);
    assert_eq!(entities.years, Some(5));
}

// =============================================================
// QueryResponse — tolerance
// =============================================================

#[test]
fn query_response_tolerates_all_optional_fields_absent() {
    let resp: QueryResponse = serde_json::from_str(r#"{"summary": "hello"}"#).unwrap();
    assert_eq!(resp.summary, "hello");
    assert!(resp.analysis.is_none());
    assert!(resp.entities.is_none());
    assert!(resp.citations.is_empty());
    assert!(resp.data_source.is_none());
}

#[test]
fn query_response_missing_summary_gets_placeholder() {
    let resp: QueryResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.summary, "No result found.");
}

#[test]
fn analysis_sub_objects_decode_independently() {
    // Only rainfall present.
    let resp: QueryResponse = serde_json::from_str(
        r#"{"summary": "x", "analysis": {"rainfall_analysis": [{"State": "Punjab", "Average_Rainfall": 650}]}}"#,
    )
    .unwrap();
    let analysis = resp.analysis.unwrap();
    assert_eq!(analysis.rainfall_analysis.len(), 1);
    assert!(analysis.crop_analysis.is_empty());
    assert!(analysis.correlation_analysis.is_none());
    assert!(analysis.state_comparison.is_empty());

    // Only correlation present.
    let resp: QueryResponse = serde_json::from_str(
        r#"{"summary": "x", "analysis": {"correlation_analysis": {"correlation": null}}}"#,
    )
    .unwrap();
    let analysis = resp.analysis.unwrap();
    assert!(analysis.rainfall_analysis.is_empty());
    assert_eq!(analysis.correlation_analysis.unwrap().correlation, None);
}

#[test]
fn crop_record_without_crop_or_production_decodes() {
    let record: CropRecord =
        serde_json::from_str(r#"{"State": "Karnataka", "Production": 5000}"#).unwrap();
    assert_eq!(record.crop, None);
    assert_eq!(record.production, Some(5000.0));

    let record: CropRecord = serde_json::from_str(r#"{"State": "Karnataka"}"#).unwrap();
    assert_eq!(record.production, None);
}

#[test]
fn state_comparison_missing_numbers_default_to_zero() {
    let row: StateComparison = serde_json::from_str(r#"{"State": "Punjab"}"#).unwrap();
    assert_eq!(row.average_rainfall, 0.0);
    assert_eq!(row.min_rainfall, 0.0);
    assert_eq!(row.max_rainfall, 0.0);
    assert_eq!(row.production, 0.0);
}

#[test]
fn unknown_fields_are_ignored() {
    let resp: QueryResponse =
        serde_json::from_str(r#"{"summary": "x", "confidence": 0.9, "debug": {"ms": 12}}"#).unwrap();
    assert_eq!(resp.summary, "x");
}

// =============================================================
// Entities.years numeric tolerance
// =============================================================

#[test]
fn entities_years_accepts_integral_float() {
    let entities: Entities = serde_json::from_str(r#"{"years": 5.0}"#).unwrap();
    assert_eq!(entities.years, Some(5));
}

#[test]
fn entities_years_accepts_null() {
    let entities: Entities = serde_json::from_str(r#"{"years": null}"#).unwrap();
    assert_eq!(entities.years, None);
}

#[test]
fn entities_years_rejects_fractional_values() {
    assert!(serde_json::from_str::<Entities>(r#"{"years": 5.5}"#).is_err());
    assert!(serde_json::from_str::<Entities>(r#"{"years": "five"}"#).is_err());
}

// =============================================================
// Round-trips
// =============================================================

#[test]
fn query_response_round_trip() {
    let resp: QueryResponse = serde_json::from_str(full_response_json()).unwrap();
    let json = serde_json::to_string(&resp).unwrap();
    let back: QueryResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp, back);
}
