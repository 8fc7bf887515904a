use super::*;

// =============================================================
// parse_years
// =============================================================

#[test]
fn parse_years_accepts_plain_integers() {
    assert_eq!(parse_years("5"), 5);
    assert_eq!(parse_years(" 12 "), 12);
    assert_eq!(parse_years("20"), 20);
}

#[test]
fn parse_years_falls_back_for_empty_or_non_numeric() {
    assert_eq!(parse_years(""), DEFAULT_YEARS);
    assert_eq!(parse_years("   "), DEFAULT_YEARS);
    assert_eq!(parse_years("abc"), DEFAULT_YEARS);
    assert_eq!(parse_years("1.5"), DEFAULT_YEARS);
}

#[test]
fn parse_years_treats_zero_as_unusable() {
    assert_eq!(parse_years("0"), DEFAULT_YEARS);
}

#[test]
fn parse_years_passes_out_of_range_values_verbatim() {
    assert_eq!(parse_years("21"), 21);
    assert_eq!(parse_years("100"), 100);
}

// =============================================================
// compose_query
// =============================================================

#[test]
fn compose_query_with_states_only() {
    assert_eq!(
        compose_query("Maharashtra, Gujarat", "", "5"),
        "Analyze rainfall and crop production in Maharashtra, Gujarat for the last 5 years and report correlations."
    );
}

#[test]
fn compose_query_all_fields_empty_uses_defaults() {
    assert_eq!(
        compose_query("", "", ""),
        "Analyze rainfall and crop production across all major states for the last 5 years and report correlations."
    );
}

#[test]
fn compose_query_includes_crops_clause_when_present() {
    assert_eq!(
        compose_query("Punjab", "Wheat, Rice", "10"),
        "Analyze rainfall and crop production in Punjab focusing on Wheat, Rice for the last 10 years and report correlations."
    );
}

#[test]
fn compose_query_trims_whitespace_fields() {
    assert_eq!(
        compose_query("  ", " Wheat ", " 3 "),
        "Analyze rainfall and crop production across all major states focusing on Wheat for the last 3 years and report correlations."
    );
}
