//! Composed-query generation for the structured controls bar.
//!
//! DESIGN
//! ======
//! The controls bar never talks to the backend itself; it mechanically
//! assembles a natural-language query string from its form fields and hands
//! it to the chat interface, which treats it exactly like typed input.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

/// Years window used when the field is empty or not a usable number.
pub const DEFAULT_YEARS: i64 = 5;

/// Parse the raw years field, falling back to [`DEFAULT_YEARS`].
///
/// Zero counts as unusable (an empty analysis window), matching the
/// behavior of the widget's numeric coercion. Out-of-range but numeric
/// values pass through verbatim; the input widget's 1..=20 bounds are
/// advisory only.
pub fn parse_years(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|years| *years != 0)
        .unwrap_or(DEFAULT_YEARS)
}

/// Assemble the composed query string from the three form fields.
///
/// Empty `states` widens the query to all major states; empty `crops`
/// drops the focus clause entirely.
pub fn compose_query(states: &str, crops: &str, years: &str) -> String {
    let states = states.trim();
    let crops = crops.trim();
    let years = parse_years(years);

    let states_part = if states.is_empty() {
        " across all major states".to_owned()
    } else {
        format!(" in {states}")
    };
    let crops_part = if crops.is_empty() {
        String::new()
    } else {
        format!(" focusing on {crops}")
    };

    format!(
        "Analyze rainfall and crop production{states_part}{crops_part} for the last {years} years and report correlations."
    )
}
