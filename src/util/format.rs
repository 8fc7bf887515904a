//! Number display helpers for KPI cards and the comparison table.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Round a display value to the nearest whole number.
#[allow(clippy::cast_possible_truncation)]
pub fn round_whole(value: f64) -> i64 {
    if value.is_finite() { value.round() as i64 } else { 0 }
}

/// Format a value with `,` thousands separators, keeping up to three
/// fractional digits.
///
/// Non-finite inputs render as `"0"` so a malformed payload cell never
/// produces `NaN` text in the table.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{rounded}");
    // Shortest-float display never emits exponents for realistic dataset
    // magnitudes, but pass the text through untouched if it ever does.
    if text.contains('e') || text.contains('E') {
        return text;
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
