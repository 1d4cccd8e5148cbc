/// Format an integer count with thousands separators.
///
/// # Examples
///
/// ```
/// use dash_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1_234), "1,234");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a minutes total with thousands separators and two decimal places.
///
/// # Examples
///
/// ```
/// use dash_core::formatting::format_minutes;
///
/// assert_eq!(format_minutes(0.0), "0.00");
/// assert_eq!(format_minutes(1234.5), "1,234.50");
/// ```
pub fn format_minutes(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let integer_part = rounded.trunc() as u64;
    let frac = ((rounded - rounded.trunc()) * 100.0).round() as u64;
    format!("{}.{:02}", group_thousands(&integer_part.to_string()), frac)
}

/// Render an average-minutes figure for display.
///
/// `None` is the defined result for an empty subset and renders as
/// `"no data"` rather than NaN; present values are rounded to two
/// decimal places.
///
/// # Examples
///
/// ```
/// use dash_core::formatting::format_average;
///
/// assert_eq!(format_average(None), "no data");
/// assert_eq!(format_average(Some(12.345)), "12.35");
/// ```
pub fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(value) => format_minutes(value),
        None => "no data".to_string(),
    }
}

/// Format a minutes figure as a compact hours/minutes duration.
///
/// # Examples
///
/// ```
/// use dash_core::formatting::format_duration;
///
/// assert_eq!(format_duration(45.0), "45m");
/// assert_eq!(format_duration(60.0), "1h");
/// assert_eq!(format_duration(225.0), "3h 45m");
/// ```
pub fn format_duration(minutes: f64) -> String {
    let total_mins = minutes.round() as i64;
    if total_mins < 60 {
        format!("{}m", total_mins)
    } else {
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_count ─────────────────────────────────────────────────────

    #[test]
    fn test_format_count_small() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_format_count_thousands() {
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
    }

    #[test]
    fn test_format_count_millions() {
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    // ── format_minutes ───────────────────────────────────────────────────

    #[test]
    fn test_format_minutes_zero() {
        assert_eq!(format_minutes(0.0), "0.00");
    }

    #[test]
    fn test_format_minutes_two_decimals() {
        assert_eq!(format_minutes(12.3), "12.30");
        assert_eq!(format_minutes(12.345), "12.35");
    }

    #[test]
    fn test_format_minutes_grouped() {
        assert_eq!(format_minutes(1_234.5), "1,234.50");
    }

    #[test]
    fn test_format_minutes_rounds_carry() {
        // 9.999 rounds to 10.00, not 9.100.
        assert_eq!(format_minutes(9.999), "10.00");
    }

    // ── format_average ───────────────────────────────────────────────────

    #[test]
    fn test_format_average_none_is_no_data() {
        assert_eq!(format_average(None), "no data");
    }

    #[test]
    fn test_format_average_some() {
        assert_eq!(format_average(Some(180.0)), "180.00");
    }

    // ── format_duration ──────────────────────────────────────────────────

    #[test]
    fn test_format_duration_under_hour() {
        assert_eq!(format_duration(0.0), "0m");
        assert_eq!(format_duration(59.0), "59m");
    }

    #[test]
    fn test_format_duration_exact_hours() {
        assert_eq!(format_duration(60.0), "1h");
        assert_eq!(format_duration(180.0), "3h");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(90.0), "1h 30m");
        assert_eq!(format_duration(225.0), "3h 45m");
    }

    #[test]
    fn test_format_duration_fractional_rounds() {
        assert_eq!(format_duration(60.5), "1h 1m");
    }
}
