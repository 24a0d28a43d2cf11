//! Display formatting for metric values.
//!
//! Output follows en-US conventions: `,` groups thousands and `.` separates
//! a fixed number of fractional digits.

/// Formats `value` with thousands grouping and exactly `fraction_digits`
/// fractional digits.
///
/// # Example
///
/// ```
/// use mock_metrics::format_grouped;
///
/// assert_eq!(format_grouped(1_234_567.891, 2), "1,234,567.89");
/// assert_eq!(format_grouped(512.4, 0), "512");
/// ```
#[must_use]
pub fn format_grouped(value: f64, fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", fraction_digits, value.abs());
    let (integer, fraction) = fixed
        .split_once('.')
        .map_or((fixed.as_str(), None), |(whole, digits)| (whole, Some(digits)));

    let mut out = String::with_capacity(fixed.len() + integer.len());
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction_text) = fraction {
        out.push('.');
        out.push_str(fraction_text);
    }
    out
}

/// Formats a signed percentage with two fractional digits, e.g. `"-2.31%"`.
#[must_use]
pub fn format_percent(change: f64) -> String {
    format!("{change:.2}%")
}

/// Formats a metric value wrapped in its prefix and suffix.
#[must_use]
pub fn format_value(prefix: &str, value: f64, suffix: &str, fraction_digits: usize) -> String {
    format!(
        "{prefix}{}{suffix}",
        format_grouped(value, fraction_digits)
    )
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let groups: Vec<String> = chars
        .rchunks(3)
        .rev()
        .map(|group| group.iter().collect())
        .collect();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 2, "0.00")]
    #[case(999.999, 2, "1,000.00")]
    #[case(1_234.5, 2, "1,234.50")]
    #[case(123_456.0, 0, "123,456")]
    #[case(0.000_312_9, 4, "0.0003")]
    #[case(1_050_000_000.0, 0, "1,050,000,000")]
    #[case(-4_321.0, 1, "-4,321.0")]
    fn groups_and_rounds(#[case] value: f64, #[case] digits: usize, #[case] expected: &str) {
        assert_eq!(format_grouped(value, digits), expected);
    }

    #[rstest]
    #[case(2.5, "2.50%")]
    #[case(-4.999, "-5.00%")]
    #[case(0.0, "0.00%")]
    fn percent_keeps_sign(#[case] change: f64, #[case] expected: &str) {
        assert_eq!(format_percent(change), expected);
    }

    #[test]
    fn value_includes_prefix_and_suffix() {
        assert_eq!(format_value("$", 87.126, "B", 2), "$87.13B");
        assert_eq!(format_value("", 13_402.7, "ms", 0), "13,403ms");
    }
}
