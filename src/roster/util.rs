/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Formats a grade with at most two fractional digits: fixed-point, `.` as
/// the decimal separator, no grouping, trailing zeros and a bare decimal
/// point dropped.
pub fn format_grade(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[90.0, 85.5, 100.0, 70.0]), 86.375);
    }

    #[test]
    fn test_format_drops_trailing_zeros() {
        assert_eq!(format_grade(90.0), "90");
        assert_eq!(format_grade(85.5), "85.5");
        assert_eq!(format_grade(100.0), "100");
        assert_eq!(format_grade(0.0), "0");
    }

    #[test]
    fn test_format_rounds_to_two_decimals() {
        assert_eq!(format_grade(86.375), "86.38");
        assert_eq!(format_grade(66.666), "66.67");
    }
}
