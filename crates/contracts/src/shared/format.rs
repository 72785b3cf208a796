/// Formats an integer with thousands separators.
///
/// # Examples
/// ```
/// use contracts::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Ratio rendered as a percentage: `0.8234` with 2 decimals -> `82.34%`.
pub fn format_percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

/// Whole-dollar amount with separators, negative values keep their sign.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format_number(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Rounds to a fixed number of decimals, as the generators store their samples.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.65, 2), "65.00%");
        assert_eq!(format_percent(0.8234, 1), "82.3%");
        assert_eq!(format_percent(1.0, 0), "100%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(4500.0), "$4,500");
        assert_eq!(format_currency(1_250_000.4), "$1,250,000");
        assert_eq!(format_currency(-3000.0), "-$3,000");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.8567, 2), 0.86);
        assert_eq!(round_to(3.14159, 1), 3.1);
    }
}
