//! Formatting helpers for presenting literal figures.

/// `220556` -> `"220,556"`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// `"62.1% (137,039)"`
pub fn format_share(percent: f64, decimals: usize, count: u64) -> String {
    format!(
        "{} ({})",
        format_percent(percent, decimals),
        format_count(count)
    )
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        "—".to_string()
    }
}

/// Value label as drawn on a chart: whole numbers without decimals, anything
/// else with two (PRR values such as `0.82`), then the axis suffix.
pub fn format_value(value: f64, suffix: &str) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let whole = value as i64;
        let body = if whole >= 0 {
            format_count(whole as u64)
        } else {
            format!("-{}", format_count(whole.unsigned_abs()))
        };
        format!("{body}{suffix}")
    } else {
        format!("{value:.2}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(43_936), "43,936");
        assert_eq!(format_count(220_556), "220,556");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn percent_keeps_requested_precision() {
        assert_eq!(format_percent(42.0, 1), "42.0%");
        assert_eq!(format_percent(52.0, 0), "52%");
        assert_eq!(format_share(28.6, 1, 12_000), "28.6% (12,000)");
    }

    #[test]
    fn chart_values_drop_trailing_zeros_for_whole_numbers() {
        assert_eq!(format_value(60.0, "%"), "60%");
        assert_eq!(format_value(0.82, ""), "0.82");
        assert_eq!(format_value(22_027.0, ""), "22,027");
        assert_eq!(format_value(f64::NAN, "%"), "—");
        assert_eq!(format_number(f64::INFINITY, 2), "—");
    }
}
