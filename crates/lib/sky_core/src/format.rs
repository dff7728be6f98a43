//! Display formatting for dates and amounts (pt-BR conventions, MZN currency).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Currency code shown in front of amounts.
pub const CURRENCY: &str = "MZN";

/// Format a backend timestamp as `dd/mm/yyyy, HH:MM`.
///
/// Accepts RFC 3339 (shown in its own offset), naive ISO date-times with a
/// `T` or space separator, and plain `yyyy-mm-dd` dates. Anything else is
/// returned unchanged.
pub fn format_date(input: &str) -> String {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return dt.format("%d/%m/%Y, %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, pattern) {
            return dt.format("%d/%m/%Y, %H:%M").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }

    input.to_string()
}

/// Format an amount as `MZN 1.234,56`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{CURRENCY} {value}");
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}{CURRENCY} {},{fraction:02}", group_thousands(units))
}

fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Read a number from a JSON value that may carry it as a number or as a
/// numeric string (the backend does both).
pub fn number_from_json(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn formats_naive_iso_timestamps() {
        assert_eq!(format_date("2024-03-05T14:07:59"), "05/03/2024, 14:07");
        assert_eq!(format_date("2024-03-05T14:07:59.123456"), "05/03/2024, 14:07");
        assert_eq!(format_date("2024-03-05 14:07:59"), "05/03/2024, 14:07");
    }

    #[test]
    fn formats_rfc3339_in_its_own_offset() {
        assert_eq!(format_date("2024-12-31T23:30:00+02:00"), "31/12/2024, 23:30");
        assert_eq!(format_date("2024-12-31T23:30:00Z"), "31/12/2024, 23:30");
    }

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_date("2024-01-02"), "02/01/2024");
    }

    #[test]
    fn leaves_unparseable_dates_alone() {
        assert_eq!(format_date("ontem"), "ontem");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn formats_currency_with_grouping() {
        assert_eq!(format_currency(0.0), "MZN 0,00");
        assert_eq!(format_currency(5.5), "MZN 5,50");
        assert_eq!(format_currency(999.999), "MZN 1.000,00");
        assert_eq!(format_currency(1234.56), "MZN 1.234,56");
        assert_eq!(format_currency(1_234_567.0), "MZN 1.234.567,00");
        assert_eq!(format_currency(-42.1), "-MZN 42,10");
    }

    #[test]
    fn reads_numbers_and_numeric_strings() {
        assert_eq!(number_from_json(&json!(12.5)), Some(12.5));
        assert_eq!(number_from_json(&json!("1500.00")), Some(1500.0));
        assert_eq!(number_from_json(&json!("abc")), None);
        assert_eq!(number_from_json(&json!(null)), None);
    }
}
