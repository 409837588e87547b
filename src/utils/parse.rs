// Cell parsing for the project export
// Blank handling is the caller's job; these only see non-blank text

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a decimal number, accepting a comma as decimal separator
///
/// `1234.5` and `1234,5` are both accepted. A value that mixes both
/// separators is rejected rather than guessed at.
pub fn parse_decimal(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty value".to_string());
    }

    let normalized = if s.contains(',') {
        if s.contains('.') || s.matches(',').count() > 1 {
            return Err(format!("ambiguous decimal separators in '{}'", s));
        }
        s.replace(',', ".")
    } else {
        s.to_string()
    };

    let value = normalized
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", s));
    }
    Ok(value)
}

/// Parse a completion cell into percentage units
///
/// `70`, `70%`, `70,5%` and `0,7%` are all accepted; the trailing percent
/// sign is optional. Out-of-range values pass through unchanged.
pub fn parse_percentage(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let number = s.strip_suffix('%').unwrap_or(s);
    parse_decimal(number)
}

/// Parse a calendar date (ISO, ISO with time, or DD/MM/YYYY)
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(datetime.date());
        }
    }
    Err(format!("'{}' is not a recognised date", s))
}
