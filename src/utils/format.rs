// Display formatting in the Brazilian convention used by the dashboard:
// `R$ 1.234,56`, `66,7%`, `09/03/2025`

use chrono::NaiveDate;

/// Round `value` half-up at `decimals` places
///
/// Returns whether the rounded value is negative, plus its digits with the
/// decimal point removed, zero-padded to at least `decimals + 1` digits.
/// A fraction within one ulp of the half counts as the half, so 2.675
/// (stored as 2.67499999...) rounds up the way it reads.
fn round_half_up_digits(value: f64, decimals: usize) -> (bool, String) {
    let scaled = value.abs() * 10f64.powi(decimals as i32);
    let fraction = scaled.fract();
    let ulp = f64::from_bits(scaled.to_bits() + 1) - scaled;
    let rounded = if fraction != 0.0 && (fraction - 0.5).abs() < ulp {
        scaled.trunc() + 1.0
    } else {
        scaled.round()
    };
    let digits = format!("{:0>width$.0}", rounded, width = decimals + 1);
    (value < 0.0 && rounded > 0.0, digits)
}

/// Insert `.` as thousands separator into a string of digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format a currency amount, e.g. `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "R$ 0,00".to_string();
    }
    let (negative, digits) = round_half_up_digits(value, 2);
    let (units, cents) = digits.split_at(digits.len() - 2);
    format!(
        "R$ {}{},{}",
        if negative { "-" } else { "" },
        group_thousands(units),
        cents
    )
}

/// Format a value already in percentage units, e.g. `66,7%`
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0,0%".to_string();
    }
    let (negative, digits) = round_half_up_digits(value, 1);
    let (whole, tenths) = digits.split_at(digits.len() - 1);
    format!("{}{},{}%", if negative { "-" } else { "" }, whole, tenths)
}

/// Format a date as `DD/MM/YYYY`, or `-` when absent
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(5.0), "R$ 5,00");
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_currency(-1500.0), "R$ -1.500,00");
        assert_eq!(format_currency(f64::NAN), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(0.125), "R$ 0,13");
        assert_eq!(format_currency(2.675), "R$ 2,68");
        assert_eq!(format_currency(999.995), "R$ 1.000,00");
        assert_eq!(format_currency(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_large_amounts() {
        assert_eq!(format_currency(1e20), "R$ 100.000.000.000.000.000.000,00");
        assert_eq!(format_currency(-1e20), "R$ -100.000.000.000.000.000.000,00");
        assert_eq!(format_currency(1e15), "R$ 1.000.000.000.000.000,00");
    }

    #[test]
    fn test_format_currency_trillions_round_down() {
        assert_eq!(format_currency(2_000_000_000_000.004), "R$ 2.000.000.000.000,00");
        assert_eq!(format_currency(2_000_000_000_000.25), "R$ 2.000.000.000.000,25");
    }

    #[test]
    fn test_format_percentage_large_values() {
        assert_eq!(format_percentage(1e19), "10000000000000000000,0%");
        // Variance of a large actual cost against a one-cent plan
        let variance = (1e15 - 0.01) / 0.01 * 100.0;
        assert!(format_percentage(variance).starts_with("100000000000000000"));
        assert!(!format_percentage(variance).starts_with("18446744073709551"));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0,0%");
        assert_eq!(format_percentage(200.0 / 3.0), "66,7%");
        assert_eq!(format_percentage(100.0 / 3.0), "33,3%");
        assert_eq!(format_percentage(12.25), "12,3%");
        assert_eq!(format_percentage(-5.0), "-5,0%");
        assert_eq!(format_percentage(f64::INFINITY), "0,0%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1.000");
        assert_eq!(group_thousands("1234567"), "1.234.567");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 3, 9)), "09/03/2025");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let first = format_currency(98765.4321);
        let second = format_currency(98765.4321);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
