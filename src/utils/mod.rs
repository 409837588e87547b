pub mod format;
pub mod parse;

pub use format::{format_currency, format_date, format_percentage};
pub use parse::{parse_date, parse_decimal, parse_percentage};
