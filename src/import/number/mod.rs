use lazy_static::lazy_static;
use regex::Regex;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref INTEGER_PREFIX_REGEX: Regex = Regex::new(r"^[+-]?\d+").unwrap();
    static ref FLOAT_PREFIX_REGEX: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap();
}

// Spreadsheet cells often carry units or stray text after the number
// ("30 min", "2 marks"), so only the leading numeric prefix is read.

pub fn parse_integer(cell: &str) -> Option<i64> {
    let prefix = INTEGER_PREFIX_REGEX.find(cell.trim())?;
    prefix.as_str().parse().ok()
}

pub fn parse_float(cell: &str) -> Option<f64> {
    let prefix = FLOAT_PREFIX_REGEX.find(cell.trim())?;
    prefix
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn parse_bool(cell: &str) -> bool {
    match cell.trim().to_lowercase().as_ref() {
        "true" | "1" => true,
        _ => false,
    }
}
