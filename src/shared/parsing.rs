use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading decimal number of a string, the way browsers read `"-6.2 S"` as -6.2.
    /// - Matches: "-6.2", "106.8", ".5", "1e3", "12.5abc" (prefix "12.5")
    /// - No match: "-", "", "abc", "e5"
    pub static ref DECIMAL_PREFIX_REGEX: Regex =
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap();

    /// Leading base-10 integer of a string
    pub static ref INTEGER_PREFIX_REGEX: Regex = Regex::new(r"^[+-]?\d+").unwrap();
}

/// Parse the leading decimal number of `raw`, ignoring surrounding whitespace.
///
/// Returns None for strings with no numeric prefix and for non-finite values.
pub fn parse_decimal_prefix(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let matched = DECIMAL_PREFIX_REGEX.find(trimmed)?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Latitude/longitude strings from the API; anything unparseable becomes 0.0.
pub fn parse_coordinate(raw: &str) -> f64 {
    parse_decimal_prefix(raw).unwrap_or(0.0)
}

/// Parse the leading integer of `raw` ("15000.50" -> 15000).
pub fn parse_integer_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let matched = INTEGER_PREFIX_REGEX.find(trimmed)?;
    matched.as_str().parse::<i64>().ok()
}
