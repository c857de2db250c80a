use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches any string containing at least one non-whitespace character
    /// - Valid: "JKT1114500", " BPN2001900 ", "a"
    /// - Invalid: "", "   ", "\t\n"
    pub static ref NOT_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}
