pub mod constants;
pub mod in_flight;
pub mod parsing;
#[cfg(test)]
pub mod test_helpers;
pub mod validation;
