use crate::shared::parsing::parse_integer_prefix;

/// Render a rate string as Indonesian Rupiah: "15000" -> "Rp 15.000".
///
/// Only the leading integer is used ("15000.50" -> "Rp 15.000"). A rate
/// without a numeric prefix is returned unchanged.
pub fn format_rupiah(rate: &str) -> String {
    match parse_integer_prefix(rate) {
        Some(amount) if amount < 0 => format!("-Rp {}", group_thousands(amount.unsigned_abs())),
        Some(amount) => format!("Rp {}", group_thousands(amount.unsigned_abs())),
        None => rate.to_string(),
    }
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
