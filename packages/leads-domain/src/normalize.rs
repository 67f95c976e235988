//! Canonical forms for the loosely-typed fields carried by stored leads and
//! client requests. Every comparison elsewhere assumes both sides went
//! through these.

pub fn lead_type(value: &str) -> String {
	value.trim().to_ascii_lowercase()
}

pub fn region(value: &str) -> String {
	value.trim().to_ascii_uppercase()
}

/// Keeps the leading five digits of whatever postal representation the input
/// carries; shorter digit runs pass through as-is.
pub fn postal_code(value: &str) -> String {
	value.chars().filter(char::is_ascii_digit).take(5).collect()
}
