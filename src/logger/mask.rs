//! Card-data masking policy
//!
//! Applied to every parameter map before it is encoded and persisted. Only
//! top-level keys are inspected; nested maps pass through untouched.

use super::record::{Params, Value};

/// Mask sensitive card fields in a parameter map
///
/// - `pan`: first six digits and everything after position 12 stay visible,
///   the middle is masked
/// - `cvv`: removed entirely, never persisted
/// - `cardindex`: first two and last two characters stay visible
pub fn apply(mut params: Params) -> Params {
    if let Some(value) = params.get("pan") {
        if !value.is_map() {
            let masked = mask_pan(&value.to_string());
            params.insert("pan", masked);
        }
    }

    params.remove("cvv");

    if let Some(value) = params.get("cardindex") {
        if !value.is_map() {
            let masked = mask_cardindex(&value.to_string());
            params.insert("cardindex", masked);
        }
    }

    params
}

/// `1234567890123456` -> `1234 56** **** 3456`
///
/// Out-of-range segments degrade to empty strings, so short inputs never
/// panic.
fn mask_pan(pan: &str) -> String {
    format!(
        "{} {}** **** {}",
        chars_range(pan, 0, 4),
        chars_range(pan, 4, 2),
        chars_from(pan, 12)
    )
}

/// `1234` -> `12**34`
fn mask_cardindex(index: &str) -> String {
    let count = index.chars().count();
    format!(
        "{}**{}",
        chars_range(index, 0, 2),
        chars_from(index, count.saturating_sub(2))
    )
}

fn chars_range(s: &str, start: usize, len: usize) -> String {
    s.chars().skip(start).take(len).collect()
}

fn chars_from(s: &str, start: usize) -> String {
    s.chars().skip(start).collect()
}
