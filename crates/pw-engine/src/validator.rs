//! Validation — reject candidates that still hold two adjacent digits.

use regex::Regex;
use std::sync::LazyLock;

static RE_CONSECUTIVE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{2}").unwrap());

/// True when the candidate has no two consecutive un-replaced digits.
pub fn is_valid(candidate: &str) -> bool {
    !contains_consecutive_digits(candidate)
}

pub fn contains_consecutive_digits(candidate: &str) -> bool {
    RE_CONSECUTIVE_DIGITS.is_match(candidate)
}
