//! Substring finder — every digit run of the number that is a dictionary key.

use crate::dictionary::Dictionary;

/// A dictionary match located inside a phone number.
///
/// `start` and `end` are inclusive indices into `original`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubString<'a> {
    pub original: &'a str,
    pub value: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> SubString<'a> {
    pub fn new(original: &'a str, value: &'a str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "substring span [{start}, {end}] is reversed");
        Self { original, value, start, end }
    }

    /// Closed-interval overlap; identical spans conflict too.
    pub fn conflicts_with(&self, other: &SubString<'_>) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// All matches of the dictionary inside `digits`.
///
/// Shorter matches come first; matches of the same length are ordered left to
/// right. Pattern generation depends on this order.
pub fn find_all_substrings<'a>(digits: &'a str, dictionary: &Dictionary) -> Vec<SubString<'a>> {
    let shortest = dictionary.shortest_word_length();
    if shortest == 0 || digits.len() < shortest {
        return Vec::new();
    }

    (shortest..=digits.len())
        .flat_map(|length| find_substrings_of_length(digits, dictionary, length))
        .collect()
}

/// Matches of exactly `length` digits, left to right.
pub fn find_substrings_of_length<'a>(
    digits: &'a str,
    dictionary: &Dictionary,
    length: usize,
) -> Vec<SubString<'a>> {
    if length == 0 || length > digits.len() {
        return Vec::new();
    }

    (0..=digits.len() - length)
        .filter_map(|start| {
            let end = start + length - 1;
            digits
                .get(start..=end)
                .filter(|value| dictionary.contains(value))
                .map(|value| SubString::new(digits, value, start, end))
        })
        .collect()
}
