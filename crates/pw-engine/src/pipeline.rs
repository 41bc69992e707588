//! Lookup pipeline — orchestrates all stages for one or many phone numbers.

use crate::dictionary::Dictionary;
use crate::{expander, formatter, pattern, substring, validator};
use pw_core::Result;
use rayon::prelude::*;
use std::path::Path;
use tracing::debug;

/// Keep ASCII letters and digits, drop spaces and punctuation.
///
/// Non-ASCII letters and digits are dropped as well.
pub fn normalize(phone_number: &str) -> String {
    phone_number
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Outcome of one phone number with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub phone_number: String,
    pub normalized: String,
    pub substrings: usize,
    pub patterns: usize,
    pub candidates: usize,
    pub phonewords: Vec<String>,
}

impl Lookup {
    /// Fraction of generated candidates that survived validation.
    pub fn acceptance(&self) -> f64 {
        if self.candidates == 0 {
            return 0.0;
        }
        self.phonewords.len() as f64 / self.candidates as f64
    }
}

/// The phoneword engine. Owns the dictionary and only reads it.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    dictionary: Dictionary,
}

impl Engine {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Build an engine from a newline-delimited word list.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        dictionary.import_from_file(path)?;
        Ok(Self::new(dictionary))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// All dash-formatted phonewords for a number.
    ///
    /// Results follow pattern discovery order, then expansion order. Two
    /// patterns that format to the same string both contribute it.
    pub fn find_phonewords(&self, phone_number: &str) -> Vec<String> {
        self.lookup(phone_number).phonewords
    }

    /// Run every stage for one number and keep the counts.
    pub fn lookup(&self, phone_number: &str) -> Lookup {
        let normalized = normalize(phone_number);
        let (substrings, patterns, candidates, phonewords) = self.run(&normalized);

        let lookup = Lookup {
            phone_number: phone_number.to_string(),
            normalized,
            substrings,
            patterns,
            candidates,
            phonewords,
        };
        debug!(
            "{}: {} substrings, {} patterns, {} candidates, {} phonewords ({:.1}% accepted)",
            lookup.phone_number,
            lookup.substrings,
            lookup.patterns,
            lookup.candidates,
            lookup.phonewords.len(),
            lookup.acceptance() * 100.0
        );
        lookup
    }

    fn run(&self, digits: &str) -> (usize, usize, usize, Vec<String>) {
        let substrings = substring::find_all_substrings(digits, &self.dictionary);
        let patterns = pattern::generate_patterns(&substrings);

        let mut candidates = 0;
        let mut phonewords = Vec::new();
        for p in &patterns {
            let expanded = expander::expand(digits, p, &self.dictionary);
            candidates += expanded.len();
            phonewords.extend(
                expanded
                    .iter()
                    .filter(|c| validator::is_valid(c))
                    .map(|c| formatter::format(c, p)),
            );
        }

        (substrings.len(), patterns.len(), candidates, phonewords)
    }

    /// Look up a batch in parallel. Results keep the input order.
    pub fn find_all<S>(&self, phone_numbers: &[S]) -> Vec<Lookup>
    where
        S: AsRef<str> + Sync,
    {
        phone_numbers
            .par_iter()
            .map(|number| self.lookup(number.as_ref()))
            .collect()
    }

    /// Batch lookup flattened into one list of phonewords.
    pub fn find_all_flat<S>(&self, phone_numbers: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        phone_numbers
            .par_iter()
            .flat_map_iter(|number| self.find_phonewords(number.as_ref()))
            .collect()
    }
}
