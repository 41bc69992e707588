//! Encoded dictionary — keypad digits → words sharing that encoding.

use crate::encoder;
use pw_core::{PhonewordError, Result};
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Word list indexed by keypad encoding.
///
/// Built once through [`Dictionary::add_word`] or one of the import methods,
/// then only read. Words keep their insertion order inside each bucket.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
    /// 0 while the dictionary is empty.
    shortest_word_length: usize,
    word_count: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word. Returns false when the word is empty or cannot be encoded.
    pub fn add_word(&mut self, word: &str) -> bool {
        self.try_add_word(word).unwrap_or_else(|err| {
            warn!("Cannot add word [{}] into the dictionary - {}", word, err);
            false
        })
    }

    /// Like [`Dictionary::add_word`], but only recoverable encoder failures
    /// become `Ok(false)`; anything else is returned to the caller.
    pub fn try_add_word(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() {
            return Ok(false);
        }

        let word = word.to_uppercase();
        let encoded = match encoder::encode(&word) {
            Ok(encoded) => encoded,
            Err(err) if err.is_recoverable() => {
                warn!("Cannot add word [{}] into the dictionary - {}", word, err);
                return Ok(false);
            }
            Err(err) => return Err(err),
        };

        let length = encoded.len();
        self.entries.entry(encoded).or_default().push(word);
        self.word_count += 1;
        if self.shortest_word_length == 0 || length < self.shortest_word_length {
            self.shortest_word_length = length;
        }
        Ok(true)
    }

    /// Import a newline-delimited word list. Returns the number of words accepted.
    pub fn import_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PhonewordError::DictionaryNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        let added = self.import_from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} words ({} encodings) from {}",
            added,
            self.entries.len(),
            path.display()
        );
        Ok(added)
    }

    /// Feed every line to [`Dictionary::try_add_word`]; rejected lines are skipped.
    pub fn import_from_reader(&mut self, reader: impl BufRead) -> Result<usize> {
        let mut added = 0;
        for line in reader.lines() {
            if self.try_add_word(&line?)? {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn contains(&self, encoding: &str) -> bool {
        self.entries.contains_key(encoding)
    }

    /// Words for an encoding, in insertion order. Empty if unknown.
    pub fn words(&self, encoding: &str) -> &[String] {
        self.entries.get(encoding).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn shortest_word_length(&self) -> usize {
        self.shortest_word_length
    }

    /// Number of accepted words (duplicates included).
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of distinct encodings.
    pub fn encodings(&self) -> usize {
        self.entries.len()
    }
}

impl<'w> Extend<&'w str> for Dictionary {
    fn extend<I: IntoIterator<Item = &'w str>>(&mut self, iter: I) {
        for word in iter {
            self.add_word(word);
        }
    }
}

impl<'w> FromIterator<&'w str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'w str>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}
