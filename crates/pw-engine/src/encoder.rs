//! Keypad encoder — letter → digit printed on the same telephone key.

use pw_core::{PhonewordError, Result};

/// Keypad digit for a lower-case ASCII letter.
pub fn digit_for(c: char) -> Option<char> {
    let digit = match c {
        'a'..='c' => '2',
        'd'..='f' => '3',
        'g'..='i' => '4',
        'j'..='l' => '5',
        'm'..='o' => '6',
        'p'..='s' => '7',
        't'..='v' => '8',
        'w'..='z' => '9',
        _ => return None,
    };
    Some(digit)
}

/// Encode a word into its keypad digits, leftmost letter first.
///
/// Letters are lower-cased before lookup, so `"Hello"` and `"HELLO"` both give
/// `"43556"`. Anything outside `a-z` (digits, punctuation, whitespace,
/// non-ASCII letters) fails with [`PhonewordError::UnknownCharacter`].
pub fn encode(word: &str) -> Result<String> {
    word.chars()
        .map(|c| {
            digit_for(c.to_ascii_lowercase()).ok_or_else(|| PhonewordError::UnknownCharacter {
                word: word.to_string(),
                character: c,
            })
        })
        .collect()
}
