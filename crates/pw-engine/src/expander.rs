//! Word expansion — every concrete word substitution of one pattern.

use crate::dictionary::Dictionary;
use crate::pattern::Pattern;
use crate::substring::SubString;

/// Number of candidates a pattern expands into.
pub fn candidate_count(pattern: &Pattern<'_>, dictionary: &Dictionary) -> usize {
    pattern
        .iter()
        .map(|member| dictionary.words(member.value).len())
        .product()
}

/// Substitute dictionary words into `original` for every member of `pattern`.
///
/// Each choice of one word per member appears exactly once. Row `r` takes word
/// `(r / stride) % W` for a member with `W` words, where `stride` is the
/// product of the word counts of the members before it, so the first member
/// varies fastest.
pub fn expand(original: &str, pattern: &Pattern<'_>, dictionary: &Dictionary) -> Vec<String> {
    let total = candidate_count(pattern, dictionary);
    let mut rows = vec![original.to_string(); total];

    let mut stride = 1;
    for member in pattern {
        let words = dictionary.words(member.value);
        for (row, candidate) in rows.iter_mut().enumerate() {
            let word = &words[(row / stride) % words.len()];
            *candidate = splice(candidate, member, word);
        }
        stride *= words.len();
    }

    rows
}

/// Replace the `[start, end]` span of `text` with `word`.
///
/// The span must lie inside `text`; release builds leave `text` unchanged
/// when it does not.
pub fn splice(text: &str, span: &SubString<'_>, word: &str) -> String {
    debug_assert!(
        span.start <= span.end && span.end < text.len(),
        "span [{}, {}] outside text of length {}",
        span.start,
        span.end,
        text.len()
    );
    match (text.get(..span.start), text.get(span.end + 1..)) {
        (Some(head), Some(tail)) => {
            let mut out = String::with_capacity(head.len() + word.len() + tail.len());
            out.push_str(head);
            out.push_str(word);
            out.push_str(tail);
            out
        }
        _ => text.to_string(),
    }
}
