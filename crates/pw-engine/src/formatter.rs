//! Formatting — dashes between substituted words and leftover digits.

use crate::pattern::Pattern;
use regex::Regex;
use std::sync::LazyLock;

static RE_MULTI_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Insert dashes around every member span of `pattern` in `phoneword`.
///
/// Boundaries are visited from the highest index down so earlier insertions
/// never shift later ones. The side alternates starting on the right: an
/// `end` gets its dash after it, a `start` before it. A single-digit member
/// contributes its index twice, once per side. No dash is placed past the
/// last character or before the first one.
pub fn format(phoneword: &str, pattern: &Pattern<'_>) -> String {
    let mut boundaries: Vec<usize> = pattern.iter().flat_map(|s| [s.start, s.end]).collect();
    boundaries.sort_unstable_by(|a, b| b.cmp(a));

    let mut word = phoneword.to_string();
    let mut right = true;
    for index in boundaries {
        let at = if right { index + 1 } else { index };
        let edge = if right { at >= word.len() } else { at == 0 };
        if !edge && word.is_char_boundary(at) {
            word.insert(at, '-');
        }
        right = !right;
    }

    collapse_dashes(&word)
}

/// Replace runs of dashes with a single dash.
pub fn collapse_dashes(text: &str) -> String {
    RE_MULTI_DASH.replace_all(text, "-").into_owned()
}
