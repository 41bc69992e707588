//! Pattern generation — groups of non-overlapping matches expanded together.
//!
//! For a dictionary `{AAA, BBB, DDD}` and the number `2222333` the matches are
//! `222@0`, `222@1` and `333@4`. They combine into the patterns
//! `{222@0}`, `{222@1}`, `{333@4}`, `{222@0, 333@4}` and `{222@1, 333@4}`;
//! `{222@0, 222@1}` overlaps and is dropped.

use crate::substring::SubString;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// A set of mutually non-conflicting matches from one phone number.
///
/// Members keep their construction order (the anchor first), which drives the
/// order of expansion. Equality ignores that order.
#[derive(Debug, Clone, Default)]
pub struct Pattern<'a> {
    members: Vec<SubString<'a>>,
}

impl<'a> Pattern<'a> {
    pub fn new(members: Vec<SubString<'a>>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[SubString<'a>] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubString<'a>> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True when no two distinct members overlap.
    pub fn is_consistent(&self) -> bool {
        self.members.iter().enumerate().all(|(i, a)| {
            self.members[i + 1..]
                .iter()
                .all(|b| a == b || !a.conflicts_with(b))
        })
    }

    fn canonical(&self) -> Vec<SubString<'a>> {
        let mut key = self.members.clone();
        key.sort_by_key(|s| (s.start, s.end, s.value, s.original));
        key.dedup();
        key
    }
}

impl PartialEq for Pattern<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Pattern<'_> {}

impl Hash for Pattern<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl<'p, 'a> IntoIterator for &'p Pattern<'a> {
    type Item = &'p SubString<'a>;
    type IntoIter = std::slice::Iter<'p, SubString<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Build every consistent pattern from the ordered match list, without duplicates.
///
/// Singletons come first. Then, for each group size `k`, each anchor `i` and
/// each window start `j > i`, the anchor is grouped with up to `k - 1` matches
/// read from `j` onwards. Groups that overlap internally or repeat an earlier
/// member set are dropped; the first occurrence wins.
///
/// The windows only group matches that sit next to each other in the list, so
/// a final pass appends every maximal non-overlapping set they missed, in
/// ascending order of member indices.
pub fn generate_patterns<'a>(substrings: &[SubString<'a>]) -> Vec<Pattern<'a>> {
    let arena = Arena::new(substrings);
    let n = substrings.len();
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    let mut patterns = Vec::new();

    let mut accept = |group: &[usize]| {
        if arena.is_consistent(group) && seen.insert(arena.key(group)) {
            patterns.push(arena.pattern(group));
        }
    };

    for i in 0..n {
        accept(&[i]);
    }

    let mut group = Vec::with_capacity(n);
    for size in 2..=n {
        for anchor in 0..n {
            for window in anchor + 1..n {
                group.clear();
                group.push(anchor);
                for next in (window..n).take(size) {
                    if group.len() == size {
                        break;
                    }
                    if !arena.same(next, anchor) {
                        group.push(next);
                    }
                }
                if group.len() == size {
                    accept(&group);
                }
            }
        }
    }

    for group in arena.maximal_groups() {
        accept(&group);
    }

    patterns
}

/// Matches stored once; groups refer to them by index.
struct Arena<'s, 'a> {
    substrings: &'s [SubString<'a>],
    /// Index of the first structurally equal match, per index.
    canonical: Vec<usize>,
}

impl<'s, 'a> Arena<'s, 'a> {
    fn new(substrings: &'s [SubString<'a>]) -> Self {
        let mut first: HashMap<&SubString<'a>, usize> = HashMap::new();
        let canonical = substrings
            .iter()
            .enumerate()
            .map(|(i, s)| *first.entry(s).or_insert(i))
            .collect();
        Self { substrings, canonical }
    }

    fn same(&self, a: usize, b: usize) -> bool {
        self.canonical[a] == self.canonical[b]
    }

    /// Distinct matches that do not overlap.
    fn compatible(&self, a: usize, b: usize) -> bool {
        !self.same(a, b) && !self.substrings[a].conflicts_with(&self.substrings[b])
    }

    fn is_consistent(&self, group: &[usize]) -> bool {
        group.iter().enumerate().all(|(pos, &a)| {
            group[pos + 1..].iter().all(|&b| {
                self.same(a, b) || !self.substrings[a].conflicts_with(&self.substrings[b])
            })
        })
    }

    /// Sorted canonical indices; order-independent identity of a group.
    fn key(&self, group: &[usize]) -> Vec<usize> {
        let mut key: Vec<usize> = group.iter().map(|&i| self.canonical[i]).collect();
        key.sort_unstable();
        key.dedup();
        key
    }

    /// Every maximal set of pairwise compatible matches (Bron-Kerbosch with
    /// pivot over the compatibility graph), each sorted, in ascending order.
    fn maximal_groups(&self) -> Vec<Vec<usize>> {
        let distinct: Vec<usize> = (0..self.substrings.len())
            .filter(|&i| self.canonical[i] == i)
            .collect();
        let mut found = Vec::new();
        self.extend_group(&mut Vec::new(), distinct, Vec::new(), &mut found);
        for group in &mut found {
            group.sort_unstable();
        }
        found.sort();
        found
    }

    fn extend_group(
        &self,
        group: &mut Vec<usize>,
        mut candidates: Vec<usize>,
        mut excluded: Vec<usize>,
        found: &mut Vec<Vec<usize>>,
    ) {
        let Some(&pivot) = candidates.first() else {
            if excluded.is_empty() && !group.is_empty() {
                found.push(group.clone());
            }
            return;
        };

        // The pivot itself is never compatible with itself, so it is always branched on.
        let branch: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&v| !self.compatible(pivot, v))
            .collect();
        for v in branch {
            let next_candidates = candidates.iter().copied().filter(|&u| self.compatible(v, u)).collect();
            let next_excluded = excluded.iter().copied().filter(|&u| self.compatible(v, u)).collect();
            group.push(v);
            self.extend_group(group, next_candidates, next_excluded, found);
            group.pop();
            candidates.retain(|&u| u != v);
            excluded.push(v);
        }
    }

    fn pattern(&self, group: &[usize]) -> Pattern<'a> {
        let mut taken = HashSet::new();
        let members = group
            .iter()
            .filter(|&&i| taken.insert(self.canonical[i]))
            .map(|&i| self.substrings[i])
            .collect();
        Pattern::new(members)
    }
}
