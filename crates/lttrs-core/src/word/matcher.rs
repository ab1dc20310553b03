//! Letter-multiset matching.

use std::collections::HashMap;

/// Letter frequencies of a word, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: HashMap<char, usize>,
}

impl LetterCounts {
    pub fn of(word: &str) -> Self {
        let mut counts = HashMap::new();
        for c in word.chars().flat_map(char::to_lowercase) {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Whether `candidate` can be spelled with these letters, using each at
    /// most as often as it occurs here. An empty candidate never can.
    pub fn can_spell(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }

        let mut remaining = self.counts.clone();
        for c in candidate.chars().flat_map(char::to_lowercase) {
            match remaining.get_mut(&c) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

/// Tests whether `candidate` is constructible from the letters of `baseword`.
pub fn is_constructible(candidate: &str, baseword: &str) -> bool {
    LetterCounts::of(baseword).can_spell(candidate)
}
