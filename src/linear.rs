//! Hash set baseline with a linear-scan fallback for prefix queries.
//!
//! A hash set cannot answer ordered or prefix queries, so anything that is not
//! an exact hit visits every stored entry. This is the cost the prefix tree is
//! measured against.

use std::collections::HashSet;

use crate::PrefixIndex;

/// A flat set of strings.
#[derive(Clone, Debug, Default)]
pub struct LinearPrefixSet {
    words: HashSet<String>,
}

impl LinearPrefixSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` to the set. Duplicates are ignored without allocating.
    pub fn insert(&mut self, word: &str) {
        if !self.words.contains(word) {
            self.words.insert(word.to_owned());
        }
    }

    /// Whether at least one stored string starts with `prefix`.
    ///
    /// The empty prefix always matches, even on an empty set. Otherwise tries
    /// an exact lookup first, then scans every entry, skipping the ones
    /// shorter than `prefix`. O(N·L) when nothing matches.
    pub fn search(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        if self.words.contains(prefix) {
            return true;
        }

        let prefix = prefix.as_bytes();
        for word in &self.words {
            let word = word.as_bytes();
            if word.len() < prefix.len() {
                continue;
            }
            if &word[..prefix.len()] == prefix {
                return true;
            }
        }
        false
    }

    /// Whether `word` itself was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> Extend<S> for LinearPrefixSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for LinearPrefixSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl PrefixIndex for LinearPrefixSet {
    const LABEL: &'static str = "LinearPrefixSet";

    fn insert(&mut self, word: &str) {
        LinearPrefixSet::insert(self, word);
    }

    fn search(&self, prefix: &str) -> bool {
        LinearPrefixSet::search(self, prefix)
    }
}
