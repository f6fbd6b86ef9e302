//! Input sequences for the benchmark: vocabularies to insert and prefixes to
//! query.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::{Error, Result};

#[rustfmt::skip]
const BUILTIN_WORDS: &[&str] = &[
    "the", "of", "and", "to", "in", "a", "is", "it", "that", "for",
    "with", "on", "as", "at", "by", "from", "up", "into", "or", "have",
    "be", "not", "are", "but", "this", "all", "their", "they", "an", "which",
    "one", "you", "had", "were", "when", "more", "so", "what", "said", "he",
    "she", "who", "will", "would", "about", "other", "there", "then", "time", "these",
    "like", "her", "can", "two", "just", "make", "people", "and", "some", "only",
    "my", "own", "over", "now", "do", "get", "out", "use", "day", "good",
    "go", "could", "see", "first", "come", "think", "know", "water", "than", "call",
    "his", "its", "way", "look", "new", "now", "too", "little", "use", "man",
    "thing", "find", "give", "tell", "work", "much", "home", "here", "said",
    "should", "like", "how", "our", "life", "very", "even", "back", "any", "after",
    "also", "many", "number", "part", "year", "different", "too", "place", "little", "world",
    "international", "organization", "computer", "science", "algorithm",
    "database", "programming", "language", "artificial", "intelligence",
    "javascript", "python", "java", "c++", "typescript",
];

#[rustfmt::skip]
const BUILTIN_PREFIXES: &[&str] = &[
    // taken from the vocabulary
    "the", "of", "and", "to", "in", "a", "is", "it", "that", "for",
    "with", "on", "as", "at", "by", "from", "up", "into", "or", "have",
    // random
    "abc", "def", "ghi", "jkl", "mno", "pqr", "stu", "vwx", "yz",
    "123", "456", "789",
    // longer
    "internationali", "organizationa", "computer", "science", "algorithm",
];

/// Synthetic words are drawn from `a..=z`, so this never starts one.
const ABSENT_MARKER: char = '#';

const SYNTHETIC_MIN_LEN: usize = 3;
const SYNTHETIC_MAX_LEN: usize = 12;

/// A vocabulary to insert and the prefixes to query against it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    pub words: Vec<String>,
    pub prefixes: Vec<String>,
}

impl Corpus {
    /// The fixed English and technical vocabulary with its prefix list.
    ///
    /// The vocabulary deliberately contains duplicates ("and", "now", "use",
    /// ...), which exercises idempotent insertion.
    pub fn builtin() -> Self {
        Self {
            words: to_owned(BUILTIN_WORDS),
            prefixes: to_owned(BUILTIN_PREFIXES),
        }
    }

    /// Load both lists from files, see [`load_word_list`].
    pub fn from_files(words: impl AsRef<Path>, prefixes: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            words: load_word_list(words)?,
            prefixes: load_word_list(prefixes)?,
        })
    }

    /// A seeded random vocabulary of `size` words.
    ///
    /// Half of the prefixes are leading halves of stored words, the other half
    /// match nothing.
    pub fn synthetic(size: usize, seed: u64) -> Self {
        let words = synthetic_vocabulary(size, seed);
        let sample = words.len().min(32);
        let mut prefixes: Vec<String> = words
            .iter()
            .take(sample)
            .map(|w| w[..w.len().div_ceil(2)].to_owned())
            .collect();
        prefixes.extend(absent_prefixes(sample.max(1)));
        Self { words, prefixes }
    }
}

/// Read a newline-separated word list.
///
/// Trailing whitespace (including `\r`) is trimmed. Blank lines and lines
/// starting with `#` are skipped.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect();

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// `size` lowercase ASCII words, 3 to 12 characters long.
///
/// The same seed always yields the same vocabulary. Words may repeat.
pub fn synthetic_vocabulary(size: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let len = rng.gen_range(SYNTHETIC_MIN_LEN..=SYNTHETIC_MAX_LEN);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

/// `count` distinct prefixes guaranteed to miss any synthetic vocabulary.
///
/// Against a [`LinearPrefixSet`](crate::LinearPrefixSet) each of them forces
/// a full scan.
pub fn absent_prefixes(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{ABSENT_MARKER}{i:04}")).collect()
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
