//! # prefix-search
//!
//! Prefix membership queries over an in-memory vocabulary, answered two ways:
//!
//! - [`PrefixTree`]: a character-indexed prefix tree. Insert and search cost
//!   O(length of the argument), however many words are stored.
//! - [`LinearPrefixSet`]: a hash set that answers exact hits in O(1) and falls
//!   back to scanning every entry otherwise.
//!
//! The [`harness`] module times both through the common [`PrefixIndex`]
//! contract, so the two are driven by exactly the same workload.
//!
//! ## Example
//!
//! ```rust
//! use prefix_search::{harness, LinearPrefixSet, PrefixIndex, PrefixTree};
//!
//! let words = ["cat", "car", "dog"];
//! let prefixes = ["ca", "do", "cx"];
//!
//! let mut tree = PrefixTree::new();
//! let m = harness::run(&mut tree, &words, &prefixes);
//! assert_eq!(m.label, PrefixTree::LABEL);
//!
//! let set: LinearPrefixSet = words.into_iter().collect();
//! for p in prefixes {
//!     assert_eq!(tree.search(p), set.search(p));
//! }
//! ```

#![warn(clippy::all)]

pub mod corpus;
pub mod harness;
pub mod report;

mod error;
mod linear;
mod tree;

pub use corpus::Corpus;
pub use error::{Error, Result};
pub use harness::{Harness, Measurement, ScalePoint, SweepConfig};
pub use linear::LinearPrefixSet;
pub use report::OutputFormat;
pub use tree::{PrefixTree, TreeNode};

/// A structure that stores strings and answers prefix-existence queries.
///
/// `search(p)` is true iff at least one inserted string starts with `p`, so
/// `search("")` is always true. Inserting the same string twice must be
/// indistinguishable from inserting it once.
pub trait PrefixIndex {
    /// Human-readable name used in reports.
    const LABEL: &'static str;

    fn insert(&mut self, word: &str);

    fn search(&self, prefix: &str) -> bool;
}

#[cfg(test)]
mod proptests;
