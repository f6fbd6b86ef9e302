//! Timing harness shared by every [`PrefixIndex`].
//!
//! Each phase is timed as a whole batch with a monotonic clock. Query results
//! are discarded, so correctness has to be checked separately from a timed run.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::corpus::{absent_prefixes, synthetic_vocabulary};
use crate::{LinearPrefixSet, PrefixIndex, PrefixTree};

/// Elapsed time of one insert-then-search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Label of the component that produced the timings
    pub label: &'static str,
    /// Number of words inserted
    pub words: usize,
    /// Number of prefixes searched
    pub prefixes: usize,
    pub insertion: Duration,
    pub search: Duration,
}

impl Measurement {
    pub fn insertion_micros(&self) -> u64 {
        micros(self.insertion)
    }

    pub fn search_micros(&self) -> u64 {
        micros(self.search)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} Insertion Time: {} microseconds",
            self.label,
            self.insertion_micros()
        )?;
        write!(
            f,
            "{} Prefix Search Time: {} microseconds",
            self.label,
            self.search_micros()
        )
    }
}

fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

/// Insert every word into `index`, then search every prefix, timing each batch.
pub fn run<I, W, P>(index: &mut I, words: &[W], prefixes: &[P]) -> Measurement
where
    I: PrefixIndex,
    W: AsRef<str>,
    P: AsRef<str>,
{
    let start = Instant::now();
    for word in words {
        index.insert(word.as_ref());
    }
    let insertion = start.elapsed();
    debug!(
        label = I::LABEL,
        count = words.len(),
        elapsed_us = micros(insertion),
        "insertion phase done"
    );

    let start = Instant::now();
    for prefix in prefixes {
        black_box(index.search(black_box(prefix.as_ref())));
    }
    let search = start.elapsed();
    debug!(
        label = I::LABEL,
        count = prefixes.len(),
        elapsed_us = micros(search),
        "search phase done"
    );

    let measurement = Measurement {
        label: I::LABEL,
        words: words.len(),
        prefixes: prefixes.len(),
        insertion,
        search,
    };
    info!(
        label = measurement.label,
        insertion_us = measurement.insertion_micros(),
        search_us = measurement.search_micros(),
        "benchmark run complete"
    );
    measurement
}

/// A fixed workload that can be replayed against several components.
pub struct Harness<'a, W, P> {
    words: &'a [W],
    prefixes: &'a [P],
}

impl<'a, W: AsRef<str>, P: AsRef<str>> Harness<'a, W, P> {
    pub fn new(words: &'a [W], prefixes: &'a [P]) -> Self {
        Self { words, prefixes }
    }

    /// Run the workload against `index`.
    pub fn run<I: PrefixIndex>(&self, index: &mut I) -> Measurement {
        run(index, self.words, self.prefixes)
    }

    /// Run the workload against a fresh [`PrefixTree`] and a fresh
    /// [`LinearPrefixSet`], in that order.
    pub fn compare(&self) -> [Measurement; 2] {
        [
            self.run(&mut PrefixTree::new()),
            self.run(&mut LinearPrefixSet::new()),
        ]
    }
}

/// Configuration for [`sweep`].
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Vocabulary sizes, measured in order
    pub sizes: Vec<usize>,
    /// Number of prefixes searched at each size
    pub prefix_count: usize,
    /// Seed for the synthetic vocabularies
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 10_000, 100_000],
            prefix_count: 64,
            seed: 42,
        }
    }
}

/// Both components measured at one vocabulary size.
#[derive(Clone, Debug)]
pub struct ScalePoint {
    pub size: usize,
    pub tree: Measurement,
    pub linear: Measurement,
}

/// Measure both components over growing synthetic vocabularies.
///
/// Every searched prefix is absent from the vocabulary, which is the worst
/// case for [`LinearPrefixSet`]: each query scans all entries, while the tree
/// stops at the first missing transition.
pub fn sweep(config: &SweepConfig) -> Vec<ScalePoint> {
    let prefixes = absent_prefixes(config.prefix_count);

    config
        .sizes
        .iter()
        .map(|&size| {
            let words = synthetic_vocabulary(size, config.seed);
            let [tree, linear] = Harness::new(&words, &prefixes).compare();
            debug!(size, "sweep point done");
            ScalePoint { size, tree, linear }
        })
        .collect()
}
