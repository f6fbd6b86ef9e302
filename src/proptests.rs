use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;

/// Walk the whole tree and check the cached counters against it.
fn validate_tree(t: &PrefixTree) {
    let mut stack: Vec<&TreeNode> = vec![t.root()];
    let mut nodes = 0usize;
    let mut terminals = 0usize;

    while let Some(node) = stack.pop() {
        nodes += 1;
        if node.is_terminal() {
            terminals += 1;
        }
        if node.is_leaf() && !std::ptr::eq(node, t.root()) {
            // every leaf below the root ends some inserted string
            assert!(node.is_terminal(), "non-terminal leaf");
        }
        stack.extend(node.children().map(|(_, child)| child));
    }

    assert_eq!(nodes, t.node_count(), "node count must match reachable nodes");
    assert_eq!(terminals, t.len(), "len must match terminal nodes");
}

/// Reference answer: scan every stored word. The empty prefix matches even
/// an empty vocabulary.
fn model_search(words: &[String], prefix: &str) -> bool {
    prefix.is_empty() || words.iter().any(|w| w.starts_with(prefix))
}

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    // A tiny alphabet so that words share prefixes and queries often hit.
    "[abc]{0,6}"
}

fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![Just('a'), Just('é'), Just('日'), Just('🦀'), any::<char>()],
        0..=5,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn all_prefixes(word: &str) -> impl Iterator<Item = &str> {
    word.char_indices()
        .map(|(i, _)| &word[..i])
        .chain(std::iter::once(word))
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 3)]
    Insert(#[proptest(strategy = "word_strategy()")] String),
    #[proptest(weight = 2)]
    Search(#[proptest(strategy = "word_strategy()")] String),
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in prop::collection::vec(any::<Op>(), 0..=300)) {
        let mut t = PrefixTree::new();
        let mut s = LinearPrefixSet::new();
        let mut m: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(word) => {
                    t.insert(&word);
                    s.insert(&word);
                    if !m.contains(&word) {
                        m.push(word);
                    }
                }
                Op::Search(prefix) => {
                    let expected = model_search(&m, &prefix);
                    prop_assert_eq!(t.search(&prefix), expected);
                    prop_assert_eq!(s.search(&prefix), expected);
                }
            }

            prop_assert_eq!(t.len(), m.len());
            prop_assert_eq!(s.len(), m.len());
        }

        validate_tree(&t);
        for word in &m {
            prop_assert!(t.contains(word));
            prop_assert!(s.contains(word));
        }
    }

    #[test]
    fn prop_prefix_containment(words in prop::collection::vec(unicode_word_strategy(), 0..=40)) {
        let t: PrefixTree = words.iter().collect();
        let s: LinearPrefixSet = words.iter().collect();

        for word in &words {
            for prefix in all_prefixes(word) {
                prop_assert!(t.search(prefix), "tree missed prefix {:?} of {:?}", prefix, word);
                prop_assert!(s.search(prefix), "set missed prefix {:?} of {:?}", prefix, word);
            }
        }
        validate_tree(&t);
    }

    #[test]
    fn prop_cross_structure_agreement(
        words in prop::collection::vec(unicode_word_strategy(), 0..=40),
        queries in prop::collection::vec(unicode_word_strategy(), 0..=40),
    ) {
        let t: PrefixTree = words.iter().collect();
        let s: LinearPrefixSet = words.iter().collect();

        for q in &queries {
            let expected = model_search(&words, q);
            prop_assert_eq!(t.search(q), expected);
            prop_assert_eq!(s.search(q), expected);
        }
        prop_assert!(t.search(""));
        prop_assert!(s.search(""));
    }

    #[test]
    fn prop_insert_idempotent(
        words in prop::collection::vec(word_strategy(), 0..=30),
        queries in prop::collection::vec(word_strategy(), 0..=30),
    ) {
        let once: PrefixTree = words.iter().collect();
        let mut twice = once.clone();
        twice.extend(&words);

        let set_once: LinearPrefixSet = words.iter().collect();
        let mut set_twice = set_once.clone();
        set_twice.extend(&words);

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(set_once.len(), set_twice.len());
        for q in &queries {
            prop_assert_eq!(once.search(q), twice.search(q));
            prop_assert_eq!(set_once.search(q), set_twice.search(q));
        }
    }
}

/// Visit every ordering of `items` (Heap's algorithm, iterative).
fn permutations<T: Clone>(items: &[T], mut visit: impl FnMut(&[T])) {
    let mut perm = items.to_vec();
    let mut counters = vec![0usize; perm.len()];
    visit(&perm);

    let mut depth = 1;
    while depth < perm.len() {
        if counters[depth] < depth {
            let other = if depth % 2 == 0 { 0 } else { counters[depth] };
            perm.swap(other, depth);
            visit(&perm);
            counters[depth] += 1;
            depth = 1;
        } else {
            counters[depth] = 0;
            depth += 1;
        }
    }
}

#[test]
fn permutations_cover_every_ordering() {
    let mut seen = std::collections::HashSet::new();
    permutations(&[1, 2, 3, 4], |p| {
        seen.insert(p.to_vec());
    });
    assert_eq!(seen.len(), 24);
}

#[test]
fn empty_prefix_on_empty_vocabulary() {
    let t = PrefixTree::new();
    let s = LinearPrefixSet::new();

    assert!(model_search(&[], ""));
    assert!(!model_search(&[], "a"));
    assert_eq!(t.search(""), model_search(&[], ""));
    assert_eq!(s.search(""), model_search(&[], ""));
    assert_eq!(t.search("a"), s.search("a"));
}

#[test]
fn exhaustive_insert_order_small_set() {
    let words = ["a", "b", "ab", "abc", "ba", ""];
    let queries = ["", "a", "ab", "abc", "abcd", "b", "ba", "bb", "c"];

    let reference: PrefixTree = words.iter().collect();
    let expected: Vec<bool> = queries.iter().map(|q| reference.search(q)).collect();
    assert_eq!(
        expected,
        vec![true, true, true, true, false, true, true, false, false]
    );

    permutations(&words, |perm| {
        let t: PrefixTree = perm.iter().collect();
        let s: LinearPrefixSet = perm.iter().collect();

        validate_tree(&t);
        assert_eq!(t.node_count(), reference.node_count());
        let got_t: Vec<bool> = queries.iter().map(|q| t.search(q)).collect();
        let got_s: Vec<bool> = queries.iter().map(|q| s.search(q)).collect();
        assert_eq!(got_t, expected);
        assert_eq!(got_s, expected);
    });
}
