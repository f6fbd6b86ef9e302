//! Character-indexed prefix tree.
//!
//! Every node owns its children by value, keyed by the next `char` of the
//! stored strings. The tree is insert-only, so the structure stays acyclic and
//! each node has exactly one owner.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::PrefixIndex;

/// One character position in the stored vocabulary.
#[derive(Clone, Debug, Default)]
pub struct TreeNode {
    children: HashMap<char, TreeNode>,
    /// Set iff an inserted string ends exactly here.
    terminal: bool,
}

impl TreeNode {
    fn new() -> Self {
        Self::default()
    }

    /// Whether some inserted string ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The child reached by `ch`, if any string continues that way.
    pub fn child(&self, ch: char) -> Option<&TreeNode> {
        self.children.get(&ch)
    }

    /// Iterate over `(char, child)` transitions in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TreeNode)> {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A prefix tree answering "does any stored string start with this prefix".
///
/// Both [`insert`](PrefixTree::insert) and [`search`](PrefixTree::search) walk
/// at most one node per character, so their cost depends only on the length of
/// the argument and never on how many strings are stored.
///
/// ```rust
/// use prefix_search::PrefixTree;
///
/// let mut tree = PrefixTree::new();
/// tree.insert("cat");
/// tree.insert("car");
///
/// assert!(tree.search("ca"));
/// assert!(!tree.search("cx"));
/// assert!(!tree.contains("ca"));
/// ```
#[derive(Clone, Debug)]
pub struct PrefixTree {
    root: TreeNode,
    /// Reachable nodes, root included.
    nodes: usize,
    /// Distinct inserted strings (terminal nodes).
    words: usize,
}

impl PrefixTree {
    pub fn new() -> Self {
        Self {
            root: TreeNode::new(),
            nodes: 1,
            words: 0,
        }
    }

    /// Insert `word`, creating one node per transition not already present.
    ///
    /// Inserting the same string again changes nothing. The empty string marks
    /// the root terminal.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = match node.children.entry(ch) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    self.nodes += 1;
                    e.insert(TreeNode::new())
                }
            };
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
    }

    /// Whether at least one stored string starts with `prefix`.
    ///
    /// The terminal flag of the final node is not consulted. The empty prefix
    /// always matches because the root is always present.
    pub fn search(&self, prefix: &str) -> bool {
        self.locate(prefix).is_some()
    }

    /// Whether `word` itself was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.locate(word).is_some_and(TreeNode::is_terminal)
    }

    /// Number of distinct strings inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Follow `path` from the root, stopping at the first missing transition.
    fn locate(&self, path: &str) -> Option<&TreeNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl PrefixIndex for PrefixTree {
    const LABEL: &'static str = "PrefixTree";

    fn insert(&mut self, word: &str) {
        PrefixTree::insert(self, word);
    }

    fn search(&self, prefix: &str) -> bool {
        PrefixTree::search(self, prefix)
    }
}
