use crate::ternary_tree::snapshot::Snapshot;
use crate::ternary_tree::tree::{self, Tree};
use crate::ternary_tree::{to_chars, Result};

/// A set of strings implemented using a self-adjusting ternary search tree with conditional
/// rotations.
///
/// Every node keeps the number of times it was visited by `conditional_splay_contains` and the
/// weight of its binary search tree subtree, which excludes the nodes reached through its middle
/// child. A lookup only rotates a node above its parent when that is profitable according to
/// these weights, so isolated accesses usually leave the tree untouched while words that are
/// accessed often relative to their neighbours move toward the root.
///
/// Empty words are rejected with `Error::EmptyWord`.
///
/// # Examples
///
/// ```
/// use ternary_collections::ternary_tree::AdjustingTernarySet;
///
/// let mut set = AdjustingTernarySet::new();
/// for word in &["font", "ask", "an", "fork", "for", "rest", "cap", "or"] {
///     set.insert(word).unwrap();
/// }
///
/// assert!(set.conditional_splay_contains("cap").unwrap());
/// assert_eq!(set.snapshot().root().map(|node| node.key), Some('f'));
/// assert_eq!(set.root_weight(), 1);
///
/// assert!(set.conditional_splay_contains("cap").unwrap());
/// assert_eq!(set.snapshot().root().map(|node| node.key), Some('c'));
/// assert_eq!(set.root_weight(), 4);
/// ```
pub struct AdjustingTernarySet {
    tree: Tree,
    len: usize,
}

impl AdjustingTernarySet {
    /// Constructs a new, empty `AdjustingTernarySet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::AdjustingTernarySet;
    ///
    /// let set = AdjustingTernarySet::new();
    /// ```
    pub fn new() -> Self {
        AdjustingTernarySet { tree: None, len: 0 }
    }

    /// Inserts a word into the set. Returns `true` if the word was not already present. Access
    /// counts are not affected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::AdjustingTernarySet;
    ///
    /// let mut set = AdjustingTernarySet::new();
    /// assert!(set.insert("rest").unwrap());
    /// assert!(!set.insert("rest").unwrap());
    /// ```
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let word = to_chars(word)?;
        let inserted = tree::insert(&mut self.tree, &word, 0);
        if inserted {
            self.len += 1;
        }
        Ok(inserted)
    }

    /// Checks if a word exists in the set without restructuring the tree or recording an access.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::AdjustingTernarySet;
    ///
    /// let mut set = AdjustingTernarySet::new();
    /// set.insert("fork").unwrap();
    /// assert!(set.contains("fork").unwrap());
    /// assert!(!set.contains("for").unwrap());
    /// assert_eq!(set.root_weight(), 0);
    /// ```
    pub fn contains(&self, word: &str) -> Result<bool> {
        let word = to_chars(word)?;
        Ok(tree::contains(&self.tree, &word))
    }

    /// Checks if a word exists in the set, recording an access on every node visited and rotating
    /// nodes whose weight makes the rotation profitable.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::AdjustingTernarySet;
    ///
    /// let mut set = AdjustingTernarySet::new();
    /// set.insert("for").unwrap();
    /// assert!(set.conditional_splay_contains("for").unwrap());
    /// assert!(!set.conditional_splay_contains("fo").unwrap());
    /// assert_eq!(set.root_weight(), 2);
    /// ```
    pub fn conditional_splay_contains(&mut self, word: &str) -> Result<bool> {
        let chars = to_chars(word)?;
        let found = tree::conditional_splay(&mut self.tree, &chars, 0);
        debug!(
            "conditional splay lookup of {:?} found: {}, root weight: {}",
            word,
            found,
            tree::weight(&self.tree),
        );
        Ok(found)
    }

    /// Returns the weight of the root of the tree, or 0 if the set is empty.
    pub fn root_weight(&self) -> u64 {
        tree::weight(&self.tree)
    }

    /// Returns the number of nodes a lookup of `word` visits, or `None` if `word` is not in the
    /// set. The tree is not restructured.
    pub fn depth(&self, word: &str) -> Result<Option<usize>> {
        let word = to_chars(word)?;
        Ok(tree::depth(&self.tree, &word))
    }

    /// Returns the number of words in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all words and their access counts.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns all words in the set in lexographic order of code points.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        tree::push_all_words(&self.tree, &mut String::new(), &mut words);
        words
    }

    /// Returns a read-only copy of the current shape of the tree, including access counts and
    /// weights.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.tree)
    }
}

impl Default for AdjustingTernarySet {
    fn default() -> Self {
        Self::new()
    }
}
