use crate::ternary_tree::snapshot::Snapshot;
use crate::ternary_tree::tree::{self, Tree};
use crate::ternary_tree::{to_chars, Result};

/// A set of strings implemented using a ternary search tree that splays on every lookup.
///
/// A ternary search tree is a trie where the children of each level are kept in a binary search
/// tree ordered by character code point. Every call to `splay_contains` performs one rotation
/// for each level of the binary search trees along the search path, whether or not the word is
/// found, so recently accessed words move toward the root. Unlike a classic splay tree, only a
/// single rotation is done per level, which moves nodes up more slowly but at a lower cost per
/// lookup. Rotations never change which words are stored.
///
/// Empty words are rejected with `Error::EmptyWord`.
///
/// # Examples
///
/// ```
/// use ternary_collections::ternary_tree::SplayTernarySet;
///
/// let mut set = SplayTernarySet::new();
/// set.insert("font").unwrap();
/// set.insert("ask").unwrap();
///
/// assert!(set.contains("font").unwrap());
/// assert!(!set.contains("fon").unwrap());
///
/// assert!(set.splay_contains("ask").unwrap());
/// assert_eq!(set.snapshot().root().map(|node| node.key), Some('a'));
/// assert_eq!(set.len(), 2);
/// ```
pub struct SplayTernarySet {
    tree: Tree,
    len: usize,
}

impl SplayTernarySet {
    /// Constructs a new, empty `SplayTernarySet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::SplayTernarySet;
    ///
    /// let set = SplayTernarySet::new();
    /// ```
    pub fn new() -> Self {
        SplayTernarySet { tree: None, len: 0 }
    }

    /// Inserts a word into the set. Returns `true` if the word was not already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::SplayTernarySet;
    ///
    /// let mut set = SplayTernarySet::new();
    /// assert!(set.insert("cap").unwrap());
    /// assert!(!set.insert("cap").unwrap());
    /// assert!(set.insert("").is_err());
    /// ```
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let word = to_chars(word)?;
        let inserted = tree::insert(&mut self.tree, &word, 0);
        if inserted {
            self.len += 1;
        }
        Ok(inserted)
    }

    /// Checks if a word exists in the set without restructuring the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::SplayTernarySet;
    ///
    /// let mut set = SplayTernarySet::new();
    /// set.insert("fork").unwrap();
    /// assert!(set.contains("fork").unwrap());
    /// assert!(!set.contains("for").unwrap());
    /// ```
    pub fn contains(&self, word: &str) -> Result<bool> {
        let word = to_chars(word)?;
        Ok(tree::contains(&self.tree, &word))
    }

    /// Checks if a word exists in the set, rotating the nodes along the search path toward the
    /// root. The tree is restructured even if the word is not found.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::SplayTernarySet;
    ///
    /// let mut set = SplayTernarySet::new();
    /// set.insert("font").unwrap();
    /// set.insert("rest").unwrap();
    /// assert!(set.splay_contains("rest").unwrap());
    /// assert!(!set.splay_contains("tap").unwrap());
    /// ```
    pub fn splay_contains(&mut self, word: &str) -> Result<bool> {
        let chars = to_chars(word)?;
        let found = tree::splay(&mut self.tree, &chars, 0);
        debug!("splay lookup of {:?} found: {}", word, found);
        Ok(found)
    }

    /// Returns the number of nodes a lookup of `word` visits, or `None` if `word` is not in the
    /// set. The tree is not restructured.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::SplayTernarySet;
    ///
    /// let mut set = SplayTernarySet::new();
    /// set.insert("font").unwrap();
    /// set.insert("cap").unwrap();
    /// assert_eq!(set.depth("cap").unwrap(), Some(4));
    ///
    /// set.splay_contains("cap").unwrap();
    /// assert_eq!(set.depth("cap").unwrap(), Some(3));
    /// ```
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

    /// Clears the set, removing all words.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::SplayTernarySet;
    ///
    /// let mut set = SplayTernarySet::new();
    /// set.insert("ask").unwrap();
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns all words in the set in lexographic order of code points.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::SplayTernarySet;
    ///
    /// let mut set = SplayTernarySet::new();
    /// set.insert("for").unwrap();
    /// set.insert("an").unwrap();
    /// set.insert("fork").unwrap();
    /// assert_eq!(set.words(), vec!["an", "for", "fork"]);
    /// ```
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        tree::push_all_words(&self.tree, &mut String::new(), &mut words);
        words
    }

    /// Returns a read-only copy of the current shape of the tree.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.tree)
    }
}

impl Default for SplayTernarySet {
    fn default() -> Self {
        Self::new()
    }
}
