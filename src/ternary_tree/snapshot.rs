use crate::ternary_tree::node::Node;
use crate::ternary_tree::tree::Tree;
use crate::ternary_tree::Result;
use std::collections::VecDeque;
use std::fmt;

/// A read-only record of one node in a `Snapshot`.
///
/// Links are indices into `Snapshot::nodes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SnapshotNode {
    pub key: char,
    pub is_terminal: bool,
    pub parent: Option<usize>,
    pub less: Option<usize>,
    pub equal: Option<usize>,
    pub greater: Option<usize>,
    pub access_count: u64,
    pub subtree_weight: u64,
}

impl SnapshotNode {
    fn new(node: &Node, parent: Option<usize>) -> Self {
        SnapshotNode {
            key: node.key,
            is_terminal: node.is_terminal,
            parent,
            less: None,
            equal: None,
            greater: None,
            access_count: node.access_count,
            subtree_weight: node.subtree_weight,
        }
    }
}

/// A copy of the topology of a ternary search tree, detached from the tree itself so that it can
/// be rendered or stored without touching the tree.
///
/// Nodes are listed in breadth-first order, visiting the less, equal, and greater children of
/// each node in that order. The root, if any, is at index 0.
///
/// # Examples
///
/// ```
/// use ternary_collections::ternary_tree::SplayTernarySet;
///
/// let mut set = SplayTernarySet::new();
/// set.insert("for").unwrap();
/// set.insert("ask").unwrap();
///
/// let snapshot = set.snapshot();
/// let root = snapshot.root().unwrap();
/// assert_eq!(root.key, 'f');
/// assert_eq!(snapshot.nodes[root.less.unwrap()].key, 'a');
/// assert_eq!(snapshot.len(), 6);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub nodes: Vec<SnapshotNode>,
}

impl Snapshot {
    pub(crate) fn new(tree: &Tree) -> Self {
        fn enqueue<'a>(
            tree: &'a Tree,
            parent: usize,
            nodes: &mut Vec<SnapshotNode>,
            queue: &mut VecDeque<(&'a Node, usize)>,
        ) -> Option<usize> {
            tree.as_ref().map(|node| {
                let index = nodes.len();
                nodes.push(SnapshotNode::new(node, Some(parent)));
                queue.push_back((&**node, index));
                index
            })
        }

        let mut nodes = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(ref root) = *tree {
            nodes.push(SnapshotNode::new(root, None));
            queue.push_back((&**root, 0));
        }

        while let Some((node, index)) = queue.pop_front() {
            let less = enqueue(&node.less, index, &mut nodes, &mut queue);
            let equal = enqueue(&node.equal, index, &mut nodes, &mut queue);
            let greater = enqueue(&node.greater, index, &mut nodes, &mut queue);
            let record = &mut nodes[index];
            record.less = less;
            record.equal = equal;
            record.greater = greater;
        }

        Snapshot { nodes }
    }

    /// Returns the record of the root node, or `None` if the tree was empty.
    pub fn root(&self) -> Option<&SnapshotNode> {
        self.nodes.first()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Encodes the snapshot with `bincode`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_collections::ternary_tree::{Snapshot, SplayTernarySet};
    ///
    /// let mut set = SplayTernarySet::new();
    /// set.insert("cap").unwrap();
    ///
    /// let snapshot = set.snapshot();
    /// let bytes = snapshot.to_bytes().unwrap();
    /// assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), snapshot);
    /// ```
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a snapshot previously produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn depths(&self) -> Vec<usize> {
        let mut depths = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let depth = node.parent.map_or(0, |parent| depths[parent] + 1);
            depths.push(depth);
        }
        depths
    }
}

/// Prints one line per node, grouped by level, as `key(weight) -> [less][equal][greater]`.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let depths = self.depths();
        let link = |index: Option<usize>| match index {
            Some(index) => format!("[{}]", self.nodes[index].key),
            None => String::from("[]"),
        };
        for (index, node) in self.nodes.iter().enumerate() {
            if index > 0 && depths[index] != depths[index - 1] {
                writeln!(f)?;
            }
            writeln!(
                f,
                "{}({}) -> {}{}{}",
                node.key,
                node.subtree_weight,
                link(node.less),
                link(node.equal),
                link(node.greater),
            )?;
        }
        Ok(())
    }
}
