use crate::ternary_tree::tree::{self, Tree};
use std::mem;

pub struct Node {
    pub key: char,
    pub is_terminal: bool,
    pub less: Tree,
    pub equal: Tree,
    pub greater: Tree,
    pub access_count: u64,
    pub subtree_weight: u64,
}

impl Node {
    pub fn new(key: char) -> Self {
        Node {
            key,
            is_terminal: false,
            less: None,
            equal: None,
            greater: None,
            access_count: 0,
            subtree_weight: 0,
        }
    }

    /// Charges one unit of access to this node.
    pub fn record_access(&mut self) {
        self.access_count += 1;
        self.subtree_weight += 1;
    }

    /// Recomputes the weight of this node from its own accesses and its BST-dimension children.
    /// The `equal` subtree never contributes.
    pub fn update_weight(&mut self) {
        self.subtree_weight =
            self.access_count + tree::weight(&self.less) + tree::weight(&self.greater);
    }

    pub fn rotate_left(&mut self) {
        let mut child = self.greater.take().expect("Expected greater child node to be `Some`.");
        self.greater = child.less.take();
        mem::swap(&mut *child, self);
        self.less = Some(child);
    }

    pub fn rotate_right(&mut self) {
        let mut child = self.less.take().expect("Expected less child node to be `Some`.");
        self.less = child.greater.take();
        mem::swap(&mut *child, self);
        self.greater = Some(child);
    }

    /// Left rotation that refreshes the weights of the demoted node and then of the promoted one.
    pub fn rotate_left_weighted(&mut self) {
        self.rotate_left();
        if let Some(ref mut demoted) = self.less {
            demoted.update_weight();
        }
        self.update_weight();
    }

    /// Right rotation that refreshes the weights of the demoted node and then of the promoted one.
    pub fn rotate_right_weighted(&mut self) {
        self.rotate_right();
        if let Some(ref mut demoted) = self.greater {
            demoted.update_weight();
        }
        self.update_weight();
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    fn leaf(key: char, access_count: u64) -> Option<Box<Node>> {
        let mut node = Node::new(key);
        node.access_count = access_count;
        node.subtree_weight = access_count;
        Some(Box::new(node))
    }

    #[test]
    fn test_rotate_right() {
        let mut root = Node::new('m');
        let mut child = Node::new('f');
        child.less = leaf('a', 0);
        child.greater = leaf('h', 0);
        child.equal = leaf('x', 0);
        root.less = Some(Box::new(child));
        root.greater = leaf('t', 0);

        root.rotate_right();

        assert_eq!(root.key, 'f');
        assert_eq!(root.less.as_ref().map(|node| node.key), Some('a'));
        assert_eq!(root.equal.as_ref().map(|node| node.key), Some('x'));
        let demoted = root.greater.as_ref().expect("Expected demoted node.");
        assert_eq!(demoted.key, 'm');
        assert_eq!(demoted.less.as_ref().map(|node| node.key), Some('h'));
        assert_eq!(demoted.greater.as_ref().map(|node| node.key), Some('t'));
        assert!(demoted.equal.is_none());
    }

    #[test]
    fn test_rotate_left() {
        let mut root = Node::new('f');
        let mut child = Node::new('m');
        child.less = leaf('h', 0);
        child.greater = leaf('t', 0);
        root.greater = Some(Box::new(child));
        root.less = leaf('a', 0);
        root.is_terminal = true;

        root.rotate_left();

        assert_eq!(root.key, 'm');
        assert!(!root.is_terminal);
        assert_eq!(root.greater.as_ref().map(|node| node.key), Some('t'));
        let demoted = root.less.as_ref().expect("Expected demoted node.");
        assert_eq!(demoted.key, 'f');
        assert!(demoted.is_terminal);
        assert_eq!(demoted.less.as_ref().map(|node| node.key), Some('a'));
        assert_eq!(demoted.greater.as_ref().map(|node| node.key), Some('h'));
    }

    #[test]
    fn test_rotate_right_weighted() {
        let mut root = Node::new('m');
        root.access_count = 2;
        root.subtree_weight = 2;
        let mut child = Node::new('f');
        child.access_count = 3;
        child.subtree_weight = 3;
        child.less = leaf('a', 4);
        child.greater = leaf('h', 5);
        root.less = Some(Box::new(child));
        root.greater = leaf('t', 1);

        root.rotate_right_weighted();

        assert_eq!(root.key, 'f');
        assert_eq!(root.greater.as_ref().map(|node| node.subtree_weight), Some(2 + 5 + 1));
        assert_eq!(root.subtree_weight, 3 + 4 + 8);
    }

    #[test]
    fn test_record_access() {
        let mut node = Node::new('a');
        node.record_access();
        node.record_access();
        assert_eq!(node.access_count, 2);
        assert_eq!(node.subtree_weight, 2);
    }
}
