use crate::ternary_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree = Option<Box<Node>>;

pub fn weight(tree: &Tree) -> u64 {
    tree.as_ref().map_or(0, |node| node.subtree_weight)
}

// Profitability of promoting `node` over a parent of weight `parent_weight`, where `inner` is
// the subtree of `node` that would change parents in the rotation.
fn psi(node: &Node, inner: &Tree, parent_weight: u64) -> i64 {
    2 * node.subtree_weight as i64 - weight(inner) as i64 - parent_weight as i64
}

/// Inserts `word[pos..]` below `tree`. Returns `true` if the word was not already stored.
pub fn insert(tree: &mut Tree, word: &[char], pos: usize) -> bool {
    let key = word[pos];
    let node = tree.get_or_insert_with(|| Box::new(Node::new(key)));
    match key.cmp(&node.key) {
        Ordering::Less => insert(&mut node.less, word, pos),
        Ordering::Greater => insert(&mut node.greater, word, pos),
        Ordering::Equal => {
            if pos + 1 == word.len() {
                !mem::replace(&mut node.is_terminal, true)
            } else {
                insert(&mut node.equal, word, pos + 1)
            }
        },
    }
}

/// Returns the number of nodes visited to resolve `word`, or `None` if it is not stored.
pub fn depth(tree: &Tree, word: &[char]) -> Option<usize> {
    let mut curr = tree;
    let mut pos = 0;
    let mut visited = 0;
    while let Some(ref node) = *curr {
        visited += 1;
        match word[pos].cmp(&node.key) {
            Ordering::Less => curr = &node.less,
            Ordering::Greater => curr = &node.greater,
            Ordering::Equal => {
                if pos + 1 == word.len() {
                    return if node.is_terminal { Some(visited) } else { None };
                }
                pos += 1;
                curr = &node.equal;
            },
        }
    }
    None
}

pub fn contains(tree: &Tree, word: &[char]) -> bool {
    depth(tree, word).is_some()
}

fn splay_matched(node: &mut Node, word: &[char], pos: usize) -> bool {
    if pos + 1 < word.len() {
        splay(&mut node.equal, word, pos + 1)
    } else {
        node.is_terminal
    }
}

/// Looks up `word[pos..]` below `tree`, applying one rotation per level on the way back up. Each
/// frame pulls its visited child into its own slot, so the closest node found migrates upward.
pub fn splay(tree: &mut Tree, word: &[char], pos: usize) -> bool {
    let node = match *tree {
        Some(ref mut node) => node,
        None => return false,
    };
    let key = word[pos];
    match key.cmp(&node.key) {
        Ordering::Less => {
            let found = match node.less {
                Some(ref mut child) => match key.cmp(&child.key) {
                    Ordering::Less => splay(&mut child.less, word, pos),
                    Ordering::Greater => splay(&mut child.greater, word, pos),
                    Ordering::Equal => splay_matched(child, word, pos),
                },
                None => return false,
            };
            trace!("rotating right at {:?} for position {}", node.key, pos);
            node.rotate_right();
            found
        },
        Ordering::Greater => {
            let found = match node.greater {
                Some(ref mut child) => match key.cmp(&child.key) {
                    Ordering::Less => splay(&mut child.less, word, pos),
                    Ordering::Greater => splay(&mut child.greater, word, pos),
                    Ordering::Equal => splay_matched(child, word, pos),
                },
                None => return false,
            };
            trace!("rotating left at {:?} for position {}", node.key, pos);
            node.rotate_left();
            found
        },
        Ordering::Equal => splay_matched(node, word, pos),
    }
}

/// Looks up `word[pos..]` below `tree`, charging every visited node one unit of access and
/// rotating only where `psi` is positive.
///
/// Let `i` be a node with parent `p`. If `i` is the less child of `p`, then
/// `psi = 2 * weight(i) - weight(i.greater) - weight(p)`, and symmetrically for a greater child.
/// A middle child always has a `psi` of zero.
pub fn conditional_splay(tree: &mut Tree, word: &[char], pos: usize) -> bool {
    let node = match *tree {
        Some(ref mut node) => node,
        None => return false,
    };
    node.record_access();
    let key = word[pos];
    match key.cmp(&node.key) {
        Ordering::Less => {
            let child_ordering = match node.less {
                Some(ref child) => key.cmp(&child.key),
                None => return false,
            };
            match child_ordering {
                Ordering::Less => {
                    let child = node
                        .less
                        .as_mut()
                        .expect("Expected less child node to be `Some`.");
                    let found = conditional_splay(&mut child.less, word, pos);
                    let gain = child
                        .less
                        .as_ref()
                        .map_or(0, |grandchild| {
                            psi(grandchild, &grandchild.greater, child.subtree_weight)
                        });
                    if gain > 0 {
                        trace!("rotating right at {:?} with psi {}", child.key, gain);
                        child.rotate_right_weighted();
                    }
                    found
                },
                Ordering::Greater => {
                    let child = node
                        .less
                        .as_mut()
                        .expect("Expected less child node to be `Some`.");
                    let found = conditional_splay(&mut child.greater, word, pos);
                    let gain = child
                        .greater
                        .as_ref()
                        .map_or(0, |grandchild| {
                            psi(grandchild, &grandchild.less, child.subtree_weight)
                        });
                    if gain > 0 {
                        trace!("rotating left at {:?} with psi {}", child.key, gain);
                        child.rotate_left_weighted();
                    }
                    found
                },
                Ordering::Equal => {
                    let found = conditional_splay(&mut node.less, word, pos);
                    let gain = node
                        .less
                        .as_ref()
                        .map_or(0, |child| {
                            psi(child, &child.greater, node.subtree_weight)
                        });
                    if gain > 0 {
                        trace!("rotating right at {:?} with psi {}", node.key, gain);
                        node.rotate_right_weighted();
                    }
                    found
                },
            }
        },
        Ordering::Greater => {
            let child_ordering = match node.greater {
                Some(ref child) => key.cmp(&child.key),
                None => return false,
            };
            match child_ordering {
                Ordering::Less => {
                    let child = node
                        .greater
                        .as_mut()
                        .expect("Expected greater child node to be `Some`.");
                    let found = conditional_splay(&mut child.less, word, pos);
                    let gain = child
                        .less
                        .as_ref()
                        .map_or(0, |grandchild| {
                            psi(grandchild, &grandchild.greater, child.subtree_weight)
                        });
                    if gain > 0 {
                        trace!("rotating right at {:?} with psi {}", child.key, gain);
                        child.rotate_right_weighted();
                    }
                    found
                },
                Ordering::Greater => {
                    let child = node
                        .greater
                        .as_mut()
                        .expect("Expected greater child node to be `Some`.");
                    let found = conditional_splay(&mut child.greater, word, pos);
                    let gain = child
                        .greater
                        .as_ref()
                        .map_or(0, |grandchild| {
                            psi(grandchild, &grandchild.less, child.subtree_weight)
                        });
                    if gain > 0 {
                        trace!("rotating left at {:?} with psi {}", child.key, gain);
                        child.rotate_left_weighted();
                    }
                    found
                },
                Ordering::Equal => {
                    let found = conditional_splay(&mut node.greater, word, pos);
                    let gain = node
                        .greater
                        .as_ref()
                        .map_or(0, |child| {
                            psi(child, &child.less, node.subtree_weight)
                        });
                    if gain > 0 {
                        trace!("rotating left at {:?} with psi {}", node.key, gain);
                        node.rotate_left_weighted();
                    }
                    found
                },
            }
        },
        Ordering::Equal => {
            if pos + 1 < word.len() {
                conditional_splay(&mut node.equal, word, pos + 1)
            } else {
                node.is_terminal
            }
        },
    }
}

pub fn push_all_words(tree: &Tree, prefix: &mut String, words: &mut Vec<String>) {
    if let Some(ref node) = *tree {
        push_all_words(&node.less, prefix, words);

        prefix.push(node.key);
        if node.is_terminal {
            words.push(prefix.clone());
        }
        push_all_words(&node.equal, prefix, words);
        prefix.pop();

        push_all_words(&node.greater, prefix, words);
    }
}
