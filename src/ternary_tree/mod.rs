//! Self-adjusting ternary search trees that move frequently accessed strings toward the root.
//!
//! A ternary search tree is a trie in which the children of each level are kept in a binary
//! search tree. Both sets in this module rotate that binary search tree dimension during lookups:
//! `SplayTernarySet` rotates at every level of the search path, while `AdjustingTernarySet` only
//! rotates when a frequency-weighted heuristic finds the rotation profitable.

mod adjusting_set;
mod node;
mod snapshot;
mod splay_set;
mod tree;

pub use self::adjusting_set::AdjustingTernarySet;
pub use self::snapshot::{Snapshot, SnapshotNode};
pub use self::splay_set::SplayTernarySet;

use std::error;
use std::fmt;
use std::result;

#[derive(Debug)]
pub enum Error {
    EmptyWord,
    Serialization(bincode::Error),
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Error {
        Error::Serialization(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::EmptyWord => None,
            Error::Serialization(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyWord => write!(f, "words must contain at least one character"),
            Error::Serialization(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

fn to_chars(word: &str) -> Result<Vec<char>> {
    if word.is_empty() {
        return Err(Error::EmptyWord);
    }
    Ok(word.chars().collect())
}
