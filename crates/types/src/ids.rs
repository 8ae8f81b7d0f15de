//! Newtype wrappers for positional identifiers.
//!
//! Chunk trees carry no ids of their own, so a node is addressed by the
//! sequence of child indices leading to it from the page's root chunk.

use serde::{Serialize, Serializer};
use std::fmt;

/// The location of a chunk inside its page's layout tree.
///
/// The root is the empty path and displays as `root`; the third child of the
/// root's first child displays as `root/0/2`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ChunkPath(Vec<usize>);

impl ChunkPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns the path of this node's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut steps = Vec::with_capacity(self.0.len() + 1);
        steps.extend_from_slice(&self.0);
        steps.push(index);
        Self(steps)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for ChunkPath {
    fn from(steps: Vec<usize>) -> Self {
        Self(steps)
    }
}

impl From<&[usize]> for ChunkPath {
    fn from(steps: &[usize]) -> Self {
        Self(steps.to_vec())
    }
}

impl fmt::Display for ChunkPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for step in &self.0 {
            write!(f, "/{}", step)?;
        }
        Ok(())
    }
}

impl Serialize for ChunkPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
