use slidedeck_types::ChunkPath;
use std::fmt;
use thiserror::Error;

/// Why a chunk in wire form could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The `type` tag is neither `paragraph` nor `node`.
    UnknownTag(String),
    /// A `node` chunk with a `direction` outside `vertical`/`horizontal`.
    UnknownDirection(String),
    MissingDirection,
    MissingParagraph,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::UnknownTag(tag) => write!(f, "unknown chunk type '{}'", tag),
            MalformedReason::UnknownDirection(dir) => {
                write!(f, "unknown split direction '{}'", dir)
            }
            MalformedReason::MissingDirection => f.write_str("node chunk has no direction"),
            MalformedReason::MissingParagraph => f.write_str("paragraph chunk has no content"),
        }
    }
}

/// A chunk that does not describe a paragraph or a split node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed chunk at {path}: {reason}")]
pub struct MalformedChunk {
    pub path: ChunkPath,
    pub reason: MalformedReason,
}

impl MalformedChunk {
    pub fn new(path: ChunkPath, reason: MalformedReason) -> Self {
        Self { path, reason }
    }
}
