use crate::error::{MalformedChunk, MalformedReason};
use serde::{Deserialize, Serialize};
use slidedeck_types::ChunkPath;
use std::fmt;

/// The axis along which a split node lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Stacked top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
}

impl Direction {
    /// Parses the compositor's direction tag. Matching is exact.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "vertical" => Some(Direction::Vertical),
            "horizontal" => Some(Direction::Horizontal),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A node of a page's layout tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkNode {
    /// A leaf of pre-rendered inline markup. Never inspected.
    Paragraph { content: String },
    /// A split whose children are placed in order along `direction`.
    Node {
        direction: Direction,
        children: Vec<ChunkNode>,
    },
}

impl ChunkNode {
    pub fn paragraph(content: impl Into<String>) -> Self {
        ChunkNode::Paragraph {
            content: content.into(),
        }
    }

    pub fn vertical(children: Vec<ChunkNode>) -> Self {
        ChunkNode::Node {
            direction: Direction::Vertical,
            children,
        }
    }

    pub fn horizontal(children: Vec<ChunkNode>) -> Self {
        ChunkNode::Node {
            direction: Direction::Horizontal,
            children,
        }
    }

    /// Returns the wire tag for the node type.
    pub fn kind(&self) -> &'static str {
        match self {
            ChunkNode::Paragraph { .. } => "paragraph",
            ChunkNode::Node { .. } => "node",
        }
    }

    pub fn children(&self) -> &[ChunkNode] {
        match self {
            ChunkNode::Paragraph { .. } => &[],
            ChunkNode::Node { children, .. } => children,
        }
    }

    /// Number of paragraph leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            ChunkNode::Paragraph { .. } => 1,
            ChunkNode::Node { children, .. } => children.iter().map(ChunkNode::leaf_count).sum(),
        }
    }

    /// Height of the subtree; a lone paragraph has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ChunkNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Validates a wire-form chunk tree and converts it into a typed one.
    ///
    /// The whole tree is rejected at the first malformed node, in document
    /// order, and the error names that node's path.
    pub fn from_source(source: &ChunkSource) -> Result<Self, MalformedChunk> {
        Self::from_source_at(source, ChunkPath::root())
    }

    fn from_source_at(source: &ChunkSource, path: ChunkPath) -> Result<Self, MalformedChunk> {
        match source.kind.as_str() {
            "paragraph" => {
                let content = source
                    .paragraph
                    .as_ref()
                    .ok_or_else(|| MalformedChunk::new(path, MalformedReason::MissingParagraph))?;
                Ok(ChunkNode::paragraph(content.clone()))
            }
            "node" => {
                let direction = match source.direction.as_deref() {
                    None => {
                        return Err(MalformedChunk::new(path, MalformedReason::MissingDirection));
                    }
                    Some(tag) => Direction::from_tag(tag).ok_or_else(|| {
                        MalformedChunk::new(
                            path.clone(),
                            MalformedReason::UnknownDirection(tag.to_string()),
                        )
                    })?,
                };
                let children = source
                    .children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| Self::from_source_at(child, path.child(i)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ChunkNode::Node {
                    direction,
                    children,
                })
            }
            other => Err(MalformedChunk::new(
                path,
                MalformedReason::UnknownTag(other.to_string()),
            )),
        }
    }
}

/// A chunk exactly as the compositor serializes it.
///
/// ```json
/// { "type": "node", "direction": "horizontal", "children": [
///     { "type": "paragraph", "paragraph": "<p>left</p>" },
///     { "type": "paragraph", "paragraph": "<p>right</p>" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSource {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChunkSource>,
}

impl From<&ChunkNode> for ChunkSource {
    fn from(node: &ChunkNode) -> Self {
        match node {
            ChunkNode::Paragraph { content } => ChunkSource {
                kind: "paragraph".to_string(),
                paragraph: Some(content.clone()),
                direction: None,
                children: Vec::new(),
            },
            ChunkNode::Node {
                direction,
                children,
            } => ChunkSource {
                kind: "node".to_string(),
                paragraph: None,
                direction: Some(direction.as_tag().to_string()),
                children: children.iter().map(ChunkSource::from).collect(),
            },
        }
    }
}
