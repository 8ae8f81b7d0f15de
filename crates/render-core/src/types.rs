use serde::Serialize;
use slidedeck_idf::Direction;
use slidedeck_style::{Arrangement, PageStyles};
use slidedeck_types::HeadingLevel;

/// A rendered visual block: either a paragraph leaf or a split container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderedBlock {
    /// Inline markup, carried through exactly as the compositor produced it.
    Paragraph { content: String },
    Container {
        direction: Direction,
        arrangement: Arrangement,
        children: Vec<RenderedBlock>,
    },
}

impl RenderedBlock {
    pub fn is_paragraph(&self) -> bool {
        matches!(self, RenderedBlock::Paragraph { .. })
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            RenderedBlock::Paragraph { .. } => None,
            RenderedBlock::Container { direction, .. } => Some(*direction),
        }
    }

    pub fn children(&self) -> &[RenderedBlock] {
        match self {
            RenderedBlock::Paragraph { .. } => &[],
            RenderedBlock::Container { children, .. } => children,
        }
    }

    /// Paragraph contents in document order.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RenderedBlock::Paragraph { content } => out.push(content),
            RenderedBlock::Container { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

/// A heading shown at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingElement {
    pub level: HeadingLevel,
    pub text: String,
}

/// A fully rendered page, ready for a presentation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBlock {
    /// Zero-based position in the deck.
    pub index: usize,
    /// One-based slide number as displayed.
    pub number: usize,
    /// Only the levels present on the page, shallowest first.
    pub headings: Vec<HeadingElement>,
    pub styles: PageStyles,
    pub centered: bool,
    pub body: RenderedBlock,
}
