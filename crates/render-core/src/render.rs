use crate::error::RenderError;
use crate::types::{HeadingElement, PageBlock, RenderedBlock};
use log::trace;
use slidedeck_idf::{ChunkNode, ChunkSource, Direction, HeadingSource, Page, PageSource};
use slidedeck_style::Arrangement;
use slidedeck_types::HeadingLevel;

fn arrangement_for(direction: Direction) -> Arrangement {
    match direction {
        Direction::Vertical => Arrangement::stacked(),
        Direction::Horizontal => Arrangement::distributed(),
    }
}

/// Renders a layout tree. Children keep their order; paragraph content is
/// passed through untouched.
pub fn render(chunk: &ChunkNode) -> RenderedBlock {
    match chunk {
        ChunkNode::Paragraph { content } => RenderedBlock::Paragraph {
            content: content.clone(),
        },
        ChunkNode::Node {
            direction,
            children,
        } => RenderedBlock::Container {
            direction: *direction,
            arrangement: arrangement_for(*direction),
            children: children.iter().map(render).collect(),
        },
    }
}

/// Renders a chunk tree in wire form, rejecting it whole if any node is
/// malformed.
pub fn render_source(chunk: &ChunkSource) -> Result<RenderedBlock, RenderError> {
    let typed = ChunkNode::from_source(chunk)?;
    Ok(render(&typed))
}

/// Renders a page: its present headings, its options, and its layout tree.
pub fn render_page(index: usize, page: &Page) -> PageBlock {
    let headings = HeadingLevel::ALL
        .into_iter()
        .filter_map(|level| {
            page.heading(level).map(|text| HeadingElement {
                level,
                text: text.to_string(),
            })
        })
        .collect();

    trace!(
        "Rendering page {} ({} leaves, depth {})",
        index,
        page.chunk.leaf_count(),
        page.chunk.depth()
    );

    PageBlock {
        index,
        number: index + 1,
        headings,
        styles: page.styles.clone(),
        centered: page.layout.is_centered(),
        body: render(&page.chunk),
    }
}

pub fn render_page_source(index: usize, page: &PageSource) -> Result<PageBlock, RenderError> {
    let typed = Page::from_source(page).map_err(|e| RenderError::from(e).on_page(index))?;
    Ok(render_page(index, &typed))
}
