use handlebars::html_escape;
use slidedeck_idf::Direction;
use slidedeck_render_core::{PageBlock, RenderedBlock};
use std::fmt::{self, Write};

fn container_class(block: &RenderedBlock) -> &'static str {
    match block.direction() {
        None => "chunk chunk-paragraph",
        Some(Direction::Vertical) => "chunk chunk-vertical",
        Some(Direction::Horizontal) => "chunk chunk-horizontal",
    }
}

/// Writes a rendered block as nested `div`s. Paragraph content is emitted
/// as-is; it is markup already.
pub fn write_block<W: Write>(out: &mut W, block: &RenderedBlock) -> fmt::Result {
    writeln!(out, "<div class=\"{}\">", container_class(block))?;
    match block {
        RenderedBlock::Paragraph { content } => writeln!(out, "{}", content)?,
        RenderedBlock::Container { children, .. } => {
            for child in children {
                write_block(out, child)?;
            }
        }
    }
    writeln!(out, "</div>")
}

/// Writes one slide. Heading text and style values are escaped.
pub fn write_page<W: Write>(out: &mut W, page: &PageBlock) -> fmt::Result {
    writeln!(
        out,
        "<div class=\"slide-container\" id=\"slide-{}\">",
        page.number
    )?;
    write!(out, "<div class=\"slide-content")?;
    if page.centered {
        write!(out, " centered")?;
    }
    write!(out, "\"")?;
    if !page.styles.is_empty() {
        write!(out, " style=\"{}\"", html_escape(&page.styles.to_inline()))?;
    }
    writeln!(out, ">")?;

    for heading in &page.headings {
        let tag = heading.level.tag();
        writeln!(out, "<{tag}>{}</{tag}>", html_escape(&heading.text))?;
    }

    writeln!(out, "<div class=\"content\">")?;
    writeln!(out, "<div class=\"auto-sizing\">")?;
    write_block(out, &page.body)?;
    writeln!(out, "</div>")?;
    writeln!(out, "<div class=\"slide-number\"><p>{}</p></div>", page.number)?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")
}

pub fn block_html(block: &RenderedBlock) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_block(&mut out, block);
    out
}

pub fn page_html(page: &PageBlock) -> String {
    let mut out = String::new();
    let _ = write_page(&mut out, page);
    out
}
