use handlebars::html_escape;
use slidedeck_outline::{SectionNode, nest_sections};
use slidedeck_types::Outline;
use std::fmt::{self, Write};

fn write_sections<W, F>(out: &mut W, sections: &[SectionNode<'_>], has_slide: &F) -> fmt::Result
where
    W: Write,
    F: Fn(usize) -> bool,
{
    writeln!(out, "<ul>")?;
    for section in sections {
        let heading = section.heading;
        write!(
            out,
            "<li class=\"{}\" data-heading=\"{}\">",
            heading.level.tag(),
            slug::slugify(&heading.content)
        )?;
        let text = html_escape(&heading.content);
        match heading.page_ids.iter().find(|&&page| has_slide(page)) {
            Some(page) => write!(out, "<a href=\"#slide-{}\">{}</a>", page + 1, text)?,
            None => out.write_str(&text)?,
        }
        if !section.children.is_empty() {
            writeln!(out)?;
            write_sections(out, &section.children, has_slide)?;
        }
        writeln!(out, "</li>")?;
    }
    writeln!(out, "</ul>")
}

/// Writes a nested table of contents. Each heading links to the first of
/// its pages for which `has_slide` holds; a heading with no such page is
/// listed as plain text. Nothing is written when the deck has no headings.
pub fn write_outline_nav<W, F>(out: &mut W, outline: &Outline, has_slide: F) -> fmt::Result
where
    W: Write,
    F: Fn(usize) -> bool,
{
    let sections = nest_sections(&outline.headings);
    if sections.is_empty() {
        return Ok(());
    }
    writeln!(out, "<nav class=\"outline\">")?;
    write_sections(out, &sections, &has_slide)?;
    writeln!(out, "</nav>")
}

/// [`write_outline_nav`] into a fresh string, assuming every page has a slide.
pub fn outline_nav(outline: &Outline) -> String {
    let mut out = String::new();
    let _ = write_outline_nav(&mut out, outline, |_| true);
    out
}
