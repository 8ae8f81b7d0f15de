use slidedeck_types::{HeadingEntry, HeadingLevel};

/// A heading with the headings nested beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNode<'a> {
    /// Position of `heading` in the flat index.
    pub index: usize,
    pub heading: &'a HeadingEntry,
    pub children: Vec<SectionNode<'a>>,
}

/// Nests a flat heading index by level.
///
/// Each heading becomes a child of the closest preceding heading with a
/// shallower level. Headings with no such predecessor are roots.
pub fn nest_sections(headings: &[HeadingEntry]) -> Vec<SectionNode<'_>> {
    let mut pos = 0;
    nest_below(headings, &mut pos, None)
}

fn nest_below<'a>(
    headings: &'a [HeadingEntry],
    pos: &mut usize,
    parent: Option<HeadingLevel>,
) -> Vec<SectionNode<'a>> {
    let mut nodes = Vec::new();
    while let Some(heading) = headings.get(*pos) {
        if parent.is_some_and(|level| heading.level <= level) {
            break;
        }
        let index = *pos;
        *pos += 1;
        let children = nest_below(headings, pos, Some(heading.level));
        nodes.push(SectionNode {
            index,
            heading,
            children,
        });
    }
    nodes
}
