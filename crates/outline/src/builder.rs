use crate::error::OutlineError;
use log::{debug, trace};
use slidedeck_idf::HeadingSource;
use slidedeck_types::{HeadingEntry, HeadingLevel, Outline, PageMeta};

/// The heading context carried from one page to the next.
///
/// `current` holds the active text per level and `open` the index of the
/// entry that pages are attributed to. A shallower heading change clears
/// `current` below it; `open` is only ever overwritten, so attribution keeps
/// reaching the last entry of a level even across a parent change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct HeadingState {
    current: [Option<String>; 3],
    open: [Option<usize>; 3],
}

impl HeadingState {
    fn is_current(&self, level: HeadingLevel, text: &str) -> bool {
        self.current[level.slot()].as_deref() == Some(text)
    }

    fn open_heading(&mut self, level: HeadingLevel, text: &str, headings: &mut Vec<HeadingEntry>) {
        for deeper in level.deeper() {
            self.current[deeper.slot()] = None;
        }
        self.current[level.slot()] = Some(text.to_string());
        self.open[level.slot()] = Some(headings.len());
        headings.push(HeadingEntry::new(level, text));
    }

    fn snapshot(&self) -> PageMeta {
        let [h1, h2, h3] = self.current.clone();
        PageMeta { h1, h2, h3 }
    }
}

/// Incremental form of [`build_outline`]: feed pages in document order.
///
/// A rejected page leaves the builder exactly as it was before the call.
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    state: HeadingState,
    outline: Outline,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages accepted so far; also the index the next page gets.
    pub fn pages_seen(&self) -> usize {
        self.outline.page_meta.len()
    }

    /// Scans one page and returns the heading context in effect on it.
    pub fn push<P: HeadingSource + ?Sized>(&mut self, page: &P) -> Result<&PageMeta, OutlineError> {
        let index = self.pages_seen();
        let saved_state = self.state.clone();
        let saved_len = self.outline.headings.len();

        match self.advance(index, page) {
            Ok(meta) => {
                trace!("Page {} heading context: {:?}", index, meta);
                self.outline.page_meta.push(meta);
                Ok(&self.outline.page_meta[index])
            }
            Err(e) => {
                self.state = saved_state;
                self.outline.headings.truncate(saved_len);
                Err(e)
            }
        }
    }

    pub fn finish(self) -> Outline {
        self.outline
    }

    fn advance<P: HeadingSource + ?Sized>(
        &mut self,
        index: usize,
        page: &P,
    ) -> Result<PageMeta, OutlineError> {
        for level in HeadingLevel::ALL {
            if let Some(text) = page.heading(level) {
                if !self.state.is_current(level, text) {
                    debug!("Page {} opens {} '{}'", index, level, text);
                    self.state.open_heading(level, text, &mut self.outline.headings);
                }
            }
        }

        // A page belongs to every open level down to its deepest own heading.
        let deepest = HeadingLevel::ALL
            .into_iter()
            .rev()
            .find(|level| page.has_heading(*level));

        if let Some(deepest) = deepest {
            let targets = HeadingLevel::ALL
                .into_iter()
                .filter(|level| *level <= deepest)
                .map(|level| {
                    self.state.open[level.slot()]
                        .ok_or(OutlineError::IndexConsistencyViolation { page: index, level })
                })
                .collect::<Result<Vec<_>, _>>()?;

            for target in targets {
                self.outline.headings[target].page_ids.push(index);
            }
        }

        Ok(self.state.snapshot())
    }
}

/// Reconstructs the outline of a deck in one forward pass.
///
/// Fails on the first page that would be attributed to a heading level that
/// no earlier page has opened; no partial outline is returned.
pub fn build_outline<P: HeadingSource>(pages: &[P]) -> Result<Outline, OutlineError> {
    let mut builder = OutlineBuilder::new();
    for page in pages {
        builder.push(page)?;
    }
    let outline = builder.finish();
    debug!(
        "Built outline: {} pages, {} headings",
        outline.page_meta.len(),
        outline.headings.len()
    );
    Ok(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use slidedeck_idf::{ChunkNode, Page};

    fn page(h1: Option<&str>, h2: Option<&str>, h3: Option<&str>) -> Page {
        Page {
            h1: h1.map(str::to_string),
            h2: h2.map(str::to_string),
            h3: h3.map(str::to_string),
            ..Page::new(ChunkNode::paragraph(""))
        }
    }

    fn meta(h1: Option<&str>, h2: Option<&str>, h3: Option<&str>) -> PageMeta {
        PageMeta {
            h1: h1.map(str::to_string),
            h2: h2.map(str::to_string),
            h3: h3.map(str::to_string),
        }
    }

    fn entry(level: HeadingLevel, content: &str, page_ids: &[usize]) -> HeadingEntry {
        HeadingEntry {
            level,
            content: content.to_string(),
            page_ids: page_ids.to_vec(),
        }
    }

    #[test]
    fn test_three_level_descent() {
        let pages = vec![
            page(Some("X"), None, None),
            page(None, Some("Y"), None),
            page(None, None, Some("Z")),
            page(None, None, None),
        ];
        let outline = build_outline(&pages).unwrap();

        assert_eq!(
            outline.headings,
            vec![
                entry(HeadingLevel::H1, "X", &[0, 1, 2]),
                entry(HeadingLevel::H2, "Y", &[1, 2]),
                entry(HeadingLevel::H3, "Z", &[2]),
            ]
        );
        assert_eq!(
            outline.page_meta,
            vec![
                meta(Some("X"), None, None),
                meta(Some("X"), Some("Y"), None),
                meta(Some("X"), Some("Y"), Some("Z")),
                meta(Some("X"), Some("Y"), Some("Z")),
            ]
        );
    }

    #[test]
    fn test_repeated_h1_keeps_lower_levels() {
        let pages = vec![
            page(Some("A"), Some("a1"), Some("i")),
            page(Some("A"), None, None),
        ];
        let outline = build_outline(&pages).unwrap();

        assert_eq!(outline.headings.len(), 3);
        assert_eq!(outline.headings[0].page_ids, vec![0, 1]);
        assert_eq!(outline.page_meta[1], meta(Some("A"), Some("a1"), Some("i")));
    }

    #[test]
    fn test_new_h1_resets_lower_levels() {
        let pages = vec![
            page(Some("A"), Some("a1"), Some("i")),
            page(Some("B"), None, None),
            page(None, Some("a1"), None),
        ];
        let outline = build_outline(&pages).unwrap();

        assert_eq!(outline.page_meta[1], meta(Some("B"), None, None));
        // Same h2 text as before the reset still opens a fresh entry.
        assert_eq!(
            outline.headings.last(),
            Some(&entry(HeadingLevel::H2, "a1", &[2]))
        );
        assert_eq!(outline.headings[3], entry(HeadingLevel::H1, "B", &[1, 2]));
    }

    #[test]
    fn test_non_adjacent_repeat_is_unchanged() {
        let pages = vec![
            page(Some("A"), None, None),
            page(None, None, None),
            page(Some("A"), None, None),
        ];
        let outline = build_outline(&pages).unwrap();
        assert_eq!(outline.headings, vec![entry(HeadingLevel::H1, "A", &[0, 2])]);
    }

    #[test]
    fn test_restated_heading_is_attributed_each_time() {
        let pages = vec![
            page(Some("A"), Some("b"), None),
            page(None, Some("b"), None),
            page(None, None, None),
        ];
        let outline = build_outline(&pages).unwrap();
        assert_eq!(outline.headings[1], entry(HeadingLevel::H2, "b", &[0, 1]));
    }

    #[test]
    fn test_empty_deck() {
        let pages: Vec<Page> = Vec::new();
        let outline = build_outline(&pages).unwrap();
        assert!(outline.page_meta.is_empty());
        assert!(outline.headings.is_empty());
    }

    #[test]
    fn test_headingless_pages_carry_nothing() {
        let pages = vec![page(None, None, None), page(None, None, None)];
        let outline = build_outline(&pages).unwrap();
        assert_eq!(outline.page_meta, vec![PageMeta::default(), PageMeta::default()]);
        assert!(outline.headings.is_empty());
    }

    #[test]
    fn test_empty_heading_text_is_absent() {
        let pages = vec![page(Some("A"), Some(""), None)];
        let outline = build_outline(&pages).unwrap();
        assert_eq!(outline.headings, vec![entry(HeadingLevel::H1, "A", &[0])]);
        assert_eq!(outline.page_meta[0], meta(Some("A"), None, None));
    }

    #[test]
    fn test_h2_without_h1_is_a_violation() {
        let pages = vec![page(None, Some("orphan"), None)];
        assert_eq!(
            build_outline(&pages),
            Err(OutlineError::IndexConsistencyViolation {
                page: 0,
                level: HeadingLevel::H1
            })
        );
    }

    #[test]
    fn test_h3_under_fresh_h1_reaches_last_h2() {
        let pages = vec![
            page(Some("A"), Some("a"), None),
            page(Some("B"), None, Some("deep")),
        ];
        let outline = build_outline(&pages).unwrap();

        assert_eq!(
            outline.headings,
            vec![
                entry(HeadingLevel::H1, "A", &[0]),
                entry(HeadingLevel::H2, "a", &[0, 1]),
                entry(HeadingLevel::H1, "B", &[1]),
                entry(HeadingLevel::H3, "deep", &[1]),
            ]
        );
        assert_eq!(outline.page_meta[1], meta(Some("B"), None, Some("deep")));
    }

    #[test]
    fn test_h3_before_any_h2_is_a_violation() {
        let pages = vec![page(Some("A"), None, None), page(None, None, Some("deep"))];
        assert_eq!(
            build_outline(&pages),
            Err(OutlineError::IndexConsistencyViolation {
                page: 1,
                level: HeadingLevel::H2
            })
        );
    }

    #[test]
    fn test_rejected_page_leaves_builder_untouched() {
        let mut builder = OutlineBuilder::new();
        builder.push(&page(Some("A"), None, None)).unwrap();
        let before = builder.clone().finish();

        let err = builder.push(&page(None, None, Some("deep")));
        assert!(err.is_err());
        assert_eq!(builder.pages_seen(), 1);
        assert_eq!(builder.clone().finish(), before);

        // "deep" was rolled back, so a later h3 with the same text is new.
        builder.push(&page(None, Some("a"), Some("deep"))).unwrap();
        let after = builder.finish();
        assert_eq!(
            after.headings,
            vec![
                entry(HeadingLevel::H1, "A", &[0, 1]),
                entry(HeadingLevel::H2, "a", &[1]),
                entry(HeadingLevel::H3, "deep", &[1]),
            ]
        );
        assert_eq!(after.page_meta[1], meta(Some("A"), Some("a"), Some("deep")));
    }

    #[test]
    fn test_error_message_names_page_and_level() {
        let err = OutlineError::IndexConsistencyViolation {
            page: 4,
            level: HeadingLevel::H2,
        };
        assert_eq!(
            err.to_string(),
            "Page 4 cannot be attributed to an h2 heading: no h2 is open"
        );
    }

    /// Random decks that never attribute to an unopened level: the first page
    /// opens an h1 and an h3 only ever appears next to an h2.
    fn random_deck(rng: &mut StdRng, len: usize) -> Vec<Page> {
        const H1: [&str; 2] = ["Alpha", "Beta"];
        const H2: [&str; 3] = ["one", "two", "three"];
        const H3: [&str; 2] = ["i", "ii"];

        (0..len)
            .map(|i| {
                let h1 = (i == 0 || rng.random_bool(0.2)).then(|| H1[rng.random_range(0..2)]);
                let h2 = rng.random_bool(0.4).then(|| H2[rng.random_range(0..3)]);
                let h3 = (h2.is_some() && rng.random_bool(0.5)).then(|| H3[rng.random_range(0..2)]);
                page(h1, h2, h3)
            })
            .collect()
    }

    #[test]
    fn test_page_ids_strictly_increasing_and_in_range() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [1, 2, 5, 17, 64] {
            let pages = random_deck(&mut rng, len);
            let outline = build_outline(&pages).unwrap();

            assert_eq!(outline.page_meta.len(), pages.len());
            for heading in &outline.headings {
                assert!(!heading.page_ids.is_empty());
                assert!(heading.page_ids.windows(2).all(|w| w[0] < w[1]));
                assert!(heading.page_ids.iter().all(|&id| id < pages.len()));
            }
        }
    }

    fn last_text(pages: &[Page], level: HeadingLevel) -> Option<&str> {
        pages.iter().rev().find_map(|p| p.heading(level))
    }

    /// Offset of the last page that changes `level`, with nothing in effect
    /// before `pages[0]`.
    fn last_change(pages: &[Page], level: HeadingLevel) -> Option<usize> {
        (0..pages.len()).rev().find(|&p| {
            pages[p]
                .heading(level)
                .is_some_and(|text| last_text(&pages[..p], level) != Some(text))
        })
    }

    /// Heading context on page `i`, recomputed from scratch by looking back
    /// from it: a level resets wherever a shallower level last changed.
    fn naive_meta(pages: &[Page], i: usize) -> PageMeta {
        let seen = &pages[..=i];
        let from_h1 = last_change(seen, HeadingLevel::H1).unwrap_or(0);
        let h1_span = &seen[from_h1..];
        let from_h2 = from_h1 + last_change(h1_span, HeadingLevel::H2).unwrap_or(0);
        let owned = |t: Option<&str>| t.map(str::to_string);
        PageMeta {
            h1: owned(last_text(seen, HeadingLevel::H1)),
            h2: owned(last_text(h1_span, HeadingLevel::H2)),
            h3: owned(last_text(&seen[from_h2..], HeadingLevel::H3)),
        }
    }

    #[test]
    fn test_naive_meta_follows_resets() {
        let pages = vec![
            page(Some("A"), Some("a"), Some("i")),
            page(Some("A"), None, None),
            page(Some("B"), None, None),
            page(None, Some("b"), None),
        ];
        assert_eq!(naive_meta(&pages, 1), meta(Some("A"), Some("a"), Some("i")));
        assert_eq!(naive_meta(&pages, 2), meta(Some("B"), None, None));
        assert_eq!(naive_meta(&pages, 3), meta(Some("B"), Some("b"), None));
    }

    #[test]
    fn test_page_meta_matches_naive_lookback() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in [1, 8, 40, 120] {
            let pages = random_deck(&mut rng, len);
            let outline = build_outline(&pages).unwrap();

            for i in 0..pages.len() {
                assert_eq!(outline.page_meta[i], naive_meta(&pages, i), "page {}", i);
            }
        }
    }

    #[test]
    fn test_rebuild_is_identical() {
        let mut rng = StdRng::seed_from_u64(7);
        let pages = random_deck(&mut rng, 30);
        assert_eq!(build_outline(&pages), build_outline(&pages));
    }
}
