use crate::types::PageBlock;
use slidedeck_types::Outline;

/// A backend that serializes rendered pages into a concrete format.
///
/// Callers drive it in document order: `begin_deck` once, `write_page` per
/// page, then `finish`.
pub trait DeckWriter {
    type Output;
    type Error;

    fn begin_deck(&mut self, title: &str, outline: &Outline) -> Result<(), Self::Error>;

    fn write_page(&mut self, page: &PageBlock) -> Result<(), Self::Error>;

    fn finish(self) -> Result<Self::Output, Self::Error>;
}
