//! The deck pipeline: outline the pages, render each one, hand the result to
//! a writer.

mod builder;
mod deck;

pub use builder::DeckBuilder;
pub use deck::{ComposedDeck, Deck, load_pages};
