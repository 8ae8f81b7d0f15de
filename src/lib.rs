//! Outline reconstruction and layout rendering for composited slide decks.
//!
//! A compositor hands over pages that each restate up to three heading
//! levels and carry a layout tree of paragraphs and split containers. This
//! crate recovers the deck's heading outline, renders every page into
//! presentation blocks, and can serialize the result as a standalone HTML
//! document.
//!
//! ```no_run
//! use slidedeck::{DeckBuilder, load_pages};
//!
//! let pages = load_pages("pages.json")?;
//! let deck = DeckBuilder::new().with_title("Quarterly review").build()?;
//! let html = deck.to_html(pages)?;
//! # Ok::<(), slidedeck::PipelineError>(())
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{DeckConfig, load_theme};
pub use error::PipelineError;
pub use pipeline::{ComposedDeck, Deck, DeckBuilder, load_pages};

pub use slidedeck_executor::ExecutorKind;
pub use slidedeck_html::{HtmlDeckWriter, HtmlError};
pub use slidedeck_idf::{ChunkNode, ChunkSource, Direction, MalformedChunk, Page, PageSource};
pub use slidedeck_outline::{OutlineBuilder, OutlineError, build_outline};
pub use slidedeck_render_core::{
    DeckWriter, PageBlock, RenderError, RenderedBlock, render, render_page, render_page_source,
    render_source,
};
pub use slidedeck_style::{PageLayout, PageStyles, Theme};
pub use slidedeck_types::{HeadingEntry, HeadingLevel, Outline, PageMeta, SlideSize};
