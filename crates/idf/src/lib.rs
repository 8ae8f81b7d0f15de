//! Intermediate Document Format (IDF)
//! This crate defines the in-memory representation of a deck after the
//! compositor has split it into pages, but before outlining and rendering.
//!
//! Two forms exist for every page: the typed form ([`Page`], [`ChunkNode`])
//! the engine works on, and the wire form ([`PageSource`], [`ChunkSource`])
//! exactly as the compositor serializes it. Conversion from wire to typed form
//! is the only step that can reject a chunk.

mod chunk;
mod error;
mod page;

pub use chunk::{ChunkNode, ChunkSource, Direction};
pub use error::{MalformedChunk, MalformedReason};
pub use page::{HeadingSource, Page, PageSource};
