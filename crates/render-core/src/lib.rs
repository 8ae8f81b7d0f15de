//! Core rendering for slide pages.
//!
//! This crate maps a page's layout tree onto presentation containers:
//! - [`render`] / [`render_source`] for a single chunk tree
//! - [`render_page`] / [`render_page_source`] for a full page with its headings and options
//! - [`DeckWriter`] for backends that serialize rendered pages into markup
//!
//! Rendering is pure; distinct pages can be rendered on different threads.

mod error;
mod render;
mod traits;
mod types;

pub use error::RenderError;
pub use render::{render, render_page, render_page_source, render_source};
pub use traits::DeckWriter;
pub use types::{HeadingElement, PageBlock, RenderedBlock};
