//! HTML backend for rendered slide decks.
//!
//! Pages become `.slide-container` elements, layout containers become nested
//! flex `div`s, and the document shell is a Handlebars template carrying the
//! theme as CSS custom properties.

mod css;
mod error;
mod markup;
mod nav;
mod writer;

pub use css::stylesheet;
pub use error::HtmlError;
pub use markup::{block_html, page_html, write_block, write_page};
pub use nav::{outline_nav, write_outline_nav};
pub use writer::HtmlDeckWriter;
