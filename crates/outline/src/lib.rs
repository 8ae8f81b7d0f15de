//! Outline reconstruction.
//!
//! A deck arrives as a flat list of pages, each restating at most three
//! heading levels. This crate recovers which heading owns which pages with a
//! single left-to-right scan, and can nest the resulting flat index into a
//! section tree for navigation views.

mod builder;
mod error;
mod tree;

pub use builder::{OutlineBuilder, build_outline};
pub use error::OutlineError;
pub use tree::{SectionNode, nest_sections};
