pub mod color;
pub mod document;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use document::{HeadingEntry, HeadingLevel, Outline, PageMeta};
pub use geometry::SlideSize;
pub use ids::ChunkPath;
