use serde::{Deserialize, Serialize};

/// Pixel dimensions of a rendered slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSize {
    pub width: u32,
    pub height: u32,
}

impl SlideSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for SlideSize {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
        }
    }
}
