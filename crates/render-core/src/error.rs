use slidedeck_idf::MalformedChunk;
use slidedeck_types::ChunkPath;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A chunk tree that could not be rendered. Nothing was produced for it.
    #[error("{}{source}", page_label(.page))]
    MalformedChunk {
        page: Option<usize>,
        source: MalformedChunk,
    },
}

fn page_label(page: &Option<usize>) -> String {
    match page {
        Some(index) => format!("Page {}: ", index),
        None => String::new(),
    }
}

impl RenderError {
    /// Index of the page whose tree was rejected, when rendering a page.
    pub fn page(&self) -> Option<usize> {
        match self {
            RenderError::MalformedChunk { page, .. } => *page,
        }
    }

    /// Location of the offending node inside its tree.
    pub fn path(&self) -> &ChunkPath {
        match self {
            RenderError::MalformedChunk { source, .. } => &source.path,
        }
    }

    pub(crate) fn on_page(self, index: usize) -> Self {
        match self {
            RenderError::MalformedChunk { source, .. } => RenderError::MalformedChunk {
                page: Some(index),
                source,
            },
        }
    }
}

impl From<MalformedChunk> for RenderError {
    fn from(source: MalformedChunk) -> Self {
        RenderError::MalformedChunk { page: None, source }
    }
}
