use crate::chunk::{ChunkNode, ChunkSource};
use crate::error::MalformedChunk;
use serde::{Deserialize, Serialize};
use slidedeck_style::{PageLayout, PageStyles};
use slidedeck_types::HeadingLevel;

/// Read access to the three heading slots of a page.
///
/// Implemented by both the typed and the wire form so the outline can be
/// built without validating chunk trees first.
pub trait HeadingSource {
    /// The heading text exactly as supplied, empty strings included.
    fn raw_heading(&self, level: HeadingLevel) -> Option<&str>;

    /// The heading text at `level`, treating an empty string as absent.
    fn heading(&self, level: HeadingLevel) -> Option<&str> {
        self.raw_heading(level).filter(|text| !text.is_empty())
    }

    fn has_heading(&self, level: HeadingLevel) -> bool {
        self.heading(level).is_some()
    }
}

/// A single slide, as handed over by the compositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub h1: Option<String>,
    pub h2: Option<String>,
    pub h3: Option<String>,
    pub chunk: ChunkNode,
    pub layout: PageLayout,
    pub styles: PageStyles,
}

impl Page {
    pub fn new(chunk: ChunkNode) -> Self {
        Self {
            h1: None,
            h2: None,
            h3: None,
            chunk,
            layout: PageLayout::default(),
            styles: PageStyles::default(),
        }
    }

    pub fn with_heading(mut self, level: HeadingLevel, text: impl Into<String>) -> Self {
        let slot = match level {
            HeadingLevel::H1 => &mut self.h1,
            HeadingLevel::H2 => &mut self.h2,
            HeadingLevel::H3 => &mut self.h3,
        };
        *slot = Some(text.into());
        self
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_styles(mut self, styles: PageStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Validates the page's chunk tree. Headings and options carry over as-is.
    pub fn from_source(source: &PageSource) -> Result<Self, MalformedChunk> {
        Ok(Self {
            h1: source.h1.clone(),
            h2: source.h2.clone(),
            h3: source.h3.clone(),
            chunk: ChunkNode::from_source(&source.chunk)?,
            layout: source.layout,
            styles: source.styles.clone(),
        })
    }
}

impl HeadingSource for Page {
    fn raw_heading(&self, level: HeadingLevel) -> Option<&str> {
        match level {
            HeadingLevel::H1 => self.h1.as_deref(),
            HeadingLevel::H2 => self.h2.as_deref(),
            HeadingLevel::H3 => self.h3.as_deref(),
        }
    }
}

/// A page exactly as the compositor serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h3: Option<String>,
    pub chunk: ChunkSource,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default, skip_serializing_if = "PageStyles::is_empty")]
    pub styles: PageStyles,
}

impl From<&Page> for PageSource {
    fn from(page: &Page) -> Self {
        Self {
            h1: page.h1.clone(),
            h2: page.h2.clone(),
            h3: page.h3.clone(),
            chunk: ChunkSource::from(&page.chunk),
            layout: page.layout,
            styles: page.styles.clone(),
        }
    }
}

impl HeadingSource for PageSource {
    fn raw_heading(&self, level: HeadingLevel) -> Option<&str> {
        match level {
            HeadingLevel::H1 => self.h1.as_deref(),
            HeadingLevel::H2 => self.h2.as_deref(),
            HeadingLevel::H3 => self.h3.as_deref(),
        }
    }
}
