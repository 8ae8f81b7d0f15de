use crate::config::DeckConfig;
use crate::error::PipelineError;
use log::{debug, info, warn};
use serde::Serialize;
use slidedeck_executor::{Executor, ExecutorImpl};
use slidedeck_html::HtmlDeckWriter;
use slidedeck_idf::PageSource;
use slidedeck_outline::build_outline;
use slidedeck_render_core::{DeckWriter, PageBlock, RenderError, render_page_source};
use slidedeck_types::Outline;
use std::fs;
use std::io;
use std::path::Path;

/// Reads a JSON array of composited pages.
pub fn load_pages<P: AsRef<Path>>(path: P) -> Result<Vec<PageSource>, PipelineError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read pages from '{}': {}", path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&source)?)
}

/// A deck after outlining and rendering, ready to hand to a [`DeckWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedDeck {
    pub title: String,
    pub outline: Outline,
    /// Rendered pages in deck order. Each keeps its original index.
    pub pages: Vec<PageBlock>,
    /// Indices of pages dropped for having a malformed layout tree.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<usize>,
}

impl ComposedDeck {
    /// Drives a writer through the whole deck.
    pub fn write_with<W: DeckWriter>(&self, mut writer: W) -> Result<W::Output, W::Error> {
        writer.begin_deck(&self.title, &self.outline)?;
        for page in &self.pages {
            writer.write_page(page)?;
        }
        writer.finish()
    }
}

/// The configured outline-and-render pipeline.
#[derive(Debug, Clone)]
pub struct Deck {
    config: DeckConfig,
    executor: ExecutorImpl,
}

impl Deck {
    pub(crate) fn new(config: DeckConfig) -> Self {
        let executor = ExecutorImpl::from_kind(config.executor);
        Self { config, executor }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Builds the heading outline. Always sequential.
    pub fn outline(&self, pages: &[PageSource]) -> Result<Outline, PipelineError> {
        Ok(build_outline(pages)?)
    }

    /// Renders every page through the configured executor. Results line up
    /// with the input; one bad page does not affect the others.
    pub fn render_pages(&self, pages: Vec<PageSource>) -> Vec<Result<PageBlock, RenderError>> {
        debug!(
            "Rendering {} pages with {} executor (parallelism {})",
            pages.len(),
            self.executor.name(),
            self.executor.parallelism()
        );
        let indexed: Vec<(usize, PageSource)> = pages.into_iter().enumerate().collect();
        self.executor
            .map_ordered(indexed, |(index, page)| render_page_source(index, &page))
    }

    pub fn compose(&self, pages: Vec<PageSource>) -> Result<ComposedDeck, PipelineError> {
        let outline = self.outline(&pages)?;
        let total = pages.len();

        let mut rendered = Vec::with_capacity(total);
        let mut skipped = Vec::new();
        for result in self.render_pages(pages) {
            match result {
                Ok(page) => rendered.push(page),
                Err(err) if self.config.skip_malformed_pages => {
                    warn!("Skipping page: {}", err);
                    skipped.extend(err.page());
                }
                Err(err) => return Err(err.into()),
            }
        }

        info!(
            "Composed deck '{}': {} of {} pages rendered, {} headings",
            self.config.title,
            rendered.len(),
            total,
            outline.headings.len()
        );
        Ok(ComposedDeck {
            title: self.config.title.clone(),
            outline,
            pages: rendered,
            skipped,
        })
    }

    /// Composes the deck into a standalone HTML document.
    pub fn to_html(&self, pages: Vec<PageSource>) -> Result<String, PipelineError> {
        let composed = self.compose(pages)?;
        let writer = HtmlDeckWriter::new(self.config.theme.clone(), self.config.slide_size)?;
        Ok(composed.write_with(writer)?)
    }
}
