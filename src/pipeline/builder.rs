use super::deck::Deck;
use crate::config::{DeckConfig, load_theme};
use crate::error::PipelineError;
use slidedeck_executor::ExecutorKind;
use slidedeck_style::Theme;
use slidedeck_types::SlideSize;
use std::path::Path;

/// A builder for creating a [`Deck`].
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    config: DeckConfig,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces every setting with the given configuration.
    pub fn with_config(mut self, config: DeckConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads a `deck.json` file. Settings made before this call are replaced.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = DeckConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    pub fn with_theme_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let theme = load_theme(path)?;
        Ok(self.with_theme(theme))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn with_slide_size(mut self, size: SlideSize) -> Self {
        self.config.slide_size = size;
        self
    }

    /// Selects how pages are dispatched for rendering.
    pub fn with_executor(mut self, kind: ExecutorKind) -> Self {
        self.config.executor = kind;
        self
    }

    pub fn with_skip_malformed_pages(mut self, skip: bool) -> Self {
        self.config.skip_malformed_pages = skip;
        self
    }

    pub fn build(self) -> Result<Deck, PipelineError> {
        let size = self.config.slide_size;
        if size.width == 0 || size.height == 0 {
            return Err(PipelineError::Config(format!(
                "Slide size must be non-zero, got {}x{}",
                size.width, size.height
            )));
        }
        Ok(Deck::new(self.config))
    }
}
