use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use slidedeck_executor::ExecutorKind;
use slidedeck_style::Theme;
use slidedeck_types::SlideSize;
use std::fs;
use std::io;
use std::path::Path;

fn default_title() -> String {
    "Presentation".to_string()
}

/// Deck-wide settings, as read from a `deck.json` file.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub slide_size: SlideSize,
    #[serde(default)]
    pub executor: ExecutorKind,
    /// Drop pages whose layout tree is malformed instead of failing the deck.
    #[serde(default)]
    pub skip_malformed_pages: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: Theme::default(),
            slide_size: SlideSize::default(),
            executor: ExecutorKind::default(),
            skip_malformed_pages: false,
        }
    }
}

impl DeckConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read deck config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }
}

/// Reads a standalone theme file.
pub fn load_theme<P: AsRef<Path>>(path: P) -> Result<Theme, PipelineError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read theme from '{}': {}", path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&source)?)
}
