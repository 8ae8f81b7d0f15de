#![allow(dead_code)]

pub mod fixtures;

use serde_json::Value;
use slidedeck::{Deck, DeckBuilder, ExecutorKind, PageSource, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Parse a JSON page array into wire-form pages.
pub fn pages_from_json(value: Value) -> Result<Vec<PageSource>, serde_json::Error> {
    serde_json::from_value(value)
}

/// A deck that renders sequentially.
pub fn sync_deck() -> Result<Deck, PipelineError> {
    DeckBuilder::new().with_executor(ExecutorKind::Sync).build()
}

/// Render a JSON page array straight to HTML with default settings.
pub fn html_from_json(value: Value) -> Result<String, Box<dyn std::error::Error>> {
    let pages = pages_from_json(value)?;
    Ok(DeckBuilder::new().build()?.to_html(pages)?)
}

/// The markup of the slide with the given one-based number, up to the next
/// slide.
pub fn slide_markup(html: &str, number: usize) -> Option<&str> {
    let start = html.find(&format!("id=\"slide-{}\"", number))?;
    let rest = &html[start..];
    let end = rest
        .find(&format!("id=\"slide-{}\"", number + 1))
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
