use slidedeck_html::HtmlError;
use slidedeck_outline::OutlineError;
use slidedeck_render_core::RenderError;
use thiserror::Error;

/// Every way turning a deck of pages into output can fail.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Outline failed: {0}")]
    Outline(#[from] OutlineError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("HTML output failed: {0}")]
    Html(#[from] HtmlError),
}
