use thiserror::Error;

#[derive(Error, Debug)]
pub enum HtmlError {
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("Template rendering error: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("Page {0} was written before the deck was started")]
    NotStarted(usize),
}
