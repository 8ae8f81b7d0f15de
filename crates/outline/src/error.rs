use slidedeck_types::HeadingLevel;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    /// A page was to be attributed to a heading level with no open heading,
    /// e.g. an `h2` on the first page with no `h1` before it.
    #[error("Page {page} cannot be attributed to an {level} heading: no {level} is open")]
    IndexConsistencyViolation { page: usize, level: HeadingLevel },
}
