use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the three heading levels a page can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];

    /// The numeric level (1 = h1, 2 = h2, 3 = h3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Zero-based slot index, for per-level state arrays.
    pub fn slot(self) -> usize {
        usize::from(self.as_u8() - 1)
    }

    /// The levels strictly below this one, top-down.
    pub fn deeper(self) -> &'static [HeadingLevel] {
        match self {
            HeadingLevel::H1 => &[HeadingLevel::H2, HeadingLevel::H3],
            HeadingLevel::H2 => &[HeadingLevel::H3],
            HeadingLevel::H3 => &[],
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(format!("heading level must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for HeadingLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        HeadingLevel::try_from(raw).map_err(de::Error::custom)
    }
}

/// An entry in the document outline.
///
/// One entry exists per heading text change; `page_ids` lists, in increasing
/// order, every page attributed to the heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingEntry {
    pub level: HeadingLevel,
    /// The text content of the heading.
    pub content: String,
    pub page_ids: Vec<usize>,
}

impl HeadingEntry {
    pub fn new(level: HeadingLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
            page_ids: Vec::new(),
        }
    }

    /// The page that introduced this heading, if any page was attributed.
    pub fn first_page(&self) -> Option<usize> {
        self.page_ids.first().copied()
    }
}

/// The heading context in effect on a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub h1: Option<String>,
    pub h2: Option<String>,
    pub h3: Option<String>,
}

impl PageMeta {
    pub fn get(&self, level: HeadingLevel) -> Option<&str> {
        match level {
            HeadingLevel::H1 => self.h1.as_deref(),
            HeadingLevel::H2 => self.h2.as_deref(),
            HeadingLevel::H3 => self.h3.as_deref(),
        }
    }
}

/// The reconstructed structure of a deck: a flat heading index plus one
/// heading snapshot per page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub page_meta: Vec<PageMeta>,
    pub headings: Vec<HeadingEntry>,
}

impl Outline {
    pub fn page_count(&self) -> usize {
        self.page_meta.len()
    }

    pub fn headings_at(&self, level: HeadingLevel) -> impl Iterator<Item = &HeadingEntry> {
        self.headings.iter().filter(move |h| h.level == level)
    }
}
