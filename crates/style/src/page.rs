//! Per-page presentation options supplied by the compositor.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a page's content is placed on the slide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    #[default]
    Content,
    Centered,
}

impl PageLayout {
    pub fn is_centered(self) -> bool {
        self == PageLayout::Centered
    }
}

/// Free-form CSS declarations applied to a page container.
///
/// Keys and values are passed through untouched; iteration is in key order so
/// that output is stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct PageStyles(BTreeMap<String, String>);

impl PageStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Formats the declarations as an inline `style` attribute body, e.g.
    /// `background-image: url(a.png); color: red; `.
    pub fn to_inline(&self) -> String {
        self.iter().map(|(k, v)| format!("{}: {}; ", k, v)).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PageStyles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
