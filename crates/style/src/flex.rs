//! Flexbox properties describing how a split container arranges its children.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    pub fn as_css(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    SpaceBetween,
}

impl JustifyContent {
    pub fn as_css(self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::SpaceBetween => "space-between",
        }
    }
}

/// Pixel gap between the children of a row container.
pub const ROW_GAP_PX: u32 = 20;

/// The resolved flex properties of one container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_px: Option<u32>,
}

impl Arrangement {
    /// Children stacked top to bottom.
    pub const fn stacked() -> Self {
        Self {
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            gap_px: None,
        }
    }

    /// Children laid left to right, evenly distributed with a fixed gap.
    pub const fn distributed() -> Self {
        Self {
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            gap_px: Some(ROW_GAP_PX),
        }
    }

    /// CSS declarations equivalent to this arrangement.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut decls = vec![
            ("flex-direction", self.flex_direction.as_css().to_string()),
            ("justify-content", self.justify_content.as_css().to_string()),
        ];
        if let Some(gap) = self.gap_px {
            decls.push(("gap", format!("{}px", gap)));
        }
        decls
    }
}
