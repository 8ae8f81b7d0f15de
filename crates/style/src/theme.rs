//! Theme palettes and font stacks.
//!
//! A theme carries no layout logic. It is configuration handed through to the
//! presentation step, which exposes it as CSS custom properties.

use serde::{Deserialize, Serialize};
use slidedeck_types::Color;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub background: Color,
    pub text: Color,
    pub heading1: Color,
    pub heading2: Color,
    pub heading3: Color,
    pub accent: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: Color::gray(0xff),
            text: Color::gray(0x33),
            heading1: Color::gray(0x33),
            heading2: Color::gray(0x55),
            heading3: Color::gray(0x66),
            accent: Color::rgb(0x4c, 0xaf, 0x50),
        }
    }
}

/// CSS font stacks, passed through verbatim.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            heading: "Arial, sans-serif".to_string(),
            body: "Arial, sans-serif".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub colors: ThemeColors,
    #[serde(default)]
    pub fonts: ThemeFonts,
}

fn default_name() -> String {
    "default".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: default_name(),
            colors: ThemeColors::default(),
            fonts: ThemeFonts::default(),
        }
    }
}

impl Theme {
    /// The theme's custom properties, in declaration order.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        let c = &self.colors;
        vec![
            ("--background-color", c.background.to_string()),
            ("--text-color", c.text.to_string()),
            ("--heading1-color", c.heading1.to_string()),
            ("--heading2-color", c.heading2.to_string()),
            ("--heading3-color", c.heading3.to_string()),
            ("--accent-color", c.accent.to_string()),
            ("--heading-font", self.fonts.heading.clone()),
            ("--body-font", self.fonts.body.clone()),
        ]
    }
}
