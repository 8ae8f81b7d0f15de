use crate::css::stylesheet;
use crate::error::HtmlError;
use crate::markup::write_page;
use crate::nav::write_outline_nav;
use handlebars::Handlebars;
use log::debug;
use serde::Serialize;
use slidedeck_render_core::{DeckWriter, PageBlock};
use slidedeck_style::Theme;
use slidedeck_types::{Outline, SlideSize};
use std::collections::BTreeSet;

const DOCUMENT_TEMPLATE: &str = "deck";

const DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{title}}</title>
<style>
{{{css}}}
</style>
</head>
<body>
{{{nav}}}{{{slides}}}</body>
</html>
"#;

#[derive(Serialize)]
struct DocumentContext<'a> {
    title: &'a str,
    css: &'a str,
    nav: &'a str,
    slides: &'a str,
}

/// Collects rendered pages into a standalone HTML document.
pub struct HtmlDeckWriter {
    registry: Handlebars<'static>,
    theme: Theme,
    slide_size: SlideSize,
    include_nav: bool,
    title: Option<String>,
    outline: Outline,
    slides: String,
    written: BTreeSet<usize>,
}

impl HtmlDeckWriter {
    pub fn new(theme: Theme, slide_size: SlideSize) -> Result<Self, HtmlError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(DOCUMENT_TEMPLATE, DOCUMENT)?;
        Ok(Self {
            registry,
            theme,
            slide_size,
            include_nav: true,
            title: None,
            outline: Outline::default(),
            slides: String::new(),
            written: BTreeSet::new(),
        })
    }

    /// Whether to emit the outline navigation ahead of the slides.
    pub fn with_nav(mut self, include_nav: bool) -> Self {
        self.include_nav = include_nav;
        self
    }

    pub fn pages_written(&self) -> usize {
        self.written.len()
    }
}

impl DeckWriter for HtmlDeckWriter {
    type Output = String;
    type Error = HtmlError;

    fn begin_deck(&mut self, title: &str, outline: &Outline) -> Result<(), HtmlError> {
        self.title = Some(title.to_string());
        if self.include_nav {
            self.outline = outline.clone();
        }
        Ok(())
    }

    fn write_page(&mut self, page: &PageBlock) -> Result<(), HtmlError> {
        if self.title.is_none() {
            return Err(HtmlError::NotStarted(page.index));
        }
        write_page(&mut self.slides, page)?;
        self.written.insert(page.index);
        Ok(())
    }

    fn finish(self) -> Result<String, HtmlError> {
        let css = stylesheet(&self.theme, self.slide_size);
        // Links only target slides that were actually written.
        let mut nav = String::new();
        write_outline_nav(&mut nav, &self.outline, |page| self.written.contains(&page))?;

        let context = DocumentContext {
            title: self.title.as_deref().unwrap_or_default(),
            css: &css,
            nav: &nav,
            slides: &self.slides,
        };
        let html = self.registry.render(DOCUMENT_TEMPLATE, &context)?;
        debug!(
            "Assembled HTML document: {} slides, {} bytes",
            self.written.len(),
            html.len()
        );
        Ok(html)
    }
}
