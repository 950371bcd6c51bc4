//! Smooth anchor scrolling and scroll-spy link highlighting.

use crate::config::ScrollConfig;

/// A page section as laid out in the document (pixels from the top).
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollSpy {
    config: ScrollConfig,
}

impl ScrollSpy {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    /// Where to scroll for an in-page link, leaving room for the fixed header.
    ///
    /// A bare `#` and links to unknown sections do nothing.
    pub fn scroll_target(&self, href: &str, sections: &[Section]) -> Option<f64> {
        let id = fragment(href)?;
        let section = sections.iter().find(|s| s.id == id)?;
        Some((section.top - self.config.header_offset).max(0.0))
    }

    /// The section the reader is in: the last one whose top (less the spy
    /// offset) has been scrolled past.
    pub fn active_section<'a>(&self, scroll_y: f64, sections: &'a [Section]) -> Option<&'a str> {
        sections
            .iter()
            .filter(|s| scroll_y >= s.top - self.config.spy_offset)
            .last()
            .map(|s| s.id.as_str())
    }
}

/// Whether a nav link points at the active section
pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    match (fragment(href), active) {
        (Some(id), Some(active)) => id == active,
        _ => false,
    }
}

fn fragment(href: &str) -> Option<&str> {
    let (_, id) = href.rsplit_once('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
