//! Tab data structure
//!
//! A tab shows an optional icon line, an optional title line and a badge.
//! The display payload is opaque to selection and indicator logic; only its
//! content height matters for wrap-content layout.

use crate::types::Color;

/// Badge values above this render as `99+`.
pub const MAX_BADGE: i32 = 99;

/// Display payload for one tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabDisplay {
    pub icon: Option<String>,
    pub title: Option<String>,
    /// 0 hides the badge, negative values show a dot.
    pub badge: i32,
    pub background: Option<Color>,
}

impl TabDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self::new().title(title)
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn badge(mut self, badge: i32) -> Self {
        self.badge = badge;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Text shown for the badge, if any.
    pub fn badge_label(&self) -> Option<String> {
        match self.badge {
            0 => None,
            n if n < 0 => Some("●".to_string()),
            n if n > MAX_BADGE => Some(format!("{MAX_BADGE}+")),
            n => Some(n.to_string()),
        }
    }

    /// Lines of content (at least one) plus a row of padding above and below.
    pub fn content_height(&self) -> u16 {
        let lines = self.icon.is_some() as u16 + self.title.is_some() as u16;
        lines.max(1) + 2
    }
}

/// One tab slot in the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    index: usize,
    selected: bool,
    display: TabDisplay,
}

impl TabItem {
    pub(crate) fn new(index: usize, display: TabDisplay) -> Self {
        Self {
            index,
            selected: false,
            display,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn display(&self) -> &TabDisplay {
        &self.display
    }

    pub fn title(&self) -> Option<&str> {
        self.display.title.as_deref()
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_badge(&mut self, badge: i32) {
        self.display.badge = badge;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_labels() {
        assert_eq!(TabDisplay::new().badge_label(), None);
        assert_eq!(TabDisplay::new().badge(7).badge_label().as_deref(), Some("7"));
        assert_eq!(TabDisplay::new().badge(120).badge_label().as_deref(), Some("99+"));
        assert_eq!(TabDisplay::new().badge(-1).badge_label().as_deref(), Some("●"));
    }

    #[test]
    fn test_content_height() {
        assert_eq!(TabDisplay::new().content_height(), 3);
        assert_eq!(TabDisplay::titled("Inbox").content_height(), 3);
        assert_eq!(TabDisplay::titled("Inbox").icon("✉").content_height(), 4);
    }

    #[test]
    fn test_new_tab_is_unselected() {
        let tab = TabItem::new(2, TabDisplay::titled("Sent"));
        assert_eq!(tab.index(), 2);
        assert!(!tab.is_selected());
        assert_eq!(tab.title(), Some("Sent"));
    }
}
