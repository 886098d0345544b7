//! Source of per-tab display data.

use crate::tab::TabDisplay;
use crate::types::Color;

/// Supplies the tab count and per-index display payloads.
///
/// Ordering must be stable for a given `count`.
pub trait TabDataProvider {
    fn count(&self) -> usize;

    fn title_at(&self, index: usize) -> Option<String>;

    fn icon_at(&self, _index: usize) -> Option<String> {
        None
    }

    fn badge_at(&self, _index: usize) -> i32 {
        0
    }

    fn background_at(&self, _index: usize) -> Option<Color> {
        None
    }

    fn display_at(&self, index: usize) -> TabDisplay {
        TabDisplay {
            icon: self.icon_at(index),
            title: self.title_at(index),
            badge: self.badge_at(index),
            background: self.background_at(index),
        }
    }
}

/// Provider backed by a prepared list of displays.
#[derive(Debug, Clone, Default)]
pub struct StaticTabs {
    tabs: Vec<TabDisplay>,
}

impl StaticTabs {
    pub fn new(tabs: Vec<TabDisplay>) -> Self {
        Self { tabs }
    }

    /// One title-only tab per entry.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(titles.into_iter().map(TabDisplay::titled).collect())
    }
}

impl TabDataProvider for StaticTabs {
    fn count(&self) -> usize {
        self.tabs.len()
    }

    fn title_at(&self, index: usize) -> Option<String> {
        self.tabs.get(index).and_then(|t| t.title.clone())
    }

    fn icon_at(&self, index: usize) -> Option<String> {
        self.tabs.get(index).and_then(|t| t.icon.clone())
    }

    fn badge_at(&self, index: usize) -> i32 {
        self.tabs.get(index).map_or(0, |t| t.badge)
    }

    fn background_at(&self, index: usize) -> Option<Color> {
        self.tabs.get(index).and_then(|t| t.background)
    }

    fn display_at(&self, index: usize) -> TabDisplay {
        self.tabs.get(index).cloned().unwrap_or_default()
    }
}
