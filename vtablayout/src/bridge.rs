//! Binding to externally paged content.
//!
//! Paged content (a pager of screens, one per tab) reports drag progress and
//! settled pages as [`PageEvent`]s, and is moved programmatically when a tab
//! is tapped. Its adapter supplies page count and titles, or full tab data.

use crate::provider::TabDataProvider;

/// Events emitted by bound paged content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// A drag is in progress between `position` and `position + 1`.
    Scrolling { position: usize, fraction: f32 },
    /// Content came to rest on `position`.
    Settled(usize),
    /// The adapter's data changed.
    ContentChanged,
    /// The adapter's data is no longer valid.
    ContentInvalidated,
}

/// Page data source of paged content.
pub trait PagerAdapter {
    fn count(&self) -> usize;

    fn page_title(&self, _index: usize) -> Option<String> {
        None
    }

    /// Full tab data, when the adapter provides it.
    fn tab_data(&self) -> Option<&dyn TabDataProvider> {
        None
    }
}

/// Paged content that a tab layout can be bound to.
pub trait PagedContent {
    /// `None` when no adapter has been set yet.
    fn adapter(&self) -> Option<&dyn PagerAdapter>;

    fn current_page(&self) -> usize;

    fn set_current_page(&mut self, page: usize);
}

/// Presents a [`PagerAdapter`] as a [`TabDataProvider`].
///
/// Uses the adapter's own tab data when available, else page titles, falling
/// back to `tab{index}` for untitled pages.
pub struct PagerTabs<'a> {
    adapter: &'a dyn PagerAdapter,
}

impl<'a> PagerTabs<'a> {
    pub fn new(adapter: &'a dyn PagerAdapter) -> Self {
        Self { adapter }
    }
}

impl TabDataProvider for PagerTabs<'_> {
    fn count(&self) -> usize {
        self.adapter.count()
    }

    fn title_at(&self, index: usize) -> Option<String> {
        match self.adapter.tab_data() {
            Some(tabs) => tabs.title_at(index),
            None => Some(
                self.adapter
                    .page_title(index)
                    .unwrap_or_else(|| format!("tab{index}")),
            ),
        }
    }

    fn icon_at(&self, index: usize) -> Option<String> {
        self.adapter.tab_data().and_then(|tabs| tabs.icon_at(index))
    }

    fn badge_at(&self, index: usize) -> i32 {
        self.adapter.tab_data().map_or(0, |tabs| tabs.badge_at(index))
    }

    fn background_at(&self, index: usize) -> Option<crate::types::Color> {
        self.adapter
            .tab_data()
            .and_then(|tabs| tabs.background_at(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticTabs;

    struct Titles(Vec<Option<&'static str>>);

    impl PagerAdapter for Titles {
        fn count(&self) -> usize {
            self.0.len()
        }

        fn page_title(&self, index: usize) -> Option<String> {
            self.0.get(index).copied().flatten().map(str::to_string)
        }
    }

    struct WithTabs(StaticTabs);

    impl PagerAdapter for WithTabs {
        fn count(&self) -> usize {
            self.0.count()
        }

        fn tab_data(&self) -> Option<&dyn TabDataProvider> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_untitled_pages_fall_back() {
        let adapter = Titles(vec![Some("Home"), None]);
        let tabs = PagerTabs::new(&adapter);
        assert_eq!(tabs.count(), 2);
        assert_eq!(tabs.title_at(0).as_deref(), Some("Home"));
        assert_eq!(tabs.title_at(1).as_deref(), Some("tab1"));
    }

    #[test]
    fn test_adapter_tab_data_wins() {
        let adapter = WithTabs(StaticTabs::new(vec![crate::tab::TabDisplay::titled("Mail")
            .icon("✉")
            .badge(3)]));
        let tabs = PagerTabs::new(&adapter);
        let display = tabs.display_at(0);
        assert_eq!(display.title.as_deref(), Some("Mail"));
        assert_eq!(display.icon.as_deref(), Some("✉"));
        assert_eq!(display.badge, 3);
    }
}
