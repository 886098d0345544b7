//! Tab selection controller
//!
//! Single authority over which tab is selected. Taps, programmatic selection
//! and pager events all pass through here; nothing else flips a tab's
//! `selected` flag.
//!
//! ```text
//! Empty ──rebuild/add──▶ Populated { selected }
//!   ▲                        │ select / tap / settle
//!   └──remove all/rebuild(0)─┘
//! ```
//!
//! While a pager is bound it drives the indicator through live offsets, so
//! selection changes update state without also animating the indicator.

use crate::bridge::{PageEvent, PagedContent, PagerTabs};
use crate::buffer::Buffer;
use crate::clock::{Clock, SystemClock};
use crate::config::TabLayoutConfig;
use crate::error::TabError;
use crate::layout::Rect;
use crate::provider::{StaticTabs, TabDataProvider};
use crate::render::draw_strip;
use crate::strip::TabStrip;
use crate::tab::{TabDisplay, TabItem};
use crate::transitions::TransitionConfig;
use crate::types::{Color, IndicatorGravity, IndicatorMotion, TabMode};
use crate::Result;

/// Notification delivered to selection listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(usize),
    /// The already selected tab was selected again.
    Reselected(usize),
}

impl SelectionEvent {
    pub fn index(&self) -> usize {
        match self {
            SelectionEvent::Selected(i) | SelectionEvent::Reselected(i) => *i,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripState {
    Empty,
    Populated { selected: usize },
}

/// Handle returned by [`TabSelectionController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&SelectionEvent, &TabItem)>;

pub struct TabSelectionController {
    strip: TabStrip,
    selected: Option<usize>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
    pager: Option<Box<dyn PagedContent>>,
    motion: IndicatorMotion,
    pending_scroll: Option<usize>,
    clock: Box<dyn Clock>,
}

impl TabSelectionController {
    pub fn new(config: TabLayoutConfig) -> Self {
        Self {
            strip: TabStrip::new(&config),
            selected: None,
            listeners: Vec::new(),
            next_listener: 0,
            pager: None,
            motion: config.indicator_motion,
            pending_scroll: None,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source used to start and advance animations.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    pub fn state(&self) -> StripState {
        match self.selected {
            Some(selected) => StripState::Populated { selected },
            None => StripState::Empty,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn tab_count(&self) -> usize {
        self.strip.len()
    }

    pub fn tab_at(&self, index: usize) -> Option<&TabItem> {
        self.strip.tab_at(index)
    }

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    pub fn is_bound(&self) -> bool {
        self.pager.is_some()
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&SelectionEvent, &TabItem) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: SelectionEvent) {
        let Some(tab) = self.strip.tab_at(event.index()) else {
            return;
        };
        for (_, listener) in &mut self.listeners {
            listener(&event, tab);
        }
    }

    // -------------------------------------------------------------------------
    // Tabs
    // -------------------------------------------------------------------------

    /// Append a tab. The first tab of an empty strip becomes selected.
    pub fn add_tab(&mut self, display: TabDisplay) -> usize {
        let index = self.strip.push(display);
        if self.selected.is_none() {
            self.strip.set_selected(index, true);
            self.selected = Some(index);
            self.strip.indicator_mut().snap_to(index);
        }
        index
    }

    /// Remove a tab. Selection stays on the same tab, or moves to the tab
    /// that takes the removed one's place.
    pub fn remove_tab(&mut self, index: usize) -> Result<TabItem> {
        self.strip.check_index(index)?;
        let removed = self.strip.remove(index);

        if self.strip.is_empty() {
            self.selected = None;
            self.pending_scroll = None;
            return Ok(removed);
        }

        match self.selected {
            Some(selected) if selected > index => {
                self.selected = Some(selected - 1);
                self.strip.indicator_mut().snap_to(selected - 1);
            }
            Some(selected) if selected == index => {
                let next = index.min(self.strip.len() - 1);
                self.strip.set_selected(next, true);
                self.selected = Some(next);
                self.strip.indicator_mut().snap_to(next);
                log::debug!("[tabs] removed selected tab {index}, selecting {next}");
                self.emit(SelectionEvent::Selected(next));
                self.request_scroll_into_view(next);
            }
            _ => {}
        }
        Ok(removed)
    }

    pub fn remove_all_tabs(&mut self) {
        self.strip.clear();
        self.selected = None;
        self.pending_scroll = None;
    }

    /// Replace every tab with the provider's, selecting the first one, or the
    /// bound pager's current page when it is in range.
    pub fn rebuild_from_provider(&mut self, provider: &dyn TabDataProvider) {
        self.remove_all_tabs();

        let count = provider.count();
        for index in 0..count {
            self.strip.push(provider.display_at(index));
        }

        log::debug!("[tabs] rebuilt {count} tabs");
        if count == 0 {
            return;
        }

        self.strip.set_selected(0, true);
        self.selected = Some(0);

        let page = self.pager.as_ref().map(|pager| pager.current_page());
        if let Some(page) = page.filter(|&p| p != 0 && p < count) {
            // In range by construction
            let _ = self.select_by_index(page);
        }

        let selected = self.selected.unwrap_or(0);
        self.strip.indicator_mut().snap_to(selected);
        self.request_scroll_into_view(selected);
    }

    pub fn set_tab_badge(&mut self, index: usize, badge: i32) -> Result<()> {
        self.strip.set_badge(index, badge)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select `index` programmatically.
    ///
    /// Selecting the selected tab changes nothing but emits `Reselected`.
    pub fn select_by_index(&mut self, index: usize) -> Result<()> {
        self.strip.check_index(index)?;

        if self.selected == Some(index) {
            self.emit(SelectionEvent::Reselected(index));
            self.request_scroll_into_view(index);
            return Ok(());
        }

        self.emit(SelectionEvent::Selected(index));
        self.apply_selection(index);
        Ok(())
    }

    /// A user tapped `index`.
    ///
    /// Listeners hear `Selected` (and `Reselected` when the tab already was)
    /// before the selection is applied.
    pub fn handle_tap(&mut self, index: usize) -> Result<()> {
        self.strip.check_index(index)?;

        let already_selected = self.selected == Some(index);
        self.emit(SelectionEvent::Selected(index));
        if already_selected {
            self.emit(SelectionEvent::Reselected(index));
        }
        self.apply_selection(index);
        Ok(())
    }

    /// Route a click at screen coordinates to the tab under it.
    pub fn handle_click(&mut self, x: u16, y: u16) -> Result<Option<usize>> {
        self.resolve_layout();
        let Some(index) = self.strip.hit_test(x, y) else {
            return Ok(None);
        };
        self.handle_tap(index)?;
        Ok(Some(index))
    }

    fn apply_selection(&mut self, index: usize) {
        if self.selected != Some(index) {
            if let Some(previous) = self.selected {
                self.strip.set_selected(previous, false);
            }
            self.strip.set_selected(index, true);
            log::debug!("[tabs] selected {:?} -> {}", self.selected, index);
            self.selected = Some(index);

            if self.pager.is_none() {
                let now = self.clock.now();
                let indicator = self.strip.indicator_mut();
                match self.motion {
                    IndicatorMotion::Animated => {
                        indicator.animate_to(index, now);
                    }
                    IndicatorMotion::Instant => indicator.snap_to(index),
                }
            }
        }

        if let Some(pager) = self.pager.as_mut() {
            if pager.current_page() != index {
                pager.set_current_page(index);
            }
        }

        self.request_scroll_into_view(index);
    }

    /// Live drag progress from paged content. Never clamped; selection is untouched.
    pub fn handle_live_offset(&mut self, position: usize, fraction: f32) {
        if self.strip.is_empty() {
            return;
        }
        self.strip
            .indicator_mut()
            .jump_to(position as f32 + fraction);
    }

    /// Paged content came to rest on `index`.
    pub fn handle_page_settled(&mut self, index: usize) -> Result<()> {
        self.strip.check_index(index)?;
        if self.selected != Some(index) {
            self.select_by_index(index)?;
        }
        // Supersedes any in-flight animation
        self.strip.indicator_mut().snap_to(index);
        Ok(())
    }

    pub fn handle_page_event(&mut self, event: PageEvent) -> Result<()> {
        match event {
            PageEvent::Scrolling { position, fraction } => {
                self.handle_live_offset(position, fraction);
                Ok(())
            }
            PageEvent::Settled(position) => self.handle_page_settled(position),
            PageEvent::ContentChanged | PageEvent::ContentInvalidated => {
                if self.pager.is_some() {
                    self.rebuild_from_pager();
                }
                Ok(())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Paged content
    // -------------------------------------------------------------------------

    /// Bind paged content and rebuild tabs from its adapter.
    pub fn attach_pager(&mut self, pager: Box<dyn PagedContent>) -> Result<()> {
        if pager.adapter().is_none() {
            return Err(TabError::IllegalState(
                "paged content does not have an adapter set".to_string(),
            ));
        }
        self.pager = Some(pager);
        self.rebuild_from_pager();
        Ok(())
    }

    /// Unbind paged content. Its tabs are removed with it.
    pub fn detach_pager(&mut self) -> Option<Box<dyn PagedContent>> {
        let pager = self.pager.take();
        self.remove_all_tabs();
        pager
    }

    fn rebuild_from_pager(&mut self) {
        let tabs = match self.pager.as_ref().and_then(|pager| pager.adapter()) {
            Some(adapter) => {
                let provider = PagerTabs::new(adapter);
                StaticTabs::new(
                    (0..provider.count())
                        .map(|index| provider.display_at(index))
                        .collect(),
                )
            }
            None => StaticTabs::default(),
        };
        self.rebuild_from_provider(&tabs);
    }

    // -------------------------------------------------------------------------
    // Style
    // -------------------------------------------------------------------------

    pub fn set_tab_mode(&mut self, mode: TabMode) {
        self.strip.set_mode(mode);
    }

    pub fn set_tab_margin(&mut self, margin: u16) {
        self.strip.set_tab_margin(margin);
    }

    pub fn set_tab_height(&mut self, height: u16) {
        self.strip.set_tab_height(height);
    }

    pub fn set_indicator_gravity(&mut self, gravity: IndicatorGravity) {
        self.strip.set_indicator_gravity(gravity);
    }

    pub fn set_indicator_thickness(&mut self, thickness: u16) {
        self.strip.set_indicator_thickness(thickness);
    }

    pub fn set_indicator_color(&mut self, color: Color) {
        self.strip.indicator_mut().set_color(color);
    }

    pub fn set_indicator_corner_radius(&mut self, radius: u16) {
        self.strip.indicator_mut().set_corner_radius(radius);
    }

    pub fn set_indicator_motion(&mut self, motion: IndicatorMotion) {
        self.motion = motion;
    }

    pub fn set_transition(&mut self, transition: TransitionConfig) {
        self.strip.set_transition(transition);
    }

    // -------------------------------------------------------------------------
    // Frame loop
    // -------------------------------------------------------------------------

    /// Lay the strip out in `viewport`.
    pub fn layout(&mut self, viewport: Rect) {
        self.strip.layout(viewport);
        self.flush_pending_scroll();
    }

    /// Advance animations. Returns true when the strip should be redrawn.
    pub fn tick(&mut self) -> bool {
        self.resolve_layout();
        self.strip.tick(self.clock.now())
    }

    pub fn draw(&mut self, buf: &mut Buffer) {
        self.resolve_layout();
        draw_strip(&self.strip, buf);
    }

    fn resolve_layout(&mut self) {
        self.strip.ensure_layout();
        self.flush_pending_scroll();
    }

    fn request_scroll_into_view(&mut self, index: usize) {
        self.pending_scroll = Some(index);
        self.flush_pending_scroll();
    }

    fn flush_pending_scroll(&mut self) {
        if self.strip.needs_layout() || !self.strip.container().is_laid_out() {
            return;
        }
        if let Some(index) = self.pending_scroll.take() {
            let now = self.clock.now();
            self.strip.scroll_into_view(index, now);
        }
    }
}
