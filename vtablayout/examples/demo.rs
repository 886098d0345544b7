use std::cell::Cell;
use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use vtablayout::{
    Brush, Buffer, Color, IndicatorGravity, PageEvent, PagedContent, PagerAdapter, Rect, Rgb,
    TabLayoutConfig, TabMode, TabSelectionController, Terminal, TextStyle,
};

const STRIP_WIDTH: u16 = 14;
const PAGES: [&str; 8] = [
    "Inbox", "Starred", "Sent", "Drafts", "Archive", "Spam", "Trash", "Labels",
];

struct Mailboxes;

impl PagerAdapter for Mailboxes {
    fn count(&self) -> usize {
        PAGES.len()
    }

    fn page_title(&self, index: usize) -> Option<String> {
        PAGES.get(index).map(|t| t.to_string())
    }
}

/// Stand-in for a pager of screens.
struct Pager {
    adapter: Mailboxes,
    current: Rc<Cell<usize>>,
}

impl PagedContent for Pager {
    fn adapter(&self) -> Option<&dyn PagerAdapter> {
        Some(&self.adapter)
    }

    fn current_page(&self) -> usize {
        self.current.get()
    }

    fn set_current_page(&mut self, page: usize) {
        self.current.set(page);
    }
}

/// A swipe in progress, one page forwards or backwards.
struct Swipe {
    from: usize,
    forward: bool,
    progress: f32,
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = TabLayoutConfig::scrollable(3, 1).with_indicator_corner_radius(1);
    let mut tabs = TabSelectionController::new(config);
    let current = Rc::new(Cell::new(0));
    tabs.attach_pager(Box::new(Pager {
        adapter: Mailboxes,
        current: current.clone(),
    }))
    .expect("pager has an adapter");

    let mut term = Terminal::new()?;
    let mut swipe: Option<Swipe> = None;
    let mut dirty = true;
    let mut last_area = Rect::default();

    loop {
        let area = term.area();
        if area != last_area {
            tabs.layout(Rect::new(0, 0, STRIP_WIDTH.min(area.width), area.height));
            last_area = area;
        }

        if let Some(s) = swipe.as_mut() {
            s.progress = (s.progress + 0.1).min(1.0);
            let (position, fraction) = if s.forward {
                (s.from, s.progress)
            } else {
                (s.from - 1, 1.0 - s.progress)
            };
            let _ = tabs.handle_page_event(PageEvent::Scrolling { position, fraction });
            if s.progress >= 1.0 {
                let target = if s.forward { s.from + 1 } else { s.from - 1 };
                current.set(target);
                let _ = tabs.handle_page_event(PageEvent::Settled(target));
                swipe = None;
            }
            dirty = true;
        }

        if tabs.tick() || dirty {
            term.render(|buf| {
                tabs.draw(buf);
                draw_page(buf, &tabs, area);
            })?;
            dirty = false;
        }

        for event in term.poll(Duration::from_millis(16))? {
            dirty = true;
            match event {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Up | KeyCode::Char('k') => {
                        let index = tabs.selected_index().unwrap_or(0).saturating_sub(1);
                        let _ = tabs.select_by_index(index);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        let index = tabs.selected_index().map_or(0, |i| i + 1);
                        let _ = tabs.select_by_index(index.min(tabs.tab_count().saturating_sub(1)));
                    }
                    KeyCode::Left | KeyCode::Char('h') if swipe.is_none() => {
                        let from = current.get();
                        if from > 0 {
                            swipe = Some(Swipe {
                                from,
                                forward: false,
                                progress: 0.0,
                            });
                        }
                    }
                    KeyCode::Right | KeyCode::Char('l') if swipe.is_none() => {
                        let from = current.get();
                        if from + 1 < tabs.tab_count() {
                            swipe = Some(Swipe {
                                from,
                                forward: true,
                                progress: 0.0,
                            });
                        }
                    }
                    KeyCode::Char('b') => {
                        if let Some(index) = tabs.selected_index() {
                            let badge = tabs.tab_at(index).map_or(0, |t| t.display().badge);
                            let _ = tabs.set_tab_badge(index, badge + 7);
                        }
                    }
                    KeyCode::Char('g') => {
                        let next = match tabs.strip().indicator().gravity() {
                            IndicatorGravity::Leading => IndicatorGravity::Trailing,
                            IndicatorGravity::Trailing => IndicatorGravity::Fill,
                            IndicatorGravity::Fill => IndicatorGravity::Leading,
                        };
                        tabs.set_indicator_gravity(next);
                    }
                    KeyCode::Char('m') => {
                        let mode = match tabs.strip().mode() {
                            TabMode::Fixed => TabMode::Scrollable,
                            TabMode::Scrollable => TabMode::Fixed,
                        };
                        tabs.set_tab_mode(mode);
                        if mode == TabMode::Scrollable {
                            tabs.set_tab_height(3);
                            tabs.set_tab_margin(1);
                        }
                    }
                    KeyCode::Char('c') => {
                        let hue = (current.get() as f32 * 45.0) % 360.0;
                        tabs.set_indicator_color(Color::oklch(0.7, 0.18, hue));
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        let _ = tabs.handle_click(mouse.column, mouse.row);
                    }
                }
                _ => {}
            }
        }
    }
}

fn draw_page(buf: &mut Buffer, tabs: &TabSelectionController, area: Rect) {
    let x = STRIP_WIDTH + 2;
    if x >= area.width {
        return;
    }
    let title = tabs
        .selected_index()
        .and_then(|i| tabs.tab_at(i))
        .and_then(|t| t.title())
        .unwrap_or("");

    let heading = Brush::new(Rgb::new(255, 255, 255), TextStyle::new().bold());
    buf.put_str(x, 1, area.right(), title, heading);
    let help_brush = Brush::new(Rgb::new(160, 160, 160), TextStyle::new().dim());
    let help = [
        "up/down  select tab",
        "left/right  swipe page",
        "click  select tab",
        "b  add to badge",
        "g  cycle indicator gravity",
        "m  toggle tab mode",
        "c  recolor indicator",
        "q  quit",
    ];
    for (i, line) in help.iter().enumerate() {
        buf.put_str(x, 3 + i as u16, area.right(), line, help_brush);
    }
}
