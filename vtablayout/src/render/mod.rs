//! Draws a laid-out [`TabStrip`] into a [`Buffer`].
//!
//! Everything is clipped to the strip's viewport. Slot and indicator
//! positions are content-relative and shifted by the current scroll offset.

use crate::buffer::{Brush, Buffer};
use crate::indicator::IndicatorGeometry;
use crate::layout::Rect;
use crate::strip::TabStrip;
use crate::tab::TabItem;
use crate::text::{center_offset, display_width, truncate_to_width};
use crate::types::{Color, IndicatorGravity, Rgb, TextStyle};

const FOREGROUND: Rgb = Rgb::new(255, 255, 255);

fn badge_brush() -> Brush {
    let bg = Color::oklch(0.6, 0.2, 25.0).to_rgb();
    Brush::new(FOREGROUND, TextStyle::new().bold()).on(bg)
}

pub fn draw_strip(strip: &TabStrip, buf: &mut Buffer) {
    let viewport = strip.container().viewport();
    if viewport.is_empty() {
        return;
    }

    for item in strip.items() {
        draw_tab(strip, item, viewport, buf);
    }

    if !strip.is_empty() {
        draw_indicator(strip, strip.indicator().geometry(), viewport, buf);
    }
}

/// Screen row for a content-relative row, if it is visible.
fn visible_row(strip: &TabStrip, content_y: f32, viewport: Rect) -> Option<u16> {
    let y = strip.container().to_screen_y(content_y).round();
    if y < viewport.y as f32 || y >= viewport.bottom() as f32 {
        return None;
    }
    Some(y as u16)
}

/// Content rows `from..from + count` that are on screen, as `(content, screen)` pairs.
fn visible_rows(
    strip: &TabStrip,
    from: u16,
    count: u16,
    viewport: Rect,
) -> impl Iterator<Item = (u16, u16)> + '_ {
    (from..from.saturating_add(count))
        .filter_map(move |row| visible_row(strip, row as f32, viewport).map(|y| (row, y)))
}

fn draw_tab(strip: &TabStrip, item: &TabItem, viewport: Rect, buf: &mut Buffer) {
    let Some(slot) = strip.container().slot(item.index()) else {
        return;
    };
    let rect = slot.rect;
    if rect.is_empty() {
        return;
    }
    let display = item.display();

    if let Some(background) = display.background {
        let bg = background.to_rgb();
        for (_, y) in visible_rows(strip, rect.y, rect.height, viewport) {
            buf.paint_bg(rect.x, y, rect.width, bg);
        }
    }

    let style = if item.is_selected() {
        TextStyle::new().bold()
    } else {
        TextStyle::new().dim()
    };
    let brush = Brush::new(FOREGROUND, style);

    let lines: Vec<&str> = [display.icon.as_deref(), display.title.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    let count = lines.len() as u16;
    let top = rect.y.saturating_add(rect.height.saturating_sub(count) / 2);
    for (row, y) in visible_rows(strip, top, count.min(rect.height), viewport) {
        let line = lines[(row - top) as usize];
        let line = truncate_to_width(line, rect.width as usize);
        let offset = center_offset(display_width(&line), rect.width as usize) as u16;
        buf.put_str(rect.x.saturating_add(offset), y, rect.right(), &line, brush);
    }

    if let Some(label) = display.badge_label() {
        let width = display_width(&label) as u16;
        if width < rect.width {
            if let Some(y) = visible_row(strip, rect.y as f32, viewport) {
                let x = rect.right().saturating_sub(width);
                buf.put_str(x, y, rect.right(), &label, badge_brush());
            }
        }
    }
}

fn draw_indicator(strip: &TabStrip, geometry: IndicatorGeometry, viewport: Rect, buf: &mut Buffer) {
    if geometry.thickness == 0 || geometry.main_extent == 0 {
        return;
    }

    let color = geometry.color.to_rgb();
    let left = viewport.x.saturating_add(geometry.cross_offset);
    let width = geometry.thickness.min(viewport.right().saturating_sub(left));
    let rounded = geometry.corner_radius > 0 && geometry.main_extent >= 2;
    let fill = strip.indicator().gravity() == IndicatorGravity::Fill;
    let last = geometry.main_extent - 1;

    for row in 0..geometry.main_extent {
        let content_y = geometry.main_offset + row as f32;
        let Some(y) = visible_row(strip, content_y, viewport) else {
            continue;
        };

        let glyph = match row {
            0 if rounded => '▄',
            r if rounded && r == last => '▀',
            _ => {
                buf.paint_bg(left, y, width, color);
                continue;
            }
        };

        for x in left..left.saturating_add(width) {
            let blank = buf.get(x, y).is_some_and(|cell| cell.ch == ' ');
            // Text under a filled indicator stays readable
            if fill && !blank {
                buf.paint_bg(x, y, 1, color);
            } else {
                buf.put_glyph(x, y, glyph, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabLayoutConfig;
    use crate::tab::TabDisplay;

    fn strip(titles: &[&str]) -> TabStrip {
        let mut strip = TabStrip::new(&TabLayoutConfig::default());
        for title in titles {
            strip.push(TabDisplay::titled(*title));
        }
        strip.set_selected(0, true);
        strip.indicator_mut().snap_to(0);
        strip.layout(Rect::new(0, 0, 10, 9));
        strip
    }

    fn drawn(strip: &TabStrip) -> Buffer {
        let mut buf = Buffer::new(10, 9);
        draw_strip(strip, &mut buf);
        buf
    }

    #[test]
    fn test_title_centred_in_tab() {
        let buf = drawn(&strip(&["ab", "cd", "ef"]));

        // Leading indicator reserves column 0; tab content spans 1..10
        assert_eq!(buf.row_text(1).trim(), "ab");
        assert_eq!(buf.get(4, 1).map(|c| c.ch), Some('a'));
    }

    #[test]
    fn test_selected_tab_is_bold() {
        let buf = drawn(&strip(&["ab", "cd", "ef"]));

        assert_eq!(buf.get(4, 1).map(|c| c.style), Some(TextStyle::new().bold()));
        assert_eq!(buf.get(4, 4).map(|c| c.style), Some(TextStyle::new().dim()));
    }

    #[test]
    fn test_indicator_paints_leading_column() {
        let buf = drawn(&strip(&["ab", "cd", "ef"]));

        let accent = Color::accent().to_rgb();
        for y in 0..3 {
            assert_eq!(buf.get(0, y).map(|c| c.bg), Some(accent));
        }
        assert_ne!(buf.get(0, 3).map(|c| c.bg), Some(accent));
    }

    #[test]
    fn test_long_title_truncated() {
        let buf = drawn(&strip(&["a very long title"]));
        assert!(buf.row_text(4).ends_with('…'));
    }

    #[test]
    fn test_badge_drawn_top_right() {
        let mut strip = strip(&["ab"]);
        strip.set_badge(0, 120).unwrap();
        strip.layout(Rect::new(0, 0, 10, 9));
        let buf = drawn(&strip);

        assert!(buf.row_text(0).ends_with("99+"));
    }
}
