use vtablayout::{
    Buffer, Color, IndicatorGravity, ManualClock, Rect, StaticTabs, TabDisplay, TabLayoutConfig,
    TabSelectionController, TextStyle,
};

fn controller(config: TabLayoutConfig, tabs: Vec<TabDisplay>) -> TabSelectionController {
    let mut controller = TabSelectionController::new(config).with_clock(ManualClock::new());
    controller.rebuild_from_provider(&StaticTabs::new(tabs));
    controller.layout(Rect::new(0, 0, 12, 9));
    controller
}

fn draw(controller: &mut TabSelectionController) -> Buffer {
    let mut buf = Buffer::new(12, 9);
    controller.draw(&mut buf);
    buf
}

// =============================================================================
// Tabs
// =============================================================================

#[test]
fn test_titles_drawn_in_each_tab() {
    let mut controller = controller(
        TabLayoutConfig::default(),
        vec![TabDisplay::titled("Mail"), TabDisplay::titled("News"), TabDisplay::titled("Chat")],
    );
    let buf = draw(&mut controller);

    assert_eq!(buf.row_text(1).trim(), "Mail");
    assert_eq!(buf.row_text(4).trim(), "News");
    assert_eq!(buf.row_text(7).trim(), "Chat");
}

#[test]
fn test_icon_above_title() {
    let mut controller = controller(
        TabLayoutConfig::default(),
        vec![TabDisplay::titled("Mail").icon("@")],
    );
    let buf = draw(&mut controller);

    // Two lines centred in nine rows
    assert_eq!(buf.row_text(3).trim(), "@");
    assert_eq!(buf.row_text(4).trim(), "Mail");
}

#[test]
fn test_wide_title_marks_continuation() {
    let mut controller = controller(TabLayoutConfig::default(), vec![TabDisplay::titled("日本")]);
    let buf = draw(&mut controller);

    assert_eq!(buf.row_text(4).trim(), "日本");
    let continuations = (0..12)
        .filter_map(|x| buf.get(x, 4))
        .filter(|c| c.wide_continuation)
        .count();
    assert_eq!(continuations, 2);
}

#[test]
fn test_selection_changes_style() {
    let mut controller = controller(
        TabLayoutConfig::default(),
        vec![TabDisplay::titled("a"), TabDisplay::titled("b"), TabDisplay::titled("c")],
    );
    controller.select_by_index(1).unwrap();
    let buf = draw(&mut controller);

    let style_at = |y: u16| {
        (0..12)
            .filter_map(|x| buf.get(x, y))
            .find(|c| c.ch != ' ')
            .map(|c| c.style)
    };
    assert_eq!(style_at(1), Some(TextStyle::new().dim()));
    assert_eq!(style_at(4), Some(TextStyle::new().bold()));
}

#[test]
fn test_tab_background() {
    let mut controller = controller(
        TabLayoutConfig::default(),
        vec![TabDisplay::titled("a").background(Color::rgb(10, 20, 30))],
    );
    let buf = draw(&mut controller);
    assert_eq!(buf.get(5, 0).map(|c| c.bg), Some(Color::rgb(10, 20, 30).to_rgb()));
}

#[test]
fn test_dot_badge() {
    let mut controller =
        controller(TabLayoutConfig::default(), vec![TabDisplay::titled("a").badge(-1)]);
    let buf = draw(&mut controller);
    assert_eq!(buf.get(11, 0).map(|c| c.ch), Some('●'));
}

// =============================================================================
// Indicator
// =============================================================================

#[test]
fn test_trailing_indicator_column() {
    let config = TabLayoutConfig::default()
        .with_indicator_gravity(IndicatorGravity::Trailing)
        .with_indicator_color(Color::rgb(200, 0, 0));
    let mut controller = controller(
        config,
        vec![TabDisplay::titled("a"), TabDisplay::titled("b"), TabDisplay::titled("c")],
    );
    let buf = draw(&mut controller);

    let red = Color::rgb(200, 0, 0).to_rgb();
    let painted: Vec<u16> = (0..9).filter(|&y| buf.get(11, y).map(|c| c.bg) == Some(red)).collect();
    assert_eq!(painted, vec![0, 1, 2]);
    assert_ne!(buf.get(0, 0).map(|c| c.bg), Some(red));
}

#[test]
fn test_rounded_indicator_ends() {
    let config = TabLayoutConfig::default().with_indicator_corner_radius(1);
    let mut controller = controller(
        config,
        vec![TabDisplay::titled("a"), TabDisplay::titled("b"), TabDisplay::titled("c")],
    );
    let buf = draw(&mut controller);

    assert_eq!(buf.get(0, 0).map(|c| c.ch), Some('▄'));
    assert_eq!(buf.get(0, 2).map(|c| c.ch), Some('▀'));
    assert_eq!(buf.get(0, 1).map(|c| c.bg), Some(Color::accent().to_rgb()));
}

#[test]
fn test_fill_indicator_keeps_title() {
    let config = TabLayoutConfig::default()
        .with_indicator_gravity(IndicatorGravity::Fill)
        .with_indicator_color(Color::rgb(0, 0, 200));
    let mut controller = controller(
        config,
        vec![TabDisplay::titled("a"), TabDisplay::titled("b"), TabDisplay::titled("c")],
    );
    let buf = draw(&mut controller);

    assert_eq!(buf.row_text(1).trim(), "a");
    let blue = Color::rgb(0, 0, 200).to_rgb();
    assert!((0..12).all(|x| buf.get(x, 1).map(|c| c.bg) == Some(blue)));
    assert_ne!(buf.get(0, 4).map(|c| c.bg), Some(blue));
}

#[test]
fn test_empty_strip_draws_nothing() {
    let mut controller = controller(TabLayoutConfig::default(), Vec::new());
    let buf = draw(&mut controller);
    assert!((0..9).all(|y| buf.row_text(y).trim().is_empty()));
}
