use std::time::Duration;

use vtablayout::{
    Easing, IndicatorGravity, ManualClock, Rect, StaticTabs, TabError, TabLayoutConfig, TabMode,
    TabSelectionController, TransitionConfig,
};

const VIEWPORT: Rect = Rect::new(0, 0, 10, 12);

fn controller(config: TabLayoutConfig, count: usize) -> (TabSelectionController, ManualClock) {
    let clock = ManualClock::new();
    let mut controller = TabSelectionController::new(config).with_clock(clock.clone());
    let titles: Vec<String> = (0..count).map(|i| format!("{i}")).collect();
    controller.rebuild_from_provider(&StaticTabs::from_titles(titles));
    controller.layout(VIEWPORT);
    (controller, clock)
}

fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-4, "expected {expected}, got {actual}");
}

// =============================================================================
// Main axis
// =============================================================================

#[test]
fn test_main_axis_length_fixed_mode() {
    let (controller, _) = controller(TabLayoutConfig::default(), 4);
    let indicator = controller.strip().indicator();
    assert_eq!(indicator.main_axis_length(), 3.0);
    assert_eq!(indicator.geometry().main_extent, 3);
}

#[test]
fn test_main_axis_length_includes_margin_when_scrollable() {
    let (controller, _) = controller(TabLayoutConfig::scrollable(3, 2), 4);
    let indicator = controller.strip().indicator();
    assert_eq!(indicator.main_axis_length(), 5.0);
    // Drawn length stays one tab
    assert_eq!(indicator.geometry().main_extent, 3);
}

#[test]
fn test_live_offset_never_clamps() {
    let (mut controller, _) = controller(TabLayoutConfig::default(), 4);
    controller.handle_live_offset(2, 1.5);
    assert_close(controller.strip().indicator().main_axis_offset(), 3.5 * 3.0);
    assert_eq!(controller.selected_index(), Some(0));

    controller.handle_live_offset(0, -0.25);
    assert_close(controller.strip().indicator().main_axis_offset(), -0.75);
}

#[test]
fn test_live_offset_on_empty_strip_is_ignored() {
    let mut controller = TabSelectionController::new(TabLayoutConfig::default());
    controller.handle_live_offset(1, 0.5);
    assert_eq!(controller.strip().indicator().main_axis_offset(), 0.0);
}

#[test]
fn test_live_offset_cancels_animation() {
    let (mut controller, _) = controller(TabLayoutConfig::default(), 4);
    controller.select_by_index(3).unwrap();
    assert!(controller.strip().indicator().is_animating());

    controller.handle_live_offset(1, 0.5);
    assert!(!controller.strip().indicator().is_animating());
    assert_close(controller.strip().indicator().main_axis_offset(), 4.5);
}

#[test]
fn test_settled_animation_rests_on_selection() {
    let (mut controller, clock) = controller(TabLayoutConfig::default(), 4);
    for index in [3, 1, 2] {
        controller.select_by_index(index).unwrap();
        clock.advance(Duration::from_millis(250));
        controller.tick();
        let indicator = controller.strip().indicator();
        assert_eq!(indicator.main_axis_offset(), index as f32 * indicator.main_axis_length());
    }
}

#[test]
fn test_transition_change_applies_to_next_move() {
    let (mut controller, clock) = controller(TabLayoutConfig::default(), 4);
    controller.set_transition(TransitionConfig::new(Duration::from_millis(100), Easing::Linear));

    controller.select_by_index(2).unwrap();
    clock.advance(Duration::from_millis(50));
    controller.tick();
    assert_close(controller.strip().indicator().main_axis_offset(), 3.0);

    clock.advance(Duration::from_millis(50));
    controller.tick();
    assert!(!controller.strip().indicator().is_animating());
    assert_eq!(controller.strip().indicator().main_axis_offset(), 6.0);
}

#[test]
fn test_resting_indicator_follows_relayout() {
    let (mut controller, clock) = controller(TabLayoutConfig::default(), 4);
    controller.select_by_index(2).unwrap();
    clock.advance(Duration::from_millis(250));
    controller.tick();
    assert_eq!(controller.strip().indicator().main_axis_offset(), 6.0);

    // Taller viewport, taller tabs
    controller.layout(Rect::new(0, 0, 10, 20));
    assert_eq!(controller.strip().indicator().main_axis_length(), 5.0);
    assert_eq!(controller.strip().indicator().main_axis_offset(), 10.0);
}

#[test]
fn test_indicator_follows_added_tab_relayout() {
    let (mut controller, _) = controller(TabLayoutConfig::default(), 3);
    assert_eq!(controller.strip().indicator().main_axis_length(), 4.0);

    controller.add_tab(vtablayout::TabDisplay::titled("3"));
    controller.tick();
    assert_eq!(controller.strip().indicator().main_axis_length(), 3.0);
}

// =============================================================================
// Gravity
// =============================================================================

#[test]
fn test_leading_gravity() {
    let config = TabLayoutConfig::default().with_indicator_thickness(2);
    let (controller, _) = controller(config, 3);
    let geometry = controller.strip().indicator().geometry();
    assert_eq!(geometry.cross_offset, 0);
    assert_eq!(geometry.thickness, 2);
    // Tabs start after the reserved columns
    assert_eq!(controller.strip().container().slot(0).map(|s| s.rect.x), Some(2));
}

#[test]
fn test_trailing_gravity_resolves_after_layout() {
    let config = TabLayoutConfig::default().with_indicator_thickness(2);
    let (mut controller, _) = controller(config, 3);

    controller.set_indicator_gravity(IndicatorGravity::Trailing);
    assert!(controller.strip().needs_layout());

    controller.tick();
    let geometry = controller.strip().indicator().geometry();
    assert_eq!(geometry.cross_offset, 8);
    assert_eq!(geometry.thickness, 2);
    let slot = controller.strip().container().slot(0).map(|s| s.rect);
    assert_eq!(slot.map(|r| (r.x, r.width)), Some((0, 8)));
}

#[test]
fn test_fill_gravity_caches_thickness() {
    let config = TabLayoutConfig::default().with_indicator_thickness(2);
    let (mut controller, _) = controller(config, 3);

    controller.set_indicator_gravity(IndicatorGravity::Fill);
    controller.tick();
    let geometry = controller.strip().indicator().geometry();
    assert_eq!(geometry.cross_offset, 0);
    assert_eq!(geometry.thickness, 10);

    controller.set_indicator_gravity(IndicatorGravity::Leading);
    controller.tick();
    assert_eq!(controller.strip().indicator().thickness(), 2);
}

#[test]
fn test_unknown_gravity_is_invalid() {
    let parsed = "diagonal".parse::<IndicatorGravity>();
    assert!(matches!(parsed, Err(TabError::InvalidArgument(_))));
    assert_eq!("right".parse::<IndicatorGravity>(), Ok(IndicatorGravity::Trailing));
    assert!(matches!("tiled".parse::<TabMode>(), Err(TabError::InvalidArgument(_))));
}

// =============================================================================
// Style
// =============================================================================

#[test]
fn test_style_setters_update_geometry() {
    let (mut controller, _) = controller(TabLayoutConfig::default(), 3);
    controller.set_indicator_color(vtablayout::Color::rgb(1, 2, 3));
    controller.set_indicator_corner_radius(1);
    controller.set_indicator_thickness(3);
    controller.tick();

    let geometry = controller.strip().indicator().geometry();
    assert_eq!(geometry.color, vtablayout::Color::rgb(1, 2, 3));
    assert_eq!(geometry.corner_radius, 1);
    assert_eq!(geometry.thickness, 3);
}
