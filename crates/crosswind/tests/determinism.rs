//! Determinism and totality checks across every built-in concern.
//!
//! The two authoring surfaces can only be proven equivalent if every
//! operation is a pure function of its parameters, so each built-in is
//! exercised through the registry with a representative bag and must yield
//! identical output on repeated calls.

use crosswind::types::{
    Animation, Color, CursorKind, Dimension, DisplayKind, Edges, FontSize, LineStyle,
    PositionKind, Radius, ShadowSize, TransitionProperty,
};
use crosswind::{StyleParameters, StyleRegistry, concern};

fn representative_bags() -> Vec<(&'static str, StyleParameters)> {
    vec![
        (
            concern::PADDING,
            StyleParameters::new()
                .with_length(4)
                .with_edges(Edges::HORIZONTAL),
        ),
        (
            concern::MARGIN,
            StyleParameters::new().with_length(-2).with_edges(Edges::TOP),
        ),
        (
            concern::FOREGROUND,
            StyleParameters::new().with_color(Color::WHITE),
        ),
        (
            concern::BACKGROUND,
            StyleParameters::new().with_color(Color::BLUE_500),
        ),
        (
            concern::BORDER,
            StyleParameters::new()
                .with_length(2)
                .with_border_style(LineStyle::Dashed)
                .with_color(Color::GRAY_500),
        ),
        (
            concern::CORNER_RADIUS,
            StyleParameters::new().with_radius(Radius::Lg),
        ),
        (
            concern::RING,
            StyleParameters::new()
                .with_length(2)
                .with_color(Color::BLUE_500),
        ),
        (
            concern::FONT,
            StyleParameters::new().with_font_size(FontSize::Xl2),
        ),
        (
            concern::SHADOW,
            StyleParameters::new().with_shadow(ShadowSize::Md),
        ),
        (concern::OPACITY, StyleParameters::new().with_value(50)),
        (
            concern::CURSOR,
            StyleParameters::new().with_cursor(CursorKind::Pointer),
        ),
        (
            concern::POSITION,
            StyleParameters::new()
                .with_position(PositionKind::Absolute)
                .with_length(0)
                .with_edges(Edges::TOP),
        ),
        (
            concern::FRAME,
            StyleParameters::new()
                .with_width(Dimension::Full)
                .with_height(Dimension::Units(32)),
        ),
        (
            concern::DISPLAY,
            StyleParameters::new().with_display(DisplayKind::Flex),
        ),
        (concern::Z_INDEX, StyleParameters::new().with_value(-10)),
        (
            concern::TRANSITION,
            StyleParameters::new()
                .with_property(TransitionProperty::Colors)
                .with_duration(300),
        ),
        (
            concern::ANIMATION,
            StyleParameters::new()
                .with_animation(Animation::Spin)
                .with_duration(1500),
        ),
    ]
}

#[test]
fn every_builtin_is_deterministic() {
    let registry = StyleRegistry::standard();
    for (name, bag) in representative_bags() {
        let operation = registry.get(name).unwrap();
        let first = operation.apply_parameters(&bag);
        let second = operation.apply_parameters(&bag);
        assert_eq!(first, second, "{name} must be pure");
        assert!(!first.is_empty(), "{name} bag should emit classes");
    }
}

#[test]
fn empty_bag_emits_nothing_for_optional_concerns() {
    let registry = StyleRegistry::standard();
    let empty = StyleParameters::new();
    for name in [
        concern::FOREGROUND,
        concern::BACKGROUND,
        concern::BORDER,
        concern::CORNER_RADIUS,
        concern::RING,
        concern::FONT,
        concern::SHADOW,
        concern::CURSOR,
        concern::FRAME,
        concern::DISPLAY,
    ] {
        let operation = registry.get(name).unwrap();
        assert!(
            operation.apply_parameters(&empty).is_empty(),
            "{name} must be a silent no-op with no arguments"
        );
    }
}

#[test]
fn all_edge_is_indistinguishable_from_omitted_edges() {
    let registry = StyleRegistry::standard();
    let padding = registry.get(concern::PADDING).unwrap();
    let explicit = StyleParameters::new().with_length(4).with_edges(Edges::ALL);
    let omitted = StyleParameters::new().with_length(4);
    assert_eq!(
        padding.apply_parameters(&explicit),
        padding.apply_parameters(&omitted)
    );
}
