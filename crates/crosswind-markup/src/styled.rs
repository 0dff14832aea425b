//! The direct-chaining styling surface.
//!
//! [`Styled`] puts one method per style concern directly on the node types.
//! Each method builds the concern's parameters, resolves the singleton
//! operation from the registry, combines the base classes with the explicit
//! modifier slice using the operation's declared strategy, and returns a copy
//! of the node with the extended class list - the receiver is never mutated.
//!
//! Bare forms (`padding(4)`) are shorthand for the modifier-accepting `_on`
//! forms with an empty slice. The merged strategy keeps the unscoped baseline
//! alongside each scoped variant, so
//! `background_on(blue, &[Hover])` yields `bg-blue-500 hover:bg-blue-500`;
//! block-authored styles via [`on`](Styled::on) emit scoped classes only.

use crosswind::builder::StyleBuilder;
use crosswind::combine::{self, Strategy};
use crosswind::modifier::Modifier;
use crosswind::parameters::StyleParameters;
use crosswind::registry::{StyleRegistry, concern, standard_registry};
use crosswind::types::{
    Animation, Color, CursorKind, Dimension, DisplayKind, Easing, Edges, FontFamily, FontSize,
    FontWeight, LineStyle, PositionKind, Radius, ShadowSize, TextAlign, TransitionProperty,
};

use crate::element::{Element, Node};

/// Utility-class styling for markup values.
pub trait Styled: Sized {
    /// Returns a copy of `self` whose class list is extended with `classes`,
    /// preserving order.
    fn with_classes(self, classes: Vec<String>) -> Self;

    // ---- generic entry points ---------------------------------------------

    /// Applies a registered concern with explicit modifiers through the
    /// standard registry.
    fn style(self, concern: &str, params: &StyleParameters, modifiers: &[Modifier]) -> Self {
        self.style_with(standard_registry(), concern, params, modifiers)
    }

    /// [`style`](Styled::style) against an explicit registry.
    fn style_with(
        self,
        registry: &StyleRegistry,
        concern: &str,
        params: &StyleParameters,
        modifiers: &[Modifier],
    ) -> Self {
        let Some(operation) = registry.get(concern) else {
            log::warn!("unknown style concern {concern:?}, node left unchanged");
            return self;
        };
        let base = operation.apply_parameters(params);
        let combined = match operation.strategy() {
            Strategy::Merged => combine::combine(&base, modifiers),
            Strategy::Separate => combine::combine_separate(&base, modifiers),
        };
        self.with_classes(combined)
    }

    /// Runs a declarative style block and merges its classes.
    fn on(self, block: impl FnOnce(&mut StyleBuilder<'_>)) -> Self {
        self.on_with(standard_registry(), block)
    }

    /// [`on`](Styled::on) against an explicit registry.
    fn on_with(
        self,
        registry: &StyleRegistry,
        block: impl FnOnce(&mut StyleBuilder<'_>),
    ) -> Self {
        let mut builder = StyleBuilder::new(registry);
        block(&mut builder);
        self.with_classes(builder.into_classes())
    }

    // ---- spacing -----------------------------------------------------------

    fn padding(self, length: i32) -> Self {
        self.padding_on(length, Edges::ALL, &[])
    }

    fn padding_at(self, length: i32, edges: Edges) -> Self {
        self.padding_on(length, edges, &[])
    }

    fn padding_on(self, length: i32, edges: Edges, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_length(length).with_edges(edges);
        self.style(concern::PADDING, &params, modifiers)
    }

    fn margin(self, length: i32) -> Self {
        self.margin_on(length, Edges::ALL, &[])
    }

    fn margin_at(self, length: i32, edges: Edges) -> Self {
        self.margin_on(length, edges, &[])
    }

    fn margin_on(self, length: i32, edges: Edges, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_length(length).with_edges(edges);
        self.style(concern::MARGIN, &params, modifiers)
    }

    // ---- color -------------------------------------------------------------

    fn foreground(self, color: Color) -> Self {
        self.foreground_on(color, &[])
    }

    fn foreground_on(self, color: Color, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_color(color);
        self.style(concern::FOREGROUND, &params, modifiers)
    }

    fn background(self, color: Color) -> Self {
        self.background_on(color, &[])
    }

    fn background_on(self, color: Color, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_color(color);
        self.style(concern::BACKGROUND, &params, modifiers)
    }

    // ---- border & ring -----------------------------------------------------

    fn border(self, width: i32) -> Self {
        self.border_on(width, Edges::ALL, &[])
    }

    fn border_on(self, width: i32, edges: Edges, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_length(width).with_edges(edges);
        self.style(concern::BORDER, &params, modifiers)
    }

    fn border_color(self, color: Color) -> Self {
        let params = StyleParameters::new().with_color(color);
        self.style(concern::BORDER, &params, &[])
    }

    fn border_style(self, style: LineStyle) -> Self {
        let params = StyleParameters::new().with_border_style(style);
        self.style(concern::BORDER, &params, &[])
    }

    fn corner_radius(self, radius: Radius) -> Self {
        self.corner_radius_on(radius, &[])
    }

    fn corner_radius_on(self, radius: Radius, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_radius(radius);
        self.style(concern::CORNER_RADIUS, &params, modifiers)
    }

    fn ring(self, width: i32) -> Self {
        self.ring_on(width, &[])
    }

    fn ring_on(self, width: i32, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_length(width);
        self.style(concern::RING, &params, modifiers)
    }

    fn ring_color(self, color: Color) -> Self {
        let params = StyleParameters::new().with_color(color);
        self.style(concern::RING, &params, &[])
    }

    // ---- typography --------------------------------------------------------

    fn font_size(self, size: FontSize) -> Self {
        let params = StyleParameters::new().with_font_size(size);
        self.style(concern::FONT, &params, &[])
    }

    fn font_size_on(self, size: FontSize, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_font_size(size);
        self.style(concern::FONT, &params, modifiers)
    }

    fn font_weight(self, weight: FontWeight) -> Self {
        let params = StyleParameters::new().with_font_weight(weight);
        self.style(concern::FONT, &params, &[])
    }

    fn text_align(self, align: TextAlign) -> Self {
        let params = StyleParameters::new().with_text_align(align);
        self.style(concern::FONT, &params, &[])
    }

    fn font_family(self, family: FontFamily) -> Self {
        let params = StyleParameters::new().with_font_family(family);
        self.style(concern::FONT, &params, &[])
    }

    // ---- effects -----------------------------------------------------------

    fn shadow(self, size: ShadowSize) -> Self {
        self.shadow_on(size, &[])
    }

    fn shadow_on(self, size: ShadowSize, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_shadow(size);
        self.style(concern::SHADOW, &params, modifiers)
    }

    fn shadow_color(self, color: Color) -> Self {
        let params = StyleParameters::new().with_color(color);
        self.style(concern::SHADOW, &params, &[])
    }

    fn opacity(self, value: i32) -> Self {
        self.opacity_on(value, &[])
    }

    fn opacity_on(self, value: i32, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_value(value);
        self.style(concern::OPACITY, &params, modifiers)
    }

    fn cursor(self, cursor: CursorKind) -> Self {
        let params = StyleParameters::new().with_cursor(cursor);
        self.style(concern::CURSOR, &params, &[])
    }

    // ---- layout ------------------------------------------------------------

    fn position(self, kind: PositionKind) -> Self {
        let params = StyleParameters::new().with_position(kind);
        self.style(concern::POSITION, &params, &[])
    }

    /// Inset offsets without changing the positioning scheme.
    fn inset(self, length: i32, edges: Edges) -> Self {
        let params = StyleParameters::new().with_length(length).with_edges(edges);
        self.style(concern::POSITION, &params, &[])
    }

    fn width(self, width: Dimension) -> Self {
        let params = StyleParameters::new().with_width(width);
        self.style(concern::FRAME, &params, &[])
    }

    fn height(self, height: Dimension) -> Self {
        let params = StyleParameters::new().with_height(height);
        self.style(concern::FRAME, &params, &[])
    }

    fn display(self, display: DisplayKind) -> Self {
        self.display_on(display, &[])
    }

    fn display_on(self, display: DisplayKind, modifiers: &[Modifier]) -> Self {
        let params = StyleParameters::new().with_display(display);
        self.style(concern::DISPLAY, &params, modifiers)
    }

    fn z_index(self, value: i32) -> Self {
        let params = StyleParameters::new().with_value(value);
        self.style(concern::Z_INDEX, &params, &[])
    }

    // ---- motion ------------------------------------------------------------

    fn transition(
        self,
        property: TransitionProperty,
        duration: Option<u32>,
        easing: Option<Easing>,
        delay: Option<u32>,
    ) -> Self {
        self.transition_on(property, duration, easing, delay, &[])
    }

    fn transition_on(
        self,
        property: TransitionProperty,
        duration: Option<u32>,
        easing: Option<Easing>,
        delay: Option<u32>,
        modifiers: &[Modifier],
    ) -> Self {
        let mut params = StyleParameters::new().with_property(property);
        params.duration = duration;
        params.easing = easing;
        params.delay = delay;
        self.style(concern::TRANSITION, &params, modifiers)
    }

    fn animate(self, animation: Animation, duration: Option<u32>) -> Self {
        self.animate_on(animation, duration, &[])
    }

    fn animate_on(
        self,
        animation: Animation,
        duration: Option<u32>,
        modifiers: &[Modifier],
    ) -> Self {
        let mut params = StyleParameters::new().with_animation(animation);
        params.duration = duration;
        self.style(concern::ANIMATION, &params, modifiers)
    }
}

impl Styled for Element {
    fn with_classes(self, classes: Vec<String>) -> Self {
        Element::with_classes(self, classes)
    }
}

impl Styled for Node {
    /// Only element nodes carry classes; text and raw nodes pass through
    /// unchanged.
    fn with_classes(self, classes: Vec<String>) -> Self {
        match self {
            Self::Element(element) => Self::Element(element.with_classes(classes)),
            other => {
                log::debug!("styling a non-element node is a no-op");
                other
            }
        }
    }
}
