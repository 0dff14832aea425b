//! The shared parameter bag driving style operations.
//!
//! [`StyleParameters`] is a heterogeneous bag of optional typed values. It
//! exists so the declarative block builder and the direct-chaining surface
//! can share one call contract with every operation: both surfaces fill the
//! fields their concern cares about and leave the rest unset. Unset fields
//! contribute no classes.
//!
//! Bags are created fresh per call and never persisted.

use crate::types::{
    Animation, Color, CursorKind, Dimension, DisplayKind, Easing, Edges, FontFamily, FontSize,
    FontWeight, LineStyle, PositionKind, Radius, ShadowSize, TextAlign, TransitionProperty,
};

/// A keyed bag of optional concern arguments.
#[derive(Debug, Clone, Default)]
pub struct StyleParameters {
    /// Spacing or inset length in scale units; sign selects direction.
    pub length: Option<i32>,
    /// The edges a spacing/border/inset intent applies to.
    pub edges: Option<Edges>,
    /// Semantic color token.
    pub color: Option<Color>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub border_style: Option<LineStyle>,
    pub radius: Option<Radius>,
    pub shadow: Option<ShadowSize>,
    pub font_size: Option<FontSize>,
    pub font_weight: Option<FontWeight>,
    pub text_align: Option<TextAlign>,
    pub font_family: Option<FontFamily>,
    pub position: Option<PositionKind>,
    pub display: Option<DisplayKind>,
    pub cursor: Option<CursorKind>,
    /// Duration in milliseconds (transition/animation).
    pub duration: Option<u32>,
    /// Delay in milliseconds (transition).
    pub delay: Option<u32>,
    pub easing: Option<Easing>,
    pub property: Option<TransitionProperty>,
    pub animation: Option<Animation>,
    /// Bare numeric argument (opacity, z-index).
    pub value: Option<i32>,
}

impl StyleParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: i32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_edges(mut self, edges: Edges) -> Self {
        self.edges = Some(edges);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_border_style(mut self, style: LineStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    pub fn with_radius(mut self, radius: Radius) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_shadow(mut self, shadow: ShadowSize) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = Some(family);
        self
    }

    pub fn with_position(mut self, position: PositionKind) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_display(mut self, display: DisplayKind) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_cursor(mut self, cursor: CursorKind) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_duration(mut self, milliseconds: u32) -> Self {
        self.duration = Some(milliseconds);
        self
    }

    pub fn with_delay(mut self, milliseconds: u32) -> Self {
        self.delay = Some(milliseconds);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn with_property(mut self, property: TransitionProperty) -> Self {
        self.property = Some(property);
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }
}
