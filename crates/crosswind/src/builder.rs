//! The declarative block builder.
//!
//! [`StyleBuilder`] lets a block of style intents share one or more modifier
//! scopes without repeating the modifier on every call:
//!
//! ```
//! use crosswind::{Color, StyleBuilder};
//!
//! let mut styles = StyleBuilder::standard();
//! styles.hover(|s| {
//!     s.padding(2);
//!     s.background(Color::BLUE_500);
//! });
//! assert_eq!(styles.classes(), ["hover:p-2", "hover:bg-blue-500"]);
//! ```
//!
//! Entering a scope pushes its modifier for the dynamic extent of the nested
//! closure, then pops it; scopes nest arbitrarily (`md { hover { ... } }`).
//! Each concern call resolves its operation from the registry, scopes the
//! base classes against the current stack, and appends. Block-authored
//! classes carry exactly the full prefix of their enclosing scopes - no
//! unscoped duplicate and no intermediate partial prefixes.
//!
//! Conditional authoring is ordinary control flow around the calls; the
//! builder carries no notion of conditionals. Builders are created per block
//! and discarded after their classes are merged, so no synchronization is
//! involved.

use smallvec::SmallVec;

use crate::combine;
use crate::modifier::{AriaState, Modifier};
use crate::parameters::StyleParameters;
use crate::registry::{StyleRegistry, concern, standard_registry};
use crate::types::{
    Animation, Color, CursorKind, Dimension, DisplayKind, Easing, Edges, FontFamily, FontSize,
    FontWeight, LineStyle, PositionKind, Radius, ShadowSize, TextAlign, TransitionProperty,
};

/// Mutable scope-stack accumulator behind the block DSL.
pub struct StyleBuilder<'r> {
    registry: &'r StyleRegistry,
    stack: SmallVec<[Modifier; 4]>,
    classes: Vec<String>,
}

impl<'r> StyleBuilder<'r> {
    pub fn new(registry: &'r StyleRegistry) -> Self {
        Self {
            registry,
            stack: SmallVec::new(),
            classes: Vec::new(),
        }
    }

    /// A builder over the process-wide standard registry.
    pub fn standard() -> StyleBuilder<'static> {
        StyleBuilder::new(standard_registry())
    }

    /// The classes accumulated so far, in call order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The modifier stack currently in effect, outermost first.
    pub fn active_stack(&self) -> &[Modifier] {
        &self.stack
    }

    pub fn into_classes(self) -> Vec<String> {
        self.classes
    }

    // ---- scoping -----------------------------------------------------------

    /// Runs a block with `modifier` pushed onto the scope stack.
    pub fn scoped(&mut self, modifier: Modifier, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.stack.push(modifier);
        block(self);
        self.stack.pop();
        self
    }

    pub fn hover(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Hover, block)
    }

    pub fn focus(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Focus, block)
    }

    pub fn focus_within(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::FocusWithin, block)
    }

    pub fn active(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Active, block)
    }

    pub fn disabled(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Disabled, block)
    }

    pub fn dark(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Dark, block)
    }

    pub fn aria(&mut self, state: AriaState, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Aria(state), block)
    }

    pub fn sm(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Sm, block)
    }

    pub fn md(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Md, block)
    }

    pub fn lg(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Lg, block)
    }

    pub fn xl(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Xl, block)
    }

    pub fn xl2(&mut self, block: impl FnOnce(&mut Self)) -> &mut Self {
        self.scoped(Modifier::Xl2, block)
    }

    // ---- concern calls -----------------------------------------------------

    /// Applies a registered concern against the current scope stack.
    ///
    /// The generic entry point for third-party concerns; the named methods
    /// below all route through it. An unknown concern is a logged no-op.
    pub fn apply(&mut self, concern: &str, params: &StyleParameters) -> &mut Self {
        match self.registry.get(concern) {
            Some(operation) => {
                let base = operation.apply_parameters(params);
                self.classes.extend(combine::scope(&base, &self.stack));
            }
            None => log::warn!("unknown style concern {concern:?}, no classes emitted"),
        }
        self
    }

    pub fn padding(&mut self, length: i32) -> &mut Self {
        self.padding_at(length, Edges::ALL)
    }

    pub fn padding_at(&mut self, length: i32, edges: Edges) -> &mut Self {
        let params = StyleParameters::new().with_length(length).with_edges(edges);
        self.apply(concern::PADDING, &params)
    }

    pub fn margin(&mut self, length: i32) -> &mut Self {
        self.margin_at(length, Edges::ALL)
    }

    pub fn margin_at(&mut self, length: i32, edges: Edges) -> &mut Self {
        let params = StyleParameters::new().with_length(length).with_edges(edges);
        self.apply(concern::MARGIN, &params)
    }

    pub fn foreground(&mut self, color: Color) -> &mut Self {
        let params = StyleParameters::new().with_color(color);
        self.apply(concern::FOREGROUND, &params)
    }

    pub fn background(&mut self, color: Color) -> &mut Self {
        let params = StyleParameters::new().with_color(color);
        self.apply(concern::BACKGROUND, &params)
    }

    pub fn border(&mut self, width: i32) -> &mut Self {
        let params = StyleParameters::new().with_length(width);
        self.apply(concern::BORDER, &params)
    }

    pub fn border_color(&mut self, color: Color) -> &mut Self {
        let params = StyleParameters::new().with_color(color);
        self.apply(concern::BORDER, &params)
    }

    pub fn border_style(&mut self, style: LineStyle) -> &mut Self {
        let params = StyleParameters::new().with_border_style(style);
        self.apply(concern::BORDER, &params)
    }

    pub fn corner_radius(&mut self, radius: Radius) -> &mut Self {
        let params = StyleParameters::new().with_radius(radius);
        self.apply(concern::CORNER_RADIUS, &params)
    }

    pub fn ring(&mut self, width: i32) -> &mut Self {
        let params = StyleParameters::new().with_length(width);
        self.apply(concern::RING, &params)
    }

    pub fn ring_color(&mut self, color: Color) -> &mut Self {
        let params = StyleParameters::new().with_color(color);
        self.apply(concern::RING, &params)
    }

    pub fn font_size(&mut self, size: FontSize) -> &mut Self {
        let params = StyleParameters::new().with_font_size(size);
        self.apply(concern::FONT, &params)
    }

    pub fn font_weight(&mut self, weight: FontWeight) -> &mut Self {
        let params = StyleParameters::new().with_font_weight(weight);
        self.apply(concern::FONT, &params)
    }

    pub fn text_align(&mut self, align: TextAlign) -> &mut Self {
        let params = StyleParameters::new().with_text_align(align);
        self.apply(concern::FONT, &params)
    }

    pub fn font_family(&mut self, family: FontFamily) -> &mut Self {
        let params = StyleParameters::new().with_font_family(family);
        self.apply(concern::FONT, &params)
    }

    pub fn shadow(&mut self, size: ShadowSize) -> &mut Self {
        let params = StyleParameters::new().with_shadow(size);
        self.apply(concern::SHADOW, &params)
    }

    pub fn shadow_color(&mut self, color: Color) -> &mut Self {
        let params = StyleParameters::new().with_color(color);
        self.apply(concern::SHADOW, &params)
    }

    pub fn opacity(&mut self, value: i32) -> &mut Self {
        let params = StyleParameters::new().with_value(value);
        self.apply(concern::OPACITY, &params)
    }

    pub fn cursor(&mut self, cursor: CursorKind) -> &mut Self {
        let params = StyleParameters::new().with_cursor(cursor);
        self.apply(concern::CURSOR, &params)
    }

    pub fn position(&mut self, kind: PositionKind) -> &mut Self {
        let params = StyleParameters::new().with_position(kind);
        self.apply(concern::POSITION, &params)
    }

    /// Inset offsets without changing the positioning scheme.
    pub fn inset(&mut self, length: i32, edges: Edges) -> &mut Self {
        let params = StyleParameters::new().with_length(length).with_edges(edges);
        self.apply(concern::POSITION, &params)
    }

    pub fn width(&mut self, width: Dimension) -> &mut Self {
        let params = StyleParameters::new().with_width(width);
        self.apply(concern::FRAME, &params)
    }

    pub fn height(&mut self, height: Dimension) -> &mut Self {
        let params = StyleParameters::new().with_height(height);
        self.apply(concern::FRAME, &params)
    }

    pub fn display(&mut self, display: DisplayKind) -> &mut Self {
        let params = StyleParameters::new().with_display(display);
        self.apply(concern::DISPLAY, &params)
    }

    pub fn z_index(&mut self, value: i32) -> &mut Self {
        let params = StyleParameters::new().with_value(value);
        self.apply(concern::Z_INDEX, &params)
    }

    pub fn transition(
        &mut self,
        property: TransitionProperty,
        duration: Option<u32>,
        easing: Option<Easing>,
        delay: Option<u32>,
    ) -> &mut Self {
        let mut params = StyleParameters::new().with_property(property);
        params.duration = duration;
        params.easing = easing;
        params.delay = delay;
        self.apply(concern::TRANSITION, &params)
    }

    pub fn animate(&mut self, animation: Animation, duration: Option<u32>) -> &mut Self {
        let mut params = StyleParameters::new().with_animation(animation);
        params.duration = duration;
        self.apply(concern::ANIMATION, &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_call() {
        let mut builder = StyleBuilder::standard();
        builder.padding(4);
        assert_eq!(builder.classes(), ["p-4"]);
    }

    #[test]
    fn test_block_scoping() {
        let mut builder = StyleBuilder::standard();
        builder.hover(|s| {
            s.background(Color::BLUE_500);
        });
        assert_eq!(builder.classes(), ["hover:bg-blue-500"]);
    }

    #[test]
    fn test_stack_pops_at_block_exit() {
        let mut builder = StyleBuilder::standard();
        builder.md(|s| {
            s.padding(2);
        });
        builder.padding(4);
        assert_eq!(builder.classes(), ["md:p-2", "p-4"]);
        assert!(builder.active_stack().is_empty());
    }

    #[test]
    fn test_nested_scopes_concatenate() {
        let mut builder = StyleBuilder::standard();
        builder.md(|s| {
            s.hover(|s| {
                s.padding_at(4, Edges::TOP);
            });
        });
        assert_eq!(builder.classes(), ["md:hover:pt-4"]);
    }

    #[test]
    fn test_unknown_concern_is_a_no_op() {
        let mut builder = StyleBuilder::standard();
        builder.apply("outline", &StyleParameters::new().with_length(2));
        assert!(builder.classes().is_empty());
    }

    #[test]
    fn test_conditional_authoring_is_plain_control_flow() {
        for primary in [true, false] {
            let mut builder = StyleBuilder::standard();
            if primary {
                builder.background(Color::BLUE_500);
            } else {
                builder.background(Color::GRAY_100);
            }
            let expected = if primary { "bg-blue-500" } else { "bg-gray-100" };
            assert_eq!(builder.classes(), [expected]);
        }
    }

    #[test]
    fn test_swapped_registry() {
        let registry = StyleRegistry::empty();
        let mut builder = StyleBuilder::new(&registry);
        builder.padding(4);
        assert!(builder.classes().is_empty(), "empty registry emits nothing");
    }
}
