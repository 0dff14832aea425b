//! The concern table.
//!
//! A [`StyleRegistry`] holds exactly one instance of each style operation,
//! keyed by concern name, and serves both authoring surfaces from that single
//! instance so class-building logic can never drift between them. The
//! registry is an explicitly constructed object - build one with
//! [`StyleRegistry::standard`] (or [`empty`](StyleRegistry::empty) plus
//! [`register`](StyleRegistry::register) in tests) and treat it as read-only
//! afterwards. [`standard_registry`] exposes a lazily built process-wide
//! standard instance for the convenience surfaces; it is immutable after
//! construction and safe to read from parallel page builds.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::ops::{
    Animate, AnyStyleOperation, Background, Border, CornerRadius, Cursor, Display, Font,
    Foreground, Frame, Margin, Opacity, Padding, Position, Ring, Shadow, Transition, ZIndex,
};

/// Canonical concern names for the built-in operations.
pub mod concern {
    pub const PADDING: &str = "padding";
    pub const MARGIN: &str = "margin";
    pub const FOREGROUND: &str = "foreground";
    pub const BACKGROUND: &str = "background";
    pub const BORDER: &str = "border";
    pub const CORNER_RADIUS: &str = "corner-radius";
    pub const RING: &str = "ring";
    pub const FONT: &str = "font";
    pub const SHADOW: &str = "shadow";
    pub const OPACITY: &str = "opacity";
    pub const CURSOR: &str = "cursor";
    pub const POSITION: &str = "position";
    pub const FRAME: &str = "frame";
    pub const DISPLAY: &str = "display";
    pub const Z_INDEX: &str = "z-index";
    pub const TRANSITION: &str = "transition";
    pub const ANIMATION: &str = "animation";
}

/// One canonical operation instance per concern.
pub struct StyleRegistry {
    operations: HashMap<String, Arc<dyn AnyStyleOperation>>,
}

impl StyleRegistry {
    /// A registry with no concerns registered.
    pub fn empty() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// A registry carrying every built-in concern.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(concern::PADDING, Padding);
        registry.register(concern::MARGIN, Margin);
        registry.register(concern::FOREGROUND, Foreground);
        registry.register(concern::BACKGROUND, Background);
        registry.register(concern::BORDER, Border);
        registry.register(concern::CORNER_RADIUS, CornerRadius);
        registry.register(concern::RING, Ring);
        registry.register(concern::FONT, Font);
        registry.register(concern::SHADOW, Shadow);
        registry.register(concern::OPACITY, Opacity);
        registry.register(concern::CURSOR, Cursor);
        registry.register(concern::POSITION, Position);
        registry.register(concern::FRAME, Frame);
        registry.register(concern::DISPLAY, Display);
        registry.register(concern::Z_INDEX, ZIndex);
        registry.register(concern::TRANSITION, Transition);
        registry.register(concern::ANIMATION, Animate);
        registry
    }

    /// Registers an operation under a concern name.
    ///
    /// This is the extension hook: new concerns can be added without touching
    /// the core types. Re-registering a name replaces the previous operation.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        operation: impl AnyStyleOperation + 'static,
    ) {
        let name = name.into();
        if self
            .operations
            .insert(name.clone(), Arc::new(operation))
            .is_some()
        {
            log::warn!("style concern {name:?} re-registered, previous operation replaced");
        } else {
            log::debug!("registered style concern {name:?}");
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AnyStyleOperation>> {
        self.operations.get(name).map(Arc::clone)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// The process-wide standard registry.
pub fn standard_registry() -> &'static StyleRegistry {
    static STANDARD: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::standard);
    &STANDARD
}
