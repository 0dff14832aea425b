//! # Crosswind - Utility-Class Style Composition
//!
//! Crosswind turns semantic style intents ("padding of 4 units on the leading
//! edge", "background blue, but only on hover, and only at the medium
//! breakpoint") into flat, ordered lists of utility CSS class names.
//!
//! The engine is a pure, synchronous transformation. It does not own a DOM,
//! resolve the CSS cascade, or parse stylesheets - a real browser resolves the
//! emitted classes. This crate provides:
//!
//! - **Modifiers**: Scoping qualifiers (pseudo-class states, ARIA states,
//!   responsive breakpoints) serialized as selector prefixes (`hover:`, `md:`)
//! - **Style operations**: One pure unit per concern (spacing, color, border,
//!   position, shadow, motion, ...) mapping typed parameters to class names
//! - **A registry**: One canonical operation instance per concern, shared by
//!   every authoring surface, with a registration hook for extensions
//! - **A declarative builder**: Block-scoped authoring where several intents
//!   share a modifier scope without repeating it on every call
//!
//! ## Quick Start
//!
//! ```rust
//! use crosswind::{Color, Edges, StyleBuilder};
//!
//! let mut styles = StyleBuilder::standard();
//! styles.padding_at(4, Edges::TOP);
//! styles.md(|s| {
//!     s.hover(|s| {
//!         s.background(Color::BLUE_500);
//!     });
//! });
//!
//! assert_eq!(styles.classes(), ["pt-4", "md:hover:bg-blue-500"]);
//! ```
//!
//! ## Combination Strategies
//!
//! Most concerns use the *merged* strategy: the unscoped class is kept as a
//! baseline and one prefixed copy is appended per explicit modifier, so a
//! single call sets both the default and its per-state override. Motion
//! concerns (transition, animation) use the *separate* strategy, where an
//! unscoped duplicate is not meaningful. Block-authored calls are always
//! scoped exactly once with the full prefix of the enclosing blocks.
//!
//! ## Modules
//!
//! - [`modifier`]: The scoping vocabulary and its prefix serialization
//! - [`types`]: Value vocabularies (colors, edges, dimensions, ...)
//! - [`ops`]: The style-operation family
//! - [`combine`]: Class/modifier combination rules
//! - [`registry`]: The concern table and standard registry
//! - [`builder`]: The declarative block builder

pub mod builder;
pub mod combine;
pub mod modifier;
pub mod ops;
pub mod parameters;
pub mod registry;
pub mod types;

pub use builder::StyleBuilder;
pub use combine::Strategy;
pub use modifier::{AriaState, Modifier};
pub use ops::{AnyStyleOperation, FromStyleParameters, StyleOperation};
pub use parameters::StyleParameters;
pub use registry::{StyleRegistry, concern, standard_registry};
pub use types::{
    Animation, Color, ColorError, CursorKind, Dimension, DisplayKind, Easing, Edges, FontFamily,
    FontSize, FontWeight, Hue, LineStyle, PositionKind, Radius, ShadowSize, TextAlign,
    TransitionProperty,
};
