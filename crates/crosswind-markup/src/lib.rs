//! # Crosswind Markup - HTML nodes with utility-class styling
//!
//! This crate owns the rendering target for the [crosswind](crosswind) style
//! engine: an immutable HTML node tree whose elements carry an ordered,
//! append-only class list, rendered to plain HTML strings.
//!
//! Styling composes by returning new values - a style call never mutates the
//! receiver. Two authoring surfaces share the engine's single operation table:
//!
//! ```rust
//! use crosswind::{Color, Modifier};
//! use crosswind_markup::{Styled, tags};
//!
//! // Direct chaining with explicit modifiers (merged strategy: the unscoped
//! // baseline is kept alongside the scoped variant).
//! let button = tags::button()
//!     .text("Save")
//!     .background_on(Color::BLUE_500, &[Modifier::Hover]);
//! assert_eq!(
//!     button.render(),
//!     r#"<button class="bg-blue-500 hover:bg-blue-500">Save</button>"#
//! );
//!
//! // Declarative blocks (scoped-only: no unscoped duplicate).
//! let card = tags::div().on(|s| {
//!     s.hover(|s| {
//!         s.background(Color::BLUE_500);
//!     });
//! });
//! assert_eq!(card.render(), r#"<div class="hover:bg-blue-500"></div>"#);
//! ```

pub mod element;
pub mod render;
pub mod styled;

pub use element::{Element, Node, tags};
pub use styled::Styled;

// Re-export the engine so downstream callers need a single dependency.
pub use crosswind;
