//! The style-operation family: one pure unit per style concern.
//!
//! Every operation is a stateless singleton mapping a small typed parameter
//! struct to an array of class-name strings. Operations are modifier-agnostic:
//! scoping is applied externally by the [combination rules](crate::combine).
//!
//! Two traits cover the two call sites:
//!
//! - [`StyleOperation`] is the typed contract. `apply_classes` is
//!   deterministic and total - it never fails, and absent optional fields
//!   contribute no classes rather than a malformed string.
//! - [`AnyStyleOperation`] is the object-safe erasure held by the
//!   [registry](crate::registry). It is blanket-implemented for every
//!   operation whose parameters can be read out of the shared
//!   [`StyleParameters`] bag, which is what lets the declarative builder and
//!   the direct-chaining surface drive identical logic.

pub mod border;
pub mod color;
pub mod effects;
pub mod layout;
pub mod motion;
pub mod spacing;
pub mod typography;

pub use border::{Border, BorderParams, CornerRadius, RadiusParams, Ring, RingParams};
pub use color::{Background, ColorParams, Foreground};
pub use effects::{Cursor, CursorParams, Opacity, OpacityParams, Shadow, ShadowParams};
pub use layout::{
    Display, DisplayParams, Frame, FrameParams, Position, PositionParams, ZIndex, ZIndexParams,
};
pub use motion::{Animate, AnimationParams, Transition, TransitionParams};
pub use spacing::{Margin, Padding, SpacingParams};
pub use typography::{Font, FontParams};

use crate::combine::Strategy;
use crate::parameters::StyleParameters;

/// A pure mapping from concern-specific parameters to class names.
pub trait StyleOperation {
    type Params: Default;

    /// Produces the base (unscoped) classes for these parameters.
    ///
    /// Deterministic and total: identical parameters always yield identical
    /// output, and unset optional fields emit nothing.
    fn apply_classes(&self, params: &Self::Params) -> Vec<String>;

    /// The combination rule the direct-chaining surface applies.
    fn strategy(&self) -> Strategy {
        Strategy::Merged
    }
}

/// Adapter reading typed parameters out of the shared bag.
pub trait FromStyleParameters {
    fn from_parameters(bag: &StyleParameters) -> Self;
}

/// Object-safe form of [`StyleOperation`], driven by the parameter bag.
pub trait AnyStyleOperation: Send + Sync {
    fn apply_parameters(&self, bag: &StyleParameters) -> Vec<String>;
    fn strategy(&self) -> Strategy;
}

impl<T> AnyStyleOperation for T
where
    T: StyleOperation + Send + Sync,
    T::Params: FromStyleParameters,
{
    fn apply_parameters(&self, bag: &StyleParameters) -> Vec<String> {
        self.apply_classes(&T::Params::from_parameters(bag))
    }

    fn strategy(&self) -> Strategy {
        StyleOperation::strategy(self)
    }
}
