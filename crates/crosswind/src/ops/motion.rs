//! Transition and animation.
//!
//! Built-in values get their canonical utility class; everything else falls
//! back to the arbitrary-value bracket syntax (`[animation-duration:500ms]`),
//! the escape hatch that lets the closed utility vocabulary represent any CSS
//! value. Both concerns use the separate combination strategy: an unscoped
//! duplicate of a transition class has no meaningful baseline semantics.

use super::{FromStyleParameters, StyleOperation};
use crate::combine::Strategy;
use crate::parameters::StyleParameters;
use crate::types::{Animation, Easing, TransitionProperty};

/// Durations with a canonical `duration-<ms>`/`delay-<ms>` utility.
const CANONICAL_MILLISECONDS: &[u32] = &[75, 100, 150, 200, 300, 500, 700, 1000];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionParams {
    pub property: TransitionProperty,
    pub duration: Option<u32>,
    pub easing: Option<Easing>,
    pub delay: Option<u32>,
}

impl FromStyleParameters for TransitionParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            property: bag.property.unwrap_or_default(),
            duration: bag.duration,
            easing: bag.easing.clone(),
            delay: bag.delay,
        }
    }
}

/// CSS transition shorthand.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transition;

impl StyleOperation for Transition {
    type Params = TransitionParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        let mut out = vec![params.property.class().to_string()];
        if let Some(ms) = params.duration {
            if CANONICAL_MILLISECONDS.contains(&ms) {
                out.push(format!("duration-{ms}"));
            } else {
                out.push(format!("[transition-duration:{ms}ms]"));
            }
        }
        if let Some(easing) = &params.easing {
            out.push(match easing {
                Easing::Linear => "ease-linear".into(),
                Easing::In => "ease-in".into(),
                Easing::Out => "ease-out".into(),
                Easing::InOut => "ease-in-out".into(),
                Easing::Custom(raw) => format!("[transition-timing-function:{raw}]"),
            });
        }
        if let Some(ms) = params.delay {
            if CANONICAL_MILLISECONDS.contains(&ms) {
                out.push(format!("delay-{ms}"));
            } else {
                out.push(format!("[transition-delay:{ms}ms]"));
            }
        }
        out
    }

    fn strategy(&self) -> Strategy {
        Strategy::Separate
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationParams {
    pub animation: Option<Animation>,
    /// No canonical utility exists for animation duration, so any value
    /// emits the arbitrary form.
    pub duration: Option<u32>,
}

impl FromStyleParameters for AnimationParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            animation: bag.animation.clone(),
            duration: bag.duration,
        }
    }
}

/// Keyframe animation (`animate-<name>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Animate;

impl StyleOperation for Animate {
    type Params = AnimationParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(animation) = &params.animation {
            out.push(animation.class());
        }
        if let Some(ms) = params.duration {
            out.push(format!("[animation-duration:{ms}ms]"));
        }
        out
    }

    fn strategy(&self) -> Strategy {
        Strategy::Separate
    }
}
