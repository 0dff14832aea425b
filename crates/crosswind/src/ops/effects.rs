//! Shadow, opacity, and cursor.

use super::{FromStyleParameters, StyleOperation};
use crate::parameters::StyleParameters;
use crate::types::{Color, CursorKind, ShadowSize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowParams {
    pub size: Option<ShadowSize>,
    pub color: Option<Color>,
}

impl FromStyleParameters for ShadowParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            size: bag.shadow,
            color: bag.color.clone(),
        }
    }
}

/// Drop shadow; size and color are independent classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shadow;

impl StyleOperation for Shadow {
    type Params = ShadowParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(size) = params.size {
            out.push(size.class());
        }
        if let Some(color) = &params.color {
            out.push(format!("shadow-{}", color.token()));
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpacityParams {
    /// Required: opacity in percent steps (0-100).
    pub value: i32,
}

impl FromStyleParameters for OpacityParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            value: bag.value.unwrap_or_default(),
        }
    }
}

/// Element opacity (`opacity-<value>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Opacity;

impl StyleOperation for Opacity {
    type Params = OpacityParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        vec![format!("opacity-{}", params.value)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorParams {
    pub cursor: Option<CursorKind>,
}

impl FromStyleParameters for CursorParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self { cursor: bag.cursor }
    }
}

/// Pointer appearance (`cursor-<kind>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor;

impl StyleOperation for Cursor {
    type Params = CursorParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        params
            .cursor
            .iter()
            .map(|kind| format!("cursor-{}", kind.token()))
            .collect()
    }
}
