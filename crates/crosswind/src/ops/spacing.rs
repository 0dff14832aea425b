//! Padding and margin.
//!
//! For each requested edge the concern emits `<prefix><edge-suffix>-<value>`:
//! `p-4`, `pt-4`, `mx-2`. Negative values move the leading `-` to the front
//! of the whole token (`-mt-2`) rather than changing the suffix.

use super::{FromStyleParameters, StyleOperation};
use crate::parameters::StyleParameters;
use crate::types::Edges;

/// Shared parameters for padding and margin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacingParams {
    /// Length in spacing-scale units; negative flips the direction.
    pub length: i32,
    /// Defaults to [`Edges::ALL`].
    pub edges: Edges,
}

impl SpacingParams {
    pub fn new(length: i32) -> Self {
        Self {
            length,
            edges: Edges::ALL,
        }
    }

    pub fn at(length: i32, edges: Edges) -> Self {
        Self { length, edges }
    }
}

impl FromStyleParameters for SpacingParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            length: bag.length.unwrap_or_default(),
            edges: bag.edges.unwrap_or_default(),
        }
    }
}

fn spacing_classes(prefix: &str, params: &SpacingParams) -> Vec<String> {
    params
        .edges
        .suffixes()
        .iter()
        .map(|suffix| {
            if params.length < 0 {
                format!("-{prefix}{suffix}-{}", params.length.unsigned_abs())
            } else {
                format!("{prefix}{suffix}-{}", params.length)
            }
        })
        .collect()
}

/// Inner spacing (`p…`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Padding;

impl StyleOperation for Padding {
    type Params = SpacingParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        spacing_classes("p", params)
    }
}

/// Outer spacing (`m…`), negative values allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Margin;

impl StyleOperation for Margin {
    type Params = SpacingParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        spacing_classes("m", params)
    }
}
