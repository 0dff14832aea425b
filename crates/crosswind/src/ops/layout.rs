//! Position, frame, display, and stacking order.

use super::{FromStyleParameters, StyleOperation};
use crate::parameters::StyleParameters;
use crate::types::{Dimension, DisplayKind, Edges, PositionKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionParams {
    pub kind: Option<PositionKind>,
    /// Inset length in scale units; sign handling matches spacing.
    pub length: Option<i32>,
    pub edges: Edges,
}

impl FromStyleParameters for PositionParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            kind: bag.position,
            length: bag.length,
            edges: bag.edges.unwrap_or_default(),
        }
    }
}

/// Positioning scheme plus per-edge inset classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Position;

impl StyleOperation for Position {
    type Params = PositionParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(kind) = params.kind {
            out.push(kind.class().to_string());
        }
        if let Some(length) = params.length {
            for stem in params.edges.inset_stems() {
                if length < 0 {
                    out.push(format!("-{stem}-{}", length.unsigned_abs()));
                } else {
                    out.push(format!("{stem}-{length}"));
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameParams {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

impl FromStyleParameters for FrameParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            width: bag.width,
            height: bag.height,
        }
    }
}

/// Width and height (`w-…`, `h-…`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Frame;

impl StyleOperation for Frame {
    type Params = FrameParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(width) = params.width {
            out.push(width.class('w'));
        }
        if let Some(height) = params.height {
            out.push(height.class('h'));
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayParams {
    pub display: Option<DisplayKind>,
}

impl FromStyleParameters for DisplayParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            display: bag.display,
        }
    }
}

/// Display mode (`block`, `flex`, `hidden`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct Display;

impl StyleOperation for Display {
    type Params = DisplayParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        params
            .display
            .iter()
            .map(|kind| kind.class().to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZIndexParams {
    /// Required: a z-index call always names its layer.
    pub value: i32,
}

impl FromStyleParameters for ZIndexParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            value: bag.value.unwrap_or_default(),
        }
    }
}

/// Stacking order (`z-10`, `-z-10`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ZIndex;

impl StyleOperation for ZIndex {
    type Params = ZIndexParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        if params.value < 0 {
            vec![format!("-z-{}", params.value.unsigned_abs())]
        } else {
            vec![format!("z-{}", params.value)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_with_insets() {
        let params = PositionParams {
            kind: Some(PositionKind::Absolute),
            length: Some(0),
            edges: Edges::TOP | Edges::TRAILING,
        };
        assert_eq!(
            Position.apply_classes(&params),
            ["absolute", "top-0", "end-0"]
        );
    }

    #[test]
    fn test_negative_inset() {
        let params = PositionParams {
            kind: None,
            length: Some(-4),
            edges: Edges::BOTTOM,
        };
        assert_eq!(Position.apply_classes(&params), ["-bottom-4"]);
    }

    #[test]
    fn test_most_negative_values_do_not_overflow() {
        let params = PositionParams {
            kind: None,
            length: Some(i32::MIN),
            edges: Edges::TOP,
        };
        assert_eq!(Position.apply_classes(&params), ["-top-2147483648"]);
        assert_eq!(
            ZIndex.apply_classes(&ZIndexParams { value: i32::MIN }),
            ["-z-2147483648"]
        );
    }

    #[test]
    fn test_position_kind_only() {
        let params = PositionParams {
            kind: Some(PositionKind::Sticky),
            ..Default::default()
        };
        assert_eq!(Position.apply_classes(&params), ["sticky"]);
    }

    #[test]
    fn test_frame() {
        let params = FrameParams {
            width: Some(Dimension::Full),
            height: Some(Dimension::Units(64)),
        };
        assert_eq!(Frame.apply_classes(&params), ["w-full", "h-64"]);
    }

    #[test]
    fn test_display() {
        let params = DisplayParams {
            display: Some(DisplayKind::Hidden),
        };
        assert_eq!(Display.apply_classes(&params), ["hidden"]);
    }

    #[test]
    fn test_z_index_sign() {
        assert_eq!(ZIndex.apply_classes(&ZIndexParams { value: 50 }), ["z-50"]);
        assert_eq!(ZIndex.apply_classes(&ZIndexParams { value: -10 }), ["-z-10"]);
    }
}
