//! Border, corner radius, and focus ring.
//!
//! Composite fields are independent classes, never fused into one token:
//! a 2-unit dashed blue border is `border-2 border-dashed border-blue-500`.

use super::{FromStyleParameters, StyleOperation};
use crate::parameters::StyleParameters;
use crate::types::{Color, Edges, LineStyle, Radius};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderParams {
    /// Width in scale units; `1` is the framework default and drops the
    /// numeric suffix (`border`, `border-t`).
    pub width: Option<i32>,
    pub style: Option<LineStyle>,
    pub color: Option<Color>,
    pub edges: Edges,
}

impl FromStyleParameters for BorderParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            width: bag.length,
            style: bag.border_style,
            color: bag.color.clone(),
            edges: bag.edges.unwrap_or_default(),
        }
    }
}

/// Border width, style, and color.
#[derive(Debug, Clone, Copy, Default)]
pub struct Border;

impl StyleOperation for Border {
    type Params = BorderParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(width) = params.width {
            for suffix in params.edges.suffixes() {
                let stem = if suffix.is_empty() {
                    "border".to_string()
                } else {
                    format!("border-{suffix}")
                };
                if width == 1 {
                    out.push(stem);
                } else {
                    out.push(format!("{stem}-{width}"));
                }
            }
        }
        if let Some(style) = params.style {
            out.push(format!("border-{}", style.token()));
        }
        if let Some(color) = &params.color {
            out.push(format!("border-{}", color.token()));
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadiusParams {
    pub radius: Option<Radius>,
}

impl FromStyleParameters for RadiusParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self { radius: bag.radius }
    }
}

/// Corner rounding (`rounded`, `rounded-lg`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerRadius;

impl StyleOperation for CornerRadius {
    type Params = RadiusParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        params.radius.iter().map(Radius::class).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RingParams {
    pub width: Option<i32>,
    pub color: Option<Color>,
}

impl FromStyleParameters for RingParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            width: bag.length,
            color: bag.color.clone(),
        }
    }
}

/// Outline ring (`ring-<n>`, `ring-<token>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Ring;

impl StyleOperation for Ring {
    type Params = RingParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(width) = params.width {
            out.push(format!("ring-{width}"));
        }
        if let Some(color) = &params.color {
            out.push(format!("ring-{}", color.token()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_composite_fields_stay_independent() {
        let params = BorderParams {
            width: Some(2),
            style: Some(LineStyle::Dashed),
            color: Some(Color::BLUE_500),
            edges: Edges::ALL,
        };
        assert_eq!(
            Border.apply_classes(&params),
            ["border-2", "border-dashed", "border-blue-500"]
        );
    }

    #[test]
    fn test_default_width_drops_suffix() {
        let params = BorderParams {
            width: Some(1),
            edges: Edges::TOP,
            ..Default::default()
        };
        assert_eq!(Border.apply_classes(&params), ["border-t"]);
    }

    #[test]
    fn test_color_only_border() {
        let params = BorderParams {
            color: Some(Color::RED_500),
            ..Default::default()
        };
        assert_eq!(Border.apply_classes(&params), ["border-red-500"]);
    }

    #[test]
    fn test_corner_radius() {
        let params = RadiusParams {
            radius: Some(Radius::Full),
        };
        assert_eq!(CornerRadius.apply_classes(&params), ["rounded-full"]);
        assert!(CornerRadius.apply_classes(&RadiusParams::default()).is_empty());
    }

    #[test]
    fn test_ring() {
        let params = RingParams {
            width: Some(2),
            color: Some(Color::BLUE_500),
        };
        assert_eq!(Ring.apply_classes(&params), ["ring-2", "ring-blue-500"]);
    }
}
