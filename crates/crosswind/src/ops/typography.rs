//! Font size, weight, alignment, and family.

use super::{FromStyleParameters, StyleOperation};
use crate::parameters::StyleParameters;
use crate::types::{FontFamily, FontSize, FontWeight, TextAlign};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontParams {
    pub size: Option<FontSize>,
    pub weight: Option<FontWeight>,
    pub align: Option<TextAlign>,
    pub family: Option<FontFamily>,
}

impl FromStyleParameters for FontParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            size: bag.font_size,
            weight: bag.font_weight,
            align: bag.text_align,
            family: bag.font_family,
        }
    }
}

/// Typography concern; every set field is an independent class.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font;

impl StyleOperation for Font {
    type Params = FontParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(size) = params.size {
            out.push(format!("text-{}", size.token()));
        }
        if let Some(weight) = params.weight {
            out.push(format!("font-{}", weight.token()));
        }
        if let Some(align) = params.align {
            out.push(format!("text-{}", align.token()));
        }
        if let Some(family) = params.family {
            out.push(format!("font-{}", family.token()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_font_spec() {
        let params = FontParams {
            size: Some(FontSize::Lg),
            weight: Some(FontWeight::SemiBold),
            align: Some(TextAlign::Center),
            family: Some(FontFamily::Mono),
        };
        assert_eq!(
            Font.apply_classes(&params),
            ["text-lg", "font-semibold", "text-center", "font-mono"]
        );
    }

    #[test]
    fn test_partial_font_spec() {
        let params = FontParams {
            size: Some(FontSize::Xl2),
            ..Default::default()
        };
        assert_eq!(Font.apply_classes(&params), ["text-2xl"]);
        assert!(Font.apply_classes(&FontParams::default()).is_empty());
    }
}
