//! Foreground and background color.

use super::{FromStyleParameters, StyleOperation};
use crate::parameters::StyleParameters;
use crate::types::Color;

/// Parameters shared by the two color concerns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorParams {
    pub color: Option<Color>,
}

impl ColorParams {
    pub fn new(color: Color) -> Self {
        Self { color: Some(color) }
    }
}

impl FromStyleParameters for ColorParams {
    fn from_parameters(bag: &StyleParameters) -> Self {
        Self {
            color: bag.color.clone(),
        }
    }
}

/// Text color (`text-<token>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Foreground;

impl StyleOperation for Foreground {
    type Params = ColorParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        params
            .color
            .iter()
            .map(|color| format!("text-{}", color.token()))
            .collect()
    }
}

/// Background color (`bg-<token>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Background;

impl StyleOperation for Background {
    type Params = ColorParams;

    fn apply_classes(&self, params: &Self::Params) -> Vec<String> {
        params
            .color
            .iter()
            .map(|color| format!("bg-{}", color.token()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hue;

    #[test]
    fn test_background_palette() {
        let params = ColorParams::new(Color::BLUE_500);
        assert_eq!(Background.apply_classes(&params), ["bg-blue-500"]);
    }

    #[test]
    fn test_foreground_named_and_hex() {
        assert_eq!(
            Foreground.apply_classes(&ColorParams::new(Color::WHITE)),
            ["text-white"]
        );
        let hex = Color::hex("#1a2b3c").unwrap();
        assert_eq!(
            Foreground.apply_classes(&ColorParams::new(hex)),
            ["text-[#1a2b3c]"]
        );
    }

    #[test]
    fn test_unset_color_emits_nothing() {
        assert!(Background.apply_classes(&ColorParams::default()).is_empty());
    }

    #[test]
    fn test_shade_variants() {
        let params = ColorParams::new(Color::palette(Hue::Emerald, 950));
        assert_eq!(Foreground.apply_classes(&params), ["text-emerald-950"]);
    }
}
