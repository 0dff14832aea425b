//! Semantic color tokens.
//!
//! Colors serialize to utility-class tokens rather than resolved RGB values:
//! the palette form becomes `blue-500`, named colors pass through as-is, and
//! raw hex values use the arbitrary-value escape (`[#1a2b3c]`) so any CSS
//! color remains representable without widening the vocabulary.
//!
//! ```
//! use crosswind::{Color, Hue};
//!
//! assert_eq!(Color::BLUE_500.token(), "blue-500");
//! assert_eq!(Color::palette(Hue::Rose, 300).token(), "rose-300");
//! assert_eq!(Color::hex("#1A2B3C").unwrap().token(), "[#1a2b3c]");
//! ```

use thiserror::Error;

/// Errors that can occur when constructing a hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A character outside `0-9a-fA-F` appeared in the hex digits.
    #[error("invalid hex digit: {0}")]
    InvalidHexDigit(char),

    /// The digit count was not 3, 4, 6, or 8.
    #[error("invalid hex color length: {0}")]
    InvalidLength(usize),
}

/// Palette hue families, ordered as the palette documents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl Hue {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Gray => "gray",
            Self::Zinc => "zinc",
            Self::Neutral => "neutral",
            Self::Stone => "stone",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Pink => "pink",
            Self::Rose => "rose",
        }
    }
}

/// A semantic color token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// A keyword token that passes through unchanged (`white`, `transparent`).
    Named(&'static str),
    /// A palette hue at a shade step (50-950).
    Palette(Hue, u16),
    /// Lowercased hex digits, emitted via the arbitrary-value escape.
    Hex(String),
}

impl Color {
    pub const WHITE: Color = Color::Named("white");
    pub const BLACK: Color = Color::Named("black");
    pub const TRANSPARENT: Color = Color::Named("transparent");
    pub const CURRENT: Color = Color::Named("current");
    pub const INHERIT: Color = Color::Named("inherit");

    pub const GRAY_100: Color = Color::Palette(Hue::Gray, 100);
    pub const GRAY_500: Color = Color::Palette(Hue::Gray, 500);
    pub const GRAY_900: Color = Color::Palette(Hue::Gray, 900);
    pub const RED_500: Color = Color::Palette(Hue::Red, 500);
    pub const YELLOW_400: Color = Color::Palette(Hue::Yellow, 400);
    pub const GREEN_500: Color = Color::Palette(Hue::Green, 500);
    pub const BLUE_500: Color = Color::Palette(Hue::Blue, 500);
    pub const BLUE_700: Color = Color::Palette(Hue::Blue, 700);
    pub const INDIGO_500: Color = Color::Palette(Hue::Indigo, 500);

    pub fn palette(hue: Hue, shade: u16) -> Self {
        Self::Palette(hue, shade)
    }

    /// Validates and normalizes a hex color string.
    ///
    /// Accepts 3, 4, 6, or 8 hex digits with an optional leading `#`.
    pub fn hex(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        match digits.len() {
            3 | 4 | 6 | 8 => {}
            other => return Err(ColorError::InvalidLength(other)),
        }
        for c in digits.chars() {
            if !c.is_ascii_hexdigit() {
                return Err(ColorError::InvalidHexDigit(c));
            }
        }
        Ok(Self::Hex(digits.to_ascii_lowercase()))
    }

    /// The class-name token for this color, without any concern prefix.
    pub fn token(&self) -> String {
        match self {
            Self::Named(name) => (*name).to_string(),
            Self::Palette(hue, shade) => format!("{}-{shade}", hue.name()),
            Self::Hex(digits) => format!("[#{digits}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_tokens() {
        assert_eq!(Color::WHITE.token(), "white");
        assert_eq!(Color::TRANSPARENT.token(), "transparent");
    }

    #[test]
    fn test_palette_tokens() {
        assert_eq!(Color::BLUE_500.token(), "blue-500");
        assert_eq!(Color::palette(Hue::Fuchsia, 50).token(), "fuchsia-50");
        assert_eq!(Color::palette(Hue::Stone, 950).token(), "stone-950");
    }

    #[test]
    fn test_hex_accepts_valid_lengths() {
        assert_eq!(Color::hex("#abc").unwrap().token(), "[#abc]");
        assert_eq!(Color::hex("abcd").unwrap().token(), "[#abcd]");
        assert_eq!(Color::hex("#1A2B3C").unwrap().token(), "[#1a2b3c]");
        assert_eq!(Color::hex("1a2b3c4d").unwrap().token(), "[#1a2b3c4d]");
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert_eq!(Color::hex("#gg0000"), Err(ColorError::InvalidHexDigit('g')));
        assert_eq!(Color::hex("#ff000"), Err(ColorError::InvalidLength(5)));
        assert_eq!(Color::hex(""), Err(ColorError::InvalidLength(0)));
    }
}
