//! Value vocabularies for the style-operation family.
//!
//! Each enum serializes to the token or full class name its concern expects.
//! Vocabularies with an open end (easing curves, animation names) carry a
//! `Custom` escape; operations fall back to the arbitrary-value bracket
//! syntax where no canonical utility token exists.

use phf::phf_map;

/// A width or height request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Spacing-scale units (`w-4`).
    Units(i32),
    /// Fill the parent (`w-full`).
    Full,
    /// Fill the viewport (`h-screen`).
    Screen,
    /// Content-driven (`w-auto`).
    Auto,
}

impl Dimension {
    /// The class for this dimension on an axis (`w` or `h`).
    pub fn class(&self, axis: char) -> String {
        match self {
            Self::Units(n) => format!("{axis}-{n}"),
            Self::Full => format!("{axis}-full"),
            Self::Screen => format!("{axis}-screen"),
            Self::Auto => format!("{axis}-auto"),
        }
    }
}

/// Border line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
    Hidden,
    None,
}

impl LineStyle {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
            Self::Hidden => "hidden",
            Self::None => "none",
        }
    }
}

/// Corner radius steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radius {
    None,
    Sm,
    /// The framework default step, serialized without a suffix (`rounded`).
    Base,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Full,
}

impl Radius {
    pub fn class(&self) -> String {
        match self {
            Self::Base => "rounded".into(),
            Self::None => "rounded-none".into(),
            Self::Sm => "rounded-sm".into(),
            Self::Md => "rounded-md".into(),
            Self::Lg => "rounded-lg".into(),
            Self::Xl => "rounded-xl".into(),
            Self::Xl2 => "rounded-2xl".into(),
            Self::Xl3 => "rounded-3xl".into(),
            Self::Full => "rounded-full".into(),
        }
    }
}

/// Drop-shadow sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowSize {
    Sm,
    /// The framework default step (`shadow`).
    Base,
    Md,
    Lg,
    Xl,
    Xl2,
    Inner,
    None,
}

impl ShadowSize {
    pub fn class(&self) -> String {
        match self {
            Self::Base => "shadow".into(),
            Self::Sm => "shadow-sm".into(),
            Self::Md => "shadow-md".into(),
            Self::Lg => "shadow-lg".into(),
            Self::Xl => "shadow-xl".into(),
            Self::Xl2 => "shadow-2xl".into(),
            Self::Inner => "shadow-inner".into(),
            Self::None => "shadow-none".into(),
        }
    }
}

/// Type-scale steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
    Xl6,
    Xl7,
    Xl8,
    Xl9,
}

impl FontSize {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
            Self::Xl3 => "3xl",
            Self::Xl4 => "4xl",
            Self::Xl5 => "5xl",
            Self::Xl6 => "6xl",
            Self::Xl7 => "7xl",
            Self::Xl8 => "8xl",
            Self::Xl9 => "9xl",
        }
    }
}

/// Font weight steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::ExtraLight => "extralight",
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::SemiBold => "semibold",
            Self::Bold => "bold",
            Self::ExtraBold => "extrabold",
            Self::Black => "black",
        }
    }
}

/// Writing-direction aware text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Start,
    Center,
    End,
    Justify,
}

impl TextAlign {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Justify => "justify",
        }
    }
}

/// Font family groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Serif => "serif",
            Self::Mono => "mono",
        }
    }
}

/// CSS positioning schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionKind {
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl PositionKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }
}

/// Display modes, including `hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    Block,
    InlineBlock,
    Inline,
    Flex,
    InlineFlex,
    Grid,
    Hidden,
}

impl DisplayKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::InlineBlock => "inline-block",
            Self::Inline => "inline",
            Self::Flex => "flex",
            Self::InlineFlex => "inline-flex",
            Self::Grid => "grid",
            Self::Hidden => "hidden",
        }
    }
}

/// Cursor appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKind {
    Auto,
    Default,
    Pointer,
    Wait,
    Text,
    Move,
    NotAllowed,
    Grab,
}

impl CursorKind {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::Wait => "wait",
            Self::Text => "text",
            Self::Move => "move",
            Self::NotAllowed => "not-allowed",
            Self::Grab => "grab",
        }
    }
}

/// Transition timing curves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    In,
    Out,
    InOut,
    /// A raw `transition-timing-function` value (e.g. a cubic-bezier),
    /// emitted via the arbitrary-value escape.
    Custom(String),
}

/// The property group a transition animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionProperty {
    /// The framework default group (`transition`).
    #[default]
    Base,
    All,
    Colors,
    Opacity,
    Shadow,
    Transform,
    None,
}

impl TransitionProperty {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Base => "transition",
            Self::All => "transition-all",
            Self::Colors => "transition-colors",
            Self::Opacity => "transition-opacity",
            Self::Shadow => "transition-shadow",
            Self::Transform => "transition-transform",
            Self::None => "transition-none",
        }
    }
}

/// Built-in keyframe animations plus the custom escape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Animation {
    Spin,
    Ping,
    Pulse,
    Bounce,
    None,
    /// A keyframe name outside the built-in set (`animate-<name>`).
    Custom(String),
}

static BUILT_IN_ANIMATIONS: phf::Map<&'static str, Animation> = phf_map! {
    "spin" => Animation::Spin,
    "ping" => Animation::Ping,
    "pulse" => Animation::Pulse,
    "bounce" => Animation::Bounce,
    "none" => Animation::None,
};

impl Animation {
    /// Resolves a name to a built-in animation, falling back to
    /// [`Custom`](Self::Custom) for unknown names.
    pub fn named(name: &str) -> Self {
        BUILT_IN_ANIMATIONS
            .get(name)
            .cloned()
            .unwrap_or_else(|| Self::Custom(name.to_string()))
    }

    pub fn class(&self) -> String {
        match self {
            Self::Spin => "animate-spin".into(),
            Self::Ping => "animate-ping".into(),
            Self::Pulse => "animate-pulse".into(),
            Self::Bounce => "animate-bounce".into(),
            Self::None => "animate-none".into(),
            Self::Custom(name) => format!("animate-{name}"),
        }
    }
}
