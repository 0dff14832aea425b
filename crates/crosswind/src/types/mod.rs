pub mod color;
pub mod edges;
pub mod values;

pub use color::{Color, ColorError, Hue};
pub use edges::Edges;
pub use values::{
    Animation, CursorKind, Dimension, DisplayKind, Easing, FontFamily, FontSize, FontWeight,
    LineStyle, PositionKind, Radius, ShadowSize, TextAlign, TransitionProperty,
};
