mod color;
mod edges;
mod enums;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{IndicatorGravity, IndicatorMotion, TabMode, TextStyle};
