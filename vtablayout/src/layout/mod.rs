mod container;
mod mode;
mod rect;

pub use container::{Slot, StripContainer};
pub use mode::{LayoutModeStrategy, MainSize, TabLayoutParams};
pub use rect::Rect;
