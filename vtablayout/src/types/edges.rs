/// Space kept clear on each side of a rectangle.
///
/// The strip reserves one side for the indicator; tabs use `top` as the gap
/// before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const NONE: Edges = Edges {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const fn top(top: u16) -> Self {
        Self { top, ..Self::NONE }
    }

    pub const fn right(right: u16) -> Self {
        Self { right, ..Self::NONE }
    }

    pub const fn left(left: u16) -> Self {
        Self { left, ..Self::NONE }
    }
}
