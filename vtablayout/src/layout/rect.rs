use crate::types::Edges;

/// Cell rectangle. Edges saturate at `u16::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Vertical centre line.
    pub const fn center_y(&self) -> u16 {
        self.y.saturating_add(self.height / 2)
    }

    /// The area left after removing `edges` from each side.
    pub fn inset(self, edges: Edges) -> Self {
        Self {
            x: self.x.saturating_add(edges.left),
            y: self.y.saturating_add(edges.top),
            width: self
                .width
                .saturating_sub(edges.left.saturating_add(edges.right)),
            height: self
                .height
                .saturating_sub(edges.top.saturating_add(edges.bottom)),
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        (self.x..self.right()).contains(&x) && (self.y..self.bottom()).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_saturate() {
        let rect = Rect::new(u16::MAX - 2, 40_000, 10, 40_000);
        assert_eq!(rect.right(), u16::MAX);
        assert_eq!(rect.bottom(), u16::MAX);
        assert_eq!(rect.center_y(), 60_000);
    }

    #[test]
    fn test_inset() {
        let rect = Rect::new(2, 3, 10, 4).inset(Edges::left(3));
        assert_eq!(rect, Rect::new(5, 3, 7, 4));
        assert!(Rect::new(0, 0, 2, 2).inset(Edges::right(5)).is_empty());
    }
}
