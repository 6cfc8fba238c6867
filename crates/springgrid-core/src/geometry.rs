// ABOUTME: Integer geometry used by the layout solvers.
// ABOUTME: Sizes come from the host as preferred sizes; rects are solved positions.

use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Rectangle in pixel coordinates, origin at the top left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width)
    pub fn east(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (y + height)
    pub fn south(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_origin_plus_extent() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.east(), 40);
        assert_eq!(rect.south(), 60);
        assert_eq!(rect.size(), Size::new(30, 40));
    }

    #[test]
    fn edges_saturate() {
        let rect = Rect::new(i32::MAX, 0, 10, 0);
        assert_eq!(rect.east(), i32::MAX);
    }
}
