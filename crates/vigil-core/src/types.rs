//! Fundamental geometry types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned integer rectangle in pixel space.
/// Containment is half-open: `[x, x+w) × [y, y+h)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Rectangle covering `w × h` cells of `cell_w × cell_h` pixels.
    pub fn from_cells(pos: IVec2, w: i32, h: i32, cell_w: i32, cell_h: i32) -> Self {
        Self {
            pos,
            size: IVec2::new(w * cell_w, h * cell_h),
        }
    }

    /// X coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Whether `p` lies inside the rectangle.
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.pos.x && p.x < self.right() && p.y >= self.pos.y && p.y < self.bottom()
    }

    /// Same rectangle moved by `offset`.
    pub fn translated(&self, offset: IVec2) -> Rect {
        Rect {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// Uniform inset by `n` pixels on every edge. Size never goes negative.
    pub fn shrunk(&self, n: i32) -> Rect {
        Rect {
            pos: self.pos + IVec2::splat(n),
            size: (self.size - IVec2::splat(2 * n)).max(IVec2::ZERO),
        }
    }

    /// Whether the rectangle has zero area.
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }
}
