//! In-memory indexed-color pixel surfaces.
//!
//! Palette index 0 is transparent: blits skip it, and `clear` resets to it.

use glam::IVec2;

use vigil_core::constants::TRANSPARENT;
use vigil_core::types::Rect;

/// An 8-bit indexed pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

impl Surface {
    /// New surface filled with the transparent index.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width: width.max(0),
            height: height.max(0),
            pixels: vec![TRANSPARENT; len],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Reset every pixel to the transparent index.
    pub fn clear(&mut self) {
        self.pixels.fill(TRANSPARENT);
    }

    /// Pixel at (x, y), or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Set a pixel. Out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Fill a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, rect: &Rect, color: u8) {
        let x0 = rect.pos.x.max(0);
        let y0 = rect.pos.y.max(0);
        let x1 = rect.right().min(self.width);
        let y1 = rect.bottom().min(self.height);
        for y in y0..y1 {
            let row = (y * self.width) as usize;
            for x in x0..x1 {
                self.pixels[row + x as usize] = color;
            }
        }
    }

    /// Copy this surface onto `target` at `offset`, skipping transparent
    /// pixels and clipping at the target edges.
    pub fn blit_onto(&self, target: &mut Surface, offset: IVec2) {
        for y in 0..self.height {
            for x in 0..self.width {
                let color = self.pixels[(y * self.width + x) as usize];
                if color == TRANSPARENT {
                    continue;
                }
                target.set_pixel(offset.x + x, offset.y + y, color);
            }
        }
    }
}

/// A fixed set of sprite frames sharing one palette.
#[derive(Debug, Clone, Default)]
pub struct SurfaceSet {
    frames: Vec<Surface>,
}

impl SurfaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: Vec<Surface>) -> Self {
        Self { frames }
    }

    pub fn push_frame(&mut self, frame: Surface) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame by index, or `None` when the sheet has no such sprite.
    pub fn frame(&self, index: usize) -> Option<&Surface> {
        self.frames.get(index)
    }
}
