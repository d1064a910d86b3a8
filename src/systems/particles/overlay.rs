//! Particle overlay - per-tick scratch raster the size of the grid
//!
//! Particles draw into it; at the end of the particle pass every pixel that
//! holds a paintable color is copied into the grid.

use crate::core::grid::Grid;
use crate::elements::{MaterialId, EL_BRANCH, EL_FIRE, EL_LEAF};

/// Transparent sentinel. Every material is opaque, so this never collides.
pub const OVERLAY_CLEAR: u32 = 0x0000_0000;

/// Colors a particle may stamp into the grid
pub const PAINTABLE_COLORS: [MaterialId; 3] = [EL_FIRE, EL_BRANCH, EL_LEAF];

#[inline]
pub fn is_paintable(color: MaterialId) -> bool {
    PAINTABLE_COLORS.contains(&color)
}

pub struct Overlay {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Overlay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![OVERLAY_CLEAR; width as usize * height as usize],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(OVERLAY_CLEAR);
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Clipped pixel range covering `[lo, hi]` on one axis
    #[inline]
    fn span(lo: f32, hi: f32, limit: u32) -> Option<(u32, u32)> {
        let start = lo.floor().max(0.0);
        let end = hi.ceil().min(limit as f32);
        if end <= start {
            return None;
        }
        Some((start as u32, end as u32))
    }

    /// Filled disc; a pixel is covered when its center lies inside.
    pub fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32, color: u32) {
        if radius <= 0.0 {
            return;
        }
        let Some((x0, x1)) = Self::span(cx - radius, cx + radius, self.width) else { return };
        let Some((y0, y1)) = Self::span(cy - radius, cy + radius, self.height) else { return };
        let r2 = radius * radius;
        for py in y0..y1 {
            let dy = py as f32 + 0.5 - cy;
            let row = py as usize * self.width as usize;
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r2 {
                    self.pixels[row + px as usize] = color;
                }
            }
        }
    }

    /// Thick line with round caps: every pixel whose center is within
    /// `width / 2` of the segment.
    pub fn stroke_segment(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: u32) {
        let half = (width * 0.5).max(0.5);
        let Some((bx0, bx1)) = Self::span(x0.min(x1) - half, x0.max(x1) + half, self.width) else { return };
        let Some((by0, by1)) = Self::span(y0.min(y1) - half, y0.max(y1) + half, self.height) else { return };

        let (dx, dy) = (x1 - x0, y1 - y0);
        let len2 = dx * dx + dy * dy;
        let half2 = half * half;
        for py in by0..by1 {
            let cy = py as f32 + 0.5;
            let row = py as usize * self.width as usize;
            for px in bx0..bx1 {
                let cx = px as f32 + 0.5;
                let t = if len2 > 0.0 {
                    (((cx - x0) * dx + (cy - y0) * dy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let ex = x0 + t * dx - cx;
                let ey = y0 + t * dy - cy;
                if ex * ex + ey * ey <= half2 {
                    self.pixels[row + px as usize] = color;
                }
            }
        }
    }

    /// Copy paintable pixels into the grid, overwriting what is there.
    /// Returns how many cells were written.
    pub fn merge_into(&self, grid: &mut Grid) -> usize {
        debug_assert_eq!(self.pixels.len(), grid.size());
        let mut written = 0;
        for (i, &color) in self.pixels.iter().enumerate() {
            if color != OVERLAY_CLEAR && is_paintable(color) {
                grid.set(i, color);
                written += 1;
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{EL_BACKGROUND, EL_SAND, EL_WATER};

    #[test]
    fn disc_is_clipped_to_the_raster() {
        let mut o = Overlay::new(8, 8);
        o.fill_disc(0.5, 0.5, 3.0, EL_FIRE);
        assert_eq!(o.get(0, 0), EL_FIRE);
        assert_eq!(o.get(2, 0), EL_FIRE);
        assert_eq!(o.get(3, 3), OVERLAY_CLEAR);
        assert_eq!(o.get(7, 7), OVERLAY_CLEAR);
    }

    #[test]
    fn stroke_covers_both_endpoints() {
        let mut o = Overlay::new(16, 16);
        o.stroke_segment(2.5, 8.5, 12.5, 8.5, 2.0, EL_BRANCH);
        assert_eq!(o.get(2, 8), EL_BRANCH);
        assert_eq!(o.get(7, 8), EL_BRANCH);
        assert_eq!(o.get(12, 8), EL_BRANCH);
        assert_eq!(o.get(7, 12), OVERLAY_CLEAR);
    }

    #[test]
    fn merge_only_writes_paintable_colors() {
        let mut grid = Grid::new(4, 1).unwrap();
        grid.cells = vec![EL_SAND, EL_SAND, EL_BACKGROUND, EL_SAND];
        let mut o = Overlay::new(4, 1);
        o.pixels = vec![EL_FIRE, EL_WATER, EL_LEAF, OVERLAY_CLEAR];
        assert_eq!(o.merge_into(&mut grid), 2);
        assert_eq!(grid.cells, vec![EL_FIRE, EL_SAND, EL_LEAF, EL_SAND]);
    }
}
