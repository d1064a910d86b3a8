//! Grid store - one flat buffer of cell values
//!
//! Linear index `i = y * width + x`. Every cell always holds a registered
//! material value; background is a material like any other, there is no
//! separate "empty" state. Rule routines mutate the buffer in place while
//! the pass scans it, so a write is visible to every cell visited later in
//! the same tick.

use crate::core::error::{EngineError, EngineResult};
use crate::elements::{MaterialId, EL_BACKGROUND};

mod census;
mod indexing;
mod neighbors;

pub use census::CellList;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    max_x: u32,
    max_y: u32,
    pub cells: Vec<MaterialId>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> EngineResult<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(EngineError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            size,
            max_x: width - 1,
            max_y: height - 1,
            cells: vec![EL_BACKGROUND; size],
        })
    }

    #[inline]
    pub fn get(&self, i: usize) -> MaterialId {
        *fast!(self.cells, [i])
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: MaterialId) {
        fast!(self.cells, [i] = value);
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    /// Move the value at `from` into `to`, leaving background behind.
    #[inline]
    pub fn move_to(&mut self, from: usize, to: usize) {
        let v = self.get(from);
        self.set(to, v);
        self.set(from, EL_BACKGROUND);
    }

    pub fn fill(&mut self, value: MaterialId) {
        self.cells.fill(value);
    }

    pub fn copy_from(&mut self, snapshot: &[MaterialId]) {
        self.cells.copy_from_slice(snapshot);
    }

    pub fn ptr(&self) -> *const MaterialId {
        self.cells.as_ptr()
    }

    pub fn count_of(&self, value: MaterialId) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }
}
