//! Neighbor queries
//!
//! Every query takes the acting cell's coordinates plus its linear index and
//! answers with the index of a matching neighbor, or `None`. Off-grid
//! neighbors are never a match. When two candidates qualify the tie is broken
//! on the random stream (see `RandStream::pick_valid`), so queries that can
//! tie consume one roll.

use super::*;
use crate::core::random::RandStream;

impl Grid {
    /// Cell directly below
    #[inline]
    pub fn below(&self, y: u32, i: usize, ty: MaterialId) -> Option<usize> {
        if y == self.max_y {
            return None;
        }
        let spot = i + self.width as usize;
        (*fast!(self.cells, [spot]) == ty).then_some(spot)
    }

    /// Cell directly above
    #[inline]
    pub fn above(&self, y: u32, i: usize, ty: MaterialId) -> Option<usize> {
        if y == 0 {
            return None;
        }
        let spot = i - self.width as usize;
        (*fast!(self.cells, [spot]) == ty).then_some(spot)
    }

    /// Left or right neighbor
    #[inline]
    pub fn adjacent(&self, x: u32, i: usize, ty: MaterialId, rng: &mut RandStream) -> Option<usize> {
        let left = (x != 0 && *fast!(self.cells, [i - 1]) == ty).then_some(i.wrapping_sub(1));
        let right = (x != self.max_x && *fast!(self.cells, [i + 1]) == ty).then_some(i + 1);
        rng.pick_valid(left, right)
    }

    /// Straight below first, then the two lower diagonals
    #[inline]
    pub fn below_adjacent(&self, x: u32, y: u32, i: usize, ty: MaterialId, rng: &mut RandStream) -> Option<usize> {
        if y == self.max_y {
            return None;
        }
        let spot = i + self.width as usize;
        if *fast!(self.cells, [spot]) == ty {
            return Some(spot);
        }
        self.diagonals(x, spot, ty, rng)
    }

    /// Straight above first, then the two upper diagonals
    #[inline]
    pub fn above_adjacent(&self, x: u32, y: u32, i: usize, ty: MaterialId, rng: &mut RandStream) -> Option<usize> {
        if y == 0 {
            return None;
        }
        let spot = i - self.width as usize;
        if *fast!(self.cells, [spot]) == ty {
            return Some(spot);
        }
        self.diagonals(x, spot, ty, rng)
    }

    #[inline]
    fn diagonals(&self, x: u32, center: usize, ty: MaterialId, rng: &mut RandStream) -> Option<usize> {
        let left = (x != 0 && *fast!(self.cells, [center - 1]) == ty).then(|| center - 1);
        let right = (x != self.max_x && *fast!(self.cells, [center + 1]) == ty).then_some(center + 1);
        rng.pick_valid(left, right)
    }

    /// Below, then sideways, then above; first hit wins.
    #[inline]
    pub fn bordering(&self, x: u32, y: u32, i: usize, ty: MaterialId, rng: &mut RandStream) -> Option<usize> {
        self.below(y, i, ty)
            .or_else(|| self.adjacent(x, i, ty, rng))
            .or_else(|| self.above(y, i, ty))
    }

    /// `bordering` with diagonals included at the below and above steps
    #[inline]
    pub fn bordering_adjacent(&self, x: u32, y: u32, i: usize, ty: MaterialId, rng: &mut RandStream) -> Option<usize> {
        self.below_adjacent(x, y, i, ty, rng)
            .or_else(|| self.adjacent(x, i, ty, rng))
            .or_else(|| self.above_adjacent(x, y, i, ty, rng))
    }

    /// Material directly below, but only when the in-bounds lower diagonals
    /// hold the same material.
    #[inline]
    pub fn uniform_below_adjacent(&self, x: u32, y: u32, i: usize) -> Option<MaterialId> {
        if y == self.max_y {
            return None;
        }
        let spot = i + self.width as usize;
        let elem = *fast!(self.cells, [spot]);
        if x != 0 && *fast!(self.cells, [spot - 1]) != elem {
            return None;
        }
        if x != self.max_x && *fast!(self.cells, [spot + 1]) != elem {
            return None;
        }
        Some(elem)
    }
}
