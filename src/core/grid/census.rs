//! Moore-neighbourhood scans (up to 8 cells, clipped at the grid edge)

use super::*;

const MOORE: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Fixed-capacity list of neighbor indices
#[derive(Clone, Copy, Debug, Default)]
pub struct CellList {
    idx: [usize; 8],
    len: usize,
}

impl CellList {
    #[inline]
    fn push(&mut self, i: usize) {
        self.idx[self.len] = i;
        self.len += 1;
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.idx[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Grid {
    #[inline]
    fn for_each_around(&self, x: u32, y: u32, mut f: impl FnMut(usize)) {
        let xi = x as i32;
        let yi = y as i32;
        for (dx, dy) in MOORE {
            let nx = xi + dx;
            let ny = yi + dy;
            if self.in_bounds(nx, ny) {
                f(self.index(nx as u32, ny as u32));
            }
        }
    }

    /// Number of Moore neighbors holding `ty`
    pub fn count_around(&self, ty: MaterialId, x: u32, y: u32) -> usize {
        let mut count = 0;
        self.for_each_around(x, y, |n| {
            if *fast!(self.cells, [n]) == ty {
                count += 1;
            }
        });
        count
    }

    /// Moore neighbors holding none of `types`
    pub fn find_not_of_types_around(&self, types: &[MaterialId], x: u32, y: u32) -> CellList {
        let mut out = CellList::default();
        self.for_each_around(x, y, |n| {
            if !types.contains(fast!(self.cells, [n])) {
                out.push(n);
            }
        });
        out
    }
}
