//! Shared primitives for the material routines.
//!
//! Each primitive rolls first (where it has a chance), performs at most one
//! grid mutation, and reports whether it did.

use super::UpdateContext;
use crate::elements::{MaterialId, EL_BACKGROUND, EL_FIRE};
use crate::systems::particles::ParticleKind;

impl<'a> UpdateContext<'a> {
    /// Next value of the random stream, `[0, 100)`
    #[inline]
    pub fn roll(&mut self) -> u8 {
        self.rng.roll()
    }

    /// One roll against a percentage
    #[inline]
    pub fn chance(&mut self, percent: u8) -> bool {
        self.rng.roll() < percent
    }

    #[inline]
    pub fn cell(&self) -> MaterialId {
        self.grid.get(self.i)
    }

    #[inline]
    pub fn set_self(&mut self, value: MaterialId) {
        self.grid.set(self.i, value);
    }

    #[inline]
    pub fn set(&mut self, idx: usize, value: MaterialId) {
        self.grid.set(idx, value);
    }

    #[inline]
    pub fn get(&self, idx: usize) -> MaterialId {
        self.grid.get(idx)
    }

    #[inline]
    pub fn on_bottom_row(&self) -> bool {
        self.y == self.grid.max_y()
    }

    // Neighbor queries anchored at the acting cell.

    #[inline]
    pub fn below(&self, ty: MaterialId) -> Option<usize> {
        self.grid.below(self.y, self.i, ty)
    }

    #[inline]
    pub fn above(&self, ty: MaterialId) -> Option<usize> {
        self.grid.above(self.y, self.i, ty)
    }

    #[inline]
    pub fn adjacent(&mut self, ty: MaterialId) -> Option<usize> {
        self.grid.adjacent(self.x, self.i, ty, self.rng)
    }

    #[inline]
    pub fn below_adjacent(&mut self, ty: MaterialId) -> Option<usize> {
        self.grid.below_adjacent(self.x, self.y, self.i, ty, self.rng)
    }

    #[inline]
    pub fn above_adjacent(&mut self, ty: MaterialId) -> Option<usize> {
        self.grid.above_adjacent(self.x, self.y, self.i, ty, self.rng)
    }

    #[inline]
    pub fn bordering(&mut self, ty: MaterialId) -> Option<usize> {
        self.grid.bordering(self.x, self.y, self.i, ty, self.rng)
    }

    #[inline]
    pub fn bordering_adjacent(&mut self, ty: MaterialId) -> Option<usize> {
        self.grid.bordering_adjacent(self.x, self.y, self.i, ty, self.rng)
    }

    #[inline]
    pub fn count_around(&self, ty: MaterialId) -> usize {
        self.grid.count_around(ty, self.x, self.y)
    }

    /// Resting on the bottom row or on a uniform bed of `ty`. Sinking is
    /// skipped there without spending any rolls.
    #[inline]
    pub fn settled_on(&self, ty: MaterialId) -> bool {
        self.on_bottom_row() || self.grid.uniform_below_adjacent(self.x, self.y, self.i) == Some(ty)
    }

    /// Up, down, left, right; `None` off the grid
    pub fn orthogonal(&self) -> [Option<usize>; 4] {
        let w = self.grid.width() as usize;
        [
            (self.y != 0).then(|| self.i - w),
            (self.y != self.grid.max_y()).then(|| self.i + w),
            (self.x != 0).then(|| self.i - 1),
            (self.x != self.grid.max_x()).then(|| self.i + 1),
        ]
    }

    /// Spawn a particle anchored at the acting cell; `None` when the pool is full.
    pub fn spawn_particle(&mut self, kind: ParticleKind) -> Option<usize> {
        self.particles.spawn(kind, self.x, self.y, self.i, self.rng)
    }

    /// Fall straight down (or also diagonally/sideways with `fall_adjacent`).
    /// On the bottom row the cell falls out of the world.
    pub fn do_gravity(&mut self, fall_adjacent: bool, chance: u8) -> bool {
        if !self.chance(chance) {
            return false;
        }
        if self.on_bottom_row() {
            self.set_self(EL_BACKGROUND);
            return true;
        }
        let dest = if fall_adjacent {
            self.below_adjacent(EL_BACKGROUND).or_else(|| self.adjacent(EL_BACKGROUND))
        } else {
            self.below(EL_BACKGROUND)
        };
        match dest {
            Some(to) => {
                self.grid.move_to(self.i, to);
                true
            }
            None => false,
        }
    }

    /// Swap places with a lighter material below.
    pub fn do_density_sink(&mut self, heavier_than: MaterialId, sink_adjacent: bool, chance: u8) -> bool {
        if !self.chance(chance) {
            return false;
        }
        let dest = if sink_adjacent {
            self.below_adjacent(heavier_than)
        } else {
            self.below(heavier_than)
        };
        match dest {
            Some(to) => {
                self.grid.swap(self.i, to);
                true
            }
            None => false,
        }
    }

    /// Push into a lighter liquid below, else sideways. The mover takes the
    /// found slot and its own slot becomes `heavier_than`.
    pub fn do_density_liquid(&mut self, heavier_than: MaterialId, sink_chance: u8, equalize_chance: u8) -> bool {
        let mut dest = None;
        if self.chance(sink_chance) {
            dest = self.below_adjacent(heavier_than);
        }
        if dest.is_none() && self.chance(equalize_chance) {
            dest = self.adjacent(heavier_than);
        }
        let Some(to) = dest else {
            return false;
        };
        let own = self.cell();
        self.set(to, own);
        self.set_self(heavier_than);
        true
    }

    /// Diffuse upward through gas-permeable materials: straight up, then an
    /// upper diagonal, then sideways where the cell below that side is not
    /// already this gas.
    pub fn do_density_gas(&mut self, chance: u8) -> bool {
        if !self.chance(chance) || self.y == 0 {
            return false;
        }
        let gas = self.cell();
        let w = self.grid.width() as usize;
        let up = self.i - w;
        let up_elem = self.get(up);

        let mut dest = if self.registry.gas_permeable(up_elem) {
            Some(up)
        } else {
            let left_elem = (self.x != 0).then(|| self.get(up - 1));
            let right_elem = (self.x != self.grid.max_x()).then(|| self.get(up + 1));
            let left = match left_elem {
                Some(e) if e != up_elem && self.registry.gas_permeable(e) => Some(up - 1),
                _ => None,
            };
            let right = match right_elem {
                Some(e) if e != up_elem => {
                    let same_as_left = left.is_some() && left_elem == right_elem;
                    (same_as_left || self.registry.gas_permeable(e)).then_some(up + 1)
                }
                _ => None,
            };
            self.rng.pick_valid(left, right)
        };

        if dest.is_none() && self.x != 0 && self.x != self.grid.max_x() && !self.on_bottom_row() {
            let left = self.i - 1;
            let right = self.i + 1;
            if self.registry.gas_permeable(self.get(left)) && self.get(left + w) != gas {
                dest = Some(left);
            } else if self.registry.gas_permeable(self.get(right)) && self.get(right + w) != gas {
                dest = Some(right);
            }
        }

        match dest {
            Some(to) => {
                self.grid.swap(self.i, to);
                true
            }
            None => false,
        }
    }

    /// Buoyant rise into open space. Rising off the top row removes the cell.
    pub fn do_rise(&mut self, chance: u8, adjacent_chance: u8) -> bool {
        let mut dest = None;
        if self.chance(chance) {
            if self.y == 0 {
                self.set_self(EL_BACKGROUND);
                return true;
            }
            dest = self.above_adjacent(EL_BACKGROUND);
        }
        if dest.is_none() && self.chance(adjacent_chance) {
            dest = self.adjacent(EL_BACKGROUND);
        }
        match dest {
            Some(to) => {
                self.grid.move_to(self.i, to);
                true
            }
            None => false,
        }
    }

    /// Turn this cell and a bordering `ty` into `into`.
    pub fn do_transform(&mut self, ty: MaterialId, into: MaterialId, chance: u8) -> bool {
        if self.roll() > chance {
            return false;
        }
        match self.bordering(ty) {
            Some(other) => {
                self.set_self(into);
                self.set(other, into);
                true
            }
            None => false,
        }
    }

    /// Overwrite a bordering `ty` with this cell's material.
    pub fn do_grow(&mut self, ty: MaterialId, chance: u8) -> bool {
        if !self.chance(chance) {
            return false;
        }
        match self.bordering_adjacent(ty) {
            Some(spot) => {
                let own = self.cell();
                self.set(spot, own);
                true
            }
            None => false,
        }
    }

    /// Set fire above, left and right.
    pub fn burn_borders(&mut self) {
        let [up, _, left, right] = self.orthogonal();
        for spot in [up, left, right].into_iter().flatten() {
            self.set(spot, EL_FIRE);
        }
    }

    /// Overwrite every orthogonal neighbor not listed in `immune`.
    pub fn consume_orthogonal(&mut self, immune: &[MaterialId], into: MaterialId) {
        for spot in self.orthogonal().into_iter().flatten() {
            if !immune.contains(&self.get(spot)) {
                self.set(spot, into);
            }
        }
    }
}
