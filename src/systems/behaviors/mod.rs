//! Behaviors - per-material cell rules
//!
//! Each category handles its materials in one `Behavior` impl. Routines see
//! the grid through `UpdateContext`, mutate it in place, and draw every
//! probability from the shared random stream in a fixed textual order: the
//! order of rolls below is part of the simulation's observable behavior.

mod common;
mod energy;
mod gas;
mod liquid;
mod plant;
mod powder;
mod utility;

pub use energy::EnergyBehavior;
pub use gas::GasBehavior;
pub use liquid::LiquidBehavior;
pub use plant::PlantBehavior;
pub use powder::PowderBehavior;
pub use utility::UtilityBehavior;

use crate::core::grid::Grid;
use crate::core::random::RandStream;
use crate::domain::registry::MaterialRegistry;
use crate::elements::{Category, Material};
use crate::systems::particles::ParticlePool;

/// Everything a routine may touch while updating cell `i` at `(x, y)`
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub registry: &'a MaterialRegistry,
    pub particles: &'a mut ParticlePool,
    pub rng: &'a mut RandStream,
    pub material: Material,
    pub x: u32,
    pub y: u32,
    pub i: usize,
}

/// Behavior trait - each category implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by category
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
    energy: EnergyBehavior,
    plant: PlantBehavior,
    utility: UtilityBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
            energy: EnergyBehavior::new(),
            plant: PlantBehavior::new(),
            utility: UtilityBehavior::new(),
        }
    }

    #[inline]
    pub fn update(&self, ctx: &mut UpdateContext) {
        match ctx.material.category() {
            Category::Powder => self.powder.update(ctx),
            Category::Liquid => self.liquid.update(ctx),
            Category::Gas => self.gas.update(ctx),
            Category::Energy => self.energy.update(ctx),
            Category::Growth => self.plant.update(ctx),
            Category::Utility => self.utility.update(ctx),
            Category::Inert => {}
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Bench;
    use crate::elements::*;

    #[test]
    fn inert_materials_never_change() {
        let inert = [EL_WALL, EL_FUSE, EL_GLASS, EL_LEAF, EL_BRANCH];
        for m in inert {
            let mut b = Bench::new(&[&[m], &[EL_BACKGROUND]], 0);
            b.run(0, 0);
            assert_eq!(b.grid.cells, vec![m, EL_BACKGROUND]);
            assert_eq!(b.rng.cursor(), 0);
        }
    }

    #[test]
    fn every_material_has_a_category_routine() {
        // running every material on a busy grid must never panic
        let rows: Vec<Vec<MaterialId>> = MATERIAL_DATA
            .chunks(6)
            .map(|c| c.iter().map(|d| d.color).collect())
            .collect();
        let refs: Vec<&[MaterialId]> = rows.iter().map(|r| r.as_slice()).collect();
        let mut b = Bench::new(&refs, 0);
        for y in 0..4 {
            for x in 0..6 {
                if b.at(x, y) != EL_BACKGROUND {
                    b.run(x, y);
                }
            }
        }
        assert!(b.grid.cells.iter().all(|&c| b.registry.is_registered(c)));
    }
}
