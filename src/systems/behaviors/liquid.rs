//! LiquidBehavior - water, salt water, oil, acid, lava

use super::{Behavior, UpdateContext};
use crate::elements::{
    Material, MaterialId, EL_ACID, EL_BACKGROUND, EL_FIRE, EL_GLASS, EL_LAVA, EL_OIL, EL_PUMICE,
    EL_SALT_WATER, EL_SAND, EL_STEAM, EL_WALL, EL_WATER,
};

/// Materials acid cannot eat
const ACID_IMMUNE: [MaterialId; 5] = [EL_GLASS, EL_BACKGROUND, EL_FIRE, EL_LAVA, EL_ACID];

/// Materials lava does not set alight
const LAVA_IMMUNE: [MaterialId; 8] = [
    EL_BACKGROUND,
    EL_LAVA,
    EL_FIRE,
    EL_WATER,
    EL_SALT_WATER,
    EL_STEAM,
    EL_PUMICE,
    EL_GLASS,
];

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    fn water(&self, ctx: &mut UpdateContext) {
        ctx.do_gravity(true, 95);
        ctx.do_density_liquid(EL_OIL, 70, 80);
    }

    fn salt_water(&self, ctx: &mut UpdateContext) {
        ctx.do_gravity(true, 70);
        ctx.do_density_liquid(EL_WATER, 60, 40);
        ctx.do_density_liquid(EL_OIL, 60, 40);
    }

    fn oil(&self, ctx: &mut UpdateContext) {
        ctx.do_gravity(true, 90);
        if ctx.chance(50) && ctx.bordering(EL_FIRE).is_some() {
            ctx.burn_borders();
        }
    }

    fn acid(&self, ctx: &mut UpdateContext) {
        ctx.do_gravity(true, 60);
        ctx.do_density_sink(EL_WATER, true, 10);
        ctx.do_density_sink(EL_OIL, true, 10);
        ctx.do_density_sink(EL_SALT_WATER, true, 10);
        ctx.do_density_sink(EL_LAVA, true, 10);
        if ctx.chance(25) {
            ctx.consume_orthogonal(&ACID_IMMUNE, EL_BACKGROUND);
        }
    }

    fn lava(&self, ctx: &mut UpdateContext) {
        // melts walls
        if ctx.chance(1) {
            if let Some(wall) = ctx.bordering_adjacent(EL_WALL) {
                ctx.set(wall, EL_LAVA);
            }
        }
        // quenched: water boils off, lava cools to pumice
        let water = ctx.bordering(EL_WATER).or_else(|| ctx.bordering(EL_SALT_WATER));
        if let Some(water) = water {
            ctx.set(water, EL_STEAM);
            ctx.set_self(EL_PUMICE);
        }
        if ctx.chance(25) {
            ctx.consume_orthogonal(&LAVA_IMMUNE, EL_FIRE);
        }
        if ctx.chance(6) {
            if let Some(up) = ctx.above(EL_BACKGROUND) {
                ctx.set(up, EL_FIRE);
            }
        }
        if ctx.chance(10) && ctx.bordering_adjacent(EL_SAND).is_some() {
            ctx.set_self(EL_GLASS);
        }
        ctx.do_gravity(true, 90);
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        match ctx.material {
            Material::Water => self.water(ctx),
            Material::SaltWater => self.salt_water(ctx),
            Material::Oil => self.oil(ctx),
            Material::Acid => self.acid(ctx),
            Material::Lava => self.lava(ctx),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Bench;
    use crate::elements::*;

    const B: MaterialId = EL_BACKGROUND;

    #[test]
    fn water_falls() {
        let mut b = Bench::new(&[&[EL_WATER], &[B]], 0);
        b.run(0, 0);
        assert_eq!(b.grid.cells, vec![B, EL_WATER]);
    }

    #[test]
    fn water_displaces_oil_below() {
        let mut b = Bench::new(&[&[EL_WATER], &[EL_OIL]], 0);
        b.run(0, 0);
        assert_eq!(b.grid.cells, vec![EL_OIL, EL_WATER]);
    }

    #[test]
    fn oil_next_to_fire_burns_up_and_sideways() {
        let mut b = Bench::new(
            &[&[EL_WALL, EL_WALL, EL_WALL], &[EL_WALL, EL_OIL, EL_WALL], &[EL_WALL, EL_FIRE, EL_WALL]],
            0,
        );
        b.run(1, 1);
        assert_eq!(b.at(1, 0), EL_FIRE);
        assert_eq!(b.at(0, 1), EL_FIRE);
        assert_eq!(b.at(2, 1), EL_FIRE);
    }

    #[test]
    fn acid_dissolves_neighbors_but_not_glass() {
        let mut b = Bench::new(
            &[&[EL_WALL, EL_SAND, EL_WALL], &[EL_GLASS, EL_ACID, EL_WATER], &[EL_WALL, EL_GLASS, EL_WALL]],
            0,
        );
        b.run(1, 1);
        assert_eq!(b.at(1, 0), B);
        assert_eq!(b.at(2, 1), B);
        assert_eq!(b.at(0, 1), EL_GLASS);
        assert_eq!(b.at(1, 2), EL_GLASS);
    }

    #[test]
    fn lava_meeting_salt_water_makes_pumice_and_steam() {
        let mut b = Bench::new(&[&[EL_GLASS, EL_GLASS], &[EL_LAVA, EL_SALT_WATER], &[EL_GLASS, EL_GLASS]], 99);
        b.run(0, 1);
        assert_eq!(b.at(0, 1), EL_PUMICE);
        assert_eq!(b.at(1, 1), EL_STEAM);
    }

    #[test]
    fn lava_ignites_flammable_neighbors() {
        let mut b = Bench::new(&[&[EL_WALL, EL_OIL, EL_WALL], &[EL_GLASS, EL_LAVA, EL_VINE], &[EL_WALL, EL_WALL, EL_WALL]], 0);
        b.run(1, 1);
        assert_eq!(b.at(1, 0), EL_FIRE);
        assert_eq!(b.at(2, 1), EL_FIRE);
        assert_eq!(b.at(0, 1), EL_GLASS);
    }
}
