//! PlantBehavior - vine, ice and seed
//!
//! Growth materials spread by overwriting neighbors with themselves; seeds
//! hand off to the tree particle once they land on soil.

use super::{Behavior, UpdateContext};
use crate::elements::{
    Material, EL_BACKGROUND, EL_BRANCH, EL_FIRE, EL_SALT, EL_SALT_WATER, EL_SOIL, EL_VINE, EL_WALL, EL_WATER,
};
use crate::systems::particles::ParticleKind;

pub struct PlantBehavior;

impl PlantBehavior {
    pub fn new() -> Self {
        Self
    }

    fn vine(&self, ctx: &mut UpdateContext) {
        if ctx.roll() >= 20 {
            ctx.do_grow(EL_WATER, 15);
        }

        if ctx.roll() > 3 || ctx.bordering_adjacent(EL_BACKGROUND).is_none() {
            return;
        }
        let spread = if ctx.count_around(EL_WALL) > 0 || ctx.count_around(EL_SOIL) > 0 {
            // anchored: climb freely
            let up = ctx.above_adjacent(EL_BACKGROUND);
            let down = ctx.below_adjacent(EL_BACKGROUND);
            let vertical = ctx.rng.pick_valid(up, down);
            let side = ctx.adjacent(EL_BACKGROUND);
            ctx.rng.pick_valid(vertical, side)
        } else if (ctx.count_around(EL_VINE) < 4 || ctx.count_around(EL_BACKGROUND) > 5)
            && ctx.count_around(EL_FIRE) < 1
        {
            // free-hanging: only sparse tips keep spreading
            let side = ctx.adjacent(EL_BACKGROUND);
            let up = ctx.above_adjacent(EL_BACKGROUND);
            let down = ctx.below_adjacent(EL_BACKGROUND);
            let first = ctx.rng.pick_valid(up, side);
            ctx.rng.pick_valid(first, down)
        } else {
            None
        };
        if let Some(spot) = spread {
            ctx.set(spot, EL_VINE);
        }
    }

    fn ice(&self, ctx: &mut UpdateContext) {
        if ctx.bordering(EL_SALT).is_some() {
            ctx.set_self(EL_WATER);
        }
        if ctx.bordering(EL_SALT_WATER).is_some() {
            ctx.set_self(EL_WATER);
        }
        if ctx.roll() >= 20 {
            ctx.do_grow(EL_WATER, 15);
        }
    }

    fn seed(&self, ctx: &mut UpdateContext) {
        ctx.do_gravity(true, 75);
        if ctx.bordering_adjacent(EL_SOIL).is_none() {
            return;
        }
        if ctx.roll() > 98 {
            if ctx.spawn_particle(ParticleKind::Tree).is_none() {
                ctx.set_self(EL_BRANCH);
            }
        } else {
            ctx.set_self(EL_BACKGROUND);
        }
    }
}

impl Behavior for PlantBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        match ctx.material {
            Material::Vine => self.vine(ctx),
            Material::Ice => self.ice(ctx),
            Material::Seed => self.seed(ctx),
            _ => {}
        }
    }
}
