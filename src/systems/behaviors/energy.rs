//! EnergyBehavior - fire and C4
//!
//! Fire draws one roll up front and reuses it for every catch check, so a
//! low roll makes a cell aggressive on all fronts at once.

use super::{Behavior, UpdateContext};
use crate::elements::{
    Material, MaterialId, EL_BACKGROUND, EL_BRANCH, EL_FIRE, EL_FUSE, EL_GLASS, EL_ICE, EL_LEAF, EL_SAND,
    EL_SEED, EL_STEAM, EL_VINE, EL_WATER,
};
use crate::systems::particles::ParticleKind;

/// (fuel, catch threshold) checked in order against the shared roll
const FUEL: [(MaterialId, u8); 5] = [(EL_FUSE, 40), (EL_VINE, 50), (EL_SEED, 25), (EL_LEAF, 25), (EL_BRANCH, 25)];

pub struct EnergyBehavior;

impl EnergyBehavior {
    pub fn new() -> Self {
        Self
    }

    fn fire(&self, ctx: &mut UpdateContext) {
        let roll = ctx.roll();

        if roll < 75 {
            if let Some(water) = ctx.bordering(EL_WATER) {
                ctx.set_self(EL_BACKGROUND);
                ctx.set(water, EL_STEAM);
                return;
            }
        }
        for (fuel, threshold) in FUEL {
            if roll < threshold {
                if let Some(spot) = ctx.bordering_adjacent(fuel) {
                    ctx.set(spot, EL_FIRE);
                    return;
                }
            }
        }
        if roll < 70 {
            if let Some(ice) = ctx.bordering_adjacent(EL_ICE) {
                ctx.set(ice, EL_WATER);
                return;
            }
        }

        if ctx.chance(29) {
            ctx.set_self(EL_BACKGROUND);
        }
        if roll < 39 {
            if let Some(up) = ctx.above(EL_BACKGROUND) {
                ctx.set(up, EL_FIRE);
            }
        }
        if roll < 10 && ctx.bordering_adjacent(EL_SAND).is_some() {
            ctx.set_self(EL_GLASS);
        }
    }

    fn c4(&self, ctx: &mut UpdateContext) {
        if ctx.chance(60) && ctx.bordering(EL_FIRE).is_some() {
            if ctx.spawn_particle(ParticleKind::C4Explosion).is_none() {
                ctx.set_self(EL_FIRE);
            }
        }
    }
}

impl Behavior for EnergyBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        match ctx.material {
            Material::Fire => self.fire(ctx),
            Material::C4 => self.c4(ctx),
            _ => {}
        }
    }
}
