//! GasBehavior - steam and methane

use super::{Behavior, UpdateContext};
use crate::elements::{Material, EL_BACKGROUND, EL_FIRE, EL_STEAM, EL_WATER};
use crate::systems::particles::ParticleKind;

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }

    fn steam(&self, ctx: &mut UpdateContext) {
        if ctx.do_density_gas(50) {
            return;
        }
        if ctx.do_rise(40, 20) {
            return;
        }

        if ctx.roll() <= 25 && ctx.bordering(EL_WATER).is_some() {
            ctx.set_self(EL_WATER);
        }
        // boxed in: condense
        if ctx.roll() <= 1 && ctx.count_around(EL_BACKGROUND) == 0 {
            ctx.set_self(EL_WATER);
        }
        // under a ceiling with open space below: rain out or dissipate
        if ctx.roll() <= 35 && ctx.above(EL_BACKGROUND).is_none() && ctx.below(EL_BACKGROUND).is_some() {
            let condensed = if ctx.roll() >= 80 { EL_WATER } else { EL_BACKGROUND };
            ctx.set_self(condensed);
        }
        if ctx.roll() <= 1 && ctx.bordering(EL_STEAM).is_some() {
            ctx.set_self(EL_WATER);
        }
    }

    fn methane(&self, ctx: &mut UpdateContext) {
        if ctx.chance(20) && ctx.bordering(EL_FIRE).is_some() {
            if ctx.spawn_particle(ParticleKind::MethaneExplosion).is_none() {
                ctx.set_self(EL_FIRE);
            }
            return;
        }
        ctx.do_rise(25, 75);
        ctx.do_density_gas(50);
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        match ctx.material {
            Material::Steam => self.steam(ctx),
            Material::Methane => self.methane(ctx),
            _ => {}
        }
    }
}
