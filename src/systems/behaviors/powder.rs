//! PowderBehavior - sand, salt, soil, mud, pumice
//!
//! Powders fall and sink through lighter liquids. A powder resting on a
//! uniform bed of itself skips the sinking checks entirely.

use super::{Behavior, UpdateContext};
use crate::elements::{
    Material, EL_LAVA, EL_MUD, EL_OIL, EL_PUMICE, EL_SALT_WATER, EL_SAND, EL_SOIL, EL_WATER,
};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    fn sand(&self, ctx: &mut UpdateContext) {
        if !ctx.settled_on(EL_SAND) {
            ctx.do_density_sink(EL_WATER, true, 25);
            ctx.do_density_sink(EL_SALT_WATER, true, 25);
            ctx.do_density_sink(EL_OIL, true, 25);
        }
        ctx.do_gravity(true, 70);
    }

    fn salt(&self, ctx: &mut UpdateContext) {
        ctx.do_gravity(true, 90);
        ctx.do_transform(EL_WATER, EL_SALT_WATER, 90);
        ctx.do_density_sink(EL_SALT_WATER, true, 70);
        ctx.do_density_sink(EL_OIL, true, 70);
    }

    fn soil(&self, ctx: &mut UpdateContext) {
        ctx.do_gravity(false, 99);
        if !ctx.settled_on(EL_SOIL) {
            ctx.do_density_sink(EL_WATER, false, 90);
            ctx.do_density_sink(EL_SALT_WATER, false, 90);
            ctx.do_density_sink(EL_OIL, false, 90);
        }
        // wet soil turns to mud
        if ctx.chance(20) && ctx.bordering(EL_WATER).is_some() {
            ctx.set_self(EL_MUD);
        }
    }

    fn mud(&self, ctx: &mut UpdateContext) {
        // dries out away from water
        if ctx.chance(5) && ctx.bordering(EL_WATER).is_none() {
            ctx.set_self(EL_SOIL);
        }
        if !ctx.settled_on(EL_MUD) {
            ctx.do_density_sink(EL_WATER, true, 90);
            ctx.do_density_sink(EL_SALT_WATER, true, 90);
            ctx.do_density_sink(EL_OIL, true, 90);
        }
        ctx.do_gravity(true, 90);
    }

    fn pumice(&self, ctx: &mut UpdateContext) {
        if !ctx.settled_on(EL_PUMICE) {
            ctx.do_density_sink(EL_WATER, false, 95);
            ctx.do_density_sink(EL_OIL, false, 95);
            ctx.do_density_sink(EL_SALT_WATER, false, 95);
            ctx.do_density_sink(EL_LAVA, false, 15);
        }
        ctx.do_gravity(false, 99);
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        match ctx.material {
            Material::Sand => self.sand(ctx),
            Material::Salt => self.salt(ctx),
            Material::Soil => self.soil(ctx),
            Material::Mud => self.mud(ctx),
            Material::Pumice => self.pumice(ctx),
            _ => {}
        }
    }
}
