//! UtilityBehavior - producer
//!
//! A producer copies a random touching material into a touching empty cell.

use super::{Behavior, UpdateContext};
use crate::elements::{Material, MaterialId, EL_BACKGROUND, EL_PRODUCER};

/// Neighbors a producer never copies
const NOT_PRODUCIBLE: [MaterialId; 2] = [EL_PRODUCER, EL_BACKGROUND];

pub struct UtilityBehavior;

impl UtilityBehavior {
    pub fn new() -> Self {
        Self
    }

    fn producer(&self, ctx: &mut UpdateContext) {
        if ctx.count_around(EL_PRODUCER) >= 8 {
            return;
        }
        let Some(target) = ctx.bordering_adjacent(EL_BACKGROUND) else {
            return;
        };
        let sources = ctx.grid.find_not_of_types_around(&NOT_PRODUCIBLE, ctx.x, ctx.y);
        if sources.is_empty() {
            return;
        }
        let source = sources.as_slice()[ctx.rng.index(sources.len())];
        let copied = ctx.get(source);
        ctx.set(target, copied);
    }
}

impl Behavior for UtilityBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if ctx.material == Material::Producer {
            self.producer(ctx);
        }
    }
}
