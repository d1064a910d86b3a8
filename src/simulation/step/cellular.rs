//! Cellular pass - one in-place sweep over the grid per tick
//!
//! Rows go bottom to top. Horizontal direction alternates per row and the
//! bottom row is always walked right to left. Routines see writes made
//! earlier in the same sweep, so this order is observable.

use crate::core::error::{EngineError, EngineResult};
use crate::elements::{Material, MaterialId, EL_BACKGROUND};
use crate::domain::registry::MaterialRegistry;
use crate::systems::behaviors::UpdateContext;

use super::WorldCore;

pub(crate) const DISPATCH_CACHE_CAPACITY: usize = 100;

/// Boustrophedon walk yielding `(x, y, index)`.
pub struct ScanOrder {
    width: u32,
    /// Row parity that is walked right to left
    reversed_parity: u32,
    row: Option<u32>,
    step: u32,
}

impl ScanOrder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            reversed_parity: height.wrapping_sub(1) & 1,
            row: (width > 0).then(|| height.checked_sub(1)).flatten(),
            step: 0,
        }
    }
}

impl Iterator for ScanOrder {
    type Item = (u32, u32, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let y = self.row?;
        let x = if y & 1 == self.reversed_parity { self.width - 1 - self.step } else { self.step };
        self.step += 1;
        if self.step == self.width {
            self.step = 0;
            self.row = y.checked_sub(1);
        }
        Some((x, y, y as usize * self.width as usize + x as usize))
    }
}

/// Memo of material lookups: a last-used slot in front of a small LRU.
/// Only saves registry lookups; the resolved material is always the
/// registry's answer.
pub(crate) struct DispatchCache {
    last: Option<(MaterialId, Material)>,
    recent: Vec<(MaterialId, Material)>,
}

impl DispatchCache {
    pub(crate) fn new() -> Self {
        Self { last: None, recent: Vec::with_capacity(DISPATCH_CACHE_CAPACITY) }
    }

    pub(crate) fn resolve(&mut self, registry: &MaterialRegistry, id: MaterialId) -> Option<Material> {
        if let Some((last_id, material)) = self.last {
            if last_id == id {
                return Some(material);
            }
        }
        let material = match self.recent.iter().position(|&(k, _)| k == id) {
            Some(pos) => {
                let entry = self.recent.remove(pos);
                self.recent.push(entry);
                entry.1
            }
            None => {
                let material = registry.resolve(id)?;
                if self.recent.len() == DISPATCH_CACHE_CAPACITY {
                    self.recent.remove(0);
                }
                self.recent.push((id, material));
                material
            }
        };
        self.last = Some((id, material));
        Some(material)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.recent.len()
    }
}

/// Sweep the grid once. Returns how many cells were dispatched.
pub(super) fn run_cellular_pass(world: &mut WorldCore) -> EngineResult<u32> {
    let WorldCore { grid, registry, behaviors, particles, rng, dispatch, .. } = world;
    let mut dispatched = 0u32;

    for (x, y, i) in ScanOrder::new(grid.width(), grid.height()) {
        let value = grid.get(i);
        if value == EL_BACKGROUND {
            continue;
        }
        let Some(material) = dispatch.resolve(registry, value) else {
            let err = EngineError::UnregisteredMaterial { value, index: i };
            tracing::error!(%err, x, y, "cellular pass aborted");
            return Err(err);
        };
        let mut ctx = UpdateContext {
            grid: &mut *grid,
            registry: &*registry,
            particles: &mut *particles,
            rng: &mut *rng,
            material,
            x,
            y,
            i,
        };
        behaviors.update(&mut ctx);
        dispatched += 1;
    }

    Ok(dispatched)
}
