use crate::core::error::EngineResult;

use super::WorldCore;

/// Advance every active particle, then bake the overlay into the grid.
/// Returns the number of cells the overlay wrote.
pub(super) fn run_particle_pass(world: &mut WorldCore) -> EngineResult<usize> {
    if world.particles.active_count() == 0 {
        return Ok(0);
    }
    world.overlay.clear();
    world.particles.update(&mut world.overlay)?;
    Ok(world.overlay.merge_into(&mut world.grid))
}
