use crate::core::error::{EngineError, EngineResult};
use crate::elements::{MaterialId, EL_BACKGROUND};

use super::WorldCore;

fn require_material(world: &WorldCore, material: MaterialId) -> EngineResult<()> {
    if world.registry.is_registered(material) {
        Ok(())
    } else {
        Err(EngineError::UnknownMaterial(material))
    }
}

/// Paint a round-capped stroke of radius `pen_size` from `(x0, y0)` to
/// `(x1, y1)`. Occupied cells are kept unless `overwrite` is set or the
/// painted material is the background (the eraser). Returns cells written.
pub(super) fn paint_stroke(
    world: &mut WorldCore,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    material: MaterialId,
    pen_size: u32,
    overwrite: bool,
) -> EngineResult<usize> {
    require_material(world, material)?;
    let force = overwrite || material == EL_BACKGROUND;

    // a zero-size pen still covers the cell under it
    let radius = (pen_size as f64).max(0.5);
    let r = radius.ceil() as i64;
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    let max_x = world.grid.max_x() as i64;
    let max_y = world.grid.max_y() as i64;
    let bx0 = (x0.min(x1) - r).max(0);
    let bx1 = (x0.max(x1) + r).min(max_x);
    let by0 = (y0.min(y1) - r).max(0);
    let by1 = (y0.max(y1) + r).min(max_y);

    // segment math in f64: host endpoints may span the whole i32 range
    let (fx0, fy0) = (x0 as f64, y0 as f64);
    let (dx, dy) = ((x1 - x0) as f64, (y1 - y0) as f64);
    let len2 = dx * dx + dy * dy;
    let r2 = radius * radius;
    let mut written = 0;
    for y in by0..=by1 {
        for x in bx0..=bx1 {
            let (px, py) = (x as f64, y as f64);
            let t = if len2 > 0.0 {
                (((px - fx0) * dx + (py - fy0) * dy) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let ex = fx0 + t * dx - px;
            let ey = fy0 + t * dy - py;
            if ex * ex + ey * ey > r2 {
                continue;
            }
            let i = world.grid.index(x as u32, y as u32);
            if force || world.grid.get(i) == EL_BACKGROUND {
                world.grid.set(i, material);
                written += 1;
            }
        }
    }
    Ok(written)
}

pub(super) fn set_cell(world: &mut WorldCore, x: u32, y: u32, material: MaterialId) -> EngineResult<bool> {
    require_material(world, material)?;
    if x >= world.grid.width() || y >= world.grid.height() {
        return Ok(false);
    }
    let i = world.grid.index(x, y);
    world.grid.set(i, material);
    Ok(true)
}

pub(super) fn cell_at(world: &WorldCore, x: u32, y: u32) -> Option<MaterialId> {
    if x >= world.grid.width() || y >= world.grid.height() {
        return None;
    }
    Some(world.grid.get(world.grid.index(x, y)))
}

pub(super) fn fill(world: &mut WorldCore, material: MaterialId) -> EngineResult<()> {
    require_material(world, material)?;
    world.grid.fill(material);
    Ok(())
}

/// Drop every particle and reset the grid to background.
pub(super) fn clear(world: &mut WorldCore) {
    world.particles.deactivate_all();
    world.grid.fill(EL_BACKGROUND);
    tracing::debug!("world cleared");
}

pub(super) fn save(world: &mut WorldCore) {
    match &mut world.saved {
        Some(snapshot) => snapshot.copy_from_slice(&world.grid.cells),
        None => world.saved = Some(world.grid.cells.clone()),
    }
    tracing::debug!(cells = world.grid.size(), "grid saved");
}

/// Restore the last save. Particles in flight are dropped so they cannot
/// paint over the restored grid. `false` when nothing was saved.
pub(super) fn load(world: &mut WorldCore) -> bool {
    let Some(snapshot) = world.saved.as_deref() else {
        return false;
    };
    world.particles.deactivate_all();
    world.grid.copy_from(snapshot);
    tracing::debug!("grid restored from save");
    true
}

pub(super) fn has_save(world: &WorldCore) -> bool {
    world.saved.is_some()
}
