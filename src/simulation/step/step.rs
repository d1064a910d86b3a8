use crate::core::error::EngineResult;

use super::cellular::run_cellular_pass;
use super::particles::run_particle_pass;
use super::perf_timer::now_ms;
use super::{PerfTimer, WorldCore};

/// One simulated tick: particles first, then the cellular sweep.
pub(super) fn tick(world: &mut WorldCore) -> EngineResult<()> {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset_tick();
        world.perf_stats.active_particles = world.particles.active_count() as u32;
    }
    let tick_start = perf_on.then(PerfTimer::start);

    if perf_on {
        let t0 = PerfTimer::start();
        run_particle_pass(world)?;
        world.perf_stats.particle_ms = t0.elapsed_ms();
    } else {
        run_particle_pass(world)?;
    }

    if perf_on {
        let t0 = PerfTimer::start();
        let dispatched = run_cellular_pass(world)?;
        world.perf_stats.cellular_ms = t0.elapsed_ms();
        world.perf_stats.cells_dispatched = dispatched;
    } else {
        run_cellular_pass(world)?;
    }

    if let Some(t) = tick_start {
        world.perf_stats.tick_ms = t.elapsed_ms();
    }
    world.ticks += 1;
    world.tick_rate.record(now_ms());
    Ok(())
}

/// Host frame callback: run as many ticks as the scheduler owes.
pub(super) fn frame(world: &mut WorldCore, now: f64) -> EngineResult<u32> {
    let mut scheduler = std::mem::take(&mut world.scheduler);
    let ran = scheduler.advance(now, || tick(world));
    world.scheduler = scheduler;
    let ran = ran?;
    world.perf_stats.ticks_last_frame = ran;
    Ok(ran)
}
