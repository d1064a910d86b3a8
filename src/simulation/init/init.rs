use crate::core::error::EngineResult;
use crate::core::grid::Grid;
use crate::core::random::RandStream;
use crate::domain::registry::MaterialRegistry;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::particles::overlay::Overlay;
use crate::systems::particles::ParticlePool;

use super::cellular::DispatchCache;
use super::perf_stats::PerfStats;
use super::scheduler::FrameScheduler;
use super::settings::EngineSettings;
use super::tick_rate::TickRate;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, settings: EngineSettings) -> EngineResult<WorldCore> {
    settings.validate()?;
    let grid = Grid::new(width, height)?;
    let registry = MaterialRegistry::standard()?;
    let seed = settings.rng_seed.unwrap_or_else(clock_seed);

    tracing::debug!(width, height, seed, fps = settings.fps, "world created");

    Ok(WorldCore {
        registry,
        behaviors: BehaviorRegistry::new(),
        overlay: Overlay::new(width, height),
        particles: ParticlePool::new(settings.particle_capacity),
        rng: RandStream::new(seed),
        dispatch: DispatchCache::new(),
        saved: None,
        scheduler: FrameScheduler::new(&settings),
        tick_rate: TickRate::default(),
        ticks: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        grid,
        settings,
    })
}

fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed)
    }
}
