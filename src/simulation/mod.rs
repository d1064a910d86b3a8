//! World - the simulation context
//!
//! `WorldCore` owns every piece of mutable state (grid, overlay, particle
//! pool, random stream, dispatch cache, scheduler) and is threaded through
//! the passes explicitly. Each tick runs the particle pass, then the
//! cellular pass. `World` in `facade` is the wasm-facing wrapper.

use crate::core::error::EngineResult;
use crate::core::grid::Grid;
use crate::core::random::RandStream;
use crate::domain::registry::MaterialRegistry;
use crate::elements::MaterialId;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::particles::overlay::Overlay;
use crate::systems::particles::{ParticleKind, ParticlePool};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "perf/tick_rate.rs"]
mod tick_rate;
#[path = "step/cellular.rs"]
mod cellular;
#[path = "step/particles.rs"]
mod particles;
#[path = "step/scheduler.rs"]
mod scheduler;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use cellular::ScanOrder;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use settings::{EngineSettings, MAX_FPS};

use cellular::DispatchCache;
use perf_timer::PerfTimer;
use scheduler::FrameScheduler;
use tick_rate::TickRate;

/// The simulation world
pub struct WorldCore {
    registry: MaterialRegistry,
    behaviors: BehaviorRegistry,
    grid: Grid,
    overlay: Overlay,
    particles: ParticlePool,
    rng: RandStream,
    dispatch: DispatchCache,
    saved: Option<Vec<MaterialId>>,
    settings: EngineSettings,
    scheduler: FrameScheduler,
    tick_rate: TickRate,
    ticks: u64,
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// World of background cells with default settings
    pub fn new(width: u32, height: u32) -> EngineResult<Self> {
        init::create_world_core(width, height, EngineSettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: EngineSettings) -> EngineResult<Self> {
        init::create_world_core(width, height, settings)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Ticks completed since creation
    pub fn tick_count(&self) -> u64 { self.ticks }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn registry(&self) -> &MaterialRegistry { &self.registry }

    pub fn particles(&self) -> &ParticlePool { &self.particles }

    pub fn settings(&self) -> &EngineSettings { &self.settings }

    pub fn active_particles(&self) -> usize { self.particles.active_count() }

    // === SIMULATION ===

    /// Advance exactly one tick, regardless of the scheduler.
    pub fn tick(&mut self) -> EngineResult<()> {
        step::tick(self)
    }

    /// Host frame callback with a millisecond timestamp. Returns the number
    /// of ticks run.
    pub fn frame(&mut self, now_ms: f64) -> EngineResult<u32> {
        step::frame(self, now_ms)
    }

    /// Target ticks per second; 0 pauses `frame`.
    pub fn set_fps(&mut self, fps: u32) -> EngineResult<()> {
        settings::set_fps(self, fps)
    }

    pub fn fps(&self) -> u32 { self.scheduler.fps() }

    /// Place a particle directly, bypassing material rules.
    pub fn spawn_particle(&mut self, kind: ParticleKind, x: u32, y: u32) -> Option<usize> {
        if x >= self.grid.width() || y >= self.grid.height() {
            return None;
        }
        let origin = self.grid.index(x, y);
        self.particles.spawn(kind, x, y, origin, &mut self.rng)
    }

    // === HOST COMMANDS ===

    pub fn paint_stroke(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        material: MaterialId,
        pen_size: u32,
        overwrite: bool,
    ) -> EngineResult<usize> {
        commands::paint_stroke(self, x0, y0, x1, y1, material, pen_size, overwrite)
    }

    pub fn set_cell(&mut self, x: u32, y: u32, material: MaterialId) -> EngineResult<bool> {
        commands::set_cell(self, x, y, material)
    }

    pub fn cell_at(&self, x: u32, y: u32) -> Option<MaterialId> {
        commands::cell_at(self, x, y)
    }

    pub fn fill(&mut self, material: MaterialId) -> EngineResult<()> {
        commands::fill(self, material)
    }

    pub fn clear(&mut self) {
        commands::clear(self);
    }

    pub fn save(&mut self) {
        commands::save(self);
    }

    pub fn load(&mut self) -> bool {
        commands::load(self)
    }

    pub fn has_save(&self) -> bool {
        commands::has_save(self)
    }

    pub fn material_manifest_json(&self) -> EngineResult<String> {
        self.registry.manifest_json()
    }

    // === PRESENTER ===

    pub fn cells_ptr(&self) -> *const MaterialId { self.grid.ptr() }

    pub fn cells_len(&self) -> usize { self.grid.size() }

    // === PERF ===

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
