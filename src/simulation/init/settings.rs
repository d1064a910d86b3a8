//! Engine settings - JSON-configurable, validated before use

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, EngineResult};
use crate::systems::particles::DEFAULT_PARTICLE_CAPACITY;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 180;
pub const DEFAULT_MAX_FRAME_DEBT: f64 = 5.0;
/// Longest catch-up burst a stall may owe.
pub const MAX_FRAME_DEBT: f64 = 5.0;
pub const DEFAULT_LOOP_OVERHEAD_MS: f64 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Target simulation ticks per second; 0 pauses the scheduler.
    pub fps: u32,
    /// Cap on ticks owed after a stall.
    pub max_frame_debt: f64,
    /// Per-frame time reserved for the host when catching up.
    pub loop_overhead_ms: f64,
    pub particle_capacity: usize,
    /// Fixed seed for the random stream; the clock is used when absent.
    pub rng_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            max_frame_debt: DEFAULT_MAX_FRAME_DEBT,
            loop_overhead_ms: DEFAULT_LOOP_OVERHEAD_MS,
            particle_capacity: DEFAULT_PARTICLE_CAPACITY,
            rng_seed: None,
        }
    }
}

impl EngineSettings {
    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.fps > MAX_FPS {
            return Err(EngineError::InvalidSettings(format!("fps {} exceeds {}", self.fps, MAX_FPS)));
        }
        if !(1.0..=MAX_FRAME_DEBT).contains(&self.max_frame_debt) {
            return Err(EngineError::InvalidSettings(format!(
                "max_frame_debt must be within 1..={}, got {}",
                MAX_FRAME_DEBT, self.max_frame_debt
            )));
        }
        if !(self.loop_overhead_ms >= 0.0) {
            return Err(EngineError::InvalidSettings(format!(
                "loop_overhead_ms must be non-negative, got {}",
                self.loop_overhead_ms
            )));
        }
        if self.particle_capacity == 0 {
            return Err(EngineError::InvalidSettings("particle_capacity must be positive".into()));
        }
        Ok(())
    }
}

pub(super) fn set_fps(world: &mut WorldCore, fps: u32) -> EngineResult<()> {
    if fps > MAX_FPS {
        return Err(EngineError::InvalidSettings(format!("fps {} exceeds {}", fps, MAX_FPS)));
    }
    world.settings.fps = fps;
    world.scheduler.set_fps(fps);
    if fps == 0 {
        world.tick_rate.reset();
    }
    tracing::debug!(fps, "tick rate changed");
    Ok(())
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    let mut stats = world.perf_stats.clone();
    stats.ticks_per_second = world.tick_rate.per_second();
    stats
}
