use wasm_bindgen::prelude::*;

/// Timing snapshot of the last tick plus scheduler counters
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) particle_ms: f64,
    pub(super) cellular_ms: f64,
    pub(super) cells_dispatched: u32,
    pub(super) active_particles: u32,
    pub(super) ticks_last_frame: u32,
    pub(super) ticks_per_second: u32,
}

impl PerfStats {
    pub(crate) fn reset_tick(&mut self) {
        self.tick_ms = 0.0;
        self.particle_ms = 0.0;
        self.cellular_ms = 0.0;
        self.cells_dispatched = 0;
        self.active_particles = 0;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_ms(&self) -> f64 { self.particle_ms }
    #[wasm_bindgen(getter)]
    pub fn cellular_ms(&self) -> f64 { self.cellular_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_dispatched(&self) -> u32 { self.cells_dispatched }
    #[wasm_bindgen(getter)]
    pub fn active_particles(&self) -> u32 { self.active_particles }
    #[wasm_bindgen(getter)]
    pub fn ticks_last_frame(&self) -> u32 { self.ticks_last_frame }
    #[wasm_bindgen(getter)]
    pub fn ticks_per_second(&self) -> u32 { self.ticks_per_second }
}
