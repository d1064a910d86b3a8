use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;
use crate::elements::MaterialId;

use super::perf_stats::PerfStats;
use super::settings::EngineSettings;
use super::WorldCore;

/// Engine errors reach the host as thrown strings, and are echoed to the
/// console since a failed tick means the host should stop its loop.
fn to_js(err: EngineError) -> JsValue {
    let message = JsValue::from_str(&err.to_string());
    web_sys::console::error_1(&message);
    message
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world of background cells with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        Ok(Self { core: WorldCore::new(width, height).map_err(to_js)? })
    }

    /// Create a world from a JSON settings object; missing fields take defaults
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: u32, height: u32, settings_json: &str) -> Result<World, JsValue> {
        let settings = EngineSettings::from_json(settings_json).map_err(to_js)?;
        Ok(Self { core: WorldCore::with_settings(width, height, settings).map_err(to_js)? })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 { self.core.tick_count() }

    #[wasm_bindgen(getter)]
    pub fn active_particles(&self) -> usize { self.core.active_particles() }

    /// Run exactly one tick. An error means the world is corrupt; stop the loop.
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.core.tick().map_err(to_js)
    }

    /// Frame callback (pass the rAF timestamp). Returns ticks run.
    pub fn frame(&mut self, now_ms: f64) -> Result<u32, JsValue> {
        self.core.frame(now_ms).map_err(to_js)
    }

    pub fn set_fps(&mut self, fps: u32) -> Result<(), JsValue> {
        self.core.set_fps(fps).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> u32 { self.core.fps() }

    /// Pointer to the cell buffer (ABGR colors, one u32 per cell)
    pub fn cells_ptr(&self) -> *const MaterialId {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Brush stroke; returns how many cells changed
    pub fn paint_stroke(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        material: MaterialId,
        pen_size: u32,
        overwrite: bool,
    ) -> Result<usize, JsValue> {
        self.core
            .paint_stroke(x0, y0, x1, y1, material, pen_size, overwrite)
            .map_err(to_js)
    }

    pub fn set_cell(&mut self, x: u32, y: u32, material: MaterialId) -> Result<bool, JsValue> {
        self.core.set_cell(x, y, material).map_err(to_js)
    }

    /// Cell value, or undefined when out of bounds
    pub fn cell_at(&self, x: u32, y: u32) -> Option<MaterialId> {
        self.core.cell_at(x, y)
    }

    pub fn fill(&mut self, material: MaterialId) -> Result<(), JsValue> {
        self.core.fill(material).map_err(to_js)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn save(&mut self) {
        self.core.save();
    }

    /// Restore the last save; false when there is none
    pub fn load(&mut self) -> bool {
        self.core.load()
    }

    pub fn has_save(&self) -> bool {
        self.core.has_save()
    }

    pub fn material_manifest_json(&self) -> Result<String, JsValue> {
        self.core.material_manifest_json().map_err(to_js)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last tick perf snapshot (timings are zero when perf is disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
