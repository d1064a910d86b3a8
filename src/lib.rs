//! Powderfall Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - core/       - grid store, neighbor primitives, random stream, errors
//! - domain/     - material table and frozen registry
//! - systems/    - per-material rules and the particle pool
//! - simulation/ - world context, tick passes, scheduler, wasm facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use domain::elements;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("Powderfall engine v{} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{EngineError, EngineResult};
pub use simulation::{EngineSettings, PerfStats, World, WorldCore};
pub use domain::elements::{Material, MaterialId};

// Material cell values for JS
#[wasm_bindgen]
pub fn mat_background() -> u32 { domain::elements::EL_BACKGROUND }
#[wasm_bindgen]
pub fn mat_wall() -> u32 { domain::elements::EL_WALL }
#[wasm_bindgen]
pub fn mat_sand() -> u32 { domain::elements::EL_SAND }
#[wasm_bindgen]
pub fn mat_water() -> u32 { domain::elements::EL_WATER }
#[wasm_bindgen]
pub fn mat_fire() -> u32 { domain::elements::EL_FIRE }
#[wasm_bindgen]
pub fn mat_fuse() -> u32 { domain::elements::EL_FUSE }
#[wasm_bindgen]
pub fn mat_vine() -> u32 { domain::elements::EL_VINE }
#[wasm_bindgen]
pub fn mat_steam() -> u32 { domain::elements::EL_STEAM }
#[wasm_bindgen]
pub fn mat_salt() -> u32 { domain::elements::EL_SALT }
#[wasm_bindgen]
pub fn mat_salt_water() -> u32 { domain::elements::EL_SALT_WATER }
#[wasm_bindgen]
pub fn mat_oil() -> u32 { domain::elements::EL_OIL }
#[wasm_bindgen]
pub fn mat_soil() -> u32 { domain::elements::EL_SOIL }
#[wasm_bindgen]
pub fn mat_mud() -> u32 { domain::elements::EL_MUD }
#[wasm_bindgen]
pub fn mat_lava() -> u32 { domain::elements::EL_LAVA }
#[wasm_bindgen]
pub fn mat_c4() -> u32 { domain::elements::EL_C4 }
#[wasm_bindgen]
pub fn mat_methane() -> u32 { domain::elements::EL_METHANE }
#[wasm_bindgen]
pub fn mat_pumice() -> u32 { domain::elements::EL_PUMICE }
#[wasm_bindgen]
pub fn mat_glass() -> u32 { domain::elements::EL_GLASS }
#[wasm_bindgen]
pub fn mat_acid() -> u32 { domain::elements::EL_ACID }
#[wasm_bindgen]
pub fn mat_producer() -> u32 { domain::elements::EL_PRODUCER }
#[wasm_bindgen]
pub fn mat_ice() -> u32 { domain::elements::EL_ICE }
#[wasm_bindgen]
pub fn mat_seed() -> u32 { domain::elements::EL_SEED }
#[wasm_bindgen]
pub fn mat_leaf() -> u32 { domain::elements::EL_LEAF }
#[wasm_bindgen]
pub fn mat_branch() -> u32 { domain::elements::EL_BRANCH }
