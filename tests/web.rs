//! Browser smoke tests for the wasm facade
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use powderfall_engine::{mat_sand, mat_wall, World};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_ticks_and_exposes_cells() {
    let mut world = World::new(32, 32).unwrap();
    world.paint_stroke(0, 31, 31, 31, mat_wall(), 0, true).unwrap();
    world.paint_stroke(10, 5, 20, 5, mat_sand(), 1, true).unwrap();
    world.enable_perf_metrics(true);
    world.tick().unwrap();
    assert_eq!(world.tick_count(), 1);
    assert_eq!(world.cells_len(), 32 * 32);
    assert!(!world.cells_ptr().is_null());
    assert!(world.get_perf_stats().cells_dispatched() > 0);
}

#[wasm_bindgen_test]
fn facade_rejects_bad_settings() {
    assert!(World::with_settings(8, 8, r#"{"fps": 9999}"#).is_err());
    assert!(World::new(0, 8).is_err());
}

#[wasm_bindgen_test]
fn facade_errors_carry_the_engine_message() {
    let err = World::new(0, 8).err().unwrap();
    assert!(err.as_string().unwrap().contains("invalid grid dimensions 0x8"));
    let err = World::with_settings(8, 8, r#"{"max_frame_debt": 50}"#).err().unwrap();
    assert!(err.as_string().unwrap().contains("max_frame_debt"));
}

#[wasm_bindgen_test]
fn facade_manifest_is_json() {
    let world = World::new(4, 4).unwrap();
    assert!(world.material_manifest_json().unwrap().starts_with('{'));
}
