use super::*;
use crate::core::error::EngineError;
use crate::elements::*;
use crate::systems::behaviors::testing::Bench;
use crate::systems::particles::Effect;

fn seeded(width: u32, height: u32, seed: u64) -> WorldCore {
    let settings = EngineSettings { rng_seed: Some(seed), ..EngineSettings::default() };
    WorldCore::with_settings(width, height, settings).unwrap()
}

fn forced(width: u32, height: u32) -> WorldCore {
    let mut world = seeded(width, height, 1);
    world.rng = RandStream::constant(0, 1);
    world
}

fn assert_all_registered(world: &WorldCore) {
    for (i, &c) in world.grid.cells.iter().enumerate() {
        assert!(world.registry.is_registered(c), "cell {i} holds {c:#010x}");
    }
}

#[test]
fn grid_only_ever_holds_registered_materials() {
    let mut world = seeded(48, 48, 99);
    let materials: Vec<MaterialId> = MATERIAL_DATA.iter().map(|d| d.color).collect();
    for (k, &m) in materials.iter().enumerate() {
        let x = (k as i32 * 2) % 48;
        world.paint_stroke(x, 0, x, 20, m, 1, true).unwrap();
    }
    world.paint_stroke(0, 47, 47, 47, EL_WALL, 0, true).unwrap();
    world.paint_stroke(10, 30, 30, 30, EL_SOIL, 1, true).unwrap();

    for _ in 0..300 {
        world.tick().unwrap();
        assert_all_registered(&world);
    }
    assert_eq!(world.tick_count(), 300);
    assert_eq!(
        world.particles.active_count() + world.particles.inactive_count(),
        world.particles.capacity()
    );
}

#[test]
fn all_background_grid_never_changes() {
    let mut world = seeded(16, 12, 3);
    for _ in 0..50 {
        world.tick().unwrap();
    }
    assert_eq!(world.grid.count_of(EL_BACKGROUND), world.grid.size());
}

#[test]
fn forced_gravity_moves_sand_down_one_cell() {
    let mut world = forced(3, 3);
    world.set_cell(1, 0, EL_SAND).unwrap();
    world.tick().unwrap();
    assert_eq!(world.cell_at(1, 0), Some(EL_BACKGROUND));
    assert_eq!(world.cell_at(1, 1), Some(EL_SAND));
    assert_eq!(world.grid.count_of(EL_SAND), 1);
}

#[test]
fn forced_gravity_removes_sand_on_bottom_row() {
    let mut world = forced(3, 3);
    world.set_cell(2, 2, EL_SAND).unwrap();
    world.tick().unwrap();
    assert_eq!(world.grid.count_of(EL_SAND), 0);
}

#[test]
fn density_sink_swaps_without_loss() {
    let mut bench = Bench::new(&[&[EL_SAND], &[EL_WATER]], 0);
    assert!(bench.ctx(0, 0).do_density_sink(EL_WATER, false, 25));
    assert_eq!(bench.at(0, 0), EL_WATER);
    assert_eq!(bench.at(0, 1), EL_SAND);
    assert_eq!(bench.grid.count_of(EL_SAND), 1);
    assert_eq!(bench.grid.count_of(EL_WATER), 1);
}

#[test]
fn spawn_exhaustion_leaves_the_pool_untouched() {
    let settings = EngineSettings { particle_capacity: 2, rng_seed: Some(4), ..EngineSettings::default() };
    let mut world = WorldCore::with_settings(32, 32, settings).unwrap();
    assert!(world.spawn_particle(ParticleKind::Tree, 16, 31).is_some());
    assert!(world.spawn_particle(ParticleKind::C4Explosion, 5, 5).is_some());
    assert_eq!(world.particles.inactive_count(), 0);

    assert_eq!(world.spawn_particle(ParticleKind::MethaneExplosion, 8, 8), None);
    assert_eq!(world.active_particles(), 2);
    assert_eq!(world.particles.inactive_count(), 0);
}

#[test]
fn c4_falls_back_to_fire_when_the_pool_is_full() {
    let settings = EngineSettings { particle_capacity: 1, ..EngineSettings::default() };
    let mut world = WorldCore::with_settings(5, 5, settings).unwrap();
    world.rng = RandStream::constant(0, 2);
    world.spawn_particle(ParticleKind::Tree, 0, 0).unwrap();
    world.set_cell(3, 2, EL_FIRE).unwrap();
    world.set_cell(3, 3, EL_C4).unwrap();
    world.set_cell(3, 4, EL_WALL).unwrap();
    world.tick().unwrap();
    assert_eq!(world.cell_at(3, 3), Some(EL_FIRE));
    assert_eq!(world.active_particles(), 1);
}

#[test]
fn pool_books_balance_while_particles_run() {
    let mut world = seeded(64, 64, 11);
    for k in 0..6 {
        world.spawn_particle(ParticleKind::MethaneExplosion, 10 * k, 10);
    }
    world.spawn_particle(ParticleKind::Tree, 32, 63);
    for _ in 0..20 {
        world.tick().unwrap();
        assert_eq!(
            world.particles.active_count() + world.particles.inactive_count(),
            world.particles.capacity()
        );
    }
    // methane blasts retire on their third draw
    assert_eq!(world.particles.iter_active().filter(|(_, p)| p.kind == ParticleKind::MethaneExplosion).count(), 0);
}

#[test]
fn methane_blast_is_drawn_three_times() {
    let mut world = seeded(48, 48, 5);
    world.spawn_particle(ParticleKind::MethaneExplosion, 24, 24).unwrap();
    let live = |w: &WorldCore| {
        w.particles.iter_active().filter(|(_, p)| p.kind == ParticleKind::MethaneExplosion).count()
    };
    world.tick().unwrap();
    world.tick().unwrap();
    assert_eq!(live(&world), 1);
    world.tick().unwrap();
    assert_eq!(live(&world), 0);
}

#[test]
fn scan_order_is_bottom_up_and_alternating() {
    let order: Vec<_> = ScanOrder::new(4, 3).map(|(_, _, i)| i).collect();
    assert_eq!(order, vec![11, 10, 9, 8, 4, 5, 6, 7, 3, 2, 1, 0]);

    // every cell visited exactly once
    let mut seen = order.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..12).collect::<Vec<_>>());
}

#[test]
fn load_restores_the_saved_grid_and_drops_particles() {
    let mut world = seeded(20, 20, 8);
    world.paint_stroke(0, 19, 19, 19, EL_WALL, 0, true).unwrap();
    world.set_cell(5, 5, EL_SAND).unwrap();
    world.save();
    let snapshot = world.grid.cells.clone();

    world.paint_stroke(0, 0, 19, 19, EL_WATER, 3, true).unwrap();
    world.spawn_particle(ParticleKind::C4Explosion, 10, 10).unwrap();
    world.spawn_particle(ParticleKind::Tree, 3, 18).unwrap();
    world.tick().unwrap();

    assert!(world.load());
    assert_eq!(world.grid.cells, snapshot);
    assert_eq!(world.active_particles(), 0);
    assert_eq!(world.particles.inactive_count(), world.particles.capacity());
}

#[test]
fn load_without_save_is_a_no_op() {
    let mut world = seeded(4, 4, 1);
    world.set_cell(1, 1, EL_WALL).unwrap();
    assert!(!world.has_save());
    assert!(!world.load());
    assert_eq!(world.cell_at(1, 1), Some(EL_WALL));
}

#[test]
fn clear_resets_grid_and_particles() {
    let mut world = seeded(10, 10, 1);
    world.fill(EL_WALL).unwrap();
    world.spawn_particle(ParticleKind::Tree, 5, 9).unwrap();
    world.clear();
    assert_eq!(world.grid.count_of(EL_BACKGROUND), 100);
    assert_eq!(world.active_particles(), 0);
}

#[test]
fn frame_debt_never_exceeds_five_ticks() {
    let mut world = seeded(8, 8, 1);
    assert_eq!(world.frame(0.0).unwrap(), 0);
    let ran = world.frame(60_000.0).unwrap();
    assert!((1..=5).contains(&ran), "ran {ran}");
    assert_eq!(world.tick_count(), ran as u64);
    assert_eq!(world.get_perf_stats().ticks_last_frame(), ran);
}

#[test]
fn paused_world_runs_no_ticks() {
    let mut world = seeded(8, 8, 1);
    world.set_fps(0).unwrap();
    world.frame(0.0).unwrap();
    assert_eq!(world.frame(1000.0).unwrap(), 0);
    assert!(matches!(world.set_fps(MAX_FPS + 1), Err(EngineError::InvalidSettings(_))));
}

#[test]
fn tree_retires_after_its_program_is_consumed() {
    let mut world = seeded(128, 128, 21);
    let slot = world.spawn_particle(ParticleKind::Tree, 64, 127).unwrap();
    let len = match &world.particles.get(slot).unwrap().effect {
        Effect::Tree(t) => t.remaining(),
        Effect::Explosion(_) => unreachable!(),
    };
    for _ in 0..len - 1 {
        world.tick().unwrap();
    }
    assert_eq!(world.active_particles(), 1);
    world.tick().unwrap();
    assert_eq!(world.active_particles(), 0);
    assert!(world.grid.count_of(EL_BRANCH) + world.grid.count_of(EL_LEAF) > 0);
}

#[test]
fn unregistered_cell_value_halts_the_tick() {
    let mut world = seeded(4, 4, 1);
    world.grid.cells[5] = 0x0012_3456;
    match world.tick() {
        Err(EngineError::UnregisteredMaterial { value, index }) => {
            assert_eq!(value, 0x0012_3456);
            assert_eq!(index, 5);
        }
        other => panic!("expected unregistered material, got {other:?}"),
    }
}

#[test]
fn paint_respects_overwrite_and_eraser() {
    let mut world = seeded(9, 9, 1);
    world.set_cell(4, 4, EL_WALL).unwrap();
    world.paint_stroke(0, 4, 8, 4, EL_SAND, 1, false).unwrap();
    assert_eq!(world.cell_at(4, 4), Some(EL_WALL));
    assert_eq!(world.cell_at(0, 4), Some(EL_SAND));
    assert_eq!(world.cell_at(4, 3), Some(EL_SAND));
    assert_eq!(world.cell_at(4, 6), Some(EL_BACKGROUND));

    world.paint_stroke(4, 4, 4, 4, EL_BACKGROUND, 0, false).unwrap();
    assert_eq!(world.cell_at(4, 4), Some(EL_BACKGROUND));

    assert!(matches!(
        world.paint_stroke(0, 0, 1, 1, 0x0000_0001, 1, true),
        Err(EngineError::UnknownMaterial(1))
    ));
}

#[test]
fn paint_clips_strokes_that_leave_the_grid() {
    let mut world = seeded(6, 6, 1);
    let written = world.paint_stroke(-10, -10, 20, 20, EL_WALL, 0, true).unwrap();
    assert_eq!(written, 6);
    assert_eq!(world.cell_at(5, 5), Some(EL_WALL));
    assert_eq!(world.cell_at(9, 9), None);
}

#[test]
fn paint_survives_extreme_endpoints() {
    let mut world = seeded(6, 6, 1);
    let written = world.paint_stroke(i32::MIN, i32::MIN, i32::MAX, i32::MAX, EL_WALL, 0, true).unwrap();
    assert!(written > 0);
    assert_eq!(world.cell_at(3, 3), Some(EL_WALL));

    world.clear();
    world.paint_stroke(i32::MIN, 0, i32::MAX, 0, EL_SAND, 1, true).unwrap();
    assert_eq!(world.cell_at(0, 0), Some(EL_SAND));
    assert_eq!(world.cell_at(5, 0), Some(EL_SAND));
    assert_eq!(world.cell_at(0, 2), Some(EL_BACKGROUND));
}

#[test]
fn perf_stats_count_dispatched_cells() {
    let mut world = seeded(10, 10, 1);
    world.paint_stroke(0, 9, 9, 9, EL_WALL, 0, true).unwrap();
    world.enable_perf_metrics(true);
    world.tick().unwrap();
    let stats = world.get_perf_stats();
    assert_eq!(stats.cells_dispatched(), 10);
    assert!(stats.ticks_per_second() >= 1);
}

#[test]
fn same_seed_same_history() {
    let mut a = seeded(24, 24, 77);
    let mut b = seeded(24, 24, 77);
    for w in [&mut a, &mut b] {
        w.paint_stroke(2, 2, 20, 4, EL_SAND, 2, true).unwrap();
        w.paint_stroke(2, 10, 20, 10, EL_WATER, 1, true).unwrap();
        w.paint_stroke(0, 23, 23, 23, EL_WALL, 0, true).unwrap();
        for _ in 0..40 {
            w.tick().unwrap();
        }
    }
    assert_eq!(a.grid.cells, b.grid.cells);
}
