use super::*;
use crate::core::EngineError;
use crate::domain::cell::{air_color, dirt_color};
use crate::domain::{CellKind, CellType};
use crate::systems::terrain::air::sunlight_at;

/// `width` x `height`: air above `surface`, dirt (humidity 1) from it down.
fn field(width: u32, height: u32, surface: i32) -> Grid {
    Grid::from_fn(width, height, |c| {
        if c.y < surface {
            Cell::air(c)
        } else {
            Cell::dirt(c, 1)
        }
    })
    .unwrap()
}

fn plant_mut<'a>(engine: &'a mut Engine, key: &str) -> &'a mut Plant {
    engine
        .organisms
        .iter_mut()
        .filter(|o| o.key() == key)
        .find_map(Organism::as_plant_mut)
        .unwrap()
}

fn seeded(width: u32, height: u32, seed: u64) -> Engine {
    Engine::new(EngineConfig {
        width,
        height,
        seed: Some(seed),
        ..EngineConfig::default()
    })
    .unwrap()
}

#[test]
fn new_engine_generates_terrain_and_raises_the_sun() {
    let engine = seeded(40, 40, 1);
    assert_eq!((engine.width(), engine.height()), (40, 40));
    assert_eq!(engine.frame(), 0);
    assert_eq!(engine.organisms().len(), 1);
    assert_eq!(engine.organisms()[0].key(), "sun");
    assert_eq!(engine.light_source(), Some(Coord::new(8, 8)));
    assert_eq!(engine.grid().count(CellType::Sun), 37);
    for cell in engine.grid().iter().filter(|c| c.coord().y >= 20) {
        assert!(cell.is(CellType::Dirt) || cell.is(CellType::Rock));
    }
}

#[test]
fn small_grid_has_no_sun() {
    let engine = seeded(10, 10, 1);
    assert!(engine.organisms().is_empty());
    assert_eq!(engine.light_source(), None);
}

#[test]
fn invalid_config_is_rejected() {
    let err = Engine::new(EngineConfig { width: 0, ..EngineConfig::default() }).err();
    assert_eq!(err, Some(EngineError::InvalidDimensions { width: 0, height: 160 }));
}

#[test]
fn spawn_plant_climbs_to_the_surface() {
    let mut engine = Engine::with_grid(field(9, 10, 5), 7);
    let key = engine.spawn_plant(Coord::new(4, 8)).unwrap();
    assert_eq!(key, "plant(4,5)");
    assert!(engine.cell_at(Coord::new(4, 5)).unwrap().is(CellType::Seed));
    assert!(engine.cell_at(Coord::new(4, 8)).unwrap().is(CellType::Dirt));
    assert!(engine.plant(&key).is_some());
}

#[test]
fn spawn_plant_rejects_air_duplicates_and_outside_clicks() {
    let mut engine = Engine::with_grid(field(9, 10, 5), 7);
    assert!(matches!(
        engine.spawn_plant(Coord::new(4, 2)),
        Err(EngineError::InvalidSpawn { what: "plant", .. })
    ));
    engine.spawn_plant(Coord::new(4, 7)).unwrap();
    assert!(matches!(
        engine.spawn_plant(Coord::new(4, 9)),
        Err(EngineError::InvalidSpawn { .. })
    ));
    assert!(matches!(
        engine.spawn_plant(Coord::new(9, 0)),
        Err(EngineError::OutOfBounds { .. })
    ));
    assert_eq!(engine.organisms().len(), 1);
}

#[test]
fn spawn_plant_rejects_rock_surface() {
    let mut grid = field(3, 6, 3);
    grid.set(Coord::new(1, 3), Cell::rock(Coord::new(1, 3))).unwrap();
    let mut engine = Engine::with_grid(grid, 7);
    assert!(matches!(
        engine.spawn_plant(Coord::new(1, 5)),
        Err(EngineError::InvalidSpawn { .. })
    ));
    assert!(engine.organisms().is_empty());
}

#[test]
fn spawn_waterdrop_only_over_air() {
    let mut engine = Engine::with_grid(field(5, 6, 3), 7);
    engine.spawn_waterdrop(Coord::new(2, 0)).unwrap();
    assert!(engine.cell_at(Coord::new(2, 0)).unwrap().is(CellType::WaterDrop));
    assert!(matches!(
        engine.spawn_waterdrop(Coord::new(2, 4)),
        Err(EngineError::InvalidSpawn { what: "waterdrop", .. })
    ));
}

#[test]
fn fresh_seed_grows_stem_on_first_tick() {
    let mut engine = Engine::with_grid(field(9, 10, 5), 7);
    let key = engine.spawn_plant(Coord::new(4, 8)).unwrap();

    engine.tick().unwrap();
    let plant = engine.plant(&key).unwrap();
    assert_eq!((plant.age(), plant.water(), plant.sunlight()), (1, 8, 4.0));
    assert!(engine.cell_at(Coord::new(4, 4)).unwrap().is(CellType::Stem));
    assert_eq!(engine.stats().growth_events(), 1);
    assert_eq!(engine.frame(), 1);
}

#[test]
fn water_rich_plant_never_grows_roots() {
    let mut engine = Engine::with_grid(field(9, 10, 5), 11);
    let key = engine.spawn_plant(Coord::new(4, 8)).unwrap();
    plant_mut(&mut engine, &key).set_resources(200, 60.0);

    for _ in 0..12 {
        engine.tick().unwrap();
    }
    let plant = engine.plant(&key).unwrap();
    assert_eq!(plant.water(), 180);
    assert_eq!(plant.sunlight(), 0.0);
    assert!(plant.body().members().len() > 1);
    assert!(plant.body().members().iter().all(|m| !m.is(CellType::Root)));
    assert_eq!(engine.grid().count(CellType::Root), 0);
}

#[test]
fn light_rich_plant_roots_into_wettest_dirt() {
    let mut grid = Grid::from_fn(5, 5, |c| if c.y < 3 { Cell::air(c) } else { Cell::rock(c) }).unwrap();
    grid.set(Coord::new(1, 3), Cell::dirt(Coord::new(1, 3), 3)).unwrap();
    grid.set(Coord::new(2, 3), Cell::dirt(Coord::new(2, 3), 1)).unwrap();
    grid.set(Coord::new(3, 3), Cell::dirt(Coord::new(3, 3), 7)).unwrap();
    let mut engine = Engine::with_grid(grid, 5);
    let key = engine.spawn_plant(Coord::new(2, 3)).unwrap();

    engine.tick().unwrap();
    plant_mut(&mut engine, &key).set_resources(2, 40.0);
    engine.tick().unwrap();

    let plant = engine.plant(&key).unwrap();
    assert_eq!(plant.water(), 2 + 7 - 2);
    assert_eq!(plant.sunlight(), 34.0);
    assert!(engine.cell_at(Coord::new(3, 3)).unwrap().is(CellType::Root));
    assert!(engine.cell_at(Coord::new(1, 3)).unwrap().is(CellType::Dirt));
}

#[test]
fn drop_falls_then_feeds_the_plant_it_lands_on() {
    let mut engine = Engine::with_grid(field(5, 8, 4), 3);
    let key = engine.spawn_plant(Coord::new(2, 4)).unwrap();
    plant_mut(&mut engine, &key).set_resources(10, 0.0);
    engine.spawn_waterdrop(Coord::new(2, 1)).unwrap();

    engine.tick().unwrap();
    engine.tick().unwrap();
    assert!(engine.cell_at(Coord::new(2, 3)).unwrap().is(CellType::WaterDrop));
    assert_eq!(engine.stats().drops_fallen(), 1);

    engine.tick().unwrap();
    assert!(engine.cell_at(Coord::new(2, 3)).unwrap().is_air());
    assert_eq!(engine.plant(&key).unwrap().water(), 15);
    assert_eq!(engine.stats().drops_absorbed(), 1);

    engine.tick().unwrap();
    assert_eq!(engine.plant(&key).unwrap().water(), 15);
    assert_eq!(engine.stats().drops_stopped(), 0);
}

#[test]
fn drop_soaks_into_dirt() {
    let mut engine = Engine::with_grid(field(3, 4, 2), 3);
    engine.spawn_waterdrop(Coord::new(1, 1)).unwrap();
    engine.tick().unwrap();
    assert_eq!(engine.cell_at(Coord::new(1, 2)).unwrap().humidity(), Some(6));
    assert_eq!(engine.stats().drops_absorbed(), 1);
}

#[test]
fn watered_column_can_still_be_planted() {
    let mut engine = Engine::with_grid(field(5, 6, 3), 3);
    engine.spawn_waterdrop(Coord::new(2, 0)).unwrap();
    for _ in 0..10 {
        engine.tick().unwrap();
    }
    assert!(engine.cell_at(Coord::new(2, 2)).unwrap().is_air());
    assert_eq!(engine.grid().count(CellType::WaterDrop), 0);
    assert_eq!(engine.cell_at(Coord::new(2, 3)).unwrap().humidity(), Some(6));

    let key = engine.spawn_plant(Coord::new(2, 4)).unwrap();
    assert_eq!(key, "plant(2,3)");
    assert!(engine.cell_at(Coord::new(2, 3)).unwrap().is(CellType::Seed));
}

#[test]
fn drops_around_the_sun_do_not_linger() {
    let mut engine = seeded(40, 40, 1);
    for x in 6..11 {
        engine.spawn_waterdrop(Coord::new(x, 3)).unwrap();
    }
    for _ in 0..30 {
        engine.tick().unwrap();
    }
    assert_eq!(engine.grid().count(CellType::WaterDrop), 0);
    assert_eq!(engine.grid().count(CellType::Sun), 37);
}

#[test]
fn sun_lights_air_then_drifts() {
    let mut engine = seeded(40, 40, 1);
    engine.tick().unwrap();

    let corner = engine.cell_at(Coord::new(0, 0)).unwrap();
    assert_eq!(corner.sunlight(), Some(sunlight_at(Coord::new(0, 0), Coord::new(8, 8))));
    assert_eq!(engine.light_source(), Some(Coord::new(9, 8)));
    assert_eq!(engine.grid().count(CellType::Sun), 37);

    engine.tick().unwrap();
    let corner = engine.cell_at(Coord::new(0, 0)).unwrap();
    assert_eq!(corner.sunlight(), Some(sunlight_at(Coord::new(0, 0), Coord::new(9, 8))));
}

#[test]
fn sun_wraps_back_across_many_ticks() {
    let mut engine = seeded(20, 30, 1);
    let mut columns = Vec::new();
    for _ in 0..20 {
        engine.tick().unwrap();
        columns.push(engine.organisms()[0].body().anchor().x);
        assert_eq!(engine.grid().count(CellType::Sun), 37);
    }
    // 5..=13 fits a 7-wide disc in 20 columns.
    assert_eq!(&columns[..9], &[6, 7, 8, 9, 10, 11, 12, 13, 5]);
    assert!(columns.iter().all(|&x| (5..=13).contains(&x)));
}

#[test]
fn colors_follow_cell_state_after_many_ticks() {
    let mut engine = seeded(40, 40, 9);
    for x in (0..40).step_by(6) {
        let _ = engine.spawn_plant(Coord::new(x, 20));
        let _ = engine.spawn_waterdrop(Coord::new(x + 1, 0));
    }
    for _ in 0..60 {
        engine.tick().unwrap();
    }

    for cell in engine.grid().iter() {
        match cell.kind() {
            CellKind::Air { sunlight, .. } => assert_eq!(cell.color(), air_color(*sunlight)),
            CellKind::Dirt { humidity } => assert_eq!(cell.color(), dirt_color(*humidity)),
            _ => {}
        }
    }
}

#[test]
fn render_buffers_mirror_the_grid() {
    let mut engine = seeded(40, 40, 4);
    engine.spawn_waterdrop(Coord::new(30, 2)).unwrap();
    engine.tick().unwrap();

    assert_eq!(engine.types_len(), 1600);
    assert_eq!(engine.colors_len_bytes(), 6400);
    for (idx, cell) in engine.grid().iter().enumerate() {
        assert_eq!(engine.types()[idx], cell.cell_type().code());
        assert_eq!(engine.colors()[idx], cell.color().to_abgr());
    }
    assert_eq!(engine.types()[3 * 40 + 30], CellType::WaterDrop.code());
}

#[test]
fn same_seed_same_world() {
    let run = || {
        let mut engine = seeded(40, 40, 21);
        for x in [6, 14, 22, 30] {
            let _ = engine.spawn_plant(Coord::new(x, 20));
        }
        for _ in 0..40 {
            engine.tick().unwrap();
        }
        (engine.grid().cells().to_vec(), engine.organisms_json().unwrap())
    };
    assert_eq!(run(), run());
}

#[test]
fn perf_stats_record_the_tick() {
    let mut engine = seeded(40, 40, 2);
    engine.enable_perf_metrics(true);
    engine.tick().unwrap();

    let stats = engine.stats();
    assert_eq!(stats.frame(), 0);
    assert_eq!(stats.chunks(), 7);
    assert_eq!(stats.organism_count(), 1);
    assert_eq!(stats.grid_size(), 1600);
    assert!(stats.relit_cells() > 0);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn starved_growth_still_pays() {
    let mut engine = Engine::with_grid(field(3, 3, 1), 1);
    let key = engine.spawn_plant(Coord::new(1, 1)).unwrap();
    engine.tick().unwrap();
    assert_eq!(engine.stats().growth_events(), 1);

    // Stem is at row 0 and no air is left outside its row: stem and leaf
    // growth both come up empty.
    plant_mut(&mut engine, &key).set_resources(10, 6.0);
    engine.tick().unwrap();
    let plant = engine.plant(&key).unwrap();
    assert_eq!(engine.stats().growth_events(), 0);
    assert_eq!((plant.water(), plant.sunlight()), (8, 0.0));
    assert_eq!(plant.body().members().len(), 2);
}

#[test]
fn json_views() {
    let mut engine = Engine::with_grid(field(5, 6, 3), 7);
    let key = engine.spawn_plant(Coord::new(2, 4)).unwrap();

    let dirt = engine.cell_info_json(Coord::new(0, 5)).unwrap();
    assert!(dirt.contains("\"kind\":\"dirt\""));
    assert!(dirt.contains("\"humidity\":1"));

    let organisms = engine.organisms_json().unwrap();
    assert!(organisms.contains(&format!("\"key\":\"{key}\"")));
    assert!(organisms.contains("\"water\":10"));

    assert!(matches!(
        engine.cell_info_json(Coord::new(5, 0)),
        Err(EngineError::OutOfBounds { .. })
    ));
}
