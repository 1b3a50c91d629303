//! Behavioral scenarios for the orbit engine.
//!
//! Run with: `cargo test --package life-orbit-engine --test engine_scenarios`

use std::f32::consts::{PI, TAU};

use life_orbit_engine::{
    orbit_target, Catalog, EngineTuning, LifeArea, NodeId, OrbitEngine, Position,
    SimulationConfig,
};

// ============================================================================
// Helpers
// ============================================================================

/// Route engine logs to the test harness (`--nocapture` shows them).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("life_orbit_engine=debug")
        .with_test_writer()
        .try_init();
}

fn catalog(areas: Vec<LifeArea>) -> Catalog {
    init_tracing();
    Catalog::from_areas(areas).expect("valid catalog")
}

fn engine_with(areas: Vec<LifeArea>, config: SimulationConfig) -> OrbitEngine {
    OrbitEngine::new(catalog(areas), config, EngineTuning::default())
}

fn still() -> SimulationConfig {
    SimulationConfig {
        orbit_speed: 0.0,
        ..Default::default()
    }
}

fn distance_to_target(engine: &OrbitEngine, id: NodeId) -> f32 {
    engine
        .position(id)
        .unwrap()
        .distance(engine.target(id).unwrap())
}

fn assert_close(a: Position, b: Position, tolerance: f32) {
    assert!(
        a.distance(b) <= tolerance,
        "{a:?} and {b:?} differ by {}",
        a.distance(b)
    );
}

// ============================================================================
// Orbit formula
// ============================================================================

#[test]
fn test_reset_matches_closed_form_orbit() {
    let areas = vec![
        LifeArea::new(1, "Health", 180.0, 0.3),
        LifeArea::new(2, "Career", 260.0, 2.1),
        LifeArea::new(3, "Finance", 340.0, 4.4),
    ];
    let mut engine = engine_with(
        areas.clone(),
        SimulationConfig {
            orbit_speed: 0.1,
            radius_scale: 1.4,
            paused: false,
        },
    );
    for _ in 0..7 {
        engine.tick();
    }
    engine.set_paused(true);
    engine.reset();

    let angle = engine.state().global_angle;
    assert!((angle - 0.7).abs() < 1e-4);
    for area in &areas {
        let expected = orbit_target(Position::ORIGIN, &area.orbit, 1.4, angle);
        assert_close(engine.position(area.id).unwrap(), expected, 1e-3);
    }
}

#[test]
fn test_six_even_offsets_lie_on_shared_circle() {
    let center = Position::new(400.0, 300.0);
    let areas: Vec<LifeArea> = (0..6)
        .map(|i| LifeArea::new(i, format!("area {i}"), 250.0, i as f32 * TAU / 6.0))
        .collect();
    let tuning = EngineTuning {
        center,
        ..Default::default()
    };
    let mut engine = OrbitEngine::new(catalog(areas), still(), tuning);
    engine.reset();

    let angles: Vec<f32> = (0..6)
        .map(|i| {
            let p = engine.position(NodeId(i)).unwrap();
            assert!((p.distance(center) - 250.0).abs() < 1e-2);
            (p.y - center.y).atan2(p.x - center.x)
        })
        .collect();

    for i in 0..6 {
        let next = (i + 1) % 6;
        let gap = (angles[next] - angles[i]).rem_euclid(TAU);
        assert!((gap - TAU / 6.0).abs() < 1e-3, "gap {i}->{next} was {gap}");
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "Health", 200.0, 0.0),
            LifeArea::new(2, "Career", 200.0, 0.4),
            LifeArea::new(3, "Leisure", 260.0, 3.0),
        ],
        SimulationConfig::default(),
    );
    for _ in 0..25 {
        engine.tick();
    }
    engine.hold(NodeId(3));
    engine.move_held(Position::new(5.0, 5.0));
    engine.release();

    engine.reset();
    let first = engine.positions().all();
    engine.reset();
    assert_eq!(first, engine.positions().all());
}

// ============================================================================
// Collision resolution
// ============================================================================

#[test]
fn test_coincident_nodes_separate_to_min_separation() {
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "Twin A", 200.0, 1.0),
            LifeArea::new(2, "Twin B", 200.0, 1.0),
        ],
        still(),
    );
    engine.reset();
    assert_eq!(engine.position(NodeId(1)), engine.position(NodeId(2)));

    for _ in 0..50 {
        engine.resolve_collisions();
    }

    let min_separation = engine.tuning().min_separation;
    let d = engine
        .position(NodeId(1))
        .unwrap()
        .distance(engine.position(NodeId(2)).unwrap());
    assert!(
        (d - min_separation).abs() <= 0.5,
        "distance {d} not within tolerance of {min_separation}"
    );
}

#[test]
fn test_overlapping_cluster_stays_separated() {
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "A", 30.0, 0.0),
            LifeArea::new(2, "B", 30.0, TAU / 3.0),
            LifeArea::new(3, "C", 30.0, 2.0 * TAU / 3.0),
            LifeArea::new(4, "D", 10.0, 1.0),
        ],
        still(),
    );
    let min_separation = engine.tuning().min_separation;
    let ids = [NodeId(1), NodeId(2), NodeId(3), NodeId(4)];

    let pairwise_ok = |engine: &OrbitEngine| {
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                let d = engine
                    .position(*a)
                    .unwrap()
                    .distance(engine.position(*b).unwrap());
                if d < min_separation - 1.0 {
                    return false;
                }
            }
        }
        true
    };

    assert!(!pairwise_ok(&engine));
    for _ in 0..400 {
        engine.resolve_collisions();
    }
    assert!(pairwise_ok(&engine));

    for _ in 0..100 {
        engine.resolve_collisions();
        assert!(pairwise_ok(&engine));
    }
}

#[test]
fn test_derived_footprints_keep_min_separation() {
    let json = r#"[
        {"id": 1, "label": "Health", "orbit_radius": 220, "angle_offset": 0.5,
         "score": 10, "satellites": ["Sleep", "Food", "Sport"]},
        {"id": 2, "label": "Career", "orbit_radius": 220, "angle_offset": 0.5,
         "score": 10, "satellites": ["Team", "Skills", "Pay"]}
    ]"#;
    init_tracing();
    let catalog = Catalog::from_json_str(json).unwrap();
    let gap = |tuning: EngineTuning| {
        let mut engine = OrbitEngine::new(catalog.clone(), still(), tuning);
        assert_eq!(engine.node(NodeId(1)).unwrap().footprint_radius, 65.0);
        for _ in 0..50 {
            engine.resolve_collisions();
        }
        engine
            .position(NodeId(1))
            .unwrap()
            .distance(engine.position(NodeId(2)).unwrap())
    };

    let d = gap(EngineTuning::default());
    assert!((d - 120.0).abs() <= 0.5, "distance {d}, expected 120");

    let d = gap(EngineTuning {
        footprint_spacing: true,
        ..Default::default()
    });
    assert!((d - 130.0).abs() <= 0.5, "distance {d}, expected 130");
}

#[test]
fn test_collision_pass_runs_after_reacquire() {
    // Both nodes start on their targets, 50 apart. Re-acquisition has
    // nothing to do, so the tick must end exactly at the pushed distance;
    // a pass before re-acquisition would be partly pulled back.
    let offset = 2.0 * (0.25f32).asin();
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "A", 100.0, 0.0),
            LifeArea::new(2, "B", 100.0, offset),
        ],
        still(),
    );
    let gap = |engine: &OrbitEngine| {
        engine
            .position(NodeId(1))
            .unwrap()
            .distance(engine.position(NodeId(2)).unwrap())
    };
    let before = gap(&engine);
    assert!((before - 50.0).abs() < 1e-3);

    let report = engine.tick();
    assert_eq!(report.collisions.map(|c| c.overlaps), Some(1));

    let tuning = engine.tuning();
    let pushed = before + 2.0 * (tuning.min_separation - before) * tuning.push_factor;
    let after = gap(&engine);
    assert!(
        (after - pushed).abs() < 1e-3,
        "distance {after} after tick, resolver alone gives {pushed}"
    );
}

// ============================================================================
// Hold and drag
// ============================================================================

#[test]
fn test_only_one_node_held_at_a_time() {
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "Health", 250.0, 0.0),
            LifeArea::new(2, "Career", 250.0, PI),
        ],
        SimulationConfig::default(),
    );
    let career = engine.position(NodeId(2)).unwrap();

    assert!(engine.hold(NodeId(1)));
    assert!(!engine.hold(NodeId(2)));
    assert_eq!(engine.pointer_down(career), None);

    let held: Vec<_> = engine
        .snapshot()
        .nodes
        .into_iter()
        .filter(|n| n.held)
        .map(|n| n.id)
        .collect();
    assert_eq!(held, vec![NodeId(1)]);
    assert_eq!(engine.interaction().held, Some(NodeId(1)));
}

#[test]
fn test_held_node_tracks_pointer_and_pushes_others() {
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "Health", 250.0, 0.0),
            LifeArea::new(2, "Career", 250.0, PI),
        ],
        SimulationConfig::default(),
    );
    let start = engine.position(NodeId(1)).unwrap();
    let career = engine.position(NodeId(2)).unwrap();
    assert_eq!(engine.pointer_down(start), Some(NodeId(1)));

    // Walk the pointer across the orbit and park it on top of Career.
    let steps = 30;
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let pointer = start.approach(career + Position::new(10.0, 0.0), t);
        engine.pointer_move(pointer);
        engine.tick();
        assert_eq!(engine.position(NodeId(1)), Some(pointer));
    }

    let pointer = engine.position(NodeId(1)).unwrap();
    for _ in 0..20 {
        engine.tick();
        assert_eq!(engine.position(NodeId(1)), Some(pointer));
    }
    let gap = pointer.distance(engine.position(NodeId(2)).unwrap());
    assert!(gap > 60.0, "career was not pushed away (gap {gap})");
}

#[test]
fn test_release_glides_back_without_overshoot() {
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "Health", 300.0, 0.0),
            LifeArea::new(2, "Career", 300.0, PI),
        ],
        still(),
    );
    assert!(engine.hold(NodeId(1)));
    engine.move_held(Position::new(0.0, 150.0));
    engine.tick();
    engine.release();

    let mut previous = distance_to_target(&engine, NodeId(1));
    for _ in 0..300 {
        engine.tick();
        let d = distance_to_target(&engine, NodeId(1));
        assert!(d <= previous + 1e-4, "distance grew from {previous} to {d}");
        previous = d;
    }
    assert!(previous < 0.5);
}

#[test]
fn test_release_glide_ends_on_moving_orbit() {
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "Health", 250.0, 0.0),
            LifeArea::new(2, "Career", 250.0, PI),
        ],
        SimulationConfig::default(),
    );
    assert!(engine.hold(NodeId(1)));
    engine.move_held(Position::new(0.0, 100.0));
    engine.tick_orbit();
    engine.release();

    for _ in 0..5000 {
        engine.tick_orbit();
    }

    // Once home, the released node trails its target like every other node.
    let released = distance_to_target(&engine, NodeId(1));
    let untouched = distance_to_target(&engine, NodeId(2));
    assert!(untouched > 1.0);
    assert!(
        (released - untouched).abs() < 0.05,
        "released lag {released}, untouched lag {untouched}"
    );
}

#[test]
fn test_hold_move_release_scenario() {
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "Health", 300.0, 0.0),
            LifeArea::new(2, "Career", 300.0, PI),
        ],
        still(),
    );
    let p = Position::new(0.0, 100.0);

    assert!(engine.hold(NodeId(1)));
    engine.move_held(p);
    engine.tick();
    assert_eq!(engine.position(NodeId(1)), Some(p));

    assert_eq!(engine.release(), Some(NodeId(1)));
    let released = distance_to_target(&engine, NodeId(1));
    for _ in 0..40 {
        engine.tick();
    }
    let remaining = distance_to_target(&engine, NodeId(1));
    assert!(
        remaining < 0.05 * released,
        "{remaining} is not below 5% of {released}"
    );
}

#[test]
fn test_paused_engine_still_drags() {
    let mut engine = engine_with(
        vec![
            LifeArea::new(1, "Health", 300.0, 0.0),
            LifeArea::new(2, "Career", 300.0, PI),
        ],
        SimulationConfig::default(),
    );
    engine.set_paused(true);
    let career = engine.position(NodeId(2));

    engine.hold(NodeId(1));
    engine.move_held(Position::new(12.0, -40.0));
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.position(NodeId(1)), Some(Position::new(12.0, -40.0)));
    assert_eq!(engine.position(NodeId(2)), career);
    assert_eq!(engine.state().global_angle, 0.0);
}

#[test]
fn test_angle_keeps_advancing_while_held() {
    let mut engine = engine_with(
        vec![LifeArea::new(1, "Health", 300.0, 0.0)],
        SimulationConfig {
            orbit_speed: 0.02,
            ..Default::default()
        },
    );
    engine.hold(NodeId(1));
    for _ in 0..10 {
        engine.tick();
    }
    assert!((engine.state().global_angle - 0.2).abs() < 1e-4);
}

// ============================================================================
// Satellites
// ============================================================================

#[test]
fn test_satellites_follow_dragged_parent() {
    let mut engine = engine_with(
        vec![LifeArea::new(1, "Relationships", 200.0, 0.0).with_satellites(["Partner", "Family"])],
        SimulationConfig::default(),
    );
    engine.hold(NodeId(1));
    engine.move_held(Position::new(-50.0, 80.0));
    engine.tick();

    let radius = engine.tuning().satellite_radius;
    let satellites = engine.satellite_positions();
    assert_eq!(satellites.len(), 2);
    for satellite in satellites {
        assert_eq!(satellite.parent, NodeId(1));
        let d = satellite.position.distance(Position::new(-50.0, 80.0));
        assert!((d - radius).abs() < 1e-3);
    }
}
