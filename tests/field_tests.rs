// Host-side tests for the particle field engine.

mod support;

use glam::DVec2;
use site_backdrop::core::{FieldConfig, Particle, ParticleField};
use support::{particle, DrawCall, FlakyCircleSurface, RecordingSurface};

fn config_with_count(count: usize) -> FieldConfig {
    FieldConfig {
        wide_count: count,
        narrow_count: count,
        ..FieldConfig::default()
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn target_count_follows_breakpoint() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.target_count(320.0), 40);
    assert_eq!(cfg.target_count(767.9), 40);
    assert_eq!(cfg.target_count(768.0), 80);
    assert_eq!(cfg.target_count(1920.0), 80);
}

#[test]
fn new_field_is_populated_within_bounds() {
    let field = ParticleField::new(FieldConfig::default(), 1200.0, 800.0, 7);
    assert_eq!(field.particles().len(), 80);
    for p in field.particles() {
        assert!(field.bounds().contains(p.position));
        assert!(p.radius >= 1.0 && p.radius < 3.0);
        assert!(p.velocity.x >= -0.2 && p.velocity.x < 0.2);
        assert!(p.velocity.y >= -0.2 && p.velocity.y < 0.2);
        assert_eq!(p.color, field.config().particle_color);
    }
    assert!(field.pointer().position.is_none());
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::new(FieldConfig::default(), 1000.0, 800.0, 42);
    let b = ParticleField::new(FieldConfig::default(), 1000.0, 800.0, 42);
    assert_eq!(a.particles(), b.particles());
    let c = ParticleField::new(FieldConfig::default(), 1000.0, 800.0, 43);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn resize_regenerates_with_threshold_count() {
    let mut field = ParticleField::new(FieldConfig::default(), 1200.0, 800.0, 3);
    let before: Vec<Particle> = field.particles().to_vec();

    field.handle_resize(500.0, 900.0);
    assert_eq!(field.particles().len(), 40);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 500.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 900.0);
    }

    field.handle_resize(1200.0, 800.0);
    assert_eq!(field.particles().len(), 80);
    assert_ne!(field.particles(), &before[..]);
}

#[test]
fn zero_sized_surface_collapses_to_origin() {
    let mut field = ParticleField::new(FieldConfig::default(), 0.0, 0.0, 9);
    assert_eq!(field.particles().len(), 40);
    for p in field.particles() {
        assert_eq!(p.position, DVec2::ZERO);
    }
    let mut surface = RecordingSurface::default();
    field.tick(&mut surface).unwrap();
    assert_eq!(surface.clears(), 1);

    field.handle_resize(1024.0, 768.0);
    assert_eq!(field.particles().len(), 80);
    assert!(field
        .particles()
        .iter()
        .all(|p| field.bounds().contains(p.position)));
}

#[test]
fn empty_field_only_clears() {
    let mut field = ParticleField::new(config_with_count(0), 1000.0, 800.0, 1);
    let mut surface = RecordingSurface::default();
    for _ in 0..3 {
        field.tick(&mut surface).unwrap();
    }
    assert_eq!(
        surface.calls,
        vec![
            DrawCall::Clear {
                width: 1000.0,
                height: 800.0
            };
            3
        ]
    );
}

#[test]
fn tick_draws_particles_and_nearby_connections() {
    let particles = vec![
        particle(100.0, 100.0, 0.0, 0.0),
        particle(200.0, 100.0, 0.0, 0.0),
        particle(500.0, 500.0, 0.0, 0.0),
    ];
    let mut field = ParticleField::with_particles(
        FieldConfig::default(),
        1000.0,
        800.0,
        particles,
        0,
    );
    let mut surface = RecordingSurface::default();
    field.tick(&mut surface).unwrap();

    assert_eq!(surface.clears(), 1);
    assert_eq!(surface.circles().len(), 3);
    let lines = surface.lines();
    assert_eq!(lines.len(), 1, "only the close pair connects, no self-pairs");
    match lines[0] {
        DrawCall::Line {
            from,
            to,
            color,
            width,
        } => {
            assert_eq!(*from, DVec2::new(100.0, 100.0));
            assert_eq!(*to, DVec2::new(200.0, 100.0));
            assert_eq!((color.r, color.g, color.b), (0, 212, 255));
            assert!((color.a - (1.0 - 100.0 / 150.0) as f32 * 0.2).abs() < 1e-6);
            assert_eq!(*width, 1.0);
        }
        other => panic!("unexpected call {other:?}"),
    }
    // The first particle's circle precedes its connection line.
    assert!(matches!(surface.calls[1], DrawCall::Circle { .. }));
    assert!(matches!(surface.calls[2], DrawCall::Line { .. }));
}

#[test]
fn scenario_two_particles_reflect_on_later_tick() {
    let cfg = config_with_count(2);
    assert_eq!(
        ParticleField::new(cfg.clone(), 1000.0, 800.0, 42)
            .particles()
            .len(),
        2
    );

    let mut field = ParticleField::with_particles(
        cfg,
        1000.0,
        800.0,
        vec![
            particle(999.0, 400.0, 0.3, 0.0),
            particle(1.0, 400.0, -0.3, 0.0),
        ],
        42,
    );
    let mut surface = RecordingSurface::default();

    field.tick(&mut surface).unwrap();
    let [p1, p2] = [field.particles()[0], field.particles()[1]];
    assert_close(p1.position.x, 999.3);
    assert_close(p1.position.y, 400.0);
    assert_close(p1.velocity.x, 0.3);
    assert_close(p2.position.x, 0.7);
    assert_close(p2.velocity.x, -0.3);
    assert!(surface.lines().is_empty());

    field.tick(&mut surface).unwrap();
    field.tick(&mut surface).unwrap();
    assert!(field.particles()[0].velocity.x > 0.0);
    field.tick(&mut surface).unwrap();
    let p1 = field.particles()[0];
    assert!(p1.position.x > 1000.0);
    assert_close(p1.velocity.x, -0.3);
    assert_close(field.particles()[1].velocity.x, 0.3);
}

#[test]
fn absent_pointer_leaves_pure_reflection_physics() {
    let start = vec![
        particle(10.0, 10.0, -0.2, 0.15),
        particle(500.0, 400.0, 0.1, -0.1),
        particle(990.0, 790.0, 0.2, 0.2),
    ];
    let mut field =
        ParticleField::with_particles(FieldConfig::default(), 1000.0, 800.0, start.clone(), 5);
    let mut expected = start;
    let mut surface = RecordingSurface::default();
    for _ in 0..500 {
        field.tick(&mut surface).unwrap();
        for p in &mut expected {
            p.advance(field.bounds());
        }
    }
    assert_eq!(field.particles(), &expected[..]);
}

#[test]
fn pointer_out_of_reach_matches_no_pointer() {
    let start = vec![
        particle(100.0, 100.0, 0.1, 0.1),
        particle(150.0, 120.0, -0.1, 0.05),
    ];
    let mut with_pointer =
        ParticleField::with_particles(FieldConfig::default(), 1000.0, 800.0, start.clone(), 5);
    let mut without =
        ParticleField::with_particles(FieldConfig::default(), 1000.0, 800.0, start, 5);
    with_pointer.handle_pointer_move(900.0, 700.0);

    let mut surface = RecordingSurface::default();
    for _ in 0..50 {
        with_pointer.tick(&mut surface).unwrap();
        without.tick(&mut surface).unwrap();
    }
    assert_eq!(with_pointer.particles(), without.particles());
}

#[test]
fn pointer_move_is_recorded_without_drawing() {
    let mut field = ParticleField::new(FieldConfig::default(), 1000.0, 800.0, 11);
    field.handle_pointer_move(320.0, 240.0);
    assert_eq!(field.pointer().position, Some(DVec2::new(320.0, 240.0)));
    assert_eq!(field.pointer().radius, 150.0);
}

#[test]
fn pointer_repels_particle_within_radius_during_tick() {
    let mut field = ParticleField::with_particles(
        FieldConfig::default(),
        1000.0,
        800.0,
        vec![particle(500.0, 400.0, 0.0, 0.0)],
        0,
    );
    field.handle_pointer_move(490.0, 395.0);
    let mut surface = RecordingSurface::default();
    field.tick(&mut surface).unwrap();
    assert_eq!(field.particles()[0].position, DVec2::new(501.0, 401.0));
    field.tick(&mut surface).unwrap();
    assert_eq!(field.particles()[0].position, DVec2::new(502.0, 402.0));
}

#[test]
fn draw_error_still_finishes_the_frame() {
    let mut field = ParticleField::with_particles(
        FieldConfig::default(),
        1000.0,
        800.0,
        vec![
            particle(100.0, 100.0, 1.0, 0.0),
            particle(120.0, 100.0, 0.0, 1.0),
            particle(140.0, 100.0, -1.0, 0.0),
        ],
        0,
    );
    field.handle_pointer_move(150.0, 110.0);
    let mut surface = FlakyCircleSurface::new(0);

    let err = field.tick(&mut surface).unwrap_err();
    assert_eq!(err.to_string(), "circle 0 failed");

    // Every particle was still drawn, connected and moved.
    assert_eq!(surface.circles, 3);
    assert_eq!(surface.lines, 3);
    let positions: Vec<DVec2> = field.particles().iter().map(|p| p.position).collect();
    assert_eq!(
        positions,
        vec![
            DVec2::new(100.0, 99.0),
            DVec2::new(119.0, 100.0),
            DVec2::new(138.0, 99.0),
        ]
    );
}
