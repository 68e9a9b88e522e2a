use approx::assert_relative_eq;
use tearable::{Cloth, ClothConfig, Constraint, NoOpStepObserver, Particle, PinMode, Vec2};
use tearable::solver::{integrate_particles, relax_constraints};

fn config(rows: usize, cols: usize) -> ClothConfig<f64> {
    ClothConfig::new()
        .with_grid(rows, cols)
        .with_rest_distance(10.0)
        .with_offset(Vec2::new(100.0, 100.0))
}

#[test]
fn default_grid_size() {
    let cloth: Cloth<f32> = Cloth::new(&ClothConfig::new()).unwrap();
    assert_eq!(cloth.particle_count(), 140 * 140);
    assert_eq!(cloth.constraint_count(), 2 * 140 * 139);
    assert_relative_eq!(cloth.position_at(0, 0).x, 1000.0 / 3.8, epsilon = 1e-3);
    assert_relative_eq!(cloth.position_at(0, 0).y, 100.0);
    assert_relative_eq!(cloth.position_at(1, 2).x, 1000.0 / 3.8 + 8.0, epsilon = 1e-3);
}

#[test]
fn single_pass_after_displacing_center() {
    let mut cloth = Cloth::new(&config(3, 3).with_pin_mode(PinMode::TopRow)).unwrap();
    let before = cloth.positions();
    let home = cloth.position_at(1, 1);
    let offset = Vec2::new(0.0, 40.0);
    cloth.particle_mut(4).pos = home + offset;

    let constraints = cloth.constraints().to_vec();
    let mut particles = cloth.particles().to_vec();
    relax_constraints(&constraints, &mut particles, 1, &mut NoOpStepObserver);

    for index in 0..3 {
        assert_eq!(particles[index].pos, before[index], "pinned particle {} moved", index);
    }
    for index in [3, 5, 7] {
        let moved = particles[index].pos.distance(before[index]);
        assert!(moved > 0.0, "neighbor {} did not react", index);
        assert!(moved < offset.length(), "neighbor {} overshot by {}", index, moved);
    }
    assert!(particles[4].pos.distance(home) < offset.length());

    // First touch of the center comes from pinned particle 1: half of the
    // (50 - 10) stretch is removed, all of it by the center.
    let mut first = cloth.particles().to_vec();
    cloth.constraints()[3].relax(&mut first);
    assert_eq!((cloth.constraints()[3].a, cloth.constraints()[3].b), (1, 4));
    assert_relative_eq!(first[4].pos.y, 130.0, epsilon = 1e-12);
}

#[test]
fn pinned_top_row_drapes_under_force() {
    let config = config(5, 5)
        .with_pin_mode(PinMode::TopRow)
        .with_force(Vec2::new(0.0, 10.0));
    let mut cloth = Cloth::new(&config).unwrap();
    let top: Vec<_> = (0..5).map(|col| cloth.position_at(0, col)).collect();
    let bottom: Vec<_> = (0..5).map(|col| cloth.position_at(4, col)).collect();

    for _ in 0..120 {
        cloth.step(&mut NoOpStepObserver);
    }

    for col in 0..5 {
        assert_eq!(cloth.position_at(0, col), top[col]);
        assert!(
            cloth.position_at(4, col).y > bottom[col].y,
            "bottom row col {} did not drop",
            col
        );
    }
}

#[test]
fn integration_keeps_particles_inside_region() {
    let config = config(4, 4)
        .with_pin_mode(PinMode::None)
        .with_force(Vec2::new(-5000.0, 5000.0))
        .with_bounds(300.0, 200.0);
    let cloth = Cloth::new(&config).unwrap();
    let mut particles = cloth.particles().to_vec();
    for _ in 0..50 {
        integrate_particles(&mut particles, config.force, config.time_step, 300.0, 200.0);
        for p in &particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 300.0, "x out of region: {:?}", p.pos);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 200.0, "y out of region: {:?}", p.pos);
        }
        relax_constraints(cloth.constraints(), &mut particles, config.relaxation_passes, &mut NoOpStepObserver);
    }
}

#[test]
fn relaxation_runs_after_clamp_and_may_leave_region() {
    // Pinned anchor 10 above the floor, free particle on the floor, link
    // wants 20: relaxation pushes the free end through the floor.
    let config = config(1, 2)
        .with_force(Vec2::zero())
        .with_bounds(100.0, 200.0)
        .with_relaxation_passes(1);
    let particles = vec![
        Particle::pinned(Vec2::new(50.0, 190.0)),
        Particle::new(Vec2::new(50.0, 200.0)),
    ];
    let constraints = vec![Constraint::new(0, 1, 20.0)];
    let mut cloth = Cloth::from_parts(particles, constraints, &config).unwrap();

    cloth.step(&mut NoOpStepObserver);

    assert_eq!(cloth.particles()[0].pos, Vec2::new(50.0, 190.0));
    assert_eq!(cloth.particles()[1].pos, Vec2::new(50.0, 205.0));
}

#[test]
fn active_segments_skip_severed() {
    let mut cloth = Cloth::new(&config(2, 2)).unwrap();
    assert_eq!(cloth.active_segments().count(), 4);
    cloth.constraint_mut(0).sever();
    let segments: Vec<_> = cloth.active_segments().collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], (cloth.position_at(0, 0), cloth.position_at(1, 0)));
}

#[test]
fn step_with_overrides_time_step() {
    let config = config(1, 2).with_pin_mode(PinMode::None).with_force(Vec2::new(0.0, 1.0));
    let mut a = Cloth::new(&config).unwrap();
    let mut b = Cloth::new(&config.clone().with_time_step(0.5)).unwrap();
    a.step_with(0.5, &mut NoOpStepObserver);
    b.step(&mut NoOpStepObserver);
    assert_eq!(a.positions(), b.positions());
}
