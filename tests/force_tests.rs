use approx::assert_relative_eq;
use spring_network::*;

fn at(x: f32, y: f32) -> BodyState {
    BodyState::at_rest(Vec3::new(x, y, 0.0))
}

#[test]
fn stretched_pair_scenario() {
    // A(0,0), B(3,0), rest 1, k = 10, no damping.
    let force = compute_spring_force(
        Some(&at(0.0, 0.0)),
        Some(&at(3.0, 0.0)),
        1.0,
        &SpringSettings::undamped(10.0),
    );

    assert_relative_eq!(force.length(), 20.0, epsilon = 1e-4);
    // Points from B towards A; A receives -force and is pulled towards B.
    assert_relative_eq!(force.x, -20.0, epsilon = 1e-4);
    assert_relative_eq!(force.y, 0.0);
}

#[test]
fn hookes_law_sign_follows_displacement() {
    let a = at(0.0, 0.0);
    let b = at(0.0, 2.0);
    let settings = SpringSettings::undamped(4.0);
    let towards_a = (a.position - b.position).normalize();

    let stretched = compute_spring_force(Some(&a), Some(&b), 1.0, &settings);
    let compressed = compute_spring_force(Some(&a), Some(&b), 3.0, &settings);
    let relaxed = compute_spring_force(Some(&a), Some(&b), 2.0, &settings);

    assert!(stretched.dot(towards_a) > 0.0);
    assert!(compressed.dot(towards_a) < 0.0);
    assert_relative_eq!(relaxed.length(), 0.0, epsilon = 1e-5);
}

#[test]
fn stepped_damped_pairs_conserve_momentum() {
    let settings = SpringSettings::new(25.0, 1.5);
    let mut network = SpringNetwork::with_config(
        NetworkConfig::default()
            .with_settings(settings)
            .with_snap_length(1_000.0),
    );
    let mut bodies = PointMassSet::new();
    let mut pairs = Vec::new();
    for i in 0..8 {
        for j in 0..8 {
            let a = bodies.insert(
                PointMass::new(Vec3::new(i as f32 * 0.7, -(j as f32) * 0.3, 0.0))
                    .with_velocity(Vec3::new(0.2 * j as f32, -0.1 * i as f32, 0.0)),
            );
            let b = bodies.insert(
                PointMass::new(Vec3::new(1.0 + j as f32 * 0.4, i as f32 * 0.5, 0.0))
                    .with_velocity(Vec3::new(-0.3, 0.05 * j as f32, 0.0)),
            );
            network.add_spring(SpringConstraint::new(a, b, 1.25).unwrap());
            pairs.push((a, b));
        }
    }

    let report = network.step(DEFAULT_TIME_STEP, &mut bodies, &SeverInput::inactive());
    assert_eq!(report.removed_count(), 0);

    for (a, b) in pairs {
        let force_a = bodies.get(a).unwrap().force;
        let force_b = bodies.get(b).unwrap().force;
        let expected = compute_spring_force(
            bodies.state(a).as_ref(),
            bodies.state(b).as_ref(),
            1.25,
            &settings,
        );

        assert!(force_a.is_finite() && force_b.is_finite());
        assert_relative_eq!((force_a + force_b).length(), 0.0, epsilon = 1e-4);
        assert_relative_eq!((force_b - expected).length(), 0.0, epsilon = 1e-4);
    }
}

#[test]
fn damping_opposes_separation_along_axis() {
    let a = BodyState::new(Vec3::ZERO, Vec3::new(-1.0, 0.0, 0.0));
    let b = BodyState::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    // At rest length, so only damping contributes.
    let force = compute_spring_force(Some(&a), Some(&b), 2.0, &SpringSettings::new(10.0, 0.5));

    // Bodies separating: A is pushed towards B (+X) via -force.
    assert_relative_eq!(-force.x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(force.y, 0.0);
}

#[test]
fn missing_or_coincident_bodies_give_zero() {
    let settings = SpringSettings::default();
    assert_eq!(compute_spring_force(None, None, 1.0, &settings), Vec3::ZERO);
    assert_eq!(
        compute_spring_force(Some(&at(1.0, 1.0)), Some(&at(1.0, 1.0)), 1.0, &settings),
        Vec3::ZERO
    );
}

#[test]
fn spring_force_reads_from_body_set() {
    let mut bodies = PointMassSet::new();
    let a = bodies.insert(PointMass::new(Vec3::ZERO));
    let b = bodies.insert(PointMass::new(Vec3::new(0.0, 4.0, 0.0)));
    let spring = SpringConstraint::new(a, b, 1.0).unwrap();

    let force = spring_force(&bodies, &spring, &SpringSettings::undamped(2.0));
    assert_relative_eq!(force.y, -6.0, epsilon = 1e-5);

    bodies.remove(b);
    assert_eq!(spring_force(&bodies, &spring, &SpringSettings::undamped(2.0)), Vec3::ZERO);
}
