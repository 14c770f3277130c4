use approx::assert_abs_diff_eq;

use boxfall_engine::collision::{check_all_pairs, check_pair, overlaps, CollisionSettings};
use boxfall_engine::integrator::{advance, advance_all, TimeStep};
use boxfall_engine::rigid_body::{Rgba, RigidBody, Vec2};
use boxfall_engine::SimError;

fn square(x: f32, y: f32) -> RigidBody {
    RigidBody::new_rect(x, y, 50.0, 50.0, 0).unwrap()
}

fn settings() -> CollisionSettings {
    CollisionSettings { flash_step: 50, parallel_threshold: usize::MAX }
}

#[test]
fn overlapping_squares_flash_once() {
    let mut bodies = vec![square(0.0, 0.0), square(40.0, 0.0)];
    assert!(overlaps(&bodies[0], &bodies[1]));

    check_all_pairs(&mut bodies, &settings());

    assert_eq!(bodies[0].color(), Rgba::new(50, 50, 50, 255));
    assert_eq!(bodies[1].color(), Rgba::new(50, 50, 50, 255));
}

#[test]
fn edge_touching_squares_do_not_flash() {
    let mut bodies = vec![square(0.0, 0.0), square(50.0, 0.0)];
    assert!(!overlaps(&bodies[0], &bodies[1]));

    let contacts = check_all_pairs(&mut bodies, &settings());

    assert!(contacts.is_empty());
    assert!(bodies.iter().all(|b| b.color() == Rgba::BASELINE));
}

#[test]
fn falling_body_after_one_tenth_second() {
    let mut body = square(0.0, 0.0).with_acceleration(Vec2::new(0.0, 200.0)).unwrap();
    advance(&mut body, TimeStep::new(0.1).unwrap());

    assert_abs_diff_eq!(body.velocity().x, 0.0);
    assert_abs_diff_eq!(body.velocity().y, 20.0, epsilon = 1e-4);
    assert_abs_diff_eq!(body.pos().x, 0.0);
    assert_abs_diff_eq!(body.pos().y, 2.0, epsilon = 1e-5);
}

#[test]
fn negative_dt_never_reaches_bodies() {
    assert_eq!(TimeStep::new(-0.1).unwrap_err(), SimError::InvalidTimeStep { dt: -0.1 });
}

#[test]
fn degenerate_bodies_are_refused() {
    assert!(matches!(
        RigidBody::new_rect(0.0, 0.0, 0.0, 50.0, 0),
        Err(SimError::DegenerateBody { .. })
    ));
}

#[test]
fn frame_order_resets_then_flashes() {
    let mut bodies = vec![square(0.0, 0.0), square(40.0, 0.0), square(20.0, 20.0)];

    // Run several frames on static bodies: colour must not creep upward.
    for _ in 0..5 {
        advance_all(&mut bodies, TimeStep::new(0.016).unwrap());
        assert!(bodies.iter().all(|b| b.color() == Rgba::BASELINE));
        check_all_pairs(&mut bodies, &settings());
    }

    // Every square overlaps the other two.
    for b in &bodies {
        assert_eq!(b.color(), Rgba::new(100, 100, 100, 255));
    }
}

#[test]
fn k_contacts_give_k_flashes_regardless_of_order() {
    let hub = RigidBody::new_rect(0.0, 0.0, 100.0, 100.0, 0).unwrap();
    let spokes: Vec<RigidBody> = (0..4)
        .map(|i| RigidBody::new_rect(i as f32 * 30.0, 90.0, 20.0, 20.0, i + 1).unwrap())
        .collect();

    let mut forward = vec![hub.clone()];
    forward.extend(spokes.iter().cloned());
    check_all_pairs(&mut forward, &settings());

    let mut reversed: Vec<RigidBody> = spokes.iter().rev().cloned().collect();
    reversed.push(hub);
    check_all_pairs(&mut reversed, &settings());

    assert_eq!(forward[0].color(), Rgba::new(200, 200, 200, 255));
    assert_eq!(reversed[4].color(), forward[0].color());
}

#[test]
fn check_pair_is_symmetric_in_effect() {
    let (mut a1, mut b1) = (square(0.0, 0.0), square(10.0, 10.0));
    let (mut a2, mut b2) = (a1.clone(), b1.clone());

    assert!(check_pair(&mut a1, &mut b1, 50));
    assert!(check_pair(&mut b2, &mut a2, 50));
    assert_eq!((a1.color(), b1.color()), (a2.color(), b2.color()));
}
