// Host-side tests for particle spawn, integration, and retirement.

use glam::Vec2;
use trail_core::constants::{MAX_PARTICLES, PX_GRAVITY, PX_LIFE_MIN, PX_LIFE_SPAN};
use trail_core::ParticleSystem;

#[test]
fn spawn_at_cap_is_a_silent_noop() {
    let mut px = ParticleSystem::new(MAX_PARTICLES, 11);
    for _ in 0..MAX_PARTICLES {
        px.spawn(Vec2::new(10.0, 10.0), 200.0);
    }
    assert_eq!(px.count(), MAX_PARTICLES);

    px.spawn(Vec2::new(10.0, 10.0), 200.0);
    assert_eq!(px.count(), MAX_PARTICLES);
}

#[test]
fn life_decrements_by_exactly_one_per_step() {
    let mut px = ParticleSystem::new(8, 5);
    px.spawn(Vec2::ZERO, 180.0);
    let mut expected = px.active()[0].life;
    assert!(expected >= PX_LIFE_MIN);

    for _ in 0..5 {
        px.step();
        expected -= 1;
        assert_eq!(px.active()[0].life, expected);
    }
}

#[test]
fn particle_retires_the_tick_life_reaches_zero() {
    let mut px = ParticleSystem::new(8, 5);
    px.spawn(Vec2::ZERO, 180.0);
    let life = px.active()[0].life;

    for _ in 0..life - 1 {
        px.step();
        assert_eq!(px.count(), 1);
        assert!(px.active()[0].life > 0, "never active with non-positive life");
    }
    px.step();
    assert_eq!(px.count(), 0);
}

#[test]
fn no_negative_life_among_actives_under_churn() {
    let mut px = ParticleSystem::new(16, 99);
    let max_life = PX_LIFE_MIN + PX_LIFE_SPAN as i32 + 1;
    for frame in 0..(max_life * 4) {
        if frame % 3 == 0 {
            px.spawn(Vec2::new(frame as f32, 0.0), 120.0);
        }
        px.step();
        for p in px.active() {
            assert!(p.life > 0);
            assert!(p.life <= p.max_life);
        }
    }
}

#[test]
fn integration_applies_velocity_then_gravity() {
    let mut px = ParticleSystem::new(8, 2);
    px.spawn(Vec2::new(5.0, 5.0), 300.0);
    let before = px.active()[0].clone();

    px.step();
    let after = &px.active()[0];
    // position advances by the pre-step velocity, then the downward bias
    // accrues onto velocity for the next frame
    assert!(after.pos.abs_diff_eq(before.pos + before.vel, 1e-6));
    assert!((after.vel.y - (before.vel.y + PX_GRAVITY)).abs() < 1e-6);
    assert!((after.vel.x - before.vel.x).abs() < 1e-6);
}

#[test]
fn life_fraction_drives_fadeout() {
    let mut px = ParticleSystem::new(8, 4);
    px.spawn(Vec2::ZERO, 60.0);
    assert!((px.active()[0].life_frac() - 1.0).abs() < 1e-6);
    px.step();
    let p = &px.active()[0];
    assert!(p.life_frac() < 1.0);
    assert!(p.life_frac() > 0.0);
}
