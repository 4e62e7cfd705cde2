// Tests for the bistable height animator and its easing curve.

use configurator_core::*;
use glam::{Vec2, Vec3};
use std::time::Duration;

const TOTAL: Duration = Duration::from_millis(1000);

/// A region that answers with a fixed result, independent of the ray.
struct Fixed(bool);

impl InteractionRegion for Fixed {
    fn intersect(&self, _ray: &Ray) -> Option<f32> {
        self.0.then_some(1.0)
    }
}

fn camera() -> Camera {
    Camera::new(16.0 / 9.0, 56.0)
}

fn hovering_animator() -> BistableAnimator {
    let mut a = BistableAnimator::new(TOTAL);
    assert!(a.register_pointer_move(Vec2::ZERO, &camera(), &Fixed(true)));
    a
}

#[test]
fn ease_hits_endpoints_and_midpoint_exactly() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(0.5), 0.5);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
}

#[test]
fn ease_is_monotonic_and_clamped() {
    let mut prev = ease_in_out_quad(0.0);
    for i in 1..=100 {
        let e = ease_in_out_quad(i as f32 / 100.0);
        assert!(e >= prev, "ease decreased at step {i}");
        prev = e;
    }
    assert_eq!(ease_in_out_quad(-3.0), 0.0);
    assert_eq!(ease_in_out_quad(7.0), 1.0);
    assert_eq!(ease_in_out_quad(f32::NAN), 0.0);
    assert!((ease_in_out_quad(0.25) - 0.125).abs() < 1e-6);
    assert!((ease_in_out_quad(0.75) - 0.875).abs() < 1e-6);
}

#[test]
fn starts_idle_at_zero() {
    let a = BistableAnimator::new(TOTAL);
    assert_eq!(a.value(), 0.0);
    assert_eq!(a.phase(), Phase::Idle);
    assert!(!a.is_hovering());
}

#[test]
fn pointer_move_alone_never_animates() {
    let mut a = hovering_animator();
    a.update(Duration::from_millis(300));
    assert_eq!(a.phase(), Phase::Idle);
    assert_eq!(a.value(), 0.0);
}

#[test]
fn pointer_miss_clears_hover() {
    let mut a = hovering_animator();
    assert!(!a.register_pointer_move(Vec2::ZERO, &camera(), &Fixed(false)));
    assert!(!a.is_hovering());
}

#[test]
fn click_without_hover_changes_nothing() {
    let mut a = BistableAnimator::new(TOTAL);
    let before = a.scalar().clone();
    assert!(!a.register_click());
    assert_eq!(a.scalar(), &before);

    // also mid-animation
    let mut a = hovering_animator();
    a.register_click();
    a.update(Duration::from_millis(200));
    a.register_pointer_move(Vec2::ZERO, &camera(), &Fixed(false));
    let before = a.scalar().clone();
    assert!(!a.register_click());
    assert_eq!(a.scalar(), &before);
}

#[test]
fn full_toggle_up_then_down() {
    let mut a = hovering_animator();
    assert!(a.register_click());
    assert_eq!(a.phase(), Phase::Animating);
    assert_eq!(a.target(), 1.0);
    assert_eq!(a.elapsed(), Duration::ZERO);

    a.update(Duration::from_millis(500));
    assert_eq!(a.value(), ease_in_out_quad(0.5));
    assert_eq!(a.value(), 0.5);

    a.update(Duration::from_millis(500));
    assert_eq!(a.value(), 1.0);
    assert_eq!(a.phase(), Phase::Idle);

    a.on_trigger();
    assert_eq!(a.target(), 0.0);
    a.update(Duration::from_millis(1000));
    assert_eq!(a.value(), 0.0);
    assert_eq!(a.phase(), Phase::Idle);
}

#[test]
fn uneven_steps_summing_to_total_land_exactly() {
    let steps = [1u64, 16, 17, 250, 3, 400, 13, 300];
    assert_eq!(steps.iter().sum::<u64>(), 1000);
    for start_high in [false, true] {
        let mut a = BistableAnimator::new(TOTAL);
        if start_high {
            a.on_trigger();
            a.update(TOTAL);
            assert_eq!(a.value(), 1.0);
        }
        a.on_trigger();
        let target = a.target();
        for (i, ms) in steps.iter().enumerate() {
            assert_eq!(a.phase(), Phase::Animating, "settled early at step {i}");
            a.update(Duration::from_millis(*ms));
            assert!((0.0..=1.0).contains(&a.value()));
        }
        assert_eq!(a.value(), target);
        assert_eq!(a.phase(), Phase::Idle);
    }
}

#[test]
fn overshooting_step_is_clamped() {
    let mut a = BistableAnimator::new(TOTAL);
    a.on_trigger();
    a.update(Duration::from_secs(30));
    assert_eq!(a.elapsed(), TOTAL);
    assert_eq!(a.value(), 1.0);
    assert_eq!(a.phase(), Phase::Idle);
}

#[test]
fn double_trigger_is_idempotent() {
    let mut once = BistableAnimator::new(TOTAL);
    once.on_trigger();
    let mut twice = BistableAnimator::new(TOTAL);
    twice.on_trigger();
    twice.on_trigger();
    assert_eq!(once.scalar(), twice.scalar());
    assert_eq!(twice.target(), 1.0);
    assert_eq!(twice.elapsed(), Duration::ZERO);
}

#[test]
fn retrigger_while_descending_is_a_no_op() {
    let mut a = BistableAnimator::new(TOTAL);
    a.on_trigger();
    a.update(TOTAL);
    assert_eq!(a.value(), 1.0);

    a.on_trigger();
    assert_eq!(a.target(), 0.0);
    a.update(Duration::from_millis(300));
    let before = a.scalar().clone();
    assert!(before.value > 0.0 && before.value < 1.0);

    a.on_trigger();
    assert_eq!(a.scalar(), &before);
    assert_eq!(a.target(), 0.0);
    assert_eq!(a.elapsed(), Duration::from_millis(300));
    assert_eq!(a.phase(), Phase::Animating);
}

#[test]
fn retrigger_reverses_from_live_value() {
    let mut a = BistableAnimator::new(TOTAL);
    a.on_trigger();
    a.update(Duration::from_millis(300));
    let v = a.value();
    assert!(v > 0.0 && v < 1.0);

    a.on_trigger();
    assert_eq!(a.target(), 0.0);
    assert_eq!(a.elapsed(), Duration::ZERO);
    assert_eq!(a.phase(), Phase::Animating);
    assert_eq!(a.value(), v, "reversal must not teleport");
    assert_eq!(a.scalar().start_value, v);

    a.update(Duration::from_millis(100));
    let expected = v + (0.0 - v) * ease_in_out_quad(0.1);
    assert!((a.value() - expected).abs() < 1e-6);
    assert!(a.value() < v);

    // snap-back still takes the full nominal duration
    a.update(Duration::from_millis(899));
    assert_eq!(a.phase(), Phase::Animating);
    a.update(Duration::from_millis(1));
    assert_eq!(a.value(), 0.0);
    assert_eq!(a.phase(), Phase::Idle);
}

#[test]
fn negative_and_non_finite_seconds_make_no_progress() {
    let mut a = BistableAnimator::new(TOTAL);
    a.on_trigger();
    a.update_secs(0.25);
    let elapsed = a.elapsed();
    let value = a.value();
    for dt in [-0.5, -f32::INFINITY, f32::NAN, f32::INFINITY, 0.0] {
        a.update_secs(dt);
        assert_eq!(a.elapsed(), elapsed, "dt {dt} moved elapsed");
        assert_eq!(a.value(), value);
    }
}

#[test]
fn seconds_front_door_finishes_exactly() {
    let mut a = BistableAnimator::new(TOTAL);
    a.on_trigger();
    for _ in 0..59 {
        a.update_secs(1.0 / 60.0);
        assert!((0.0..=1.0).contains(&a.value()));
    }
    a.update_secs(1.0 / 60.0);
    a.update_secs(1.0 / 60.0);
    assert_eq!(a.value(), 1.0);
    assert_eq!(a.phase(), Phase::Idle);
}

#[test]
fn value_stays_in_unit_range_under_mixed_input() {
    let mut a = BistableAnimator::new(Duration::from_millis(250));
    let dts = [0.016, -1.0, 0.5, 0.001, f32::NAN, 0.07, 0.2, 0.033];
    for round in 0..40 {
        if round % 3 == 0 {
            a.on_trigger();
        }
        a.update_secs(dts[round % dts.len()]);
        let v = a.value();
        assert!((0.0..=1.0).contains(&v), "value {v} escaped at round {round}");
        assert!(a.elapsed() <= a.scalar().total_duration);
    }
}

#[test]
fn zero_duration_settles_on_next_update() {
    let mut a = BistableAnimator::new(Duration::ZERO);
    a.on_trigger();
    assert_eq!(a.phase(), Phase::Animating);
    a.update(Duration::ZERO);
    assert_eq!(a.value(), 1.0);
    assert_eq!(a.phase(), Phase::Idle);
}

#[test]
fn pointer_move_uses_camera_ray() {
    let cam = camera();
    let region = SphereRegion {
        center: Vec3::new(1.0, 0.5, 0.0),
        radius: 0.2,
    };
    let mut a = BistableAnimator::new(TOTAL);
    let Some(ndc) = cam.world_to_ndc(region.center) else {
        panic!("region should be in front of the camera");
    };
    assert!(a.register_pointer_move(ndc, &cam, &region));
    assert!(!a.register_pointer_move(-ndc, &cam, &region));
}
