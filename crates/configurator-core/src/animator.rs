//! Bistable parameter animation driven by pointer picking.
//!
//! One scalar rests at either `0` or `1`. Hovering the interaction region arms
//! a click; a click eases the scalar toward the opposite endpoint over a fixed
//! duration. A click mid-flight reverses from the live value.

use crate::camera::{Camera, Ray};
use crate::easing::{ease_in_out_quad, lerp};
use crate::picking::InteractionRegion;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Animating,
}

/// The animated parameter and the progress of its current transition.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedScalar {
    pub value: f32,
    pub target: f32,
    pub start_value: f32,
    pub phase: Phase,
    pub elapsed: Duration,
    pub total_duration: Duration,
}

impl AnimatedScalar {
    pub fn new(total_duration: Duration) -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            start_value: 0.0,
            phase: Phase::Idle,
            elapsed: Duration::ZERO,
            total_duration,
        }
    }

    /// Normalized progress of the current transition in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.total_duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.total_duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

pub struct BistableAnimator {
    scalar: AnimatedScalar,
    is_hovering: bool,
}

impl BistableAnimator {
    pub fn new(total_duration: Duration) -> Self {
        Self {
            scalar: AnimatedScalar::new(total_duration),
            is_hovering: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.scalar.value
    }

    pub fn target(&self) -> f32 {
        self.scalar.target
    }

    pub fn phase(&self) -> Phase {
        self.scalar.phase
    }

    pub fn elapsed(&self) -> Duration {
        self.scalar.elapsed
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    pub fn scalar(&self) -> &AnimatedScalar {
        &self.scalar
    }

    /// Re-test the cursor against `region` and remember the result. Never
    /// starts an animation on its own.
    pub fn register_pointer_move<R>(&mut self, cursor_ndc: Vec2, camera: &Camera, region: &R) -> bool
    where
        R: InteractionRegion + ?Sized,
    {
        let ray = camera.ray_through_ndc(cursor_ndc);
        self.register_ray(&ray, region)
    }

    pub fn register_ray<R>(&mut self, ray: &Ray, region: &R) -> bool
    where
        R: InteractionRegion + ?Sized,
    {
        let hovering = cursor_is_finite(ray) && region.intersect(ray).is_some();
        if hovering != self.is_hovering {
            log::debug!("[hover] {}", if hovering { "enter" } else { "leave" });
        }
        self.is_hovering = hovering;
        hovering
    }

    pub fn clear_hover(&mut self) {
        self.is_hovering = false;
    }

    /// Trigger only if the last pointer move hit the region.
    pub fn register_click(&mut self) -> bool {
        if !self.is_hovering {
            return false;
        }
        self.on_trigger();
        true
    }

    pub fn on_trigger(&mut self) {
        let s = &mut self.scalar;
        let target = if s.value > 0.0 { 0.0 } else { 1.0 };
        if s.phase == Phase::Animating && s.target == target {
            return;
        }
        log::info!(
            "[toggle] height {:.3} -> {}{}",
            s.value,
            target,
            if s.phase == Phase::Animating { " (reversed)" } else { "" }
        );
        s.start_value = s.value;
        s.target = target;
        s.elapsed = Duration::ZERO;
        s.phase = Phase::Animating;
    }

    /// Advance by one frame.
    pub fn update(&mut self, dt: Duration) {
        let s = &mut self.scalar;
        if s.phase == Phase::Idle {
            return;
        }
        s.elapsed = s.elapsed.saturating_add(dt).min(s.total_duration);
        if s.elapsed >= s.total_duration {
            s.value = s.target;
            s.start_value = s.target;
            s.phase = Phase::Idle;
            log::debug!("[toggle] settled at {}", s.target);
            return;
        }
        let eased = ease_in_out_quad(s.progress());
        s.value = lerp(s.start_value, s.target, eased).clamp(0.0, 1.0);
    }

    /// Frame-loop entry point taking seconds. Negative or non-finite deltas
    /// count as no progress.
    pub fn update_secs(&mut self, dt_sec: f32) {
        if self.scalar.phase == Phase::Idle {
            return;
        }
        let remaining = self.scalar.total_duration.saturating_sub(self.scalar.elapsed);
        let dt = if !dt_sec.is_finite() || dt_sec <= 0.0 {
            Duration::ZERO
        } else if dt_sec >= remaining.as_secs_f32() {
            remaining
        } else {
            Duration::from_secs_f32(dt_sec)
        };
        self.update(dt);
    }
}

fn cursor_is_finite(ray: &Ray) -> bool {
    ray.origin.is_finite() && ray.direction.is_finite() && ray.direction != glam::Vec3::ZERO
}
