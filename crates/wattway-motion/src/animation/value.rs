//! A single animated channel.

use super::curve::{step_spring, Curve, StepSettings};
use super::interpolate::Animatable;
use crate::error::{MotionError, Result};

/// One animated property channel: where it is, where it is going, and how.
///
/// Retargeting never moves `current`. A spring keeps its velocity across a
/// retarget, so the trajectory stays continuous; a timing curve restarts from
/// `current` with no velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue<T: Animatable> {
    current: T,
    target: T,
    velocity: T,
    curve: Curve,
    settled: bool,
    /// Start point of the active timing curve.
    origin: T,
    /// Seconds since the last retarget.
    elapsed: f64,
}

impl<T: Animatable> AnimatedValue<T> {
    /// A value resting at `initial`.
    pub fn new(initial: T, curve: Curve) -> Self {
        Self {
            current: initial,
            target: initial,
            velocity: T::ZERO,
            curve,
            settled: true,
            origin: initial,
            elapsed: 0.0,
        }
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn velocity(&self) -> T {
        self.velocity
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Aim at a new target along `curve`.
    ///
    /// A non-finite target or an invalid curve is rejected and the value keeps
    /// its previous state. Retargeting to the same target and curve is a no-op,
    /// so an in-flight timing curve is not restarted.
    pub fn retarget(&mut self, target: T, curve: Curve) -> Result<()> {
        if !target.all_finite() {
            return Err(MotionError::invalid_target(format!(
                "non-finite target {target:?}"
            )));
        }
        if !curve.is_valid() {
            return Err(MotionError::invalid_target(format!(
                "invalid curve {curve:?}"
            )));
        }
        if target == self.target && curve == self.curve {
            return Ok(());
        }

        self.target = target;
        self.curve = curve;
        self.origin = self.current;
        self.elapsed = 0.0;

        match curve {
            Curve::Spring(_) => {
                self.settled = self.current == target && self.velocity.max_abs() == 0.0;
            }
            Curve::Timing(timing) => {
                self.velocity = T::ZERO;
                if timing.progress(0.0).is_none() || self.current == target {
                    self.current = target;
                    self.settled = true;
                } else {
                    self.settled = false;
                }
            }
        }
        Ok(())
    }

    /// Jump straight to `value` and rest there.
    pub fn snap_to(&mut self, value: T) -> Result<()> {
        if !value.all_finite() {
            return Err(MotionError::invalid_target(format!(
                "non-finite value {value:?}"
            )));
        }
        self.current = value;
        self.target = value;
        self.origin = value;
        self.velocity = T::ZERO;
        self.elapsed = 0.0;
        self.settled = true;
        Ok(())
    }

    /// Advance by `dt` seconds. Returns whether `current` changed.
    pub fn advance(&mut self, dt: f64, settings: &StepSettings) -> bool {
        if self.settled || dt <= 0.0 {
            return false;
        }
        let previous = self.current;

        match self.curve {
            Curve::Spring(spring) => {
                let step = step_spring(
                    self.current,
                    self.velocity,
                    self.target,
                    &spring,
                    dt,
                    settings,
                );
                self.current = step.position;
                self.velocity = step.velocity;
                self.settled = step.settled;
            }
            Curve::Timing(timing) => {
                self.elapsed += dt;
                match timing.progress(self.elapsed) {
                    Some(p) => self.current = self.origin.interpolate(self.target, p),
                    None => {
                        self.current = self.target;
                        self.settled = true;
                    }
                }
            }
        }

        self.current != previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::easing::Easing;
    use crate::animation::curve::TimingConfig;
    use crate::theme::Color;

    const FRAME: f64 = 1.0 / 60.0;

    fn settings() -> StepSettings {
        StepSettings::default()
    }

    #[test]
    fn test_new_value_is_settled() {
        let value = AnimatedValue::new(1.0, Curve::spring(15.0, 300.0));
        assert!(value.is_settled());
        assert_eq!(value.current(), 1.0);
    }

    #[test]
    fn test_retarget_keeps_current() {
        let mut value = AnimatedValue::new(1.0, Curve::spring(15.0, 300.0));
        value.retarget(0.96, Curve::spring(15.0, 300.0)).unwrap();
        assert_eq!(value.current(), 1.0);
        assert!(!value.is_settled());
    }

    #[test]
    fn test_spring_retarget_keeps_velocity() {
        let spring = Curve::spring(15.0, 300.0);
        let mut value = AnimatedValue::new(1.0, spring);
        value.retarget(0.96, spring).unwrap();
        for _ in 0..3 {
            value.advance(FRAME, &settings());
        }
        let before = value.current();
        let velocity = value.velocity();
        assert!(velocity < 0.0);

        value.retarget(1.0, spring).unwrap();
        assert_eq!(value.current(), before);
        assert_eq!(value.velocity(), velocity);

        // The next tick still moves downward: momentum carries through.
        value.advance(FRAME, &settings());
        assert!(value.current() < before);
        assert!((value.current() - before).abs() < 0.01);
    }

    #[test]
    fn test_timing_settles_exactly_at_duration() {
        let timing = Curve::Timing(TimingConfig::new(200.0).with_easing(Easing::Linear));
        let mut value = AnimatedValue::new(1.0, timing);
        value.retarget(0.6, timing).unwrap();

        for _ in 0..3 {
            value.advance(0.05, &settings());
            assert!(!value.is_settled());
        }
        assert!((value.current() - 0.7).abs() < 1e-9);

        value.advance(0.05, &settings());
        assert!(value.is_settled());
        assert_eq!(value.current(), 0.6);
        assert!(!value.advance(0.05, &settings()));
    }

    #[test]
    fn test_timing_retarget_restarts_from_current() {
        let timing = Curve::Timing(TimingConfig::new(100.0).with_easing(Easing::Linear));
        let mut value = AnimatedValue::new(0.0, timing);
        value.retarget(1.0, timing).unwrap();
        value.advance(0.05, &settings());
        let midway = value.current();

        value.retarget(0.0, timing).unwrap();
        assert_eq!(value.current(), midway);
        value.advance(0.05, &settings());
        assert!((value.current() - midway / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let mut value = AnimatedValue::new(0.0, Curve::timing(150.0));
        value.retarget(1.0, Curve::timing(0.0)).unwrap();
        assert!(value.is_settled());
        assert_eq!(value.current(), 1.0);
    }

    #[test]
    fn test_non_finite_target_rejected() {
        let mut value = AnimatedValue::new(1.0, Curve::spring(15.0, 300.0));
        value.retarget(0.5, Curve::spring(15.0, 300.0)).unwrap();
        value.advance(FRAME, &settings());
        let snapshot = value.clone();

        let err = value.retarget(f64::NAN, Curve::spring(15.0, 300.0)).unwrap_err();
        assert!(matches!(err, MotionError::InvalidAnimationTarget { .. }));
        assert_eq!(value, snapshot);

        assert!(value.retarget(f64::INFINITY, Curve::timing(100.0)).is_err());
        assert_eq!(value, snapshot);
    }

    #[test]
    fn test_same_target_does_not_restart_timing() {
        let timing = Curve::Timing(TimingConfig::new(100.0).with_easing(Easing::Linear));
        let mut value = AnimatedValue::new(0.0, timing);
        value.retarget(1.0, timing).unwrap();
        value.advance(0.05, &settings());
        value.retarget(1.0, timing).unwrap();
        value.advance(0.05, &settings());
        assert!(value.is_settled());
    }

    #[test]
    fn test_color_timing() {
        let white = Color::from_array([1.0, 1.0, 1.0, 1.0]);
        let timing = Curve::Timing(TimingConfig::new(200.0).with_easing(Easing::Linear));
        let mut value = AnimatedValue::new(Color::TRANSPARENT, timing);
        value.retarget(white, timing).unwrap();
        value.advance(0.1, &settings());
        let mid = value.current().to_array();
        assert!((mid[3] - 0.5).abs() < 1e-6);

        value.advance(0.1, &settings());
        assert_eq!(value.current(), white);
    }

    #[test]
    fn test_snap_to() {
        let mut value = AnimatedValue::new(0.0, Curve::spring(15.0, 300.0));
        value.retarget(1.0, Curve::spring(15.0, 300.0)).unwrap();
        value.advance(FRAME, &settings());
        value.snap_to(0.25).unwrap();
        assert!(value.is_settled());
        assert_eq!(value.current(), 0.25);
        assert_eq!(value.velocity(), 0.0);
        assert!(value.snap_to(f64::NAN).is_err());
    }
}
