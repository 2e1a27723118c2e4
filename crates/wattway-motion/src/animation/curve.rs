//! Spring and timing curve evaluators.
//!
//! Both evaluators are pure: they take the channel state plus elapsed time and
//! return the next state. `AnimatedValue` owns the bookkeeping around them.

use serde::{Deserialize, Serialize};
use wattway_config::AnimationConfig;

use super::easing::Easing;
use super::interpolate::Animatable;

/// Slack when comparing accumulated frame time against a duration.
const TIME_EPSILON: f64 = 1e-9;

/// Damped harmonic oscillator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl SpringConfig {
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.damping.is_finite()
            && self.damping >= 0.0
            && self.stiffness.is_finite()
            && self.stiffness > 0.0
            && self.mass.is_finite()
            && self.mass > 0.0
    }
}

/// Eased interpolation over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub duration_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub delay_ms: f64,
}

impl TimingConfig {
    pub const fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            easing: Easing::EaseInOutQuad,
            delay_ms: 0.0,
        }
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.duration_ms.is_finite()
            && self.delay_ms.is_finite()
            && self.delay_ms >= 0.0
            && self.easing.is_valid()
    }

    /// Total time from retarget to settle, in seconds.
    pub fn total_secs(&self) -> f64 {
        (self.delay_ms + self.duration_ms.max(0.0)) / 1000.0
    }

    /// Eased progress after `elapsed` seconds, or `None` once the curve is
    /// complete. Progress stays at 0 during the delay.
    pub fn progress(&self, elapsed: f64) -> Option<f64> {
        if self.duration_ms <= 0.0 || elapsed + TIME_EPSILON >= self.total_secs() {
            return None;
        }
        let active = elapsed - self.delay_ms / 1000.0;
        if active <= 0.0 {
            return Some(0.0);
        }
        Some(self.easing.evaluate(active * 1000.0 / self.duration_ms))
    }
}

/// The curve an animated value follows toward its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Curve {
    Spring(SpringConfig),
    Timing(TimingConfig),
}

impl Curve {
    pub const fn spring(damping: f64, stiffness: f64) -> Self {
        Self::Spring(SpringConfig::new(damping, stiffness))
    }

    pub const fn timing(duration_ms: f64) -> Self {
        Self::Timing(TimingConfig::new(duration_ms))
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::Spring(spring) => spring.is_valid(),
            Self::Timing(timing) => timing.is_valid(),
        }
    }
}

/// Numerical tolerances for stepping curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSettings {
    pub position_epsilon: f64,
    pub velocity_epsilon: f64,
    /// Longest single integration step, in seconds.
    pub max_substep: f64,
    /// Longest frame the driver integrates at once, in seconds.
    pub max_frame_dt: f64,
}

impl Default for StepSettings {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}

impl From<&AnimationConfig> for StepSettings {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            position_epsilon: config.spring_position_epsilon,
            velocity_epsilon: config.spring_velocity_epsilon,
            max_substep: config.max_substep(),
            max_frame_dt: config.max_frame_dt(),
        }
    }
}

/// Result of advancing a spring by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStep<T> {
    pub position: T,
    pub velocity: T,
    pub settled: bool,
}

/// Advance a spring by `dt` seconds with semi-implicit Euler.
///
/// `dt` is split into equal sub-steps no longer than `settings.max_substep`.
/// Once both displacement and velocity fall inside the epsilons the remaining
/// sub-steps are skipped, the position snaps to `target` and velocity to zero.
/// Cost grows with `dt`; the frame driver clamps it to `max_frame_dt`.
pub fn step_spring<T: Animatable>(
    position: T,
    velocity: T,
    target: T,
    spring: &SpringConfig,
    dt: f64,
    settings: &StepSettings,
) -> SpringStep<T> {
    let substeps = if settings.max_substep > 0.0 {
        (dt / settings.max_substep).ceil().max(1.0) as u64
    } else {
        1
    };
    let h = dt / substeps as f64;
    let at_rest = |x: T, v: T| {
        x.difference(target).max_abs() < settings.position_epsilon
            && v.max_abs() < settings.velocity_epsilon
    };

    let mut x = position;
    let mut v = velocity;
    for _ in 0..substeps {
        let displacement = x.difference(target);
        let accel = displacement.zip_with(v, |d, v| {
            (-spring.stiffness * d - spring.damping * v) / spring.mass
        });
        v = v.zip_with(accel, |v, a| v + a * h);
        x = x.zip_with(v, |x, v| x + v * h);

        if at_rest(x, v) {
            return SpringStep {
                position: target,
                velocity: T::ZERO,
                settled: true,
            };
        }
    }

    SpringStep {
        position: x,
        velocity: v,
        settled: false,
    }
}
