//! Repeating timing sequences for ambient motion (loader pulses, logo sway).

use serde::{Deserialize, Serialize};

use super::curve::TimingConfig;
use crate::error::{MotionError, Result};

/// One leg of a sequence: ease from wherever the value is to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoopLeg {
    pub to: f64,
    pub timing: TimingConfig,
}

impl LoopLeg {
    pub const fn new(to: f64, duration_ms: f64) -> Self {
        Self {
            to,
            timing: TimingConfig::new(duration_ms),
        }
    }
}

/// How many times a sequence runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    Forever,
    Times(u32),
}

/// A sequence of legs played in order, then restarted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopSpec {
    pub legs: Vec<LoopLeg>,
    pub repeat: Repeat,
}

impl LoopSpec {
    pub fn forever(legs: Vec<LoopLeg>) -> Self {
        Self {
            legs,
            repeat: Repeat::Forever,
        }
    }

    pub fn times(count: u32, legs: Vec<LoopLeg>) -> Self {
        Self {
            legs,
            repeat: Repeat::Times(count),
        }
    }

    /// A sequence needs at least one leg, finite values, and a cycle that takes
    /// time; a zero-length infinite cycle would never yield.
    pub fn validate(&self) -> Result<()> {
        if self.legs.is_empty() {
            return Err(MotionError::ConfigurationError(
                "loop sequence has no legs".to_string(),
            ));
        }
        if let Some(leg) = self
            .legs
            .iter()
            .find(|leg| !leg.to.is_finite() || !leg.timing.is_valid())
        {
            return Err(MotionError::invalid_target(format!(
                "loop leg is not finite: {leg:?}"
            )));
        }
        let cycle: f64 = self.legs.iter().map(|leg| leg.timing.total_secs()).sum();
        if cycle <= 0.0 {
            return Err(MotionError::ConfigurationError(
                "loop sequence cycle has zero duration".to_string(),
            ));
        }
        Ok(())
    }
}

/// Playback state of a `LoopSpec`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopPlayer {
    spec: LoopSpec,
    current: f64,
    origin: f64,
    leg: usize,
    elapsed: f64,
    cycles: u32,
    finished: bool,
}

impl LoopPlayer {
    /// Start `spec` from `initial`.
    pub fn new(initial: f64, spec: LoopSpec) -> Result<Self> {
        spec.validate()?;
        if !initial.is_finite() {
            return Err(MotionError::invalid_target(format!(
                "non-finite loop start {initial}"
            )));
        }
        let finished = spec.repeat == Repeat::Times(0);
        Ok(Self {
            spec,
            current: initial,
            origin: initial,
            leg: 0,
            elapsed: 0.0,
            cycles: 0,
            finished,
        })
    }

    pub fn spec(&self) -> &LoopSpec {
        &self.spec
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` seconds. Time left over when a leg completes carries
    /// into the next leg. Returns whether the value changed.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.finished || dt <= 0.0 {
            return false;
        }
        let previous = self.current;
        let mut remaining = dt;

        loop {
            let leg = self.spec.legs[self.leg];
            let leg_left = leg.timing.total_secs() - self.elapsed;

            if remaining < leg_left {
                self.elapsed += remaining;
                self.current = match leg.timing.progress(self.elapsed) {
                    Some(p) => self.origin + (leg.to - self.origin) * p,
                    None => leg.to,
                };
                break;
            }

            remaining -= leg_left.max(0.0);
            self.current = leg.to;
            self.origin = leg.to;
            self.elapsed = 0.0;
            self.leg += 1;

            if self.leg == self.spec.legs.len() {
                self.leg = 0;
                self.cycles = self.cycles.saturating_add(1);
                if let Repeat::Times(count) = self.spec.repeat {
                    if self.cycles >= count {
                        self.finished = true;
                        break;
                    }
                }
            }
            if remaining <= 0.0 {
                break;
            }
        }

        self.current != previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::easing::Easing;

    fn linear(to: f64, duration_ms: f64) -> LoopLeg {
        LoopLeg {
            to,
            timing: TimingConfig::new(duration_ms).with_easing(Easing::Linear),
        }
    }

    #[test]
    fn test_pulse_cycle() {
        let spec = LoopSpec::forever(vec![linear(1.2, 800.0), linear(1.0, 800.0)]);
        let mut player = LoopPlayer::new(1.0, spec).unwrap();

        player.advance(0.4);
        assert!((player.current() - 1.1).abs() < 1e-9);
        player.advance(0.4);
        assert!((player.current() - 1.2).abs() < 1e-9);
        player.advance(0.4);
        assert!((player.current() - 1.1).abs() < 1e-9);
        player.advance(0.4);
        assert!((player.current() - 1.0).abs() < 1e-9);
        assert!(!player.is_finished());
    }

    #[test]
    fn test_leftover_time_carries_over() {
        let spec = LoopSpec::forever(vec![linear(10.0, 100.0), linear(0.0, 100.0)]);
        let mut player = LoopPlayer::new(0.0, spec).unwrap();
        player.advance(0.15);
        assert!((player.current() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_finite_repeat_finishes() {
        let spec = LoopSpec::times(2, vec![linear(1.0, 100.0), linear(0.0, 100.0)]);
        let mut player = LoopPlayer::new(0.0, spec).unwrap();
        for _ in 0..3 {
            player.advance(0.1);
        }
        assert!(!player.is_finished());
        player.advance(0.1);
        assert!(player.is_finished());
        assert_eq!(player.current(), 0.0);
        assert!(!player.advance(0.1));
    }

    #[test]
    fn test_invalid_specs() {
        assert!(LoopSpec::forever(vec![]).validate().is_err());
        assert!(LoopSpec::forever(vec![linear(1.0, 0.0)]).validate().is_err());
        assert!(LoopSpec::forever(vec![linear(f64::NAN, 100.0)]).validate().is_err());
        assert!(LoopPlayer::new(f64::INFINITY, LoopSpec::forever(vec![linear(1.0, 10.0)])).is_err());
    }

    #[test]
    fn test_zero_repeat_is_finished() {
        let player = LoopPlayer::new(0.0, LoopSpec::times(0, vec![linear(1.0, 10.0)])).unwrap();
        assert!(player.is_finished());
    }
}
