//! Host timestamps to frame deltas.

use std::time::Duration;

use wattway_config::AnimationConfig;

/// Turns monotonically increasing host timestamps into clamped `dt` values.
///
/// The first timestamp only primes the clock. A stalled frame yields at most
/// `max_dt`, and a timestamp that goes backwards yields zero.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Duration>,
    max_dt: f64,
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self {
            last: None,
            max_dt: max_dt.max(0.0),
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.max_frame_dt())
    }

    /// Seconds since the previous timestamp, clamped to `[0, max_dt]`.
    pub fn delta(&mut self, now: Duration) -> f64 {
        let dt = match self.last {
            Some(last) => now.saturating_sub(last).as_secs_f64(),
            None => 0.0,
        };
        self.last = Some(match self.last {
            Some(last) if now < last => last,
            _ => now,
        });
        dt.min(self.max_dt)
    }

    /// Forget the previous timestamp, e.g. after the host was suspended.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_primes() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.delta(Duration::from_millis(500)), 0.0);
        let dt = clock.delta(Duration::from_millis(516));
        assert!((dt - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::new(0.1);
        clock.delta(Duration::ZERO);
        assert_eq!(clock.delta(Duration::from_secs(3)), 0.1);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new(0.1);
        clock.delta(Duration::from_millis(100));
        assert_eq!(clock.delta(Duration::from_millis(50)), 0.0);
        let dt = clock.delta(Duration::from_millis(116));
        assert!((dt - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::from_config(&AnimationConfig::default());
        clock.delta(Duration::from_millis(10));
        clock.reset();
        assert_eq!(clock.delta(Duration::from_millis(90)), 0.0);
    }
}
