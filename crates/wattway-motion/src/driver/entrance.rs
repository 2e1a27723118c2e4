//! One-shot entrance animations played when an instance mounts.
//!
//! ```
//! use wattway_motion::driver::Entrance;
//!
//! // Fifth row of a list: 500 ms base delay, 100 ms between rows.
//! let entrance = Entrance::fade_in_up().staggered(500.0, 100.0, 4).with_duration(600.0);
//! assert_eq!(entrance.delay_ms, 900.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::{Curve, Easing, Property, SpringConfig, TimingConfig};

/// Vertical travel of the slide-in presets, in points.
pub const SLIDE_DISTANCE: f64 = 25.0;
pub const DEFAULT_ENTRANCE_MS: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntranceKind {
    FadeIn,
    /// Fades in while rising from below.
    FadeInUp,
    /// Fades in while dropping from above.
    FadeInDown,
    /// Logo pop: fade plus a spring from 70% scale, with the wordmark
    /// rising into place.
    Pop,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    pub kind: EntranceKind,
    #[serde(default = "default_duration")]
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
}

fn default_duration() -> f64 {
    DEFAULT_ENTRANCE_MS
}

/// Where one property starts and how it travels to its resting value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceLeg {
    pub property: Property,
    pub from: f64,
    /// Fixed destination. `None` means the value the resolver picks.
    pub to: Option<f64>,
    pub curve: Curve,
}

impl Entrance {
    pub const fn new(kind: EntranceKind) -> Self {
        Self {
            kind,
            duration_ms: DEFAULT_ENTRANCE_MS,
            delay_ms: 0.0,
        }
    }

    pub const fn fade_in() -> Self {
        Self::new(EntranceKind::FadeIn)
    }

    pub const fn fade_in_up() -> Self {
        Self::new(EntranceKind::FadeInUp)
    }

    pub const fn fade_in_down() -> Self {
        Self::new(EntranceKind::FadeInDown)
    }

    pub const fn pop() -> Self {
        Self::new(EntranceKind::Pop)
    }

    pub const fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub const fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Delay for item `index` of a list: `base_ms + index * step_ms`.
    pub fn staggered(self, base_ms: f64, step_ms: f64, index: usize) -> Self {
        self.with_delay(base_ms + index as f64 * step_ms)
    }

    fn timing(&self, duration_ms: f64, easing: Easing) -> Curve {
        Curve::Timing(
            TimingConfig::new(duration_ms)
                .with_easing(easing)
                .with_delay(self.delay_ms),
        )
    }

    /// Starting values and curves for every property the entrance touches.
    pub fn legs(&self) -> Vec<EntranceLeg> {
        let fade = EntranceLeg {
            property: Property::Opacity,
            from: 0.0,
            to: None,
            curve: self.timing(self.duration_ms, Easing::EaseOut),
        };
        let slide = |from: f64| EntranceLeg {
            property: Property::TranslateY,
            from,
            to: Some(0.0),
            curve: self.timing(self.duration_ms, Easing::EaseOut),
        };

        match self.kind {
            EntranceKind::FadeIn => vec![fade],
            EntranceKind::FadeInUp => vec![fade, slide(SLIDE_DISTANCE)],
            EntranceKind::FadeInDown => vec![fade, slide(-SLIDE_DISTANCE)],
            EntranceKind::Pop => vec![
                EntranceLeg {
                    property: Property::Opacity,
                    from: 0.0,
                    to: None,
                    curve: self.timing(600.0, Easing::EaseOutCubic),
                },
                EntranceLeg {
                    property: Property::Scale,
                    from: 0.7,
                    to: None,
                    curve: Curve::Spring(SpringConfig::new(15.0, 150.0)),
                },
                EntranceLeg {
                    property: Property::TextOpacity,
                    from: 0.0,
                    to: None,
                    curve: self.timing(800.0, Easing::EaseOutCubic),
                },
                EntranceLeg {
                    property: Property::TextTranslateY,
                    from: 20.0,
                    to: None,
                    curve: Curve::Spring(SpringConfig::new(20.0, 100.0)),
                },
            ],
        }
    }
}
