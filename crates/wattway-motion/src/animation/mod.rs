//! Animated values and the curves that drive them.
//!
//! - `easing`: timing functions
//! - `curve`: spring and timing evaluators
//! - `value`: `AnimatedValue`, a retargetable channel
//! - `sequence`: repeating timing sequences
//! - `types`: property names and values

pub mod curve;
pub mod easing;
pub mod interpolate;
pub mod sequence;
pub mod types;
pub mod value;

pub use curve::{step_spring, Curve, SpringConfig, SpringStep, StepSettings, TimingConfig};
pub use easing::Easing;
pub use interpolate::Animatable;
pub use sequence::{LoopLeg, LoopPlayer, LoopSpec, Repeat};
pub use types::{Property, PropertyValue};
pub use value::AnimatedValue;
