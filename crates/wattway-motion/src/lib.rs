//! Declarative interaction-animation engine.
//!
//! Components are described by a [`style::VariantConfig`]. Discrete input
//! events drive an [`interaction::InteractionMachine`]; every state change is
//! resolved against the shared [`theme::ThemeTokens`] into a
//! [`style::StyleIntent`], whose targets retarget spring and timing curves.
//! The [`driver::FrameDriver`] advances those curves once per display refresh
//! until everything settles.

pub mod animation;
pub mod driver;
pub mod error;
pub mod interaction;
pub mod style;
pub mod theme;

pub use animation::{AnimatedValue, Curve, Easing, Property, PropertyValue};
pub use driver::{Entrance, FrameClock, FrameDriver, FrameSink, InstanceId, StyleFrame};
pub use error::{MotionError, Result};
pub use interaction::{InteractionEvent, InteractionState};
pub use style::{resolve_style, StyleIntent, VariantConfig};
pub use theme::{Color, ThemeTokens};
