//! Error types for the motion engine.

use thiserror::Error;

use crate::animation::Property;
use crate::driver::InstanceId;
use crate::interaction::{InteractionEvent, InteractionState};

/// Result type for motion engine operations.
pub type Result<T> = std::result::Result<T, MotionError>;

/// Errors that can occur while driving interaction animations.
///
/// None of these are fatal to the process; each one aborts only the
/// operation that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// A retarget carried a non-finite or out-of-domain value. The animated
    /// value keeps its last good state.
    #[error("invalid animation target for {property:?}: {reason}")]
    InvalidAnimationTarget {
        property: Option<Property>,
        reason: String,
    },

    /// No transition rule matches the event in the current state.
    #[error("no transition for {event:?} in state {state:?}")]
    UnknownTransitionEvent {
        state: InteractionState,
        event: InteractionEvent,
    },

    /// The variant configuration has no style rule, or resolves to unusable
    /// targets. Raised at mount time.
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// The instance was never mounted or has already been unmounted.
    #[error("unknown instance {0}")]
    UnknownInstance(InstanceId),
}

impl MotionError {
    /// Build an `InvalidAnimationTarget` for a value that is not attached to a
    /// named property yet.
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        Self::InvalidAnimationTarget {
            property: None,
            reason: reason.into(),
        }
    }

    /// Attach the property name to an `InvalidAnimationTarget`.
    pub fn for_property(self, property: Property) -> Self {
        match self {
            Self::InvalidAnimationTarget { reason, .. } => Self::InvalidAnimationTarget {
                property: Some(property),
                reason,
            },
            other => other,
        }
    }
}
