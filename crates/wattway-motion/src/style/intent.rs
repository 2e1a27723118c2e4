//! Style intents: what each property should animate toward.

use std::collections::BTreeMap;

use crate::animation::{Curve, LoopSpec, Property, PropertyValue};
use crate::error::{MotionError, Result};

/// How one property should move.
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// Settle on `value` along `curve`.
    To { value: PropertyValue, curve: Curve },
    /// Play a repeating sequence.
    Loop(LoopSpec),
}

/// Target and curve for every property a component owns in a given state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleIntent {
    targets: BTreeMap<Property, Motion>,
}

impl StyleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to(mut self, property: Property, value: impl Into<PropertyValue>, curve: Curve) -> Self {
        self.targets.insert(
            property,
            Motion::To {
                value: value.into(),
                curve,
            },
        );
        self
    }

    pub fn looping(mut self, property: Property, spec: LoopSpec) -> Self {
        self.targets.insert(property, Motion::Loop(spec));
        self
    }

    pub fn get(&self, property: Property) -> Option<&Motion> {
        self.targets.get(&property)
    }

    /// Target value of a `To` motion.
    pub fn target(&self, property: Property) -> Option<PropertyValue> {
        match self.targets.get(&property) {
            Some(Motion::To { value, .. }) => Some(*value),
            _ => None,
        }
    }

    pub fn scalar(&self, property: Property) -> Option<f64> {
        self.target(property).and_then(|v| v.as_scalar())
    }

    pub fn curve(&self, property: Property) -> Option<Curve> {
        match self.targets.get(&property) {
            Some(Motion::To { curve, .. }) => Some(*curve),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, &Motion)> {
        self.targets.iter().map(|(p, m)| (*p, m))
    }

    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.targets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Every target must be finite and of the right kind for its property.
    pub fn validate(&self) -> Result<()> {
        for (property, motion) in self.iter() {
            match motion {
                Motion::To { value, curve } => {
                    if !value.is_finite() || !curve.is_valid() {
                        return Err(MotionError::ConfigurationError(format!(
                            "{property} resolves to an unusable target {value:?}"
                        )));
                    }
                    if property.is_color() != value.as_color().is_some() {
                        return Err(MotionError::ConfigurationError(format!(
                            "{property} resolves to a value of the wrong kind"
                        )));
                    }
                }
                Motion::Loop(spec) => {
                    if property.is_color() {
                        return Err(MotionError::ConfigurationError(format!(
                            "{property} cannot loop"
                        )));
                    }
                    spec.validate()
                        .map_err(|e| MotionError::ConfigurationError(format!("{property}: {e}")))?;
                }
            }
        }
        Ok(())
    }
}
