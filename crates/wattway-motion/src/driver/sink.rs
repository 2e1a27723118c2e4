//! Publishing current values to the presentation layer.

use std::collections::BTreeMap;

use super::InstanceId;
use crate::animation::{Property, PropertyValue};
use crate::interaction::InteractionState;
use crate::style::BoxMetrics;
use crate::theme::Color;

/// Snapshot of one instance's current style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleFrame {
    pub id: InstanceId,
    pub state: InteractionState,
    pub values: BTreeMap<Property, PropertyValue>,
    pub metrics: BoxMetrics,
    /// True when nothing on the instance is still moving.
    pub settled: bool,
}

impl StyleFrame {
    pub fn get(&self, property: Property) -> Option<PropertyValue> {
        self.values.get(&property).copied()
    }

    pub fn scalar(&self, property: Property) -> Option<f64> {
        self.get(property).and_then(|v| v.as_scalar())
    }

    pub fn color(&self, property: Property) -> Option<Color> {
        self.get(property).and_then(|v| v.as_color())
    }
}

/// Receives the frames of changed instances once per tick.
pub trait FrameSink {
    fn publish(&mut self, frame: &StyleFrame);
}

impl<F> FrameSink for F
where
    F: FnMut(&StyleFrame),
{
    fn publish(&mut self, frame: &StyleFrame) {
        self(frame)
    }
}
