//! One mounted component: its machine and one track per animated property.

use std::collections::BTreeMap;

use tracing::warn;

use super::entrance::Entrance;
use super::sink::StyleFrame;
use super::InstanceId;
use crate::animation::{
    AnimatedValue, Curve, LoopPlayer, LoopSpec, Property, PropertyValue, StepSettings,
};
use crate::error::{MotionError, Result};
use crate::interaction::{InteractionEvent, InteractionMachine, InteractionState};
use crate::style::{resolve_metrics, resolve_style, Annotations, BoxMetrics, Motion, VariantConfig};
use crate::theme::{Color, ThemeTokens};

/// Runtime state of a single property.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Track {
    Scalar(AnimatedValue<f64>),
    Color(AnimatedValue<Color>),
    Loop(LoopPlayer),
}

impl Track {
    fn resting(value: PropertyValue, curve: Curve) -> Self {
        match value {
            PropertyValue::Scalar(v) => Self::Scalar(AnimatedValue::new(v, curve)),
            PropertyValue::Color(c) => Self::Color(AnimatedValue::new(c, curve)),
        }
    }

    fn current(&self) -> PropertyValue {
        match self {
            Self::Scalar(value) => value.current().into(),
            Self::Color(value) => value.current().into(),
            Self::Loop(player) => player.current().into(),
        }
    }

    fn is_settled(&self) -> bool {
        match self {
            Self::Scalar(value) => value.is_settled(),
            Self::Color(value) => value.is_settled(),
            Self::Loop(player) => player.is_finished(),
        }
    }

    fn advance(&mut self, dt: f64, settings: &StepSettings) -> bool {
        match self {
            Self::Scalar(value) => value.advance(dt, settings),
            Self::Color(value) => value.advance(dt, settings),
            Self::Loop(player) => player.advance(dt),
        }
    }

    /// Retarget in place. A loop hands over to a plain value starting where
    /// the loop currently is.
    fn retarget(&mut self, target: PropertyValue, curve: Curve) -> Result<()> {
        match (&mut *self, target) {
            (Self::Scalar(value), PropertyValue::Scalar(t)) => value.retarget(t, curve),
            (Self::Color(value), PropertyValue::Color(c)) => value.retarget(c, curve),
            (Self::Loop(player), PropertyValue::Scalar(t)) => {
                let mut value = AnimatedValue::new(player.current(), curve);
                value.retarget(t, curve)?;
                *self = Self::Scalar(value);
                Ok(())
            }
            _ => Err(MotionError::invalid_target(format!(
                "{target:?} does not match the property's value kind"
            ))),
        }
    }

    fn snap_to(&mut self, value: f64) -> Result<()> {
        match self {
            Self::Scalar(track) => track.snap_to(value),
            _ => Err(MotionError::invalid_target("only scalar tracks can be snapped")),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Instance {
    id: InstanceId,
    variant: VariantConfig,
    machine: InteractionMachine,
    metrics: BoxMetrics,
    tracks: BTreeMap<Property, Track>,
}

impl Instance {
    /// Build an instance resting at its idle style, optionally starting from
    /// an entrance pose.
    pub(crate) fn mount(
        id: InstanceId,
        variant: VariantConfig,
        theme: &ThemeTokens,
        entrance: Option<&Entrance>,
    ) -> Result<Self> {
        let machine = InteractionMachine::new(variant.capabilities());
        let intent = resolve_style(
            theme,
            &variant,
            machine.state(),
            Annotations::from(machine.snapshot()),
        )?;

        let mut tracks = BTreeMap::new();
        for (property, motion) in intent.iter() {
            let track = match motion {
                Motion::To { value, curve } => Track::resting(*value, *curve),
                Motion::Loop(spec) => Track::Loop(LoopPlayer::new(property.rest_value(), spec.clone())?),
            };
            tracks.insert(property, track);
        }

        let mut instance = Self {
            id,
            variant,
            machine,
            metrics: resolve_metrics(theme, &variant),
            tracks,
        };
        if let Some(entrance) = entrance {
            instance.play_entrance(entrance)?;
        }
        Ok(instance)
    }

    fn play_entrance(&mut self, entrance: &Entrance) -> Result<()> {
        for leg in entrance.legs() {
            let target = match (leg.to, self.tracks.get(&leg.property)) {
                (Some(to), _) => to,
                (None, Some(Track::Scalar(value))) => value.target(),
                // Loops and properties this component lacks keep their own motion.
                (None, _) => continue,
            };
            let track = self
                .tracks
                .entry(leg.property)
                .or_insert_with(|| Track::Scalar(AnimatedValue::new(leg.from, leg.curve)));
            track.snap_to(leg.from)?;
            track.retarget(PropertyValue::Scalar(target), leg.curve)?;
        }
        Ok(())
    }

    pub(crate) fn variant(&self) -> &VariantConfig {
        &self.variant
    }

    pub(crate) fn state(&self) -> InteractionState {
        self.machine.state()
    }

    /// Apply an event and, when the snapshot changes, retarget every property
    /// to the newly resolved style. Returns whether anything changed.
    pub(crate) fn handle(&mut self, event: &InteractionEvent, theme: &ThemeTokens) -> Result<bool> {
        if !self.machine.handle(event)? {
            return Ok(false);
        }
        let intent = resolve_style(
            theme,
            &self.variant,
            self.machine.state(),
            Annotations::from(self.machine.snapshot()),
        )?;

        for (property, motion) in intent.iter() {
            let result = match motion {
                Motion::To { value, curve } => self.retarget(property, *value, *curve),
                Motion::Loop(spec) => self.start_loop(property, spec),
            };
            if let Err(error) = result {
                warn!(instance = %self.id, %property, %error, "rejected style target");
            }
        }
        Ok(true)
    }

    /// Retarget one property. Creates the track if the component did not own
    /// the property yet.
    pub(crate) fn retarget(&mut self, property: Property, value: PropertyValue, curve: Curve) -> Result<()> {
        if property.is_color() != value.as_color().is_some() {
            return Err(MotionError::invalid_target(format!(
                "{value:?} does not match the property's value kind"
            ))
            .for_property(property));
        }
        match self.tracks.get_mut(&property) {
            Some(track) => track
                .retarget(value, curve)
                .map_err(|e| e.for_property(property)),
            None => {
                if !value.is_finite() || !curve.is_valid() {
                    return Err(MotionError::invalid_target(format!(
                        "unusable target {value:?}"
                    ))
                    .for_property(property));
                }
                self.tracks.insert(property, Track::resting(value, curve));
                Ok(())
            }
        }
    }

    /// Keep an identical loop running; otherwise start `spec` from the
    /// property's current value.
    fn start_loop(&mut self, property: Property, spec: &LoopSpec) -> Result<()> {
        let start = match self.tracks.get(&property) {
            Some(Track::Loop(player)) if player.spec() == spec => return Ok(()),
            Some(track) => track.current().as_scalar().unwrap_or(property.rest_value()),
            None => property.rest_value(),
        };
        let player = LoopPlayer::new(start, spec.clone()).map_err(|e| e.for_property(property))?;
        self.tracks.insert(property, Track::Loop(player));
        Ok(())
    }

    /// Advance every unsettled track once. Returns whether any value changed.
    pub(crate) fn advance(&mut self, dt: f64, settings: &StepSettings) -> bool {
        let mut changed = false;
        for track in self.tracks.values_mut() {
            changed |= track.advance(dt, settings);
        }
        changed
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.tracks.values().all(Track::is_settled)
    }

    /// Current value of every owned property.
    pub(crate) fn values(&self) -> BTreeMap<Property, PropertyValue> {
        self.tracks
            .iter()
            .map(|(property, track)| (*property, track.current()))
            .collect()
    }

    pub(crate) fn frame(&self) -> StyleFrame {
        StyleFrame {
            id: self.id,
            state: self.machine.state(),
            values: self.values(),
            metrics: self.metrics,
            settled: self.is_settled(),
        }
    }
}
