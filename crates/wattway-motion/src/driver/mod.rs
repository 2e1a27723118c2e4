//! The frame driver: owns every mounted instance and advances them once per
//! display refresh.
//!
//! Instances with at least one moving property sit in a live set. `tick`
//! touches only that set, in ascending id order, and drops instances once all
//! of their properties settle. Dispatching an event that changes the style
//! puts the instance back. A retarget that jumps a value without animating it
//! (a zero-length timing curve) marks the instance dirty so the next `tick`
//! still reports it.
//!
//! ```
//! use std::sync::Arc;
//! use wattway_config::AnimationConfig;
//! use wattway_motion::driver::FrameDriver;
//! use wattway_motion::interaction::InteractionEvent;
//! use wattway_motion::style::{ControlKind, Size, VariantConfig};
//! use wattway_motion::theme::ThemeTokens;
//!
//! let mut driver = FrameDriver::new(Arc::new(ThemeTokens::default()), &AnimationConfig::default());
//! let button = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium))?;
//! driver.dispatch(button, InteractionEvent::PointerDown)?;
//! while driver.needs_frame() {
//!     driver.tick(1.0 / 60.0);
//! }
//! # Ok::<(), wattway_motion::MotionError>(())
//! ```

pub mod clock;
pub mod entrance;
mod instance;
pub mod sink;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use wattway_config::AnimationConfig;

use crate::animation::{Curve, Property, PropertyValue, StepSettings};
use crate::error::{MotionError, Result};
use crate::interaction::{InteractionEvent, InteractionState};
use crate::style::VariantConfig;
use crate::theme::ThemeTokens;

pub use clock::FrameClock;
pub use entrance::{Entrance, EntranceKind, EntranceLeg};
pub use sink::{FrameSink, StyleFrame};

use instance::Instance;

/// Handle to a mounted component instance. Ids are issued in mount order and
/// never reused by the same driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct FrameDriver {
    theme: Arc<ThemeTokens>,
    settings: StepSettings,
    instances: BTreeMap<InstanceId, Instance>,
    live: BTreeSet<InstanceId>,
    /// Values changed outside `tick`, reported by the next one.
    dirty: BTreeSet<InstanceId>,
    next_id: u64,
}

impl FrameDriver {
    pub fn new(theme: Arc<ThemeTokens>, config: &AnimationConfig) -> Self {
        Self {
            theme,
            settings: StepSettings::from(config),
            instances: BTreeMap::new(),
            live: BTreeSet::new(),
            dirty: BTreeSet::new(),
            next_id: 1,
        }
    }

    pub fn theme(&self) -> &Arc<ThemeTokens> {
        &self.theme
    }

    pub fn settings(&self) -> &StepSettings {
        &self.settings
    }

    /// Mount an instance resting at its idle style.
    pub fn mount(&mut self, variant: VariantConfig) -> Result<InstanceId> {
        self.insert(variant, None)
    }

    /// Mount an instance that plays `entrance` from its first tick.
    pub fn mount_with_entrance(
        &mut self,
        variant: VariantConfig,
        entrance: Entrance,
    ) -> Result<InstanceId> {
        self.insert(variant, Some(&entrance))
    }

    fn insert(&mut self, variant: VariantConfig, entrance: Option<&Entrance>) -> Result<InstanceId> {
        let id = InstanceId(self.next_id);
        let instance = Instance::mount(id, variant, &self.theme, entrance)?;
        self.next_id += 1;

        debug!(
            instance = %id,
            component = instance.variant().component(),
            entrance = ?entrance.map(|e| e.kind),
            "mounted"
        );
        if !instance.is_settled() {
            self.live.insert(id);
        }
        self.instances.insert(id, instance);
        Ok(id)
    }

    pub fn unmount(&mut self, id: InstanceId) -> Result<()> {
        self.instances
            .remove(&id)
            .ok_or(MotionError::UnknownInstance(id))?;
        self.live.remove(&id);
        self.dirty.remove(&id);
        debug!(instance = %id, "unmounted");
        Ok(())
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.instances.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Deliver an event to an instance and return its resulting state.
    ///
    /// An event with no matching transition is logged and ignored.
    pub fn dispatch(&mut self, id: InstanceId, event: InteractionEvent) -> Result<InteractionState> {
        let instance = self
            .instances
            .get_mut(&id)
            .ok_or(MotionError::UnknownInstance(id))?;
        let before = instance.values();

        match instance.handle(&event, &self.theme) {
            Ok(_) => {}
            Err(error @ MotionError::UnknownTransitionEvent { .. }) => {
                debug!(instance = %id, %error, "ignored event");
            }
            Err(error) => return Err(error),
        }

        if instance.values() != before {
            self.dirty.insert(id);
        }
        if !instance.is_settled() {
            self.live.insert(id);
        }
        Ok(instance.state())
    }

    /// Point one property somewhere the resolver did not, e.g. a drag offset.
    /// The next style change overrides it.
    pub fn retarget(
        &mut self,
        id: InstanceId,
        property: Property,
        value: PropertyValue,
        curve: Curve,
    ) -> Result<()> {
        let instance = self
            .instances
            .get_mut(&id)
            .ok_or(MotionError::UnknownInstance(id))?;
        let before = instance.values();

        if let Err(error) = instance.retarget(property, value, curve) {
            warn!(instance = %id, %property, %error, "rejected animation target");
            return Err(error);
        }
        if instance.values() != before {
            self.dirty.insert(id);
        }
        if !instance.is_settled() {
            self.live.insert(id);
        }
        Ok(())
    }

    pub fn state(&self, id: InstanceId) -> Result<InteractionState> {
        self.instance(id).map(Instance::state)
    }

    /// Current values of every property the instance owns.
    pub fn frame(&self, id: InstanceId) -> Result<StyleFrame> {
        self.instance(id).map(Instance::frame)
    }

    fn instance(&self, id: InstanceId) -> Result<&Instance> {
        self.instances
            .get(&id)
            .ok_or(MotionError::UnknownInstance(id))
    }

    /// Whether any instance still has a moving property or an unreported
    /// change.
    pub fn needs_frame(&self) -> bool {
        !self.live.is_empty() || !self.dirty.is_empty()
    }

    /// Advance every live instance by `dt` seconds and return the ids whose
    /// values changed since the previous tick, ascending.
    ///
    /// Negative or non-finite `dt` advances nothing. `dt` longer than the
    /// configured max frame is clamped to it.
    pub fn tick(&mut self, dt: f64) -> Vec<InstanceId> {
        if !dt.is_finite() || dt <= 0.0 {
            return Vec::new();
        }
        let dt = dt.min(self.settings.max_frame_dt);

        let mut changed = std::mem::take(&mut self.dirty);
        let mut settled = Vec::new();
        for id in &self.live {
            let Some(instance) = self.instances.get_mut(id) else {
                settled.push(*id);
                continue;
            };
            if instance.advance(dt, &self.settings) {
                changed.insert(*id);
            }
            if instance.is_settled() {
                settled.push(*id);
            }
        }
        for id in &settled {
            self.live.remove(id);
        }

        trace!(
            dt,
            changed = changed.len(),
            settled = settled.len(),
            live = self.live.len(),
            "tick"
        );
        changed.into_iter().collect()
    }

    /// `tick`, then hand the frame of every changed instance to `sink`.
    pub fn tick_and_publish<S: FrameSink + ?Sized>(&mut self, dt: f64, sink: &mut S) -> Vec<InstanceId> {
        let changed = self.tick(dt);
        for id in &changed {
            if let Some(instance) = self.instances.get(id) {
                sink.publish(&instance.frame());
            }
        }
        changed
    }
}

impl fmt::Debug for FrameDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameDriver")
            .field("instances", &self.instances.len())
            .field("live", &self.live)
            .field("dirty", &self.dirty)
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ControlKind, LoaderKind, Size};

    fn driver() -> FrameDriver {
        FrameDriver::new(Arc::new(ThemeTokens::wattway_dark()), &AnimationConfig::default())
    }

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_ids_are_sequential() {
        let mut driver = driver();
        let a = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Small)).unwrap();
        let b = driver.mount(VariantConfig::input(ControlKind::Primary, Size::Small)).unwrap();
        assert!(a < b);
        driver.unmount(a).unwrap();
        let c = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Small)).unwrap();
        assert!(c > b);
    }

    #[test]
    fn test_idle_mount_needs_no_frame() {
        let mut driver = driver();
        driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium)).unwrap();
        assert!(!driver.needs_frame());
        assert!(driver.tick(FRAME).is_empty());
    }

    #[test]
    fn test_automatic_stop() {
        let mut driver = driver();
        let id = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium)).unwrap();
        driver.dispatch(id, InteractionEvent::PointerDown).unwrap();
        assert!(driver.needs_frame());

        let mut ticks = 0;
        while driver.needs_frame() {
            driver.tick(FRAME);
            ticks += 1;
            assert!(ticks < 600, "spring never settled");
        }
        assert_eq!(driver.frame(id).unwrap().scalar(Property::Scale), Some(0.96));
        assert!(driver.tick(FRAME).is_empty());
    }

    #[test]
    fn test_unknown_instance() {
        let mut driver = driver();
        let id = driver.mount(VariantConfig::loader(LoaderKind::Default, Size::Small)).unwrap();
        driver.unmount(id).unwrap();
        assert_eq!(
            driver.dispatch(id, InteractionEvent::FocusGained),
            Err(MotionError::UnknownInstance(id))
        );
        assert!(driver.frame(id).is_err());
        assert!(driver.unmount(id).is_err());
    }

    #[test]
    fn test_unknown_transition_is_ignored() {
        let mut driver = driver();
        let id = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium)).unwrap();
        assert_eq!(
            driver.dispatch(id, InteractionEvent::PointerUp),
            Ok(InteractionState::Idle)
        );
        assert!(!driver.needs_frame());
    }

    #[test]
    fn test_retarget_rejects_non_finite() {
        let mut driver = driver();
        let id = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium)).unwrap();
        let before = driver.frame(id).unwrap();
        let err = driver
            .retarget(id, Property::Scale, PropertyValue::Scalar(f64::NAN), Curve::spring(15.0, 300.0))
            .unwrap_err();
        assert!(matches!(
            err,
            MotionError::InvalidAnimationTarget {
                property: Some(Property::Scale),
                ..
            }
        ));
        assert_eq!(driver.frame(id).unwrap(), before);
        assert!(!driver.needs_frame());
    }

    #[test]
    fn test_publish_only_changed() {
        let mut driver = driver();
        let idle = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium)).unwrap();
        let pressed = driver.mount(VariantConfig::button(ControlKind::Outline, Size::Medium)).unwrap();
        driver.dispatch(pressed, InteractionEvent::PointerDown).unwrap();

        let mut published = Vec::new();
        let changed = driver.tick_and_publish(FRAME, &mut |frame: &StyleFrame| {
            published.push(frame.id)
        });
        assert_eq!(changed, vec![pressed]);
        assert_eq!(published, vec![pressed]);
        assert!(!published.contains(&idle));
    }

    #[test]
    fn test_instant_retarget_is_published() {
        let mut driver = driver();
        let id = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium)).unwrap();
        driver
            .retarget(id, Property::Opacity, PropertyValue::Scalar(0.3), Curve::timing(0.0))
            .unwrap();
        assert!(driver.needs_frame());

        let mut published = Vec::new();
        let changed = driver.tick_and_publish(FRAME, &mut |frame: &StyleFrame| {
            published.push(frame.scalar(Property::Opacity))
        });
        assert_eq!(changed, vec![id]);
        assert_eq!(published, vec![Some(0.3)]);

        assert!(!driver.needs_frame());
        assert!(driver.tick(FRAME).is_empty());
    }

    #[test]
    fn test_unmount_drops_pending_change() {
        let mut driver = driver();
        let id = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium)).unwrap();
        driver
            .retarget(id, Property::Scale, PropertyValue::Scalar(0.5), Curve::timing(-10.0))
            .unwrap();
        driver.unmount(id).unwrap();
        assert!(!driver.needs_frame());
        assert!(driver.tick(FRAME).is_empty());
    }

    #[test]
    fn test_long_gap_is_clamped_to_max_frame() {
        let mut suspended = driver();
        let mut steady = driver();
        for driver in [&mut suspended, &mut steady] {
            let id = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium)).unwrap();
            driver.dispatch(id, InteractionEvent::PointerDown).unwrap();
        }

        let id = InstanceId(1);
        assert_eq!(suspended.tick(1.0e5), vec![id]);
        steady.tick(steady.settings().max_frame_dt);
        assert_eq!(suspended.frame(id).unwrap(), steady.frame(id).unwrap());
        assert!(suspended.needs_frame());
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let mut driver = driver();
        let id = driver.mount(VariantConfig::button(ControlKind::Primary, Size::Medium)).unwrap();
        driver.dispatch(id, InteractionEvent::PointerDown).unwrap();
        assert!(driver.tick(f64::NAN).is_empty());
        assert!(driver.tick(-0.5).is_empty());
        assert_eq!(driver.frame(id).unwrap().scalar(Property::Scale), Some(1.0));
    }
}
