//! The per-instance interaction state machine.
//!
//! `transition` is a pure function over an `InteractionSnapshot`; the
//! `InteractionMachine` wrapper owns one snapshot and applies events to it.
//! Besides the visible state, the snapshot tracks the raw input flags (focus
//! held, pointer held, loading, disabled) so that leaving an overriding state
//! can recover whatever the flags imply.

use tracing::debug;

use super::state::{Capabilities, InteractionEvent, InteractionState};
use crate::error::{MotionError, Result};

/// Everything the resolver needs to know about an instance's interaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionSnapshot {
    pub state: InteractionState,
    pub focused: bool,
    pub pointer_down: bool,
    pub loading: bool,
    pub disabled: bool,
    /// Validation message; orthogonal to `state`.
    pub error: Option<String>,
    /// Input has content; orthogonal to `state`.
    pub filled: bool,
}

impl InteractionSnapshot {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The state the current flags imply, highest priority first.
    fn derived_state(&self) -> InteractionState {
        if self.disabled {
            InteractionState::Disabled
        } else if self.loading {
            InteractionState::Loading
        } else if self.pointer_down {
            InteractionState::Pressed
        } else if self.focused {
            InteractionState::Focused
        } else {
            InteractionState::Idle
        }
    }

    fn settle_state(mut self) -> Self {
        self.state = self.derived_state();
        self
    }
}

/// Compute the snapshot that follows `event`.
///
/// Events outside `capabilities`, and pointer or focus events while disabled,
/// leave the snapshot untouched. Releasing a pointer that is not held or
/// dropping focus that is not held has no rule and yields
/// `UnknownTransitionEvent`.
pub fn transition(
    current: &InteractionSnapshot,
    event: &InteractionEvent,
    capabilities: Capabilities,
) -> Result<InteractionSnapshot> {
    let mut next = current.clone();

    match event {
        InteractionEvent::SetError(message) => {
            next.error = message.clone();
            return Ok(next);
        }
        InteractionEvent::SetFilled(filled) => {
            next.filled = *filled;
            return Ok(next);
        }
        InteractionEvent::SetDisabled(disabled) => {
            if *disabled && !current.disabled {
                next.focused = false;
                next.pointer_down = false;
            }
            next.disabled = *disabled;
            return Ok(next.settle_state());
        }
        InteractionEvent::SetLoading(loading) => {
            next.loading = *loading;
            return Ok(next.settle_state());
        }
        _ => {}
    }

    if current.disabled || !capabilities.accepts(event) {
        return Ok(next);
    }

    let unknown = || MotionError::UnknownTransitionEvent {
        state: current.state,
        event: event.clone(),
    };

    match event {
        InteractionEvent::PointerDown => {
            if !current.loading {
                next.pointer_down = true;
            }
        }
        InteractionEvent::PointerUp | InteractionEvent::PointerCancel => {
            if !current.pointer_down {
                return Err(unknown());
            }
            next.pointer_down = false;
        }
        InteractionEvent::FocusGained => next.focused = true,
        InteractionEvent::FocusLost => {
            if !current.focused {
                return Err(unknown());
            }
            next.focused = false;
        }
        _ => {}
    }

    Ok(next.settle_state())
}

/// Owns one instance's snapshot and its capability set.
#[derive(Debug, Clone)]
pub struct InteractionMachine {
    snapshot: InteractionSnapshot,
    capabilities: Capabilities,
}

impl InteractionMachine {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            snapshot: InteractionSnapshot::default(),
            capabilities,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.snapshot.state
    }

    pub fn snapshot(&self) -> &InteractionSnapshot {
        &self.snapshot
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Apply `event`. Returns whether the snapshot changed.
    pub fn handle(&mut self, event: &InteractionEvent) -> Result<bool> {
        let next = transition(&self.snapshot, event, self.capabilities)?;
        if next == self.snapshot {
            return Ok(false);
        }
        debug!(
            from = %self.snapshot.state,
            to = %next.state,
            ?event,
            "interaction transition"
        );
        self.snapshot = next;
        Ok(true)
    }
}
