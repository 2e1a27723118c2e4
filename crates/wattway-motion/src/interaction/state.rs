//! Interaction vocabulary: states, events and per-component capabilities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visible interaction state of one component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    #[default]
    Idle,
    Focused,
    Pressed,
    Loading,
    Disabled,
    /// Part of the vocabulary for presentation code. The machine itself never
    /// enters it; errors travel as an annotation.
    Error,
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Focused => "focused",
            Self::Pressed => "pressed",
            Self::Loading => "loading",
            Self::Disabled => "disabled",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Discrete input delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum InteractionEvent {
    FocusGained,
    FocusLost,
    PointerDown,
    PointerUp,
    PointerCancel,
    SetLoading(bool),
    SetDisabled(bool),
    /// Attach (`Some`) or clear (`None`) a validation message.
    SetError(Option<String>),
    /// Whether a text input currently holds content.
    SetFilled(bool),
}

impl InteractionEvent {
    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::PointerDown | Self::PointerUp | Self::PointerCancel)
    }

    pub fn is_focus(&self) -> bool {
        matches!(self, Self::FocusGained | Self::FocusLost)
    }
}

/// Which event families a component kind reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub pointer: bool,
    pub focus: bool,
}

impl Capabilities {
    /// Buttons take both pointer and focus input.
    pub const INTERACTIVE: Self = Self {
        pointer: true,
        focus: true,
    };

    /// Text inputs take focus only.
    pub const FOCUS_ONLY: Self = Self {
        pointer: false,
        focus: true,
    };

    /// Loaders and logos ignore pointer and focus.
    pub const PASSIVE: Self = Self {
        pointer: false,
        focus: false,
    };

    pub fn accepts(&self, event: &InteractionEvent) -> bool {
        if event.is_pointer() {
            self.pointer
        } else if event.is_focus() {
            self.focus
        } else {
            true
        }
    }
}
