//! Per-instance component configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::interaction::Capabilities;

/// Visual kind shared by buttons and text inputs.
///
/// For inputs the kinds map onto field treatments: `Primary` is the standard
/// surface field, `Secondary` a filled field with no border at rest, `Outline`
/// a transparent outlined field and `Ghost` an underlined field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoKind {
    #[default]
    Default,
    /// Mark only, no wordmark.
    Minimal,
    /// Adds a breathing halo.
    Glow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderKind {
    #[default]
    Default,
    Dots,
    Pulse,
}

pub const DEFAULT_LOGO_DIAMETER: f64 = 96.0;

/// Immutable configuration supplied when an instance is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum VariantConfig {
    Button {
        #[serde(default)]
        kind: ControlKind,
        #[serde(default)]
        size: Size,
    },
    Input {
        #[serde(default)]
        kind: ControlKind,
        #[serde(default)]
        size: Size,
    },
    Logo {
        #[serde(default)]
        kind: LogoKind,
        #[serde(default = "default_logo_diameter")]
        diameter: f64,
    },
    Loader {
        #[serde(default)]
        kind: LoaderKind,
        #[serde(default)]
        size: Size,
    },
}

fn default_logo_diameter() -> f64 {
    DEFAULT_LOGO_DIAMETER
}

impl VariantConfig {
    pub const fn button(kind: ControlKind, size: Size) -> Self {
        Self::Button { kind, size }
    }

    pub const fn input(kind: ControlKind, size: Size) -> Self {
        Self::Input { kind, size }
    }

    pub const fn logo(kind: LogoKind) -> Self {
        Self::Logo {
            kind,
            diameter: DEFAULT_LOGO_DIAMETER,
        }
    }

    pub const fn loader(kind: LoaderKind, size: Size) -> Self {
        Self::Loader { kind, size }
    }

    /// Short component name for logs.
    pub fn component(&self) -> &'static str {
        match self {
            Self::Button { .. } => "button",
            Self::Input { .. } => "input",
            Self::Logo { .. } => "logo",
            Self::Loader { .. } => "loader",
        }
    }

    /// Event families this component reacts to.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Button { .. } => Capabilities::INTERACTIVE,
            Self::Input { .. } => Capabilities::FOCUS_ONLY,
            Self::Logo { .. } | Self::Loader { .. } => Capabilities::PASSIVE,
        }
    }

    /// Outer diameter for round components.
    pub fn diameter(&self) -> Option<f64> {
        match *self {
            Self::Logo { diameter, .. } => Some(diameter),
            Self::Loader { size, .. } => Some(match size {
                Size::Small => 40.0,
                Size::Medium => 72.0,
                Size::Large => 120.0,
            }),
            Self::Button { .. } | Self::Input { .. } => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(diameter) = self.diameter() {
            if !diameter.is_finite() || diameter <= 0.0 {
                return Err(MotionError::ConfigurationError(format!(
                    "{} diameter must be finite and positive, got {}",
                    self.component(),
                    diameter
                )));
            }
        }
        Ok(())
    }
}
