//! Semantic design tokens consumed by the style resolver.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::{MotionError, Result};

/// Immutable token set shared by every component instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub colors: ColorRoles,
    pub spacing: SpacingScale,
    pub radii: RadiiScale,
    pub typography: TypeScale,
}

/// Semantic color roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRoles {
    pub primary: Color,
    pub primary_dark: Color,
    pub primary_light: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub card: Color,
    pub border: Color,
    pub text: Color,
    pub text_dim: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
    pub white: Color,
    pub black: Color,
    pub overlay: Color,
}

/// Six-step spacing scale, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
}

/// Corner radii, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiiScale {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub round: f64,
}

/// A single typography preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeStyle {
    pub font_size: f64,
    pub font_weight: u16,
    pub line_height: f64,
    #[serde(default)]
    pub letter_spacing: f64,
}

/// Named typography presets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    pub h1: TypeStyle,
    pub h2: TypeStyle,
    pub h3: TypeStyle,
    pub title: TypeStyle,
    pub subtitle: TypeStyle,
    pub body: TypeStyle,
    pub caption: TypeStyle,
    pub button: TypeStyle,
    pub label: TypeStyle,
}

impl TypeStyle {
    pub const fn new(font_size: f64, font_weight: u16, line_height: f64, letter_spacing: f64) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
            letter_spacing,
        }
    }
}

impl SpacingScale {
    fn values(&self) -> [f64; 6] {
        [self.xs, self.sm, self.md, self.lg, self.xl, self.xxl]
    }
}

impl RadiiScale {
    fn values(&self) -> [f64; 5] {
        [self.sm, self.md, self.lg, self.xl, self.round]
    }
}

impl ThemeTokens {
    /// Load a token set from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MotionError::ConfigurationError(format!(
                "failed to read theme file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a token set from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let tokens: Self = toml::from_str(content).map_err(|e| {
            MotionError::ConfigurationError(format!("failed to parse theme tokens: {}", e))
        })?;
        tokens.validate()?;
        Ok(tokens)
    }

    /// Reject token sets whose numeric scales are unusable as animation input.
    pub fn validate(&self) -> Result<()> {
        let scales = self.spacing.values().into_iter().chain(self.radii.values());
        if let Some(bad) = scales.into_iter().find(|v| !v.is_finite() || *v < 0.0) {
            return Err(MotionError::ConfigurationError(format!(
                "spacing and radii tokens must be finite and non-negative, got {}",
                bad
            )));
        }
        Ok(())
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::wattway_dark()
    }
}
