//! Property names and values published to the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theme::Color;

/// A visual property the engine can animate.
///
/// Ordering is stable and drives the iteration order of style intents and
/// published frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    Scale,
    TranslateY,
    /// Rotation in degrees.
    Rotate,
    BackgroundColor,
    BorderColor,
    TextColor,
    LabelColor,
    LabelScale,
    LabelTranslateY,
    ShadowOpacity,
    GlowOpacity,
    /// Logo wordmark opacity.
    TextOpacity,
    /// Logo wordmark vertical offset.
    TextTranslateY,
    /// Vertical bounce shared by the loader dots.
    DotOffset,
}

impl Property {
    pub fn is_color(self) -> bool {
        matches!(
            self,
            Self::BackgroundColor | Self::BorderColor | Self::TextColor | Self::LabelColor
        )
    }

    /// Neutral scalar value: 1 for multiplicative properties, 0 otherwise.
    /// Loops with no prior value start from here.
    pub fn rest_value(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale | Self::LabelScale | Self::TextOpacity => 1.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Opacity => "opacity",
            Self::Scale => "scale",
            Self::TranslateY => "translateY",
            Self::Rotate => "rotate",
            Self::BackgroundColor => "backgroundColor",
            Self::BorderColor => "borderColor",
            Self::TextColor => "textColor",
            Self::LabelColor => "labelColor",
            Self::LabelScale => "labelScale",
            Self::LabelTranslateY => "labelTranslateY",
            Self::ShadowOpacity => "shadowOpacity",
            Self::GlowOpacity => "glowOpacity",
            Self::TextOpacity => "textOpacity",
            Self::TextTranslateY => "textTranslateY",
            Self::DotOffset => "dotOffset",
        };
        f.write_str(name)
    }
}

/// Concrete value of a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Scalar(f64),
    Color(Color),
}

impl PropertyValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Scalar(_) => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(v) => v.is_finite(),
            Self::Color(c) => c.is_finite(),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Color> for PropertyValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}
