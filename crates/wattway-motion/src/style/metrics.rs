//! Static box geometry per component and size.

use serde::{Deserialize, Serialize};

use super::variant::{ControlKind, LoaderKind, LogoKind, Size, VariantConfig};
use crate::theme::ThemeTokens;

/// Non-animated geometry. Resolved once at mount; it does not depend on the
/// interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxMetrics {
    pub padding_vertical: f64,
    pub padding_horizontal: f64,
    pub min_height: f64,
    pub corner_radius: f64,
    pub border_width: f64,
    pub font_size: f64,
    pub font_weight: u16,
}

pub fn resolve_metrics(theme: &ThemeTokens, variant: &VariantConfig) -> BoxMetrics {
    let spacing = &theme.spacing;
    let radii = &theme.radii;

    match *variant {
        VariantConfig::Button { kind, size } => {
            let (padding_vertical, padding_horizontal, min_height) = match size {
                Size::Small => (spacing.sm, spacing.lg, 40.0),
                Size::Medium => (spacing.lg, spacing.xl, 52.0),
                Size::Large => (spacing.xl, spacing.xxl, 60.0),
            };
            let (font_size, font_weight) = match size {
                Size::Small => (14.0, 600),
                Size::Medium => (theme.typography.button.font_size, theme.typography.button.font_weight),
                Size::Large => (18.0, 700),
            };
            BoxMetrics {
                padding_vertical,
                padding_horizontal,
                min_height,
                corner_radius: radii.lg,
                border_width: if kind == ControlKind::Outline { 1.0 } else { 0.0 },
                font_size,
                font_weight,
            }
        }
        VariantConfig::Input { kind, size } => {
            let (padding_vertical, padding_horizontal, min_height, font_size) = match size {
                Size::Small => (spacing.sm, spacing.lg, 40.0, 14.0),
                Size::Medium => (spacing.lg, spacing.lg, 52.0, 16.0),
                Size::Large => (spacing.xl, spacing.xl, 60.0, 18.0),
            };
            let (corner_radius, border_width) = match kind {
                ControlKind::Ghost => (0.0, 2.0),
                _ => (radii.lg, 1.0),
            };
            BoxMetrics {
                padding_vertical,
                padding_horizontal,
                min_height,
                corner_radius,
                border_width,
                font_size,
                font_weight: theme.typography.body.font_weight,
            }
        }
        VariantConfig::Logo { kind, diameter } => BoxMetrics {
            min_height: diameter,
            corner_radius: diameter / 2.0,
            font_size: match kind {
                LogoKind::Minimal => diameter * 0.3,
                LogoKind::Default | LogoKind::Glow => diameter * 0.28,
            },
            font_weight: theme.typography.h1.font_weight,
            ..BoxMetrics::default()
        },
        VariantConfig::Loader { kind, size } => {
            let diameter = variant.diameter().unwrap_or_default();
            BoxMetrics {
                min_height: diameter,
                corner_radius: match kind {
                    LoaderKind::Dots => diameter / 16.0,
                    LoaderKind::Default | LoaderKind::Pulse => diameter / 2.0,
                },
                font_size: match size {
                    Size::Small => 12.0,
                    Size::Medium => 14.0,
                    Size::Large => 16.0,
                },
                font_weight: theme.typography.caption.font_weight,
                ..BoxMetrics::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_sizes() {
        let theme = ThemeTokens::wattway_dark();
        let small = resolve_metrics(&theme, &VariantConfig::button(ControlKind::Primary, Size::Small));
        assert_eq!((small.padding_vertical, small.padding_horizontal), (8.0, 16.0));
        assert_eq!(small.min_height, 40.0);

        let medium = resolve_metrics(&theme, &VariantConfig::button(ControlKind::Outline, Size::Medium));
        assert_eq!((medium.padding_vertical, medium.padding_horizontal), (16.0, 24.0));
        assert_eq!(medium.font_size, 16.0);
        assert_eq!(medium.border_width, 1.0);
        assert_eq!(medium.corner_radius, 16.0);

        let large = resolve_metrics(&theme, &VariantConfig::button(ControlKind::Ghost, Size::Large));
        assert_eq!((large.padding_vertical, large.padding_horizontal), (24.0, 32.0));
        assert_eq!(large.min_height, 60.0);
        assert_eq!(large.border_width, 0.0);
    }

    #[test]
    fn test_input_underlined() {
        let theme = ThemeTokens::wattway_dark();
        let ghost = resolve_metrics(&theme, &VariantConfig::input(ControlKind::Ghost, Size::Medium));
        assert_eq!(ghost.corner_radius, 0.0);
        assert_eq!(ghost.border_width, 2.0);
        assert_eq!(ghost.padding_horizontal, 16.0);
    }

    #[test]
    fn test_round_components() {
        let theme = ThemeTokens::wattway_dark();
        let logo = resolve_metrics(&theme, &VariantConfig::logo(LogoKind::Default));
        assert_eq!(logo.corner_radius, 48.0);
        let dots = resolve_metrics(&theme, &VariantConfig::loader(LoaderKind::Dots, Size::Medium));
        assert_eq!(dots.min_height, 72.0);
        assert_eq!(dots.corner_radius, 4.5);
    }
}
