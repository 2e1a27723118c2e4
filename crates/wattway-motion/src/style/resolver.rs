//! Maps `(theme, variant, state, annotations)` onto a `StyleIntent`.
//!
//! Precedence: `Disabled` forces opacity to 0.6 on every component. An error
//! annotation recolors borders and text with the danger token but leaves
//! geometry to the state, so a focused input with an error keeps its focus
//! scale.

use super::intent::StyleIntent;
use super::variant::{ControlKind, LoaderKind, LogoKind, VariantConfig};
use crate::animation::{Curve, Easing, LoopLeg, LoopSpec, Property, TimingConfig};
use crate::error::Result;
use crate::interaction::{InteractionSnapshot, InteractionState};
use crate::theme::{Color, ThemeTokens};

pub const DISABLED_OPACITY: f64 = 0.6;
pub const PRESSED_SCALE: f64 = 0.96;
pub const FOCUSED_INPUT_SCALE: f64 = 1.02;
pub const FLOATING_LABEL_SCALE: f64 = 0.85;
pub const FLOATING_LABEL_OFFSET: f64 = -8.0;

const PRESS_SPRING: Curve = Curve::spring(15.0, 300.0);
const BUTTON_FADE: Curve = Curve::timing(150.0);
const FOCUS_FADE: Curve = Curve::timing(200.0);
const LOGO_SPRING: Curve = Curve::spring(15.0, 150.0);
const WORDMARK_SPRING: Curve = Curve::spring(20.0, 100.0);

/// Orthogonal annotations that shape the style without being states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Annotations {
    pub error: bool,
    pub filled: bool,
}

impl From<&InteractionSnapshot> for Annotations {
    fn from(snapshot: &InteractionSnapshot) -> Self {
        Self {
            error: snapshot.has_error(),
            filled: snapshot.filled,
        }
    }
}

/// Resolve the style intent for one instance. Pure: equal inputs always give
/// equal intents.
///
/// Returns `ConfigurationError` for an invalid variant or when the theme yields
/// unusable targets.
pub fn resolve_style(
    theme: &ThemeTokens,
    variant: &VariantConfig,
    state: InteractionState,
    annotations: Annotations,
) -> Result<StyleIntent> {
    variant.validate()?;

    let intent = match *variant {
        VariantConfig::Button { kind, .. } => button(theme, kind, state, annotations),
        VariantConfig::Input { kind, .. } => input(theme, kind, state, annotations),
        VariantConfig::Logo { kind, .. } => logo(kind, state),
        VariantConfig::Loader { kind, .. } => {
            loader(kind, variant.diameter().unwrap_or_default(), state)
        }
    };

    intent.validate()?;
    Ok(intent)
}

fn resting_opacity(state: InteractionState) -> f64 {
    if state == InteractionState::Disabled {
        DISABLED_OPACITY
    } else {
        1.0
    }
}

fn button(
    theme: &ThemeTokens,
    kind: ControlKind,
    state: InteractionState,
    annotations: Annotations,
) -> StyleIntent {
    let colors = &theme.colors;

    let scale = if state == InteractionState::Pressed {
        PRESSED_SCALE
    } else {
        1.0
    };
    let opacity = match state {
        InteractionState::Disabled | InteractionState::Loading => DISABLED_OPACITY,
        _ => 1.0,
    };
    let background = match kind {
        ControlKind::Primary => colors.primary,
        ControlKind::Secondary => colors.accent,
        ControlKind::Outline => colors.surface,
        ControlKind::Ghost => Color::TRANSPARENT,
    };
    let border = match kind {
        _ if annotations.error => colors.danger,
        ControlKind::Outline => colors.primary,
        _ => Color::TRANSPARENT,
    };
    let text = match kind {
        _ if annotations.error => colors.danger,
        ControlKind::Primary | ControlKind::Secondary => colors.white,
        ControlKind::Outline | ControlKind::Ghost => colors.primary,
    };
    let shadow = if kind == ControlKind::Primary { 0.3 } else { 0.0 };

    StyleIntent::new()
        .to(Property::Scale, scale, PRESS_SPRING)
        .to(Property::Opacity, opacity, BUTTON_FADE)
        .to(Property::BackgroundColor, background, BUTTON_FADE)
        .to(Property::BorderColor, border, BUTTON_FADE)
        .to(Property::TextColor, text, BUTTON_FADE)
        .to(Property::ShadowOpacity, shadow, BUTTON_FADE)
}

fn input(
    theme: &ThemeTokens,
    kind: ControlKind,
    state: InteractionState,
    annotations: Annotations,
) -> StyleIntent {
    let colors = &theme.colors;
    let focused = state == InteractionState::Focused;
    let floating = focused || annotations.filled;

    let background = match kind {
        ControlKind::Primary | ControlKind::Secondary => colors.surface,
        ControlKind::Outline | ControlKind::Ghost => Color::TRANSPARENT,
    };
    let border = if annotations.error {
        colors.danger
    } else if focused {
        colors.primary
    } else if kind == ControlKind::Secondary {
        Color::TRANSPARENT
    } else {
        colors.border
    };
    let label = if annotations.error {
        colors.danger
    } else if focused {
        colors.primary
    } else {
        colors.text_dim
    };
    let text = if annotations.error {
        colors.danger
    } else {
        colors.text
    };

    StyleIntent::new()
        .to(
            Property::Scale,
            if focused { FOCUSED_INPUT_SCALE } else { 1.0 },
            PRESS_SPRING,
        )
        .to(Property::Opacity, resting_opacity(state), BUTTON_FADE)
        .to(Property::BackgroundColor, background, FOCUS_FADE)
        .to(Property::BorderColor, border, FOCUS_FADE)
        .to(Property::TextColor, text, FOCUS_FADE)
        .to(Property::LabelColor, label, FOCUS_FADE)
        .to(
            Property::LabelScale,
            if floating { FLOATING_LABEL_SCALE } else { 1.0 },
            PRESS_SPRING,
        )
        .to(
            Property::LabelTranslateY,
            if floating { FLOATING_LABEL_OFFSET } else { 0.0 },
            PRESS_SPRING,
        )
        .to(
            Property::ShadowOpacity,
            if focused { 0.2 } else { 0.0 },
            FOCUS_FADE,
        )
}

fn logo(kind: LogoKind, state: InteractionState) -> StyleIntent {
    let sway = LoopSpec::forever(vec![
        LoopLeg::new(5.0, 2000.0),
        LoopLeg::new(-5.0, 2000.0),
        LoopLeg::new(0.0, 2000.0),
    ]);

    let mut intent = StyleIntent::new()
        .to(
            Property::Opacity,
            resting_opacity(state),
            Curve::Timing(TimingConfig::new(600.0).with_easing(Easing::EaseOutCubic)),
        )
        .to(Property::Scale, 1.0, LOGO_SPRING)
        .looping(Property::Rotate, sway);

    if kind == LogoKind::Glow {
        intent = intent.looping(
            Property::GlowOpacity,
            LoopSpec::forever(vec![LoopLeg::new(0.8, 1500.0), LoopLeg::new(0.3, 1500.0)]),
        );
    }
    if kind != LogoKind::Minimal {
        intent = intent
            .to(
                Property::TextOpacity,
                1.0,
                Curve::Timing(TimingConfig::new(800.0).with_easing(Easing::EaseOutCubic)),
            )
            .to(Property::TextTranslateY, 0.0, WORDMARK_SPRING);
    }
    intent
}

fn loader(kind: LoaderKind, diameter: f64, state: InteractionState) -> StyleIntent {
    let disabled = state == InteractionState::Disabled;
    let intent = StyleIntent::new();

    match kind {
        LoaderKind::Pulse if !disabled => intent
            .looping(
                Property::Opacity,
                LoopSpec::forever(vec![LoopLeg::new(1.0, 800.0), LoopLeg::new(0.3, 800.0)]),
            )
            .looping(
                Property::Scale,
                LoopSpec::forever(vec![LoopLeg::new(1.2, 800.0), LoopLeg::new(1.0, 800.0)]),
            ),
        LoaderKind::Dots => intent
            .to(Property::Opacity, resting_opacity(state), BUTTON_FADE)
            .to(Property::Scale, 1.0, PRESS_SPRING)
            .looping(
                Property::DotOffset,
                LoopSpec::forever(vec![
                    LoopLeg::new(-diameter / 4.0, 600.0),
                    LoopLeg::new(0.0, 600.0),
                ]),
            ),
        LoaderKind::Default | LoaderKind::Pulse => intent
            .to(Property::Opacity, resting_opacity(state), BUTTON_FADE)
            .to(Property::Scale, 1.0, PRESS_SPRING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::PropertyValue;
    use crate::style::intent::Motion;
    use crate::style::variant::Size;

    fn theme() -> ThemeTokens {
        ThemeTokens::wattway_dark()
    }

    fn all_variants() -> Vec<VariantConfig> {
        let mut variants = Vec::new();
        for kind in [
            ControlKind::Primary,
            ControlKind::Secondary,
            ControlKind::Outline,
            ControlKind::Ghost,
        ] {
            for size in [Size::Small, Size::Medium, Size::Large] {
                variants.push(VariantConfig::button(kind, size));
                variants.push(VariantConfig::input(kind, size));
            }
        }
        for kind in [LogoKind::Default, LogoKind::Minimal, LogoKind::Glow] {
            variants.push(VariantConfig::logo(kind));
        }
        for kind in [LoaderKind::Default, LoaderKind::Dots, LoaderKind::Pulse] {
            variants.push(VariantConfig::loader(kind, Size::Medium));
        }
        variants
    }

    #[test]
    fn test_disabled_forces_opacity_everywhere() {
        let theme = theme();
        for variant in all_variants() {
            for error in [false, true] {
                let annotations = Annotations { error, filled: false };
                let intent =
                    resolve_style(&theme, &variant, InteractionState::Disabled, annotations)
                        .unwrap();
                assert_eq!(
                    intent.scalar(Property::Opacity),
                    Some(DISABLED_OPACITY),
                    "{variant:?}"
                );
            }
        }
    }

    #[test]
    fn test_button_press_scale() {
        let theme = theme();
        let variant = VariantConfig::button(ControlKind::Primary, Size::Medium);
        let pressed =
            resolve_style(&theme, &variant, InteractionState::Pressed, Annotations::default())
                .unwrap();
        assert_eq!(pressed.scalar(Property::Scale), Some(PRESSED_SCALE));
        assert_eq!(pressed.curve(Property::Scale), Some(Curve::spring(15.0, 300.0)));

        let idle = resolve_style(&theme, &variant, InteractionState::Idle, Annotations::default())
            .unwrap();
        assert_eq!(idle.scalar(Property::Scale), Some(1.0));
        assert_eq!(idle.scalar(Property::Opacity), Some(1.0));
    }

    #[test]
    fn test_button_loading_dims() {
        let theme = theme();
        let variant = VariantConfig::button(ControlKind::Secondary, Size::Small);
        let loading =
            resolve_style(&theme, &variant, InteractionState::Loading, Annotations::default())
                .unwrap();
        assert_eq!(loading.scalar(Property::Opacity), Some(DISABLED_OPACITY));
        assert_eq!(loading.curve(Property::Opacity), Some(Curve::timing(150.0)));
    }

    #[test]
    fn test_button_colors_by_kind() {
        let theme = theme();
        let colors = &theme.colors;
        let check = |kind: ControlKind, background: Color, border: Color, text: Color| {
            let intent = resolve_style(
                &theme,
                &VariantConfig::button(kind, Size::Medium),
                InteractionState::Idle,
                Annotations::default(),
            )
            .unwrap();
            assert_eq!(intent.target(Property::BackgroundColor), Some(PropertyValue::Color(background)));
            assert_eq!(intent.target(Property::BorderColor), Some(PropertyValue::Color(border)));
            assert_eq!(intent.target(Property::TextColor), Some(PropertyValue::Color(text)));
        };
        check(ControlKind::Primary, colors.primary, Color::TRANSPARENT, colors.white);
        check(ControlKind::Secondary, colors.accent, Color::TRANSPARENT, colors.white);
        check(ControlKind::Outline, colors.surface, colors.primary, colors.primary);
        check(ControlKind::Ghost, Color::TRANSPARENT, Color::TRANSPARENT, colors.primary);
    }

    #[test]
    fn test_input_focus_and_error() {
        let theme = theme();
        let variant = VariantConfig::input(ControlKind::Primary, Size::Medium);
        let focused =
            resolve_style(&theme, &variant, InteractionState::Focused, Annotations::default())
                .unwrap();
        assert_eq!(focused.scalar(Property::Scale), Some(FOCUSED_INPUT_SCALE));
        assert_eq!(
            focused.target(Property::BorderColor),
            Some(theme.colors.primary.into())
        );
        assert_eq!(focused.scalar(Property::ShadowOpacity), Some(0.2));
        assert_eq!(focused.curve(Property::BorderColor), Some(Curve::timing(200.0)));

        let errored = resolve_style(
            &theme,
            &variant,
            InteractionState::Focused,
            Annotations {
                error: true,
                filled: false,
            },
        )
        .unwrap();
        assert_eq!(
            errored.target(Property::BorderColor),
            Some(theme.colors.danger.into())
        );
        assert_eq!(errored.scalar(Property::Scale), Some(FOCUSED_INPUT_SCALE));
        assert_eq!(errored.scalar(Property::Opacity), focused.scalar(Property::Opacity));
    }

    #[test]
    fn test_input_label_floats_when_filled() {
        let theme = theme();
        let variant = VariantConfig::input(ControlKind::Outline, Size::Large);
        let idle = resolve_style(&theme, &variant, InteractionState::Idle, Annotations::default())
            .unwrap();
        assert_eq!(idle.scalar(Property::LabelScale), Some(1.0));
        assert_eq!(idle.target(Property::LabelColor), Some(theme.colors.text_dim.into()));

        let filled = resolve_style(
            &theme,
            &variant,
            InteractionState::Idle,
            Annotations {
                error: false,
                filled: true,
            },
        )
        .unwrap();
        assert_eq!(filled.scalar(Property::LabelScale), Some(FLOATING_LABEL_SCALE));
        assert_eq!(filled.scalar(Property::LabelTranslateY), Some(FLOATING_LABEL_OFFSET));
        assert_eq!(filled.scalar(Property::Scale), Some(1.0));
    }

    #[test]
    fn test_secondary_input_has_no_resting_border() {
        let theme = theme();
        let intent = resolve_style(
            &theme,
            &VariantConfig::input(ControlKind::Secondary, Size::Medium),
            InteractionState::Idle,
            Annotations::default(),
        )
        .unwrap();
        assert_eq!(intent.target(Property::BorderColor), Some(Color::TRANSPARENT.into()));
    }

    #[test]
    fn test_loader_loops() {
        let theme = theme();
        let pulse = resolve_style(
            &theme,
            &VariantConfig::loader(LoaderKind::Pulse, Size::Medium),
            InteractionState::Idle,
            Annotations::default(),
        )
        .unwrap();
        assert!(matches!(pulse.get(Property::Scale), Some(Motion::Loop(_))));
        assert!(matches!(pulse.get(Property::Opacity), Some(Motion::Loop(_))));

        let dots = resolve_style(
            &theme,
            &VariantConfig::loader(LoaderKind::Dots, Size::Large),
            InteractionState::Idle,
            Annotations::default(),
        )
        .unwrap();
        match dots.get(Property::DotOffset) {
            Some(Motion::Loop(spec)) => assert_eq!(spec.legs[0].to, -30.0),
            other => panic!("expected a loop, got {other:?}"),
        }
    }

    #[test]
    fn test_logo_kinds() {
        let theme = theme();
        let resolve = |kind| {
            resolve_style(
                &theme,
                &VariantConfig::logo(kind),
                InteractionState::Idle,
                Annotations::default(),
            )
            .unwrap()
        };
        let glow = resolve(LogoKind::Glow);
        assert!(glow.get(Property::GlowOpacity).is_some());
        assert!(matches!(glow.get(Property::Rotate), Some(Motion::Loop(_))));

        let minimal = resolve(LogoKind::Minimal);
        assert!(minimal.get(Property::GlowOpacity).is_none());
        assert!(minimal.get(Property::TextOpacity).is_none());
        assert_eq!(resolve(LogoKind::Default).scalar(Property::TextTranslateY), Some(0.0));
    }

    #[test]
    fn test_resolver_is_pure() {
        let theme = theme();
        for variant in all_variants() {
            let a = resolve_style(&theme, &variant, InteractionState::Focused, Annotations::default());
            let b = resolve_style(&theme, &variant, InteractionState::Focused, Annotations::default());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_invalid_variant_is_configuration_error() {
        let variant = VariantConfig::Logo {
            kind: LogoKind::Default,
            diameter: f64::NAN,
        };
        let err = resolve_style(&theme(), &variant, InteractionState::Idle, Annotations::default())
            .unwrap_err();
        assert!(matches!(err, crate::error::MotionError::ConfigurationError(_)));
    }
}
