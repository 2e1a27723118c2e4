//! Channel arithmetic shared by timing and spring curves.
//!
//! Colors are interpolated per component in linear premultiplied space, the
//! same space the theme stores them in.

use std::fmt::Debug;

use crate::theme::Color;

/// A value an `AnimatedValue` can drive.
///
/// Springs treat the value as a vector and integrate each component
/// independently, so implementors expose component-wise arithmetic.
pub trait Animatable: Copy + PartialEq + Debug {
    /// Additive identity, also the rest velocity.
    const ZERO: Self;

    /// Combine two values component by component.
    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self;

    /// Largest absolute component.
    fn max_abs(self) -> f64;

    fn all_finite(self) -> bool;

    /// Linear interpolation, `t = 0` yields `self`, `t = 1` yields `to`.
    fn interpolate(self, to: Self, t: f64) -> Self {
        self.zip_with(to, |a, b| a + (b - a) * t)
    }

    fn difference(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }
}

impl Animatable for f64 {
    const ZERO: Self = 0.0;

    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        f(self, other)
    }

    fn max_abs(self) -> f64 {
        self.abs()
    }

    fn all_finite(self) -> bool {
        self.is_finite()
    }
}

impl Animatable for Color {
    const ZERO: Self = Color::TRANSPARENT;

    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        Color::from_array(std::array::from_fn(|i| f(a[i] as f64, b[i] as f64) as f32))
    }

    fn max_abs(self) -> f64 {
        self.to_array()
            .iter()
            .fold(0.0_f64, |acc, c| acc.max((*c as f64).abs()))
    }

    fn all_finite(self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_interpolate() {
        assert_eq!(0.0_f64.interpolate(10.0, 0.25), 2.5);
        assert_eq!(1.0_f64.interpolate(0.96, 1.0), 0.96);
    }

    #[test]
    fn test_color_interpolate_per_component() {
        let from = Color::from_array([0.0, 0.2, 0.4, 1.0]);
        let to = Color::from_array([1.0, 0.2, 0.0, 0.0]);
        let mid = from.interpolate(to, 0.5).to_array();
        let expected = [0.5, 0.2, 0.2, 0.5];
        for (got, want) in mid.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_max_abs_and_finite() {
        let c = Color::from_array([0.1, -0.7, 0.3, 0.5]);
        assert!((c.max_abs() - 0.7).abs() < 1e-6);
        assert!(c.all_finite());
        assert!(!f64::NAN.all_finite());
        assert_eq!((-3.0_f64).max_abs(), 3.0);
    }
}
