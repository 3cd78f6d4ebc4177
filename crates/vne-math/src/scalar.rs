//! Scalar helpers shared by the matrix types.
//!
//! Tolerances are absolute: two values are "the same" when they differ by
//! at most `eps`.
//!
//! # Usage
//!
//! ```rust
//! use vne_math::{are_same, deg_to_rad, is_zero, lerp, EPSILON};
//!
//! assert!(are_same(1.0, 1.0 + 1e-6, EPSILON));
//! assert!(is_zero(1e-7, EPSILON));
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
//! ```

/// Default tolerance for approximate comparisons, orthogonality and
/// handedness checks, and the near-zero divisor guard.
pub const EPSILON: f32 = 1e-5;

/// Determinant magnitude under which [`Mat3::try_inverse`](crate::Mat3::try_inverse)
/// and [`Mat4::try_inverse`](crate::Mat4::try_inverse) report a singular matrix.
pub const SINGULAR_TOLERANCE: f32 = 1e-10;

/// Returns `true` if `a` and `b` differ by at most `eps`.
#[inline]
pub fn are_same(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

/// Returns `true` if `|x| <= eps`.
#[inline]
pub fn is_zero(x: f32, eps: f32) -> bool {
    x.abs() <= eps
}

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a * (1 - t) + b * t`, which hits both endpoints exactly.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Clamps a value to the range [min, max].
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_are_same() {
        assert!(are_same(1.0, 1.0, 0.0));
        assert!(are_same(0.5, 0.500004, EPSILON));
        assert!(!are_same(0.5, 0.5001, EPSILON));
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0, 0.0));
        assert!(is_zero(-9e-6, EPSILON));
        assert!(!is_zero(2e-5, EPSILON));
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_angles() {
        assert!((deg_to_rad(90.0) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((rad_to_deg(std::f32::consts::PI) - 180.0).abs() < 1e-4);
    }
}
