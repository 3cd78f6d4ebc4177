//! Splitting a transform into translation, rotation and scale, and back.
//!
//! Works on affine matrices built as `translate * rotate * scale` without
//! shear. A negative determinant of the linear block is reported as a
//! negative X scale. Rotations are kept as orthonormal [`Mat3`]s.
//!
//! # Example
//!
//! ```rust
//! use vne_math::decompose::{compose, decompose};
//! use vne_math::{Mat3, Vec3};
//!
//! let m = compose(Vec3::new(1.0, 2.0, 3.0), &Mat3::rotate_y(0.5), Vec3::splat(2.0));
//! let trs = decompose(&m);
//! assert!((trs.scale - Vec3::splat(2.0)).length() < 1e-5);
//! assert!(trs.rotation.are_same(&Mat3::rotate_y(0.5)));
//! ```

use crate::scalar::{EPSILON, are_same};
use crate::{Mat3, Mat4, Vec3};

/// Translation, rotation and scale of an affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformComponents {
    /// Offset, applied last
    pub translation: Vec3,
    /// Orthonormal rotation
    pub rotation: Mat3,
    /// Per-axis scale, applied first
    pub scale: Vec3,
}

impl TransformComponents {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Mat3::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Creates components from their parts.
    #[inline]
    pub fn new(translation: Vec3, rotation: Mat3, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Returns `true` if this is the identity within [`EPSILON`].
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.is_identity_eps(EPSILON)
    }

    /// Returns `true` if this is the identity within `eps`.
    pub fn is_identity_eps(&self, eps: f32) -> bool {
        self.translation.length_squared() < eps * eps
            && self.rotation.are_same_eps(&Mat3::IDENTITY, eps)
            && self.scale.abs_diff_eq(Vec3::ONE, eps)
    }

    /// Returns `true` if all three scale factors agree within [`EPSILON`].
    #[inline]
    pub fn has_uniform_scale(&self) -> bool {
        self.has_uniform_scale_eps(EPSILON)
    }

    /// Returns `true` if all three scale factors agree within `eps`.
    pub fn has_uniform_scale_eps(&self, eps: f32) -> bool {
        are_same(self.scale.x, self.scale.y, eps) && are_same(self.scale.y, self.scale.z, eps)
    }

    /// Builds `translate * rotate * scale`.
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        compose(self.translation, &self.rotation, self.scale)
    }
}

impl Default for TransformComponents {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<TransformComponents> for Mat4 {
    fn from(c: TransformComponents) -> Self {
        c.to_matrix()
    }
}

/// Splits `m` into translation, rotation and scale such that
/// `m == translate * rotate * scale`.
pub fn decompose(m: &Mat4) -> TransformComponents {
    TransformComponents {
        translation: extract_translation(m),
        rotation: extract_rotation(m),
        scale: extract_scale(m),
    }
}

/// Builds `translate * rotate * scale` directly into the columns.
pub fn compose(translation: Vec3, rotation: &Mat3, scale: Vec3) -> Mat4 {
    Mat4::from_axes_offset(
        rotation.x_axis() * scale.x,
        rotation.y_axis() * scale.y,
        rotation.z_axis() * scale.z,
        translation,
    )
}

/// Interpolates two affine transforms component by component.
///
/// Translation and scale are lerped, rotation is slerped, so the result
/// stays a rigid rotation at every `t` (unlike [`Mat4::lerp`]).
pub fn lerp_transform(a: &Mat4, b: &Mat4, t: f32) -> Mat4 {
    let (ca, cb) = (decompose(a), decompose(b));
    let qa = glam::Quat::from_mat3(&ca.rotation.to_glam());
    let qb = glam::Quat::from_mat3(&cb.rotation.to_glam());
    let rotation = Mat3::from_glam(glam::Mat3::from_quat(qa.slerp(qb, t)));
    compose(
        ca.translation.lerp(cb.translation, t),
        &rotation,
        ca.scale.lerp(cb.scale, t),
    )
}

/// Translation stored in column 3.
#[inline]
pub fn extract_translation(m: &Mat4) -> Vec3 {
    m.translation()
}

/// Per-axis scale: the length of each basis column.
///
/// X is negated when the basis is mirrored.
pub fn extract_scale(m: &Mat4) -> Vec3 {
    let (x, y, z) = (m.x_axis(), m.y_axis(), m.z_axis());
    let mut scale = Vec3::new(x.length(), y.length(), z.length());
    if x.cross(y).dot(z) < 0.0 {
        scale.x = -scale.x;
    }
    scale
}

/// Upper-left 3x3 block (rotation and scale, no translation).
#[inline]
pub fn extract_mat3(m: &Mat4) -> Mat3 {
    m.to_mat3()
}

/// Rotation part: the basis columns divided by [`extract_scale`].
///
/// Columns with zero scale are left as they are.
pub fn extract_rotation(m: &Mat4) -> Mat3 {
    let scale = extract_scale(m);
    let unscale = |axis: Vec3, s: f32| if s != 0.0 { axis / s } else { axis };
    Mat3::from_cols(
        unscale(m.x_axis(), scale.x),
        unscale(m.y_axis(), scale.y),
        unscale(m.z_axis(), scale.z),
    )
}

/// Returns `true` if all three scale factors agree within [`EPSILON`].
pub fn has_uniform_scale(m: &Mat4) -> bool {
    let s = extract_scale(m).abs();
    are_same(s.x, s.y, EPSILON) && are_same(s.y, s.z, EPSILON)
}
