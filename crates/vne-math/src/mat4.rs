//! 4x4 matrix type for affine and projective transforms.
//!
//! [`Mat4`] holds a full 3D transform: a 3x3 linear block in the upper left,
//! translation in column 3, and the projective row at the bottom.
//!
//! # Convention
//!
//! Column-major with column vectors, `m[c][r]` = column `c`, row `r`:
//!
//! ```text
//! | m[0][0] m[1][0] m[2][0] m[3][0] |   | x |
//! | m[0][1] m[1][1] m[2][1] m[3][1] | * | y |
//! | m[0][2] m[1][2] m[2][2] m[3][2] |   | z |
//! | m[0][3] m[1][3] m[2][3] m[3][3] |   | w |
//! ```
//!
//! `a * b` applies `b` first. A model matrix is typically
//! `translate * rotate * scale`.
//!
//! Camera and projection factories live in [`crate::camera`].
//!
//! # Usage
//!
//! ```rust
//! use vne_math::{Mat4, Vec3};
//!
//! let m = Mat4::translate_xyz(2.0, 2.0, 2.0);
//! assert_eq!(m.transform_point(Vec3::new(2.0, 3.0, 1.0)), Vec3::new(4.0, 5.0, 3.0));
//! assert_eq!(m.transform_vector(Vec3::new(2.0, 3.0, 1.0)), Vec3::new(2.0, 3.0, 1.0));
//! ```

use crate::mat3::{axes_orthonormal, rotation_cols};
use crate::scalar::{EPSILON, SINGULAR_TOLERANCE, are_same, is_zero};
use crate::{Mat3, Vec3, Vec4};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use vne_core::{Error, Handedness, Result};

/// A 4x4 column-major matrix of `f32`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Matrix columns: [x_axis, y_axis, z_axis, translation]
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// Number of columns (and rows).
    pub const ORDER: usize = 4;

    /// Zero matrix.
    pub const ZERO: Self = Self {
        cols: [[0.0; 4]; 4],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0, 1.0);

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols_array_2d(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from sixteen scalars listed column by column.
    #[inline]
    pub const fn from_cols_array(a: [f32; 16]) -> Self {
        Self {
            cols: [
                [a[0], a[1], a[2], a[3]],
                [a[4], a[5], a[6], a[7]],
                [a[8], a[9], a[10], a[11]],
                [a[12], a[13], a[14], a[15]],
            ],
        }
    }

    /// Creates a matrix from Vec4 columns.
    #[inline]
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self::from_cols_array_2d([c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()])
    }

    /// Creates a matrix from Vec4 rows.
    #[inline]
    pub fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self::from_cols(r0, r1, r2, r3).transpose()
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32, d3: f32) -> Self {
        Self {
            cols: [
                [d0, 0.0, 0.0, 0.0],
                [0.0, d1, 0.0, 0.0],
                [0.0, 0.0, d2, 0.0],
                [0.0, 0.0, 0.0, d3],
            ],
        }
    }

    /// Creates a matrix with `s` on the diagonal and zeros elsewhere.
    #[inline]
    pub const fn splat_diagonal(s: f32) -> Self {
        Self::diagonal(s, s, s, s)
    }

    /// Embeds a 3x3 matrix in the upper-left block, identity elsewhere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vne_math::{Mat3, Mat4};
    ///
    /// let m = Mat4::from_mat3(&Mat3::scale_uniform(2.0));
    /// assert_eq!(m, Mat4::scale_xyz(2.0, 2.0, 2.0));
    /// assert_eq!(m.to_mat3(), Mat3::scale_uniform(2.0));
    /// ```
    #[inline]
    pub fn from_mat3(m: &Mat3) -> Self {
        let c = &m.cols;
        Self::from_cols_array_2d([
            [c[0][0], c[0][1], c[0][2], 0.0],
            [c[1][0], c[1][1], c[1][2], 0.0],
            [c[2][0], c[2][1], c[2][2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Upper-left 3x3 block.
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(self.x_axis(), self.y_axis(), self.z_axis())
    }

    /// Returns the zero matrix.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Matrix order (4).
    #[inline]
    pub const fn len() -> usize {
        Self::ORDER
    }

    /// Returns column `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`. See [`try_col`](Self::try_col).
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        assert!(i < Self::ORDER, "Mat4 column index {i} out of bounds");
        Vec4::from_array(self.cols[i])
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`. See [`try_row`](Self::try_row).
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        assert!(i < Self::ORDER, "Mat4 row index {i} out of bounds");
        let c = &self.cols;
        Vec4::new(c[0][i], c[1][i], c[2][i], c[3][i])
    }

    /// Returns column `i`, or [`Error::IndexOutOfBounds`].
    #[inline]
    pub fn try_col(&self, i: usize) -> Result<Vec4> {
        if i >= Self::ORDER {
            return Err(Error::index_out_of_bounds(i, Self::ORDER));
        }
        Ok(self.col(i))
    }

    /// Returns row `i`, or [`Error::IndexOutOfBounds`].
    #[inline]
    pub fn try_row(&self, i: usize) -> Result<Vec4> {
        if i >= Self::ORDER {
            return Err(Error::index_out_of_bounds(i, Self::ORDER));
        }
        Ok(self.row(i))
    }

    /// X basis axis (xyz of column 0).
    #[inline]
    pub fn x_axis(&self) -> Vec3 {
        Vec3::from_slice(&self.cols[0][..3])
    }

    /// Y basis axis (xyz of column 1).
    #[inline]
    pub fn y_axis(&self) -> Vec3 {
        Vec3::from_slice(&self.cols[1][..3])
    }

    /// Z basis axis (xyz of column 2).
    #[inline]
    pub fn z_axis(&self) -> Vec3 {
        Vec3::from_slice(&self.cols[2][..3])
    }

    /// Translation (xyz of column 3).
    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::from_slice(&self.cols[3][..3])
    }

    /// Returns the columns as a 2D array.
    #[inline]
    pub const fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.cols
    }

    /// Returns the sixteen scalars column by column.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (dst, src) in out.iter_mut().zip(self.cols.iter().flatten()) {
            *dst = *src;
        }
        out
    }

    /// Computes the determinant by cofactor expansion along column 0.
    ///
    /// Returns 0 for singular matrices; no error is signaled.
    pub fn determinant(&self) -> f32 {
        let m = &self.cols;
        let s00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let s01 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let s02 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let s03 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let s04 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let s05 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

        let cof0 = m[1][1] * s00 - m[1][2] * s01 + m[1][3] * s02;
        let cof1 = -(m[1][0] * s00 - m[1][2] * s03 + m[1][3] * s04);
        let cof2 = m[1][0] * s01 - m[1][1] * s03 + m[1][3] * s05;
        let cof3 = -(m[1][0] * s02 - m[1][1] * s04 + m[1][2] * s05);

        m[0][0] * cof0 + m[0][1] * cof1 + m[0][2] * cof2 + m[0][3] * cof3
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> f32 {
        let m = &self.cols;
        m[0][0] + m[1][1] + m[2][2] + m[3][3]
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    // Adjugate (transposed cofactor matrix) and the determinant expanded
    // along its first row.
    fn adjugate(&self) -> (Self, f32) {
        let m = &self.cols;
        let c00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let c02 = m[1][2] * m[3][3] - m[3][2] * m[1][3];
        let c03 = m[1][2] * m[2][3] - m[2][2] * m[1][3];
        let c04 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let c06 = m[1][1] * m[3][3] - m[3][1] * m[1][3];
        let c07 = m[1][1] * m[2][3] - m[2][1] * m[1][3];
        let c08 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let c10 = m[1][1] * m[3][2] - m[3][1] * m[1][2];
        let c11 = m[1][1] * m[2][2] - m[2][1] * m[1][2];
        let c12 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let c14 = m[1][0] * m[3][3] - m[3][0] * m[1][3];
        let c15 = m[1][0] * m[2][3] - m[2][0] * m[1][3];
        let c16 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let c18 = m[1][0] * m[3][2] - m[3][0] * m[1][2];
        let c19 = m[1][0] * m[2][2] - m[2][0] * m[1][2];
        let c20 = m[2][0] * m[3][1] - m[3][0] * m[2][1];
        let c22 = m[1][0] * m[3][1] - m[3][0] * m[1][1];
        let c23 = m[1][0] * m[2][1] - m[2][0] * m[1][1];

        let fac0 = Vec4::new(c00, c00, c02, c03);
        let fac1 = Vec4::new(c04, c04, c06, c07);
        let fac2 = Vec4::new(c08, c08, c10, c11);
        let fac3 = Vec4::new(c12, c12, c14, c15);
        let fac4 = Vec4::new(c16, c16, c18, c19);
        let fac5 = Vec4::new(c20, c20, c22, c23);

        let v0 = Vec4::new(m[1][0], m[0][0], m[0][0], m[0][0]);
        let v1 = Vec4::new(m[1][1], m[0][1], m[0][1], m[0][1]);
        let v2 = Vec4::new(m[1][2], m[0][2], m[0][2], m[0][2]);
        let v3 = Vec4::new(m[1][3], m[0][3], m[0][3], m[0][3]);

        let inv0 = v1 * fac0 - v2 * fac1 + v3 * fac2;
        let inv1 = v0 * fac0 - v2 * fac3 + v3 * fac4;
        let inv2 = v0 * fac1 - v1 * fac3 + v3 * fac5;
        let inv3 = v0 * fac2 - v1 * fac4 + v2 * fac5;

        let sign_a = Vec4::new(1.0, -1.0, 1.0, -1.0);
        let sign_b = Vec4::new(-1.0, 1.0, -1.0, 1.0);
        let adj = Self::from_cols(inv0 * sign_a, inv1 * sign_b, inv2 * sign_a, inv3 * sign_b);

        let det = self.col(0).dot(adj.row(0));
        (adj, det)
    }

    /// Computes the inverse of this matrix via the adjugate.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the determinant is zero. Release builds
    /// return the adjugate scaled by `1 / det`, which is infinite or NaN
    /// for a singular matrix. Use [`try_inverse`](Self::try_inverse) when
    /// singularity is possible.
    #[inline]
    pub fn inverse(&self) -> Self {
        let (adj, det) = self.adjugate();
        debug_assert!(det != 0.0, "Mat4::inverse of a singular matrix");
        adj * (1.0 / det)
    }

    /// Computes the inverse, or [`Error::SingularMatrix`] if
    /// `|det| < SINGULAR_TOLERANCE`.
    pub fn try_inverse(&self) -> Result<Self> {
        let (adj, det) = self.adjugate();
        if det.abs() < SINGULAR_TOLERANCE {
            return Err(Error::singular(det));
        }
        Ok(adj * (1.0 / det))
    }

    /// Transpose of the inverse.
    #[inline]
    pub fn inverse_transposed(&self) -> Self {
        self.inverse().transpose()
    }

    /// Normal matrix; always identical to [`inverse_transposed`](Self::inverse_transposed).
    #[inline]
    pub fn normal_matrix(&self) -> Self {
        self.inverse_transposed()
    }

    /// Returns `true` if every component differs from `other` by at most [`EPSILON`].
    #[inline]
    pub fn are_same(&self, other: &Self) -> bool {
        self.are_same_eps(other, EPSILON)
    }

    /// Returns `true` if every component differs from `other` by at most `eps`.
    pub fn are_same_eps(&self, other: &Self, eps: f32) -> bool {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .all(|(&a, &b)| are_same(a, b, eps))
    }

    /// Orthogonality of the upper-left 3x3 block within [`EPSILON`].
    #[inline]
    pub fn is_orthogonal(&self) -> bool {
        self.is_orthogonal_eps(EPSILON)
    }

    /// Orthogonality of the upper-left 3x3 block with an explicit tolerance.
    pub fn is_orthogonal_eps(&self, eps: f32) -> bool {
        axes_orthonormal(self.x_axis(), self.y_axis(), self.z_axis(), eps)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|x| x.is_finite())
    }

    /// Handedness of the basis in columns 0..3.
    ///
    /// The axes are normalized, then `dot(z, x × y) > EPSILON` means
    /// right-handed. Anything else, degenerate bases included, is
    /// left-handed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vne_core::Handedness;
    /// use vne_math::Mat4;
    ///
    /// assert_eq!(Mat4::IDENTITY.handedness(), Handedness::Right);
    /// assert_eq!(Mat4::scale_xyz(1.0, 1.0, -1.0).handedness(), Handedness::Left);
    /// ```
    pub fn handedness(&self) -> Handedness {
        let x = self.x_axis().normalize_or_zero();
        let y = self.y_axis().normalize_or_zero();
        let z = self.z_axis().normalize_or_zero();
        if z.dot(x.cross(y)) > EPSILON {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }

    /// Component-wise linear interpolation of every column.
    ///
    /// Not a rotation interpolation; `t` is not clamped.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mut result = Self::ZERO;
        for (c, col) in result.cols.iter_mut().enumerate() {
            for (r, v) in col.iter_mut().enumerate() {
                *v = crate::lerp(from.cols[c][r], to.cols[c][r], t);
            }
        }
        result
    }

    /// Transforms a Vec4 by this matrix.
    #[inline]
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        self.col(0) * v.x + self.col(1) * v.y + self.col(2) * v.z + self.col(3) * v.w
    }

    /// Transforms a point (`w = 1`), translation included.
    ///
    /// No perspective divide is applied.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.mul_vec4(p.extend(1.0)).truncate()
    }

    /// Transforms a direction (`w = 0`), translation ignored.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.mul_vec4(v.extend(0.0)).truncate()
    }

    /// Transforms a surface normal and renormalizes it.
    ///
    /// Orthogonal matrices take the direction path. Others go through the
    /// [`normal_matrix`](Self::normal_matrix) so non-uniform scale and shear
    /// keep normals perpendicular. A zero-length result stays zero.
    pub fn transform_normal(&self, n: Vec3) -> Vec3 {
        if self.is_orthogonal() {
            return self.transform_vector(n).normalize_or_zero();
        }
        self.normal_matrix()
            .mul_vec4(n.extend(0.0))
            .truncate()
            .normalize_or_zero()
    }

    /// Translation by `offset`.
    #[inline]
    pub fn translate(offset: Vec3) -> Self {
        Self::translate_xyz(offset.x, offset.y, offset.z)
    }

    /// Translation from components.
    #[inline]
    pub const fn translate_xyz(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [x, y, z, 1.0];
        m
    }

    /// Same translation on every axis.
    #[inline]
    pub const fn translate_uniform(t: f32) -> Self {
        Self::translate_xyz(t, t, t)
    }

    /// Per-axis scale.
    #[inline]
    pub fn scale(s: Vec3) -> Self {
        Self::diagonal(s.x, s.y, s.z, 1.0)
    }

    /// Per-axis scale from components.
    #[inline]
    pub const fn scale_xyz(sx: f32, sy: f32, sz: f32) -> Self {
        Self::diagonal(sx, sy, sz, 1.0)
    }

    /// Uniform scale of the three spatial axes.
    #[inline]
    pub const fn scale_uniform(s: f32) -> Self {
        Self::diagonal(s, s, s, 1.0)
    }

    /// Rotation of `angle` radians around `axis` (normalized internally).
    #[inline]
    pub fn rotate(angle: f32, axis: Vec3) -> Self {
        let [c0, c1, c2] = rotation_cols(angle, axis);
        Self::from_cols_array_2d([
            [c0[0], c0[1], c0[2], 0.0],
            [c1[0], c1[1], c1[2], 0.0],
            [c2[0], c2[1], c2[2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the X axis.
    #[inline]
    pub fn rotate_x(angle: f32) -> Self {
        Self::rotate(angle, Vec3::X)
    }

    /// Rotation around the Y axis.
    #[inline]
    pub fn rotate_y(angle: f32) -> Self {
        Self::rotate(angle, Vec3::Y)
    }

    /// Rotation around the Z axis.
    #[inline]
    pub fn rotate_z(angle: f32) -> Self {
        Self::rotate(angle, Vec3::Z)
    }

    /// Applies X, then Y, then Z: `Rz * Ry * Rx`.
    #[inline]
    pub fn rotate_xyz(x_angle: f32, y_angle: f32, z_angle: f32) -> Self {
        Self::rotate_z(z_angle) * Self::rotate_y(y_angle) * Self::rotate_x(x_angle)
    }

    /// [`rotate_xyz`](Self::rotate_xyz) with the same angle on every axis.
    #[inline]
    pub fn rotate_xyz_uniform(angle: f32) -> Self {
        Self::rotate_xyz(angle, angle, angle)
    }

    /// Applies Z, then Y, then X: `Rx * Ry * Rz`.
    #[inline]
    pub fn rotate_zyx(x_angle: f32, y_angle: f32, z_angle: f32) -> Self {
        Self::rotate_x(x_angle) * Self::rotate_y(y_angle) * Self::rotate_z(z_angle)
    }

    /// [`rotate_zyx`](Self::rotate_zyx) with the same angle on every axis.
    #[inline]
    pub fn rotate_zyx_uniform(angle: f32) -> Self {
        Self::rotate_zyx(angle, angle, angle)
    }

    /// Basis matrix with the given axes and no translation.
    #[inline]
    pub fn from_axes(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self::from_axes_offset(x_axis, y_axis, z_axis, Vec3::ZERO)
    }

    /// Basis matrix with the given axes and translation.
    #[inline]
    pub fn from_axes_offset(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3, offset: Vec3) -> Self {
        Self::from_cols(
            x_axis.extend(0.0),
            y_axis.extend(0.0),
            z_axis.extend(0.0),
            offset.extend(1.0),
        )
    }

    /// Orthonormal basis derived from a forward and an up direction.
    ///
    /// `x = normalize(forward)`, `y = normalize(up × x)`, `z = x × y`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vne_math::{Mat4, Vec3};
    ///
    /// let m = Mat4::from_forward_up(Vec3::Z, Vec3::Y);
    /// assert_eq!(m, Mat4::from_axes(Vec3::Z, Vec3::X, Vec3::Y));
    /// ```
    pub fn from_forward_up(forward: Vec3, up: Vec3) -> Self {
        let x = forward.normalize_or_zero();
        let y = up.cross(x).normalize_or_zero();
        let z = x.cross(y);
        Self::from_axes(x, y, z)
    }

    /// Translation-only matrix with `offset` in column 3.
    #[inline]
    pub fn from_translation_offset(offset: Vec3) -> Self {
        Self::translate(offset)
    }

    /// Divides every component by `rhs`, or returns
    /// [`Error::NearZeroDivisor`] if `|rhs| <= EPSILON`.
    #[inline]
    pub fn try_div(&self, rhs: f32) -> Result<Self> {
        if is_zero(rhs, EPSILON) {
            return Err(Error::near_zero_divisor(rhs));
        }
        Ok(self.map(|v| v / rhs))
    }

    #[inline]
    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        let mut out = *self;
        out.cols.iter_mut().flatten().for_each(|v| *v = f(*v));
        out
    }

    #[inline]
    fn zip_map(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut out = *self;
        for (a, &b) in out.cols.iter_mut().flatten().zip(other.cols.iter().flatten()) {
            *a = f(*a, b);
        }
        out
    }

    /// Converts to glam Mat4.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&self.cols)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array_2d(m.to_cols_array_2d())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Mat4 {
    /// `[[x0, y0, z0, w0],\n [x1, ...],\n ...]`, one column per line.
    ///
    /// Components use Rust's shortest round-trip float formatting, so
    /// `1.0 / 3.0` prints as `0.33333334`, not a fixed six significant
    /// digits. A precision such as `{:.6}` is applied to
    /// every component.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        f.write_str("[")?;
        for (i, c) in self.cols.iter().enumerate() {
            if i > 0 {
                f.write_str(",\n ")?;
            }
            f.write_str("[")?;
            for (j, v) in c.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                match precision {
                    Some(p) => write!(f, "{v:.p$}")?,
                    None => write!(f, "{v}")?,
                }
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(
            self.mul_vec4(rhs.col(0)),
            self.mul_vec4(rhs.col(1)),
            self.mul_vec4(rhs.col(2)),
            self.mul_vec4(rhs.col(3)),
        )
    }
}

// Mat4 * f32
impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|v| v * rhs)
    }
}

// f32 * Mat4
impl Mul<Mat4> for f32 {
    type Output = Mat4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        rhs * self
    }
}

// Mat4 / f32
impl Div<f32> for Mat4 {
    type Output = Self;

    /// # Panics
    ///
    /// In debug builds, panics if `|rhs| <= EPSILON`.
    #[inline]
    fn div(self, rhs: f32) -> Self {
        debug_assert!(!is_zero(rhs, EPSILON), "Mat4 division by near-zero {rhs}");
        self.map(|v| v / rhs)
    }
}

impl Add for Mat4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl Sub for Mat4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

impl Neg for Mat4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl AddAssign for Mat4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Mat4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.cols[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [f32; 4] {
        &mut self.cols[i]
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

impl From<Mat3> for Mat4 {
    #[inline]
    fn from(m: Mat3) -> Self {
        Self::from_mat3(&m)
    }
}
