//! 3x3 matrix type for rotations, scales and normal transforms.
//!
//! [`Mat3`] is the linear part of an affine transform: basis axes stored
//! as columns, no translation.
//!
//! # Convention
//!
//! Matrices are stored in **column-major** order and use **column vectors**.
//! `m[c][r]` addresses column `c`, row `r`:
//!
//! ```text
//! | m[0][0] m[1][0] m[2][0] |   | x |
//! | m[0][1] m[1][1] m[2][1] | * | y |
//! | m[0][2] m[1][2] m[2][2] |   | z |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vne_math::{Mat3, Vec3};
//!
//! let r = Mat3::rotate_z(std::f32::consts::FRAC_PI_2);
//! let v = r * Vec3::X;
//! assert!((v - Vec3::Y).length() < 1e-6);
//!
//! let n = Mat3::scale_xyz(2.0, 1.0, 1.0).normal_matrix();
//! assert!(n.are_same(&Mat3::scale_xyz(0.5, 1.0, 1.0)));
//! ```

use crate::scalar::{EPSILON, SINGULAR_TOLERANCE, are_same, is_zero};
use crate::Vec3;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use vne_core::{Error, Result};

/// A 3x3 column-major matrix of `f32`.
///
/// Equality (`==`) is exact per component. Use [`are_same`](Self::are_same)
/// for computed matrices.
///
/// # Example
///
/// ```rust
/// use vne_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// Matrix columns: [x_axis, y_axis, z_axis]
    pub cols: [[f32; 3]; 3],
}

impl Mat3 {
    /// Number of columns (and rows).
    pub const ORDER: usize = 3;

    /// Zero matrix.
    pub const ZERO: Self = Self {
        cols: [[0.0; 3]; 3],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols_array_2d(cols: [[f32; 3]; 3]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from nine scalars listed column by column.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vne_math::{Mat3, Vec3};
    ///
    /// let m = Mat3::from_cols_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// assert_eq!(m.col(1), Vec3::new(4.0, 5.0, 6.0));
    /// ```
    #[inline]
    pub const fn from_cols_array(a: [f32; 9]) -> Self {
        Self {
            cols: [[a[0], a[1], a[2]], [a[3], a[4], a[5]], [a[6], a[7], a[8]]],
        }
    }

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols_array_2d([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a matrix from Vec3 rows.
    #[inline]
    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::from_cols(r0, r1, r2).transpose()
    }

    /// Creates a rotation (or general basis) matrix from its three axes.
    #[inline]
    pub fn from_axes(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self::from_cols(x_axis, y_axis, z_axis)
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self {
            cols: [[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]],
        }
    }

    /// Creates a matrix with `s` on the diagonal and zeros elsewhere.
    #[inline]
    pub const fn splat_diagonal(s: f32) -> Self {
        Self::diagonal(s, s, s)
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

    /// Matrix order (3).
    #[inline]
    pub const fn len() -> usize {
        Self::ORDER
    }

    /// Returns column `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`. See [`try_col`](Self::try_col).
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        assert!(i < Self::ORDER, "Mat3 column index {i} out of bounds");
        Vec3::from_array(self.cols[i])
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`. See [`try_row`](Self::try_row).
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        assert!(i < Self::ORDER, "Mat3 row index {i} out of bounds");
        Vec3::new(self.cols[0][i], self.cols[1][i], self.cols[2][i])
    }

    /// Returns column `i`, or [`Error::IndexOutOfBounds`].
    #[inline]
    pub fn try_col(&self, i: usize) -> Result<Vec3> {
        if i >= Self::ORDER {
            return Err(Error::index_out_of_bounds(i, Self::ORDER));
        }
        Ok(self.col(i))
    }

    /// Returns row `i`, or [`Error::IndexOutOfBounds`].
    #[inline]
    pub fn try_row(&self, i: usize) -> Result<Vec3> {
        if i >= Self::ORDER {
            return Err(Error::index_out_of_bounds(i, Self::ORDER));
        }
        Ok(self.row(i))
    }

    /// First basis axis (column 0).
    #[inline]
    pub fn x_axis(&self) -> Vec3 {
        self.col(0)
    }

    /// Second basis axis (column 1).
    #[inline]
    pub fn y_axis(&self) -> Vec3 {
        self.col(1)
    }

    /// Third basis axis (column 2).
    #[inline]
    pub fn z_axis(&self) -> Vec3 {
        self.col(2)
    }

    /// Returns the columns as a 2D array.
    #[inline]
    pub const fn to_cols_array_2d(&self) -> [[f32; 3]; 3] {
        self.cols
    }

    /// Returns the nine scalars column by column.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 9] {
        let c = &self.cols;
        [
            c[0][0], c[0][1], c[0][2], c[1][0], c[1][1], c[1][2], c[2][0], c[2][1], c[2][2],
        ]
    }

    /// Computes the determinant.
    ///
    /// Returns 0 for singular matrices (zero or repeated columns); no error
    /// is signaled.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.x_axis().dot(self.y_axis().cross(self.z_axis()))
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> f32 {
        self.cols[0][0] + self.cols[1][1] + self.cols[2][2]
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let c = &self.cols;
        Self::from_cols_array_2d([
            [c[0][0], c[1][0], c[2][0]],
            [c[0][1], c[1][1], c[2][1]],
            [c[0][2], c[1][2], c[2][2]],
        ])
    }

    // Rows of the adjugate and the determinant they share.
    #[inline]
    fn adjugate_rows(&self) -> ([Vec3; 3], f32) {
        let (c0, c1, c2) = (self.x_axis(), self.y_axis(), self.z_axis());
        let r0 = c1.cross(c2);
        let r1 = c2.cross(c0);
        let r2 = c0.cross(c1);
        ([r0, r1, r2], c0.dot(r0))
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
        let ([r0, r1, r2], det) = self.adjugate_rows();
        debug_assert!(det != 0.0, "Mat3::inverse of a singular matrix");
        Self::from_rows(r0, r1, r2) * (1.0 / det)
    }

    /// Computes the inverse, or [`Error::SingularMatrix`] if
    /// `|det| < SINGULAR_TOLERANCE`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vne_math::Mat3;
    ///
    /// let m = Mat3::scale_uniform(2.0);
    /// let inv = m.try_inverse().unwrap();
    /// assert!((m * inv).are_same(&Mat3::IDENTITY));
    /// assert!(Mat3::ZERO.try_inverse().is_err());
    /// ```
    pub fn try_inverse(&self) -> Result<Self> {
        let ([r0, r1, r2], det) = self.adjugate_rows();
        if det.abs() < SINGULAR_TOLERANCE {
            return Err(Error::singular(det));
        }
        Ok(Self::from_rows(r0, r1, r2) * (1.0 / det))
    }

    /// Transpose of the inverse.
    ///
    /// Maps normals correctly under non-uniform scale and shear.
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

    /// Returns `true` if the axes are unit length and mutually perpendicular
    /// within [`EPSILON`].
    #[inline]
    pub fn is_orthogonal(&self) -> bool {
        self.is_orthogonal_eps(EPSILON)
    }

    /// Orthogonality test with an explicit tolerance.
    pub fn is_orthogonal_eps(&self, eps: f32) -> bool {
        axes_orthonormal(self.x_axis(), self.y_axis(), self.z_axis(), eps)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|x| x.is_finite())
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

    /// Rotation of `angle` radians around `axis` (normalized internally).
    #[inline]
    pub fn rotate(angle: f32, axis: Vec3) -> Self {
        Self::from_cols_array_2d(rotation_cols(angle, axis))
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

    /// Per-axis scale.
    #[inline]
    pub fn scale(s: Vec3) -> Self {
        Self::diagonal(s.x, s.y, s.z)
    }

    /// Per-axis scale from components.
    #[inline]
    pub const fn scale_xyz(sx: f32, sy: f32, sz: f32) -> Self {
        Self::diagonal(sx, sy, sz)
    }

    /// Uniform scale.
    #[inline]
    pub const fn scale_uniform(s: f32) -> Self {
        Self::diagonal(s, s, s)
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        self.x_axis() * v.x + self.y_axis() * v.y + self.z_axis() * v.z
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

    /// Converts to glam Mat3.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&self.cols)
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols_array_2d(m.to_cols_array_2d())
    }
}

/// Columns of the rotation of `angle` radians around `axis`.
pub(crate) fn rotation_cols(angle: f32, axis: Vec3) -> [[f32; 3]; 3] {
    let a = axis.normalize_or_zero();
    let (s, c) = angle.sin_cos();
    let t = a * (1.0 - c);
    [
        [c + t.x * a.x, t.x * a.y + s * a.z, t.x * a.z - s * a.y],
        [t.y * a.x - s * a.z, c + t.y * a.y, t.y * a.z + s * a.x],
        [t.z * a.x + s * a.y, t.z * a.y - s * a.x, c + t.z * a.z],
    ]
}

/// Unit-length, mutually perpendicular axes within `eps`.
pub(crate) fn axes_orthonormal(x: Vec3, y: Vec3, z: Vec3, eps: f32) -> bool {
    are_same(x.length_squared(), 1.0, eps)
        && are_same(y.length_squared(), 1.0, eps)
        && are_same(z.length_squared(), 1.0, eps)
        && is_zero(x.dot(y), eps)
        && is_zero(y.dot(z), eps)
        && is_zero(z.dot(x), eps)
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Mat3 {
    /// `[[x0, y0, z0],\n [x1, y1, z1],\n [x2, y2, z2]]`
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

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec3(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(
            self.mul_vec3(rhs.x_axis()),
            self.mul_vec3(rhs.y_axis()),
            self.mul_vec3(rhs.z_axis()),
        )
    }
}

// Mat3 * f32
impl Mul<f32> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|v| v * rhs)
    }
}

// f32 * Mat3
impl Mul<Mat3> for f32 {
    type Output = Mat3;

    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        rhs * self
    }
}

// Mat3 / f32
impl Div<f32> for Mat3 {
    type Output = Self;

    /// # Panics
    ///
    /// In debug builds, panics if `|rhs| <= EPSILON`.
    #[inline]
    fn div(self, rhs: f32) -> Self {
        debug_assert!(!is_zero(rhs, EPSILON), "Mat3 division by near-zero {rhs}");
        self.map(|v| v / rhs)
    }
}

impl Add for Mat3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl Sub for Mat3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

impl Neg for Mat3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl AddAssign for Mat3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Mat3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Mat3 {
    type Output = [f32; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 3] {
        &self.cols[i]
    }
}

impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [f32; 3] {
        &mut self.cols[i]
    }
}

impl From<glam::Mat3> for Mat3 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat3> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3) -> glam::Mat3 {
        m.to_glam()
    }
}
