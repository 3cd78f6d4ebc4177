//! SIMD batch transforms.
//!
//! Points and directions are processed eight at a time with `wide::f32x8`
//! (struct-of-arrays inside each chunk), with a scalar tail for the last
//! `len % 8` elements. Results match [`Mat4::transform_point`] and
//! [`Mat4::transform_vector`] within [`EPSILON`](crate::EPSILON).
//!
//! # Example
//!
//! ```rust
//! use vne_math::simd::transform_points;
//! use vne_math::{Mat4, Vec3};
//!
//! let m = Mat4::translate_xyz(1.0, 0.0, 0.0);
//! let points = vec![Vec3::ZERO; 10];
//! let out = transform_points(&m, &points);
//! assert_eq!(out[9], Vec3::X);
//! ```

use crate::{Mat4, Vec3};
use wide::f32x8;

/// Lane count of the batch kernels.
pub const LANES: usize = 8;

// Splatted matrix columns, xyz only.
struct Columns {
    c: [[f32x8; 3]; 4],
}

impl Columns {
    fn new(m: &Mat4) -> Self {
        let s = |c: usize, r: usize| f32x8::splat(m.cols[c][r]);
        Self {
            c: std::array::from_fn(|c| [s(c, 0), s(c, 1), s(c, 2)]),
        }
    }

    #[inline]
    fn apply(&self, x: f32x8, y: f32x8, z: f32x8, with_translation: bool) -> [f32x8; 3] {
        std::array::from_fn(|r| {
            let v = self.c[0][r] * x + self.c[1][r] * y + self.c[2][r] * z;
            if with_translation { v + self.c[3][r] } else { v }
        })
    }
}

#[inline]
fn gather(chunk: &[Vec3]) -> (f32x8, f32x8, f32x8) {
    let mut xs = [0.0f32; LANES];
    let mut ys = [0.0f32; LANES];
    let mut zs = [0.0f32; LANES];
    for (i, v) in chunk.iter().enumerate() {
        xs[i] = v.x;
        ys[i] = v.y;
        zs[i] = v.z;
    }
    (f32x8::from(xs), f32x8::from(ys), f32x8::from(zs))
}

#[inline]
fn scatter(out: &mut [Vec3], [x, y, z]: [f32x8; 3]) {
    let (x, y, z) = (x.to_array(), y.to_array(), z.to_array());
    for (i, v) in out.iter_mut().enumerate() {
        *v = Vec3::new(x[i], y[i], z[i]);
    }
}

fn transform_batch(m: &Mat4, values: &mut [Vec3], with_translation: bool) {
    let cols = Columns::new(m);
    let mut chunks = values.chunks_exact_mut(LANES);
    for chunk in &mut chunks {
        let (x, y, z) = gather(chunk);
        scatter(chunk, cols.apply(x, y, z, with_translation));
    }
    for v in chunks.into_remainder() {
        *v = if with_translation {
            m.transform_point(*v)
        } else {
            m.transform_vector(*v)
        };
    }
}

/// Transforms every point (`w = 1`) by `m`.
pub fn transform_points(m: &Mat4, points: &[Vec3]) -> Vec<Vec3> {
    let mut out = points.to_vec();
    transform_batch(m, &mut out, true);
    out
}

/// Transforms every point in place.
#[inline]
pub fn transform_points_inplace(m: &Mat4, points: &mut [Vec3]) {
    transform_batch(m, points, true);
}

/// Transforms every direction (`w = 0`) by `m`.
pub fn transform_vectors(m: &Mat4, vectors: &[Vec3]) -> Vec<Vec3> {
    let mut out = vectors.to_vec();
    transform_batch(m, &mut out, false);
    out
}

/// Transforms every direction in place.
#[inline]
pub fn transform_vectors_inplace(m: &Mat4, vectors: &mut [Vec3]) {
    transform_batch(m, vectors, false);
}
