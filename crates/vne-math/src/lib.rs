//! # vne-math
//!
//! Matrix algebra for real-time graphics.
//!
//! - [`Mat3`] - rotations, scales and normal matrices
//! - [`Mat4`] - affine/projective transforms, camera and projection factories
//! - [`projection`] - world/NDC/window conversions and depth encoding
//! - [`decompose`] - TRS decomposition, composition and interpolation
//! - [`simd`] - batch point and direction transforms
//!
//! # Design
//!
//! Matrices are stored **column-major** (`m[c][r]`) and multiply **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Vector types come from [`glam`] and are re-exported here. Matrices keep
//! their own storage so the column layout and the text format are fixed;
//! `to_glam`/`from_glam` convert when needed.
//!
//! # Usage
//!
//! ```rust
//! use vne_math::{Mat4, Vec3};
//!
//! let model = Mat4::translate_xyz(0.0, 1.0, 0.0) * Mat4::rotate_y(0.5);
//! let inv = model.inverse();
//! assert!((model * inv).are_same(&Mat4::IDENTITY));
//!
//! let n = Mat4::scale_xyz(2.0, 1.0, 1.0).transform_normal(Vec3::X);
//! assert!((n - Vec3::X).length() < 1e-6);
//! ```
//!
//! # Error Handling
//!
//! Out-of-range indices, near-zero divisors and singular inverses are
//! precondition violations and panic (the latter two in debug builds only).
//! The `try_*` methods report them as [`vne_core::Error`] instead.
//!
//! # Dependencies
//!
//! - [`glam`] - Vector types
//! - [`wide`] - Portable SIMD for batch transforms
//! - [`vne_core`] - Errors and graphics API conventions
//!
//! # Used By
//!
//! - `vne-scene` - Transform hierarchy

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod decompose;
mod mat3;
mod mat4;
pub mod projection;
mod scalar;
pub mod simd;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use scalar::*;

pub use glam::{Vec2, Vec3, Vec4};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{Mat3, Mat4, Vec2, Vec3, Vec4};
    pub use crate::decompose::TransformComponents;
    pub use crate::{EPSILON, SINGULAR_TOLERANCE, are_same, lerp};
    pub use vne_core::{ClipSpaceDepth, GraphicsApi, Handedness, Viewport};
}
