//! Camera and projection matrix factories.
//!
//! Every projection exists in four flavours, named after the view-space
//! handedness and the clip-space depth range they target:
//!
//! | suffix | handedness | depth |
//! |--------|-----------|-------|
//! | `rh_no` | right | `[-1, 1]` |
//! | `rh_zo` | right | `[0, 1]` |
//! | `lh_no` | left | `[-1, 1]` |
//! | `lh_zo` | left | `[0, 1]` |
//!
//! The unsuffixed [`Mat4::frustum`], [`Mat4::perspective`] and
//! [`Mat4::ortho`] are the `rh_no` variants. The `*_for` factories pick the
//! variant from a [`GraphicsApi`] and negate `m[1][1]` for APIs whose NDC
//! has +Y down.
//!
//! # Usage
//!
//! ```rust
//! use vne_core::GraphicsApi;
//! use vne_math::{Mat4, Vec3, Vec4};
//!
//! let eye = Vec3::new(0.0, 2.0, 5.0);
//! let view = Mat4::look_at_for(eye, Vec3::ZERO, Vec3::Y, GraphicsApi::Vulkan);
//! let proj = Mat4::perspective_for(1.0, 16.0 / 9.0, 0.1, 100.0, GraphicsApi::Vulkan);
//! assert!(proj[1][1] < 0.0);
//!
//! let clip = proj * view * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert!(clip.w > 0.0);
//! ```

use crate::{Mat4, Vec3};
use vne_core::{ClipSpaceDepth, GraphicsApi, Handedness};

impl Mat4 {
    /// Camera basis matrix.
    ///
    /// `forward = normalize(eye - center)`, `right = normalize(up × forward)`,
    /// `up' = forward × right`. The three axes become columns 0..3 and the
    /// translation is `-eye`. For a view matrix that maps world space into
    /// camera space, use [`look_at_rh`](Self::look_at_rh) or
    /// [`look_at_lh`](Self::look_at_lh).
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let forward = (eye - center).normalize_or_zero();
        let right = up.cross(forward).normalize_or_zero();
        let new_up = forward.cross(right);
        Self::from_axes_offset(right, new_up, forward, -eye)
    }

    /// Right-handed view matrix; the camera looks down -Z.
    pub fn look_at_rh(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize_or_zero();
        let s = f.cross(up).normalize_or_zero();
        let u = s.cross(f);
        Self::from_cols_array_2d([
            [s.x, u.x, -f.x, 0.0],
            [s.y, u.y, -f.y, 0.0],
            [s.z, u.z, -f.z, 0.0],
            [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
        ])
    }

    /// Left-handed view matrix; the camera looks down +Z.
    pub fn look_at_lh(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize_or_zero();
        let s = up.cross(f).normalize_or_zero();
        let u = f.cross(s);
        Self::from_cols_array_2d([
            [s.x, u.x, f.x, 0.0],
            [s.y, u.y, f.y, 0.0],
            [s.z, u.z, f.z, 0.0],
            [-s.dot(eye), -u.dot(eye), -f.dot(eye), 1.0],
        ])
    }

    /// View matrix with the handedness of `api`.
    #[inline]
    pub fn look_at_for(eye: Vec3, center: Vec3, up: Vec3, api: GraphicsApi) -> Self {
        match api.handedness() {
            Handedness::Left => Self::look_at_lh(eye, center, up),
            Handedness::Right => Self::look_at_rh(eye, center, up),
        }
    }

    /// Off-center perspective frustum (right-handed, depth `[-1, 1]`).
    #[inline]
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        Self::frustum_rh_no(left, right, bottom, top, z_near, z_far)
    }

    /// Right-handed frustum, depth `[-1, 1]`.
    pub fn frustum_rh_no(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = Self::ZERO;
        m[0][0] = (2.0 * z_near) / (right - left);
        m[1][1] = (2.0 * z_near) / (top - bottom);
        m[2][0] = (right + left) / (right - left);
        m[2][1] = (top + bottom) / (top - bottom);
        m[2][2] = -(z_far + z_near) / (z_far - z_near);
        m[2][3] = -1.0;
        m[3][2] = -(2.0 * z_far * z_near) / (z_far - z_near);
        m
    }

    /// Right-handed frustum, depth `[0, 1]`.
    pub fn frustum_rh_zo(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = Self::frustum_rh_no(left, right, bottom, top, z_near, z_far);
        m[2][2] = z_far / (z_near - z_far);
        m[3][2] = -(z_far * z_near) / (z_far - z_near);
        m
    }

    /// Left-handed frustum, depth `[-1, 1]`.
    pub fn frustum_lh_no(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = Self::ZERO;
        m[0][0] = (2.0 * z_near) / (right - left);
        m[1][1] = (2.0 * z_near) / (top - bottom);
        m[2][0] = -(right + left) / (right - left);
        m[2][1] = -(top + bottom) / (top - bottom);
        m[2][2] = (z_far + z_near) / (z_far - z_near);
        m[2][3] = 1.0;
        m[3][2] = -(2.0 * z_far * z_near) / (z_far - z_near);
        m
    }

    /// Left-handed frustum, depth `[0, 1]`.
    pub fn frustum_lh_zo(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = Self::frustum_lh_no(left, right, bottom, top, z_near, z_far);
        m[2][2] = z_far / (z_far - z_near);
        m[3][2] = -(z_far * z_near) / (z_far - z_near);
        m
    }

    /// Frustum for `api`, Y flipped where the API needs it.
    pub fn frustum_for(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
        api: GraphicsApi,
    ) -> Self {
        let m = match (api.handedness(), api.clip_space_depth()) {
            (Handedness::Right, ClipSpaceDepth::NegativeOneToOne) => {
                Self::frustum_rh_no(left, right, bottom, top, z_near, z_far)
            }
            (Handedness::Right, ClipSpaceDepth::ZeroToOne) => {
                Self::frustum_rh_zo(left, right, bottom, top, z_near, z_far)
            }
            (Handedness::Left, ClipSpaceDepth::NegativeOneToOne) => {
                Self::frustum_lh_no(left, right, bottom, top, z_near, z_far)
            }
            (Handedness::Left, ClipSpaceDepth::ZeroToOne) => {
                Self::frustum_lh_zo(left, right, bottom, top, z_near, z_far)
            }
        };
        m.with_y_flip(api)
    }

    /// Symmetric perspective projection (right-handed, depth `[-1, 1]`).
    ///
    /// `fovy` is the vertical field of view in radians.
    #[inline]
    pub fn perspective(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        Self::perspective_rh_no(fovy, aspect, z_near, z_far)
    }

    /// Right-handed perspective, depth `[-1, 1]`.
    pub fn perspective_rh_no(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(aspect.abs() > f32::EPSILON, "perspective with zero aspect ratio");
        let tan_half = (fovy / 2.0).tan();
        let mut m = Self::ZERO;
        m[0][0] = 1.0 / (aspect * tan_half);
        m[1][1] = 1.0 / tan_half;
        m[2][2] = -(z_far + z_near) / (z_far - z_near);
        m[2][3] = -1.0;
        m[3][2] = -(2.0 * z_far * z_near) / (z_far - z_near);
        m
    }

    /// Right-handed perspective, depth `[0, 1]`.
    pub fn perspective_rh_zo(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let mut m = Self::perspective_rh_no(fovy, aspect, z_near, z_far);
        m[2][2] = z_far / (z_near - z_far);
        m[3][2] = -(z_far * z_near) / (z_far - z_near);
        m
    }

    /// Left-handed perspective, depth `[-1, 1]`.
    pub fn perspective_lh_no(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let mut m = Self::perspective_rh_no(fovy, aspect, z_near, z_far);
        m[2][2] = (z_far + z_near) / (z_far - z_near);
        m[2][3] = 1.0;
        m
    }

    /// Left-handed perspective, depth `[0, 1]`.
    pub fn perspective_lh_zo(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let mut m = Self::perspective_rh_no(fovy, aspect, z_near, z_far);
        m[2][2] = z_far / (z_far - z_near);
        m[2][3] = 1.0;
        m[3][2] = -(z_far * z_near) / (z_far - z_near);
        m
    }

    /// Perspective for `api`, Y flipped where the API needs it.
    pub fn perspective_for(
        fovy: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
        api: GraphicsApi,
    ) -> Self {
        let m = match (api.handedness(), api.clip_space_depth()) {
            (Handedness::Right, ClipSpaceDepth::NegativeOneToOne) => {
                Self::perspective_rh_no(fovy, aspect, z_near, z_far)
            }
            (Handedness::Right, ClipSpaceDepth::ZeroToOne) => {
                Self::perspective_rh_zo(fovy, aspect, z_near, z_far)
            }
            (Handedness::Left, ClipSpaceDepth::NegativeOneToOne) => {
                Self::perspective_lh_no(fovy, aspect, z_near, z_far)
            }
            (Handedness::Left, ClipSpaceDepth::ZeroToOne) => {
                Self::perspective_lh_zo(fovy, aspect, z_near, z_far)
            }
        };
        m.with_y_flip(api)
    }

    /// Orthographic projection (right-handed, depth `[-1, 1]`).
    #[inline]
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        Self::ortho_rh_no(left, right, bottom, top, z_near, z_far)
    }

    /// Right-handed orthographic, depth `[-1, 1]`.
    pub fn ortho_rh_no(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = Self::IDENTITY;
        m[0][0] = 2.0 / (right - left);
        m[1][1] = 2.0 / (top - bottom);
        m[2][2] = -2.0 / (z_far - z_near);
        m[3][0] = -(right + left) / (right - left);
        m[3][1] = -(top + bottom) / (top - bottom);
        m[3][2] = -(z_far + z_near) / (z_far - z_near);
        m
    }

    /// Right-handed orthographic, depth `[0, 1]`.
    pub fn ortho_rh_zo(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = Self::ortho_rh_no(left, right, bottom, top, z_near, z_far);
        m[2][2] = -1.0 / (z_far - z_near);
        m[3][2] = -z_near / (z_far - z_near);
        m
    }

    /// Left-handed orthographic, depth `[-1, 1]`.
    pub fn ortho_lh_no(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = Self::ortho_rh_no(left, right, bottom, top, z_near, z_far);
        m[2][2] = 2.0 / (z_far - z_near);
        m
    }

    /// Left-handed orthographic, depth `[0, 1]`.
    pub fn ortho_lh_zo(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = Self::ortho_rh_no(left, right, bottom, top, z_near, z_far);
        m[2][2] = 1.0 / (z_far - z_near);
        m[3][2] = -z_near / (z_far - z_near);
        m
    }

    /// Orthographic projection for `api`, Y flipped where the API needs it.
    pub fn ortho_for(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
        api: GraphicsApi,
    ) -> Self {
        let m = match (api.handedness(), api.clip_space_depth()) {
            (Handedness::Right, ClipSpaceDepth::NegativeOneToOne) => {
                Self::ortho_rh_no(left, right, bottom, top, z_near, z_far)
            }
            (Handedness::Right, ClipSpaceDepth::ZeroToOne) => {
                Self::ortho_rh_zo(left, right, bottom, top, z_near, z_far)
            }
            (Handedness::Left, ClipSpaceDepth::NegativeOneToOne) => {
                Self::ortho_lh_no(left, right, bottom, top, z_near, z_far)
            }
            (Handedness::Left, ClipSpaceDepth::ZeroToOne) => {
                Self::ortho_lh_zo(left, right, bottom, top, z_near, z_far)
            }
        };
        m.with_y_flip(api)
    }

    #[inline]
    fn with_y_flip(mut self, api: GraphicsApi) -> Self {
        if api.needs_y_flip() {
            self[1][1] = -self[1][1];
        }
        self
    }
}
