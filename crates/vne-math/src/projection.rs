//! Conversions between world, NDC and window coordinates.
//!
//! These are the `gluProject`/`gluUnProject` family, parameterized by a
//! [`Viewport`] and the [`GraphicsApi`] whose depth range and screen origin
//! apply.
//!
//! # Usage
//!
//! ```rust
//! use vne_core::{GraphicsApi, Viewport};
//! use vne_math::projection::{project, unproject};
//! use vne_math::{Mat4, Vec3};
//!
//! let api = GraphicsApi::Vulkan;
//! let vp = Viewport::new(800.0, 600.0);
//! let mvp = Mat4::perspective_for(1.0, vp.aspect_ratio(), 0.5, 100.0, api)
//!     * Mat4::look_at_for(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y, api);
//!
//! let screen = project(Vec3::ZERO, &mvp, &vp, api);
//! assert!((screen.x - 400.0).abs() < 1e-3);
//!
//! let world = unproject(screen, &mvp.inverse(), &vp, api);
//! assert!(world.length() < 1e-3);
//! ```

use crate::scalar::{EPSILON, is_zero};
use crate::{Mat4, Vec2, Vec3};
use vne_core::{ClipSpaceDepth, GraphicsApi, Viewport};

/// Projects a world-space point to window coordinates.
///
/// `x` and `y` are pixels; `z` is the depth mapped into
/// `viewport.z_near..=viewport.z_far`. A point whose clip `w` is zero
/// (on the camera plane) yields `(0, 0, -1)`.
pub fn project(world_pos: Vec3, mvp: &Mat4, viewport: &Viewport, api: GraphicsApi) -> Vec3 {
    let clip = *mvp * world_pos.extend(1.0);
    if is_zero(clip.w, EPSILON) {
        return Vec3::new(0.0, 0.0, -1.0);
    }
    let ndc = clip.truncate() / clip.w;
    let screen = ndc_to_screen(Vec2::new(ndc.x, ndc.y), viewport, api);

    let depth_span = viewport.z_far - viewport.z_near;
    let z = match api.clip_space_depth() {
        ClipSpaceDepth::ZeroToOne => viewport.z_near + ndc.z * depth_span,
        ClipSpaceDepth::NegativeOneToOne => viewport.z_near + (ndc.z + 1.0) * 0.5 * depth_span,
    };
    screen.extend(z)
}

/// Projects to pixels in a `width` x `height` window at the origin.
#[inline]
pub fn project_to_screen(
    world_pos: Vec3,
    mvp: &Mat4,
    width: f32,
    height: f32,
    api: GraphicsApi,
) -> Vec2 {
    project(world_pos, mvp, &Viewport::new(width, height), api).truncate()
}

/// Maps window coordinates plus depth back to world space.
///
/// `inv_mvp` is the inverse of the matrix passed to [`project`]. Returns
/// zero if the unprojected `w` vanishes.
pub fn unproject(screen_pos: Vec3, inv_mvp: &Mat4, viewport: &Viewport, api: GraphicsApi) -> Vec3 {
    let ndc_xy = screen_to_ndc(Vec2::new(screen_pos.x, screen_pos.y), viewport, api);
    let depth = (screen_pos.z - viewport.z_near) / (viewport.z_far - viewport.z_near);
    let ndc_z = match api.clip_space_depth() {
        ClipSpaceDepth::ZeroToOne => depth,
        ClipSpaceDepth::NegativeOneToOne => depth * 2.0 - 1.0,
    };

    let world = *inv_mvp * ndc_xy.extend(ndc_z).extend(1.0);
    if is_zero(world.w, EPSILON) {
        return Vec3::ZERO;
    }
    world.truncate() / world.w
}

/// Window pixel to NDC `[-1, 1]`.
///
/// NDC is taken as +Y up; APIs with a top-left screen origin have their
/// pixel row inverted.
pub fn screen_to_ndc(screen_pos: Vec2, viewport: &Viewport, api: GraphicsApi) -> Vec2 {
    let sx = (screen_pos.x - viewport.x) / viewport.width;
    let mut sy = (screen_pos.y - viewport.y) / viewport.height;
    if api.screen_origin_is_top_left() {
        sy = 1.0 - sy;
    }
    Vec2::new(sx * 2.0 - 1.0, sy * 2.0 - 1.0)
}

/// NDC `[-1, 1]` to window pixel.
pub fn ndc_to_screen(ndc: Vec2, viewport: &Viewport, api: GraphicsApi) -> Vec2 {
    let sx = (ndc.x + 1.0) * 0.5;
    let mut sy = (ndc.y + 1.0) * 0.5;
    if api.screen_origin_is_top_left() {
        sy = 1.0 - sy;
    }
    Vec2::new(viewport.x + sx * viewport.width, viewport.y + sy * viewport.height)
}

/// Converts a depth-buffer value in `[0, 1]` to linear view-space distance.
pub fn linearize_depth(depth: f32, z_near: f32, z_far: f32, api: GraphicsApi) -> f32 {
    match api.clip_space_depth() {
        ClipSpaceDepth::ZeroToOne => z_near * z_far / (z_far - depth * (z_far - z_near)),
        ClipSpaceDepth::NegativeOneToOne => {
            let ndc_z = depth * 2.0 - 1.0;
            2.0 * z_near * z_far / (z_far + z_near - ndc_z * (z_far - z_near))
        }
    }
}

/// Inverse of [`linearize_depth`]: linear distance to a depth-buffer value.
pub fn encode_depth(linear_depth: f32, z_near: f32, z_far: f32, api: GraphicsApi) -> f32 {
    match api.clip_space_depth() {
        ClipSpaceDepth::ZeroToOne => (z_far - z_near * z_far / linear_depth) / (z_far - z_near),
        ClipSpaceDepth::NegativeOneToOne => {
            let ndc_z = (z_far + z_near - 2.0 * z_near * z_far / linear_depth) / (z_far - z_near);
            (ndc_z + 1.0) * 0.5
        }
    }
}

/// Returns `true` if the sign of `proj[1][1]` matches the Y convention of `api`.
///
/// Catches a projection built for one API being used with another.
#[inline]
pub fn validate_projection(proj: &Mat4, api: GraphicsApi) -> bool {
    (proj[1][1] < 0.0) == api.needs_y_flip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn view_proj(api: GraphicsApi, vp: &Viewport) -> Mat4 {
        let fovy = crate::deg_to_rad(60.0);
        let proj = Mat4::perspective_for(fovy, vp.aspect_ratio(), 1.0, 100.0, api);
        let view = Mat4::look_at_for(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, api);
        proj * view
    }

    #[test]
    fn test_project_center() {
        let vp = Viewport::new(1920.0, 1080.0);
        for api in GraphicsApi::ALL {
            let s = project(Vec3::ZERO, &view_proj(api, &vp), &vp, api);
            assert_abs_diff_eq!(s.x, 960.0, epsilon = 1e-2);
            assert_abs_diff_eq!(s.y, 540.0, epsilon = 1e-2);
            assert!(s.z >= 0.0 && s.z <= 1.0, "{api}: {}", s.z);
        }
    }

    #[test]
    fn test_project_depth_range_per_api() {
        // Near and far planes land on the viewport depth range for every API
        let vp = Viewport::new(800.0, 600.0).with_depth(0.25, 0.75);
        for api in GraphicsApi::ALL {
            let mvp = view_proj(api, &vp);
            let near = project(Vec3::new(0.0, 0.0, 9.0), &mvp, &vp, api);
            let far = project(Vec3::new(0.0, 0.0, -90.0), &mvp, &vp, api);
            assert_abs_diff_eq!(near.z, 0.25, epsilon = 1e-4);
            assert_abs_diff_eq!(far.z, 0.75, epsilon = 1e-3);

            let back = unproject(near, &mvp.inverse(), &vp, api);
            assert!((back - Vec3::new(0.0, 0.0, 9.0)).length() < 1e-3, "{api}: {back}");
        }
    }

    #[test]
    fn test_project_up_direction() {
        // Bottom-left origin: a point above the target has a larger pixel y
        let vp = Viewport::new(800.0, 600.0);
        let api = GraphicsApi::OpenGl;
        let s = project(Vec3::new(0.0, 1.0, 0.0), &view_proj(api, &vp), &vp, api);
        assert!(s.y > 300.0);
        assert_abs_diff_eq!(s.x, 400.0, epsilon = 1e-2);
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let vp = Viewport::from_rect(10.0, 20.0, 640.0, 480.0);
        let p = Vec3::new(1.5, -0.5, 2.0);
        for api in GraphicsApi::ALL {
            let mvp = view_proj(api, &vp);
            let s = project(p, &mvp, &vp, api);
            let back = unproject(s, &mvp.inverse(), &vp, api);
            assert!((back - p).length() < 1e-3, "{api}: {back}");
        }
    }

    #[test]
    fn test_project_degenerate_w() {
        let vp = Viewport::new(100.0, 100.0);
        let s = project(Vec3::ONE, &Mat4::ZERO, &vp, GraphicsApi::OpenGl);
        assert_eq!(s, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(
            unproject(Vec3::ONE, &Mat4::ZERO, &vp, GraphicsApi::OpenGl),
            Vec3::ZERO
        );
    }

    #[test]
    fn test_screen_ndc() {
        let vp = Viewport::new(200.0, 100.0);
        let gl = GraphicsApi::OpenGl;
        assert_eq!(screen_to_ndc(Vec2::new(0.0, 0.0), &vp, gl), Vec2::new(-1.0, -1.0));
        assert_eq!(screen_to_ndc(Vec2::new(100.0, 50.0), &vp, gl), Vec2::ZERO);

        let vk = GraphicsApi::Vulkan;
        assert_eq!(screen_to_ndc(Vec2::new(0.0, 0.0), &vp, vk), Vec2::new(-1.0, 1.0));
        assert_eq!(ndc_to_screen(Vec2::new(-1.0, 1.0), &vp, vk), Vec2::ZERO);

        for api in GraphicsApi::ALL {
            let px = Vec2::new(37.0, 81.0);
            let back = ndc_to_screen(screen_to_ndc(px, &vp, api), &vp, api);
            assert!((back - px).length() < 1e-4);
        }
    }

    #[test]
    fn test_depth_linearization() {
        let (n, f) = (0.1, 100.0);
        for api in [GraphicsApi::OpenGl, GraphicsApi::Vulkan] {
            assert_abs_diff_eq!(linearize_depth(0.0, n, f, api), n, epsilon = 1e-5);
            assert_abs_diff_eq!(linearize_depth(1.0, n, f, api), f, epsilon = 1e-2);
            assert_abs_diff_eq!(encode_depth(n, n, f, api), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(encode_depth(f, n, f, api), 1.0, epsilon = 1e-5);

            let d = encode_depth(5.0, n, f, api);
            assert_abs_diff_eq!(linearize_depth(d, n, f, api), 5.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_validate_projection() {
        for api in GraphicsApi::ALL {
            let proj = Mat4::perspective_for(1.0, 1.0, 0.1, 10.0, api);
            assert!(validate_projection(&proj, api), "{api}");
        }
        let gl = Mat4::perspective_for(1.0, 1.0, 0.1, 10.0, GraphicsApi::OpenGl);
        assert!(!validate_projection(&gl, GraphicsApi::Vulkan));
    }

    #[test]
    fn test_project_to_screen() {
        let api = GraphicsApi::DirectX;
        let vp = Viewport::new(320.0, 240.0);
        let mvp = view_proj(api, &vp);
        let p = Vec3::new(0.3, 0.2, 0.0);
        let full = project(p, &mvp, &vp, api);
        assert_eq!(project_to_screen(p, &mvp, 320.0, 240.0, api), full.truncate());
    }
}
