//! Viewport rectangle with a depth range.
//!
//! A [`Viewport`] maps normalized device coordinates to window pixels.
//! Unlike an image region it uses float coordinates, and whether `y` is the
//! top or bottom edge depends on the target API
//! (see [`GraphicsApi::screen_origin_is_top_left`](crate::GraphicsApi::screen_origin_is_top_left)).
//!
//! ```text
//! (x, y) ──────────► width
//!   │   ┌──────────┐
//!   │   │ viewport │   depth: z_near ..= z_far
//!   │   └──────────┘
//!   ▼ height
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vne_core::Viewport;
//!
//! let vp = Viewport::new(1920.0, 1080.0);
//! assert!(vp.is_valid());
//! assert_eq!(vp.center(), [960.0, 540.0]);
//! assert!(vp.contains(100.0, 100.0));
//! ```

/// A rectangular render target region plus its depth range.
///
/// The region is inclusive on the left/top edges and exclusive on the
/// right/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Left edge in pixels
    pub x: f32,
    /// Top or bottom edge in pixels, depending on the API
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// Depth mapped from the near plane
    pub z_near: f32,
    /// Depth mapped from the far plane
    pub z_far: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Viewport {
    /// Creates a viewport at the origin with depth range `[0, 1]`.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            z_near: 0.0,
            z_far: 1.0,
        }
    }

    /// Creates a viewport with an explicit origin and depth range `[0, 1]`.
    #[inline]
    pub const fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            z_near: 0.0,
            z_far: 1.0,
        }
    }

    /// Returns a copy with a different depth range.
    #[inline]
    pub const fn with_depth(mut self, z_near: f32, z_far: f32) -> Self {
        self.z_near = z_near;
        self.z_far = z_far;
        self
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Center point in pixels.
    #[inline]
    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width * 0.5, self.y + self.height * 0.5]
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns `true` if the pixel position lies inside the viewport.
    #[inline]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns `true` if both dimensions are positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
