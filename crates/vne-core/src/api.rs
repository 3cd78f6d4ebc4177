//! Graphics API conventions.
//!
//! Projection and view matrices differ between graphics APIs in three ways:
//!
//! - **Clip-space depth**: OpenGL maps depth to `[-1, 1]`, everything else to `[0, 1]`
//! - **Handedness**: Metal and DirectX use a left-handed view space
//! - **Y direction**: Vulkan, Metal and WebGPU put +Y down in NDC, so their
//!   projections flip Y and their screen origin is the top-left corner
//!
//! ```text
//! api      depth    hand   flip Y
//! -------  -------  -----  ------
//! OpenGL   [-1, 1]  right  no
//! Vulkan   [0, 1]   right  yes
//! Metal    [0, 1]   left   yes
//! DirectX  [0, 1]   left   no
//! WebGPU   [0, 1]   right  yes
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vne_core::{ClipSpaceDepth, GraphicsApi, Handedness};
//!
//! let api = GraphicsApi::Vulkan;
//! assert_eq!(api.clip_space_depth(), ClipSpaceDepth::ZeroToOne);
//! assert_eq!(api.handedness(), Handedness::Right);
//! assert!(api.needs_y_flip());
//! ```

use std::fmt;

/// Target graphics API for projection matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphicsApi {
    /// Depth `[-1, 1]`, Y up, right-handed.
    #[default]
    OpenGl,
    /// Depth `[0, 1]`, Y down, right-handed.
    Vulkan,
    /// Depth `[0, 1]`, Y down, left-handed.
    Metal,
    /// Depth `[0, 1]`, Y up, left-handed.
    DirectX,
    /// Depth `[0, 1]`, Y down, right-handed.
    WebGpu,
}

/// Clip-space depth range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipSpaceDepth {
    /// `[-1, 1]`, the OpenGL convention.
    NegativeOneToOne,
    /// `[0, 1]`, used by Vulkan, Metal, DirectX and WebGPU.
    ZeroToOne,
}

/// Coordinate system handedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handedness {
    /// Left-handed (Metal, DirectX).
    Left,
    /// Right-handed (OpenGL, Vulkan, WebGPU).
    Right,
}

impl GraphicsApi {
    /// All supported APIs.
    pub const ALL: [GraphicsApi; 5] = [
        GraphicsApi::OpenGl,
        GraphicsApi::Vulkan,
        GraphicsApi::Metal,
        GraphicsApi::DirectX,
        GraphicsApi::WebGpu,
    ];

    /// Depth range of the API's clip space.
    #[inline]
    pub const fn clip_space_depth(self) -> ClipSpaceDepth {
        match self {
            GraphicsApi::OpenGl => ClipSpaceDepth::NegativeOneToOne,
            _ => ClipSpaceDepth::ZeroToOne,
        }
    }

    /// Handedness of the API's view space.
    #[inline]
    pub const fn handedness(self) -> Handedness {
        match self {
            GraphicsApi::Metal | GraphicsApi::DirectX => Handedness::Left,
            _ => Handedness::Right,
        }
    }

    /// Returns `true` if projections for this API negate the Y scale.
    #[inline]
    pub const fn needs_y_flip(self) -> bool {
        matches!(
            self,
            GraphicsApi::Vulkan | GraphicsApi::Metal | GraphicsApi::WebGpu
        )
    }

    /// Returns `true` if window coordinates start at the top-left corner.
    ///
    /// Same set of APIs as [`needs_y_flip`](Self::needs_y_flip).
    #[inline]
    pub const fn screen_origin_is_top_left(self) -> bool {
        self.needs_y_flip()
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            GraphicsApi::OpenGl => "opengl",
            GraphicsApi::Vulkan => "vulkan",
            GraphicsApi::Metal => "metal",
            GraphicsApi::DirectX => "directx",
            GraphicsApi::WebGpu => "webgpu",
        }
    }
}

impl fmt::Display for GraphicsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handedness::Left => f.write_str("left"),
            Handedness::Right => f.write_str("right"),
        }
    }
}
