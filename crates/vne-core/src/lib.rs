//! # vne-core
//!
//! Core types shared by the VertexNova math crates.
//!
//! - [`Error`], [`Result`] - Checked-API and transform graph errors
//! - [`GraphicsApi`], [`ClipSpaceDepth`], [`Handedness`] - Per-API projection conventions
//! - [`Viewport`] - Window region plus depth range
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other crates build on it:
//!
//! ```text
//! vne-core (this crate)
//!    ^
//!    |
//!    +-- vne-math (matrices, projection, batch transforms)
//!         ^
//!         |
//!         +-- vne-scene (transform hierarchy)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for configuration types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod error;
pub mod viewport;

pub use api::*;
pub use error::*;
pub use viewport::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vne_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{ClipSpaceDepth, GraphicsApi, Handedness};
    pub use crate::error::{Error, Result};
    pub use crate::viewport::Viewport;
}
