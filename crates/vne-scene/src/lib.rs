//! # vne-scene
//!
//! Transform hierarchy for the VertexNova math crates.
//!
//! A [`TransformGraph`] owns every node; links between nodes are
//! [`NodeId`] handles, never references. Each node caches the accumulated
//! transform of its ancestors so reading a world matrix is a single
//! multiplication.
//!
//! # Usage
//!
//! ```rust
//! use vne_math::{Mat4, Vec3};
//! use vne_scene::TransformGraph;
//!
//! let mut graph = TransformGraph::new();
//! let body = graph.create_node_with(Mat4::translate_xyz(0.0, 0.0, -5.0));
//! let wheel = graph.create_node_with(Mat4::translate_xyz(1.0, 0.0, 0.0));
//! graph.set_parent(wheel, Some(body))?;
//!
//! // Moving the body needs an explicit refresh of its subtree
//! graph.compose_transform(body, &Mat4::translate_xyz(0.0, 1.0, 0.0))?;
//! graph.update_subtree(body)?;
//!
//! let world = graph.model_matrix(wheel)?;
//! assert_eq!(world.transform_point(Vec3::ZERO), Vec3::new(1.0, 1.0, -5.0));
//! # Ok::<(), vne_core::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! The graph is plain data with `&mut self` mutators; share it across
//! threads behind a lock.
//!
//! # Dependencies
//!
//! - [`vne_math`] - `Mat4`
//! - [`vne_core`] - Error type
//! - [`tracing`] - Attach/detach diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod graph;

pub use graph::{NodeId, TransformGraph};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{NodeId, TransformGraph};
    pub use vne_core::{Error, Result};
}
